//! Runtime value type.
//!
//! Scalars (`Undefined`, `Null`, `Bool`, `Number`, `BigInt`, `Str`,
//! `Symbol`) are immutable: operations on them build new values.  `Object`,
//! `Array` and `Function` are handles; cloning one clones the handle, so two
//! bindings can observe the same mutation.
//!
//! Conversions follow the usual dynamic-language rules: numbers coerce from
//! strings, booleans coerce to `0`/`1`, and reference values fall back to a
//! primitive form (`"[object Object]"`, comma-joined elements, or a source
//! stub for functions) when compared or combined with scalars.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

use super::array::Array;
use super::bigint::{compare_bigint_number, parse_bigint};
use super::error::{Result, ScriptError};
use super::function::Function;
use super::inspect::inspect;
use super::number::{format_number, string_to_number};
use super::object::{array_index, Object, PropertyKey};
use super::symbol::Symbol;

/// A runtime value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The value of a binding that was declared but never assigned.
    #[default]
    Undefined,
    /// An explicit "no object" marker.
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    Str(String),
    Symbol(Symbol),
    Object(Object),
    Array(Array),
    Function(Function),
}

/// Result of numeric conversion: either a double or an arbitrary-precision integer.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Number(f64),
    BigInt(BigInt),
}

const MIXED_BIGINT: &str = "Cannot mix BigInt and other types, use explicit conversions";

impl Value {
    // ── Classification ────────────────────────────────────────────────────────

    /// The `typeof` name of the value.  `Null` reports `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(_) | Value::Array(_) => "object",
            Value::Function(_) => "function",
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_) | Value::Function(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Boolean context: `false`, `0`, `-0`, `NaN`, `0n`, `""`, `null` and
    /// `undefined` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(x) => !(*x == 0.0 || x.is_nan()),
            Value::BigInt(b) => !b.is_zero(),
            Value::Str(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Object(_) | Value::Array(_) | Value::Function(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    // ── Equality ──────────────────────────────────────────────────────────────

    /// Same-type equality (`===`).  `NaN` is unequal to itself, `+0 === -0`,
    /// and references compare by identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Like [`strict_eq`](Self::strict_eq), but `NaN` equals `NaN` and the
    /// two zeros are distinguished.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b && a.is_sign_negative() == b.is_sign_negative()
                }
            }
            _ => self.strict_eq(other),
        }
    }

    /// Cross-type equality (`==`).
    ///
    /// Fails only when converting a reference to a primitive fails, e.g. an
    /// array holding a symbol.
    pub fn loose_eq(&self, other: &Value) -> Result<bool> {
        if self.same_type(other) {
            return Ok(self.strict_eq(other));
        }
        Ok(match (self, other) {
            (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
            (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
            (Value::Number(a), Value::Str(s)) | (Value::Str(s), Value::Number(a)) => {
                *a == string_to_number(s)
            }
            (Value::BigInt(b), Value::Str(s)) | (Value::Str(s), Value::BigInt(b)) => {
                parse_bigint(s).is_some_and(|p| p == *b)
            }
            (Value::Bool(b), _) => return Value::Number(bool_to_f64(*b)).loose_eq(other),
            (_, Value::Bool(b)) => return self.loose_eq(&Value::Number(bool_to_f64(*b))),
            (Value::BigInt(b), Value::Number(x)) | (Value::Number(x), Value::BigInt(b)) => {
                compare_bigint_number(b, *x) == Some(Ordering::Equal)
            }
            (lhs, rhs) if lhs.is_reference() && !rhs.is_reference() => {
                return lhs.to_primitive()?.loose_eq(rhs);
            }
            (lhs, rhs) if rhs.is_reference() && !lhs.is_reference() => {
                return lhs.loose_eq(&rhs.to_primitive()?);
            }
            _ => false,
        })
    }

    fn same_type(&self, other: &Value) -> bool {
        (self.is_reference() && other.is_reference())
            || std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    // ── Conversions ───────────────────────────────────────────────────────────

    /// Reduce a reference value to a primitive; scalars are returned as-is.
    pub fn to_primitive(&self) -> Result<Value> {
        match self {
            Value::Object(_) => Ok(Value::Str("[object Object]".to_owned())),
            Value::Array(a) => Ok(Value::Str(a.join(",")?)),
            Value::Function(f) => Ok(Value::Str(f.source_text())),
            other => Ok(other.clone()),
        }
    }

    /// Numeric conversion.  Symbols and bigints cannot become numbers.
    pub fn to_number(&self) -> Result<f64> {
        match self {
            Value::Undefined => Ok(f64::NAN),
            Value::Null => Ok(0.0),
            Value::Bool(b) => Ok(bool_to_f64(*b)),
            Value::Number(x) => Ok(*x),
            Value::Str(s) => Ok(string_to_number(s)),
            Value::BigInt(_) => Err(ScriptError::type_error(
                "Cannot convert a BigInt value to a number",
            )),
            Value::Symbol(_) => Err(ScriptError::type_error(
                "Cannot convert a Symbol value to a number",
            )),
            Value::Object(_) | Value::Array(_) | Value::Function(_) => {
                self.to_primitive()?.to_number()
            }
        }
    }

    /// Numeric conversion that keeps bigints as bigints.
    pub fn to_numeric(&self) -> Result<Numeric> {
        match self.to_primitive()? {
            Value::BigInt(b) => Ok(Numeric::BigInt(b)),
            prim => Ok(Numeric::Number(prim.to_number()?)),
        }
    }

    /// String conversion, as used by template interpolation.
    pub fn to_display_string(&self) -> Result<String> {
        match self {
            Value::Undefined => Ok("undefined".to_owned()),
            Value::Null => Ok("null".to_owned()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(x) => Ok(format_number(*x)),
            Value::BigInt(b) => Ok(b.to_string()),
            Value::Str(s) => Ok(s.clone()),
            Value::Symbol(_) => Err(ScriptError::type_error(
                "Cannot convert a Symbol value to a string",
            )),
            Value::Object(_) | Value::Array(_) | Value::Function(_) => {
                self.to_primitive()?.to_display_string()
            }
        }
    }

    /// Convert a bracket-access key to a property key.
    pub fn to_property_key(&self) -> Result<PropertyKey> {
        match self {
            Value::Symbol(s) => Ok(PropertyKey::Symbol(s.clone())),
            other => Ok(PropertyKey::Str(other.to_display_string()?)),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// `+`: concatenation when either side is a string, numeric addition otherwise.
    pub fn add(&self, rhs: &Value) -> Result<Value> {
        let lp = self.to_primitive()?;
        let rp = rhs.to_primitive()?;
        if matches!(lp, Value::Str(_)) || matches!(rp, Value::Str(_)) {
            let mut s = lp.to_display_string()?;
            s.push_str(&rp.to_display_string()?);
            return Ok(Value::Str(s));
        }
        match (lp.to_numeric()?, rp.to_numeric()?) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(a + b)),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Ok(Value::BigInt(a + b)),
            _ => Err(ScriptError::type_error(MIXED_BIGINT)),
        }
    }

    pub fn sub(&self, rhs: &Value) -> Result<Value> {
        match (self.to_numeric()?, rhs.to_numeric()?) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(a - b)),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Ok(Value::BigInt(a - b)),
            _ => Err(ScriptError::type_error(MIXED_BIGINT)),
        }
    }

    pub fn mul(&self, rhs: &Value) -> Result<Value> {
        match (self.to_numeric()?, rhs.to_numeric()?) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(a * b)),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Ok(Value::BigInt(a * b)),
            _ => Err(ScriptError::type_error(MIXED_BIGINT)),
        }
    }

    /// `/`: IEEE division for numbers (`1 / 0` is `Infinity`), truncating
    /// division for bigints (division by `0n` is a range error).
    pub fn div(&self, rhs: &Value) -> Result<Value> {
        match (self.to_numeric()?, rhs.to_numeric()?) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(a / b)),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => {
                if b.is_zero() {
                    return Err(ScriptError::range_error("Division by zero"));
                }
                Ok(Value::BigInt(a / b))
            }
            _ => Err(ScriptError::type_error(MIXED_BIGINT)),
        }
    }

    pub fn rem(&self, rhs: &Value) -> Result<Value> {
        match (self.to_numeric()?, rhs.to_numeric()?) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Value::Number(a % b)),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => {
                if b.is_zero() {
                    return Err(ScriptError::range_error("Division by zero"));
                }
                Ok(Value::BigInt(a % b))
            }
            _ => Err(ScriptError::type_error(MIXED_BIGINT)),
        }
    }

    /// `<`.  Two strings compare by code unit; otherwise both sides are
    /// compared numerically, and any `NaN` makes the result `false`.
    pub fn less_than(&self, rhs: &Value) -> Result<bool> {
        let lp = self.to_primitive()?;
        let rp = rhs.to_primitive()?;
        if let (Value::Str(a), Value::Str(b)) = (&lp, &rp) {
            return Ok(a.encode_utf16().lt(b.encode_utf16()));
        }
        let ord = match (&lp, &rp) {
            (Value::BigInt(a), Value::Str(s)) => parse_bigint(s).map(|b| a.cmp(&b)),
            (Value::Str(s), Value::BigInt(b)) => parse_bigint(s).map(|a| a.cmp(b)),
            _ => match (lp.to_numeric()?, rp.to_numeric()?) {
                (Numeric::Number(a), Numeric::Number(b)) => a.partial_cmp(&b),
                (Numeric::BigInt(a), Numeric::BigInt(b)) => Some(a.cmp(&b)),
                (Numeric::BigInt(a), Numeric::Number(b)) => compare_bigint_number(&a, b),
                (Numeric::Number(a), Numeric::BigInt(b)) => {
                    compare_bigint_number(&b, a).map(Ordering::reverse)
                }
            },
        };
        Ok(ord == Some(Ordering::Less))
    }

    // ── Property access ───────────────────────────────────────────────────────

    /// Dot-style access: `value.name`.
    pub fn get_named(&self, name: &str) -> Result<Value> {
        self.get_property(&PropertyKey::from(name))
    }

    /// Bracket-style access: `value[key]`.
    pub fn get_member(&self, key: &Value) -> Result<Value> {
        let key = key.to_property_key()?;
        self.get_property(&key)
    }

    pub fn get_property(&self, key: &PropertyKey) -> Result<Value> {
        match self {
            Value::Undefined | Value::Null => Err(ScriptError::type_error(format!(
                "Cannot read properties of {} (reading '{key}')",
                self.nullish_name()
            ))),
            Value::Object(o) => Ok(o.get(key.clone())),
            Value::Array(a) => Ok(match key {
                PropertyKey::Str(s) if s == "length" => Value::Number(a.len() as f64),
                _ => array_index(key).map(|i| a.get(i)).unwrap_or(Value::Undefined),
            }),
            Value::Str(s) => Ok(match key {
                PropertyKey::Str(k) if k == "length" => {
                    Value::Number(s.encode_utf16().count() as f64)
                }
                _ => array_index(key)
                    .and_then(|i| s.encode_utf16().nth(i))
                    .map(|unit| Value::Str(String::from_utf16_lossy(&[unit])))
                    .unwrap_or(Value::Undefined),
            }),
            Value::Function(f) => Ok(match key {
                PropertyKey::Str(k) if k == "name" => Value::Str(f.name().to_owned()),
                _ => Value::Undefined,
            }),
            _ => Ok(Value::Undefined),
        }
    }

    pub fn set_named(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.set_property(PropertyKey::from(name), value.into())
    }

    pub fn set_member(&self, key: &Value, value: impl Into<Value>) -> Result<()> {
        self.set_property(key.to_property_key()?, value.into())
    }

    /// Write a property.  Writes to scalar values are silently dropped:
    /// scalars are immutable.
    pub fn set_property(&self, key: PropertyKey, value: Value) -> Result<()> {
        match self {
            Value::Undefined | Value::Null => Err(ScriptError::type_error(format!(
                "Cannot set properties of {} (setting '{key}')",
                self.nullish_name()
            ))),
            Value::Object(o) => {
                o.set(key, value);
                Ok(())
            }
            Value::Array(a) => {
                if let Some(i) = array_index(&key) {
                    a.set(i, value)?;
                } else if matches!(&key, PropertyKey::Str(s) if s == "length") {
                    let n = value.to_number()?;
                    if !(n >= 0.0 && n.trunc() == n && n <= u32::MAX as f64) {
                        return Err(ScriptError::range_error("Invalid array length"));
                    }
                    a.set_len(n as usize)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// `delete value[key]`.  Returns `true` unless the key could not be removed.
    pub fn delete_member(&self, key: &Value) -> Result<bool> {
        let key = key.to_property_key()?;
        self.delete_property(&key)
    }

    pub fn delete_named(&self, name: &str) -> Result<bool> {
        self.delete_property(&PropertyKey::from(name))
    }

    pub fn delete_property(&self, key: &PropertyKey) -> Result<bool> {
        match self {
            Value::Undefined | Value::Null => Err(ScriptError::type_error(format!(
                "Cannot convert undefined or null to object (deleting '{key}')"
            ))),
            Value::Object(o) => {
                o.delete(key.clone());
                Ok(true)
            }
            Value::Array(a) => match key {
                PropertyKey::Str(s) if s == "length" => Ok(false),
                _ => {
                    if let Some(i) = array_index(key) {
                        a.clear_slot(i);
                    }
                    Ok(true)
                }
            },
            Value::Str(s) => Ok(match key {
                PropertyKey::Str(k) if k == "length" => false,
                _ => array_index(key).map_or(true, |i| i >= s.encode_utf16().count()),
            }),
            _ => Ok(true),
        }
    }

    fn nullish_name(&self) -> &'static str {
        if matches!(self, Value::Null) { "null" } else { "undefined" }
    }
}

fn bool_to_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Strict equality, so `NaN != NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

/// Renders the value as a top-level console argument: strings raw,
/// everything else inspected.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => f.write_str(&inspect(other)),
        }
    }
}

// ── Conversions into Value ────────────────────────────────────────────────────

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<BigInt> for Value {
    fn from(b: BigInt) -> Self {
        Value::BigInt(b)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> Value {
        Value::BigInt(s.parse().unwrap())
    }

    #[test]
    fn type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::from(1).type_of(), "number");
        assert_eq!(big("1").type_of(), "bigint");
        assert_eq!(Value::from("s").type_of(), "string");
        assert_eq!(Value::from(Symbol::new("s")).type_of(), "symbol");
        assert_eq!(Value::from(Array::new()).type_of(), "object");
        assert_eq!(Value::from(Function::native("f", |_, _, _| Ok(Value::Undefined))).type_of(), "function");
    }

    #[test]
    fn null_and_undefined_equality() {
        assert!(Value::Null.loose_eq(&Value::Undefined).unwrap());
        assert!(!Value::Null.strict_eq(&Value::Undefined));
        assert!(!Value::Null.loose_eq(&Value::from(0)).unwrap());
        assert!(!Value::Undefined.loose_eq(&Value::from(false)).unwrap());
    }

    #[test]
    fn loose_equality_coerces() {
        assert!(Value::from(1).loose_eq(&Value::from("1")).unwrap());
        assert!(Value::from("").loose_eq(&Value::from(0)).unwrap());
        assert!(Value::from(true).loose_eq(&Value::from(1)).unwrap());
        assert!(Value::from("0").loose_eq(&Value::from(false)).unwrap());
        assert!(big("10").loose_eq(&Value::from(10)).unwrap());
        assert!(big("10").loose_eq(&Value::from("10")).unwrap());
        assert!(!big("10").loose_eq(&Value::from("ten")).unwrap());
        let arr = Value::from(Array::from_values([1, 2]));
        assert!(arr.loose_eq(&Value::from("1,2")).unwrap());
        assert!(Value::from(Object::new()).loose_eq(&Value::from("[object Object]")).unwrap());
    }

    #[test]
    fn loose_equality_references_by_identity() {
        let a = Value::from(Object::new());
        let b = Value::from(Object::new());
        assert!(a.loose_eq(&a.clone()).unwrap());
        assert!(!a.loose_eq(&b).unwrap());
    }

    #[test]
    fn nan_is_never_equal() {
        let nan = Value::from(f64::NAN);
        assert!(!nan.strict_eq(&nan));
        assert!(!nan.loose_eq(&nan).unwrap());
        assert!(nan.same_value(&nan));
    }

    #[test]
    fn zeros() {
        assert!(Value::from(0.0).strict_eq(&Value::from(-0.0)));
        assert!(!Value::from(0.0).same_value(&Value::from(-0.0)));
    }

    #[test]
    fn truthiness() {
        for falsy in [
            Value::from(false),
            Value::from(0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            big("0"),
            Value::from(""),
            Value::Null,
            Value::Undefined,
        ] {
            assert!(!falsy.is_truthy(), "{falsy:?}");
        }
        for truthy in [
            Value::from("0"),
            Value::from(" "),
            Value::from(-1),
            Value::from(Array::new()),
            Value::from(Object::new()),
            Value::from(Symbol::anonymous()),
        ] {
            assert!(truthy.is_truthy(), "{truthy:?}");
        }
    }

    #[test]
    fn division() {
        assert_eq!(Value::from(1).div(&Value::from(0)).unwrap().as_number(), Some(f64::INFINITY));
        assert_eq!(Value::from(-1).div(&Value::from(0)).unwrap().as_number(), Some(f64::NEG_INFINITY));
        assert!(Value::from(0).div(&Value::from(0)).unwrap().as_number().unwrap().is_nan());
        assert!(Value::from("text").div(&Value::from(2)).unwrap().as_number().unwrap().is_nan());
        assert_eq!(Value::from("10").div(&Value::from(4)).unwrap().as_number(), Some(2.5));
    }

    #[test]
    fn float_sum() {
        let sum = Value::from(0.1).add(&Value::from(0.2)).unwrap();
        assert!(!sum.strict_eq(&Value::from(0.3)));
        assert_eq!(sum.to_display_string().unwrap(), "0.30000000000000004");
    }

    #[test]
    fn add_concatenates_strings() {
        assert_eq!(Value::from("a").add(&Value::from(1)).unwrap(), Value::from("a1"));
        assert_eq!(Value::from(1).add(&Value::from("2")).unwrap(), Value::from("12"));
        assert_eq!(big("1").add(&Value::from("x")).unwrap(), Value::from("1x"));
    }

    #[test]
    fn bigint_arithmetic() {
        assert_eq!(big("7").div(&big("2")).unwrap(), big("3"));
        assert_eq!(big("-7").rem(&big("2")).unwrap(), big("-1"));
        assert_eq!(
            big("9007199254740993").add(&big("1")).unwrap(),
            big("9007199254740994")
        );
        assert!(matches!(big("1").div(&big("0")), Err(ScriptError::Range(_))));
    }

    #[test]
    fn bigint_mixing_is_type_error() {
        for op in [Value::add, Value::sub, Value::mul, Value::div, Value::rem] {
            let err = op(&big("1"), &Value::from(2)).unwrap_err();
            assert_eq!(err.kind(), "TypeError");
        }
        assert!(Value::from(2).mul(&big("1")).is_err());
    }

    #[test]
    fn symbol_conversions_fail() {
        let s = Value::from(Symbol::new("id"));
        assert!(s.to_display_string().is_err());
        assert!(s.to_number().is_err());
        assert!(s.add(&Value::from("x")).is_err());
    }

    #[test]
    fn display_strings() {
        assert_eq!(Value::Undefined.to_display_string().unwrap(), "undefined");
        assert_eq!(big("12").to_display_string().unwrap(), "12");
        assert_eq!(Value::from(Object::new()).to_display_string().unwrap(), "[object Object]");
        let arr = Array::from_values([Value::from(1), Value::Null, Value::from("x")]);
        assert_eq!(Value::from(arr).to_display_string().unwrap(), "1,,x");
    }

    #[test]
    fn less_than() {
        assert!(Value::from(5).less_than(&Value::from(100)).unwrap());
        assert!(!Value::from(100).less_than(&Value::from(100)).unwrap());
        assert!(!Value::from("10").less_than(&Value::from(9)).unwrap());
        assert!(Value::from("10").less_than(&Value::from("9")).unwrap());
        assert!(!Value::from(f64::NAN).less_than(&Value::from(1)).unwrap());
        assert!(big("1").less_than(&Value::from(1.5)).unwrap());
    }

    #[test]
    fn dot_and_bracket_access_agree() {
        let obj = Object::new();
        obj.set("age", Value::from(30));
        let v = Value::from(obj);
        assert_eq!(v.get_named("age").unwrap(), v.get_member(&Value::from("age")).unwrap());
        assert_eq!(v.get_named("missing").unwrap(), Value::Undefined);
    }

    #[test]
    fn reading_nullish_fails() {
        let err = Value::Undefined.get_named("x").unwrap_err();
        assert_eq!(err.to_string(), "TypeError: Cannot read properties of undefined (reading 'x')");
        assert!(Value::Null.set_named("x", 1).is_err());
    }

    #[test]
    fn scalar_writes_are_ignored() {
        let s = Value::from("Hello");
        s.set_member(&Value::from(0), "h").unwrap();
        assert_eq!(s, Value::from("Hello"));
        assert_eq!(s.get_member(&Value::from(0)).unwrap(), Value::from("H"));
        assert_eq!(s.get_named("length").unwrap(), Value::from(5));
    }

    #[test]
    fn array_members() {
        let v = Value::from(Array::from_values([1, 2, 3]));
        assert_eq!(v.get_named("length").unwrap(), Value::from(3));
        assert_eq!(v.get_member(&Value::from(1)).unwrap(), Value::from(2));
        assert_eq!(v.get_member(&Value::from(9)).unwrap(), Value::Undefined);
        v.set_named("length", 1).unwrap();
        assert_eq!(v.get_named("length").unwrap(), Value::from(1));
        assert!(v.set_named("length", -1).is_err());
    }

    #[test]
    fn far_index_writes_fail_cleanly() {
        let arr = Array::from_values([1, 2, 3]);
        let v = Value::from(arr.clone());
        let err = v.set_member(&Value::from(4294967294.0), 1).unwrap_err();
        assert_eq!(err.kind(), "RangeError");
        assert!(matches!(v.set_named("length", 4e9), Err(ScriptError::Range(_))));
        assert_eq!(arr.len(), 3);
        // Past the largest index it is an ordinary property and is dropped.
        v.set_member(&Value::from(4294967295.0), 1).unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(v.get_member(&Value::from(4294967294.0)).unwrap(), Value::Undefined);
    }

    #[test]
    fn delete_removes_key() {
        let obj = Object::new();
        obj.set("isAdmin", Value::from(true));
        let v = Value::from(obj.clone());
        assert!(v.delete_named("isAdmin").unwrap());
        assert!(!obj.has("isAdmin"));
        assert_eq!(v.get_named("isAdmin").unwrap(), Value::Undefined);
    }

    #[test]
    fn display_is_raw_for_strings() {
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(big("5").to_string(), "5n");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
