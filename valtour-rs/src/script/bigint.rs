//! Arbitrary-precision integer construction and comparison.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use super::error::{Result, ScriptError};
use super::number::{format_number, is_integral, split_radix_prefix};
use super::value::Value;

/// `BigInt(value)`.
///
/// Integral numbers convert exactly; fractional or non-finite numbers are a
/// range error.  Strings go through [`parse_bigint`]; failure is a syntax
/// error.
pub fn to_bigint(v: &Value) -> Result<BigInt> {
    match v {
        Value::BigInt(b) => Ok(b.clone()),
        Value::Bool(b) => Ok(BigInt::from(u8::from(*b))),
        Value::Number(x) => number_to_bigint(*x),
        Value::Str(s) => parse_bigint(s)
            .ok_or_else(|| ScriptError::syntax_error(format!("Cannot convert {s} to a BigInt"))),
        Value::Undefined | Value::Null => Err(ScriptError::type_error(format!(
            "Cannot convert {} to a BigInt",
            if matches!(v, Value::Null) { "null" } else { "undefined" }
        ))),
        Value::Symbol(_) => Err(ScriptError::type_error("Cannot convert Symbol to a BigInt")),
        Value::Object(_) | Value::Array(_) | Value::Function(_) => to_bigint(&v.to_primitive()?),
    }
}

fn number_to_bigint(x: f64) -> Result<BigInt> {
    if !is_integral(x) {
        return Err(ScriptError::range_error(format!(
            "The number {} cannot be converted to a BigInt because it is not an integer",
            format_number(x)
        )));
    }
    BigInt::from_f64(x).ok_or_else(|| {
        ScriptError::range_error(format!("The number {} cannot be converted to a BigInt", format_number(x)))
    })
}

/// Parse text as a bigint: surrounding whitespace is ignored, empty text is
/// `0`, decimal digits may carry a sign, and `0x`/`0o`/`0b` prefixes select
/// a radix (unsigned).  Returns `None` for anything else.
pub fn parse_bigint(s: &str) -> Option<BigInt> {
    let t = s.trim();
    if t.is_empty() {
        return Some(BigInt::from(0));
    }
    if let Some((radix, digits)) = split_radix_prefix(t) {
        return parse_digits(digits, radix);
    }
    let (negative, digits) = match t.as_bytes()[0] {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };
    let n = parse_digits(digits, 10)?;
    Some(if negative { -n } else { n })
}

fn parse_digits(digits: &str, radix: u32) -> Option<BigInt> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

/// Compare a bigint with a number mathematically.  `None` when `x` is `NaN`.
pub fn compare_bigint_number(b: &BigInt, x: f64) -> Option<Ordering> {
    if x.is_nan() {
        return None;
    }
    if x.is_infinite() {
        return Some(if x > 0.0 { Ordering::Less } else { Ordering::Greater });
    }
    let floor = BigInt::from_f64(x.floor())?;
    match b.cmp(&floor) {
        // `b` is an integer, so anything above floor(x) is above x when x has
        // a fractional part.
        Ordering::Equal if x.fract() != 0.0 => Some(Ordering::Less),
        ord => Some(ord),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
