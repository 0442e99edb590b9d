//! Keyed records.
//!
//! An [`Object`] maps string or symbol keys to values.  Keys keep their
//! insertion order; replacing a key's value leaves its position alone and
//! deleting a key closes the gap.  Enumeration ([`Object::keys`]) yields
//! string keys only.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::error::{Result, ScriptError};
use super::runtime::Runtime;
use super::symbol::Symbol;
use super::value::Value;

/// A record key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Str(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::Str(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(s) => f.write_str(s),
            PropertyKey::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::Str(s.to_owned())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::Str(s)
    }
}

impl From<&String> for PropertyKey {
    fn from(s: &String) -> Self {
        PropertyKey::Str(s.clone())
    }
}

impl From<Symbol> for PropertyKey {
    fn from(s: Symbol) -> Self {
        PropertyKey::Symbol(s)
    }
}

impl From<&Symbol> for PropertyKey {
    fn from(s: &Symbol) -> Self {
        PropertyKey::Symbol(s.clone())
    }
}

/// Parse a canonical sequence index (`"0"`, `"17"`, not `"01"` or `"-1"`).
pub fn array_index(key: &PropertyKey) -> Option<usize> {
    let s = key.as_str()?;
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) || (s.len() > 1 && s.starts_with('0')) {
        return None;
    }
    let n: u64 = s.parse().ok()?;
    if n >= u32::MAX as u64 {
        return None;
    }
    usize::try_from(n).ok()
}

/// A shared, mutable keyed record.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<IndexMap<PropertyKey, Value>>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(key, value)` pairs, in order.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        let obj = Object::new();
        for (k, v) in entries {
            obj.set(k, v);
        }
        obj
    }

    /// The stored value, or `Undefined` when the key is absent.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        self.0.borrow().get(&key.into()).cloned().unwrap_or_default()
    }

    /// Add a key at the end, or replace an existing key's value in place.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) {
        self.0.borrow_mut().insert(key.into(), value.into());
    }

    /// Remove a key.  Returns `true` if it was present.
    pub fn delete(&self, key: impl Into<PropertyKey>) -> bool {
        self.0.borrow_mut().shift_remove(&key.into()).is_some()
    }

    pub fn has(&self, key: impl Into<PropertyKey>) -> bool {
        self.0.borrow().contains_key(&key.into())
    }

    /// Number of keys, symbol keys included.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Own string keys in insertion order.  Symbol keys are skipped.
    pub fn keys(&self) -> Vec<String> {
        self.0
            .borrow()
            .keys()
            .filter_map(|k| k.as_str().map(str::to_owned))
            .collect()
    }

    pub fn symbol_keys(&self) -> Vec<Symbol> {
        self.0
            .borrow()
            .keys()
            .filter_map(|k| match k {
                PropertyKey::Symbol(s) => Some(s.clone()),
                PropertyKey::Str(_) => None,
            })
            .collect()
    }

    /// `(key, value)` pairs for string keys, in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|(k, v)| k.as_str().map(|s| (s.to_owned(), v.clone())))
            .collect()
    }

    /// Every key and value, symbols included, in insertion order.
    pub(crate) fn all_entries(&self) -> Vec<(PropertyKey, Value)> {
        self.0.borrow().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Call a function-valued property with this record as the receiver.
    pub fn call_method(&self, rt: &mut Runtime, name: &str, args: &[Value]) -> Result<Value> {
        match self.get(name) {
            Value::Function(f) => f.call(rt, &Value::Object(self.clone()), args),
            _ => Err(ScriptError::type_error(format!("{name} is not a function"))),
        }
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({:#x}, {} keys)", self.addr(), self.len())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::function::{arg, Function};
    use crate::script::runtime::Console;

    fn user() -> Object {
        Object::from_entries([
            ("name", Value::from("John")),
            ("age", Value::from(30)),
            ("isAdmin", Value::from(true)),
        ])
    }

    #[test]
    fn keys_in_insertion_order() {
        let obj = Object::from_entries([("a", 1), ("b", 2)]);
        assert_eq!(obj.keys(), ["a", "b"]);
        obj.set(Symbol::new("hidden"), 3);
        obj.set("c", 4);
        assert_eq!(obj.keys(), ["a", "b", "c"]);
        assert_eq!(obj.len(), 4);
        assert_eq!(obj.symbol_keys().len(), 1);
    }

    #[test]
    fn replace_keeps_position() {
        let obj = user();
        obj.set("name", "Jane");
        assert_eq!(obj.keys(), ["name", "age", "isAdmin"]);
        assert_eq!(obj.get("name"), Value::from("Jane"));
    }

    #[test]
    fn add_and_delete() {
        let obj = user();
        obj.set("age", 31);
        obj.set("city", "New York");
        assert!(obj.delete("isAdmin"));
        assert!(!obj.delete("isAdmin"));
        assert_eq!(obj.keys(), ["name", "age", "city"]);
        assert_eq!(obj.get("isAdmin"), Value::Undefined);
        assert!(!obj.has("isAdmin"));
    }

    #[test]
    fn symbol_keyed_values_are_reachable() {
        let obj = user();
        let id = Symbol::new("id");
        obj.set(&id, 12345);
        assert_eq!(obj.get(&id), Value::from(12345));
        assert_eq!(obj.get(Symbol::new("id")), Value::Undefined);
        assert_eq!(obj.keys(), ["name", "age", "isAdmin"]);
    }

    #[test]
    fn shared_handle_sees_mutation() {
        let a = user();
        let b = a.clone();
        b.set("age", 99);
        assert_eq!(a.get("age"), Value::from(99));
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&user()));
    }

    #[test]
    fn method_receives_record() {
        let obj = user();
        obj.set(
            "greet",
            Function::native("greet", |_, this, args| {
                let name = this.get_named("name")?.to_display_string()?;
                let suffix = arg(args, 0);
                Ok(Value::from(format!("Hello, I am {name}{}", suffix.to_display_string()?)))
            }),
        );
        let mut rt = Runtime::new(Console::capture());
        let out = obj.call_method(&mut rt, "greet", &[Value::from("!")]).unwrap();
        assert_eq!(out, Value::from("Hello, I am John!"));
    }

    #[test]
    fn calling_non_function_fails() {
        let mut rt = Runtime::new(Console::capture());
        let err = user().call_method(&mut rt, "age", &[]).unwrap_err();
        assert_eq!(err.to_string(), "TypeError: age is not a function");
    }

    #[test]
    fn array_index_is_canonical() {
        assert_eq!(array_index(&"0".into()), Some(0));
        assert_eq!(array_index(&"42".into()), Some(42));
        assert_eq!(array_index(&"01".into()), None);
        assert_eq!(array_index(&"-1".into()), None);
        assert_eq!(array_index(&"1.5".into()), None);
        assert_eq!(array_index(&"4294967295".into()), None);
        assert_eq!(array_index(&PropertyKey::Symbol(Symbol::new("0"))), None);
    }
}
