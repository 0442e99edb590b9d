//! Ordered sequences and their higher-order transforms.
//!
//! An [`Array`] is a shared, growable list.  Reads past the end yield
//! `Undefined` rather than failing, and `len()` is always one more than the
//! highest valid index.
//!
//! The transforms (`filter`, `map`, `find`, `find_index`, `reduce`,
//! `for_each`) take the callback as a [`Value`] and reject anything that is
//! not callable before looking at a single element.  The callback receives
//! `(element, index, sequence)`.  The range visited is fixed when the call
//! starts; elements removed by the callback while it runs are not visited.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::error::{Result, ScriptError};
use super::function::Function;
use super::inspect::inspect;
use super::runtime::Runtime;
use super::value::Value;

/// Longest sequence a write is allowed to materialise.
pub const MAX_DENSE_LEN: usize = 1 << 24;

/// A shared, mutable, index-addressable list of values.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Array(Rc::new(RefCell::new(values.into_iter().map(Into::into).collect())))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Element at `index`, or `Undefined` when out of range.
    pub fn get(&self, index: usize) -> Value {
        self.0.borrow().get(index).cloned().unwrap_or_default()
    }

    /// Replace the element at `index`.  Writing past the end extends the
    /// sequence, padding the gap with `Undefined`; growth beyond
    /// [`MAX_DENSE_LEN`] is a range error and leaves the sequence unchanged.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<()> {
        let mut items = self.0.borrow_mut();
        if index >= items.len() {
            items.resize(dense_len(index.saturating_add(1))?, Value::Undefined);
        }
        items[index] = value.into();
        Ok(())
    }

    pub fn push(&self, value: impl Into<Value>) -> usize {
        let mut items = self.0.borrow_mut();
        items.push(value.into());
        items.len()
    }

    pub fn pop(&self) -> Value {
        self.0.borrow_mut().pop().unwrap_or_default()
    }

    /// Truncate, or extend with `Undefined` up to [`MAX_DENSE_LEN`].
    pub fn set_len(&self, len: usize) -> Result<()> {
        self.0.borrow_mut().resize(dense_len(len)?, Value::Undefined);
        Ok(())
    }

    pub(crate) fn clear_slot(&self, index: usize) {
        if let Some(slot) = self.0.borrow_mut().get_mut(index) {
            *slot = Value::Undefined;
        }
    }

    /// Snapshot of the elements, in order.
    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Elements' string forms joined by `sep`; `Undefined` and `Null` join as "".
    pub fn join(&self, sep: &str) -> Result<String> {
        let mut parts = Vec::with_capacity(self.len());
        for v in self.values() {
            parts.push(if v.is_nullish() { String::new() } else { v.to_display_string()? });
        }
        Ok(parts.join(sep))
    }

    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    // ── Transforms ────────────────────────────────────────────────────────────

    /// New sequence of the elements for which `callback` returns a truthy value.
    pub fn filter(&self, rt: &mut Runtime, callback: &Value) -> Result<Array> {
        let f = callable(callback)?;
        trace!(len = self.len(), "filter");
        let out = Array::new();
        self.visit(|i, elem| {
            if self.invoke(rt, f, &elem, i)?.is_truthy() {
                out.push(elem);
            }
            Ok(true)
        })?;
        Ok(out)
    }

    /// New sequence of `callback`'s results, one per element.
    pub fn map(&self, rt: &mut Runtime, callback: &Value) -> Result<Array> {
        let f = callable(callback)?;
        trace!(len = self.len(), "map");
        let out = Array::from_values(vec![Value::Undefined; self.len()]);
        self.visit(|i, elem| {
            out.set(i, self.invoke(rt, f, &elem, i)?)?;
            Ok(true)
        })?;
        Ok(out)
    }

    /// First element for which `callback` is truthy, or `Undefined`.
    pub fn find(&self, rt: &mut Runtime, callback: &Value) -> Result<Value> {
        Ok(self.find_entry(rt, callback)?.map(|(_, v)| v).unwrap_or_default())
    }

    /// Index of the first element for which `callback` is truthy, or `-1`.
    pub fn find_index(&self, rt: &mut Runtime, callback: &Value) -> Result<i64> {
        Ok(self.find_entry(rt, callback)?.map(|(i, _)| i as i64).unwrap_or(-1))
    }

    fn find_entry(&self, rt: &mut Runtime, callback: &Value) -> Result<Option<(usize, Value)>> {
        let f = callable(callback)?;
        trace!(len = self.len(), "find");
        let mut found = None;
        self.visit(|i, elem| {
            if self.invoke(rt, f, &elem, i)?.is_truthy() {
                found = Some((i, elem));
                return Ok(false);
            }
            Ok(true)
        })?;
        Ok(found)
    }

    /// Left fold: `acc = callback(acc, element, index, sequence)`.
    ///
    /// With no seed the first element seeds the fold, and an empty sequence
    /// is a type error.  With a seed, an empty sequence yields the seed.
    pub fn reduce(&self, rt: &mut Runtime, callback: &Value, seed: Option<Value>) -> Result<Value> {
        let f = callable(callback)?;
        trace!(len = self.len(), seeded = seed.is_some(), "reduce");
        let len = self.len();
        let (mut acc, start) = match seed {
            Some(seed) => (seed, 0),
            None => {
                if len == 0 {
                    return Err(ScriptError::type_error("Reduce of empty array with no initial value"));
                }
                (self.get(0), 1)
            }
        };
        for i in start..len {
            let Some(elem) = self.element(i) else { continue };
            let args = [acc, elem, Value::from(i), Value::Array(self.clone())];
            acc = f.call(rt, &Value::Undefined, &args)?;
        }
        Ok(acc)
    }

    /// Call `callback` once per element, in order, for its side effects.
    pub fn for_each(&self, rt: &mut Runtime, callback: &Value) -> Result<Value> {
        let f = callable(callback)?;
        trace!(len = self.len(), "for_each");
        self.visit(|i, elem| {
            self.invoke(rt, f, &elem, i)?;
            Ok(true)
        })?;
        Ok(Value::Undefined)
    }

    /// Walk indices `0..len` (len fixed up front), skipping indices that no
    /// longer exist.  `step` returns `false` to stop early.
    fn visit<F>(&self, mut step: F) -> Result<()>
    where
        F: FnMut(usize, Value) -> Result<bool>,
    {
        let len = self.len();
        for i in 0..len {
            let Some(elem) = self.element(i) else { continue };
            if !step(i, elem)? {
                break;
            }
        }
        Ok(())
    }

    fn element(&self, i: usize) -> Option<Value> {
        self.0.borrow().get(i).cloned()
    }

    fn invoke(&self, rt: &mut Runtime, f: &Function, elem: &Value, i: usize) -> Result<Value> {
        let args = [elem.clone(), Value::from(i), Value::Array(self.clone())];
        f.call(rt, &Value::Undefined, &args)
    }
}

fn dense_len(len: usize) -> Result<usize> {
    if len > MAX_DENSE_LEN {
        return Err(ScriptError::range_error(format!(
            "Cannot grow array to {len} elements (limit {MAX_DENSE_LEN})"
        )));
    }
    Ok(len)
}

fn callable(v: &Value) -> Result<&Function> {
    v.as_function()
        .ok_or_else(|| ScriptError::type_error(format!("{} is not a function", inspect(v))))
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array({:#x}, len {})", self.addr(), self.len())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
