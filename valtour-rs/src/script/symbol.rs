//! Unique-identity tokens.
//!
//! A [`Symbol`] is equal only to itself.  The description is a label for
//! humans; two symbols created with the same label are still distinct.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug)]
struct SymbolInner {
    description: Option<String>,
}

/// A unique-identity token.  Clones share identity with the original.
#[derive(Debug, Clone)]
pub struct Symbol(Rc<SymbolInner>);

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Symbol(Rc::new(SymbolInner { description: Some(description.into()) }))
    }

    /// A symbol with no label (`Symbol()`).
    pub fn anonymous() -> Self {
        Symbol(Rc::new(SymbolInner { description: None }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
