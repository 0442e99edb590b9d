//! Callable values.

use std::fmt;
use std::rc::Rc;

use super::error::Result;
use super::runtime::Runtime;
use super::value::Value;

type NativeFn = dyn Fn(&mut Runtime, &Value, &[Value]) -> Result<Value>;

struct FunctionInner {
    name: String,
    source: Option<String>,
    body: Box<NativeFn>,
}

/// A callable value backed by a Rust closure.
///
/// The closure receives the runtime, the receiver (`this`; `Undefined` for
/// plain calls) and the arguments.
#[derive(Clone)]
pub struct Function(Rc<FunctionInner>);

impl Function {
    pub fn native<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Runtime, &Value, &[Value]) -> Result<Value> + 'static,
    {
        Function(Rc::new(FunctionInner { name: name.into(), source: None, body: Box::new(body) }))
    }

    /// Attach the text string conversion should produce.
    pub fn with_source(self, source: impl Into<String>) -> Self {
        match Rc::try_unwrap(self.0) {
            Ok(mut inner) => {
                inner.source = Some(source.into());
                Function(Rc::new(inner))
            }
            Err(shared) => {
                let name = shared.name.clone();
                Function(Rc::new(FunctionInner {
                    name,
                    source: Some(source.into()),
                    body: Box::new(move |rt: &mut Runtime, this: &Value, args: &[Value]| {
                        (shared.body)(rt, this, args)
                    }),
                }))
            }
        }
    }

    pub fn call(&self, rt: &mut Runtime, this: &Value, args: &[Value]) -> Result<Value> {
        (self.0.body)(rt, this, args)
    }

    /// The function's name; empty for anonymous functions.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.name.is_empty()
    }

    /// Source form used when the function is converted to a string: the
    /// attached source, or a native-code stub.
    pub fn source_text(&self) -> String {
        match &self.0.source {
            Some(source) => source.clone(),
            None => format!("function {}() {{ [native code] }}", self.0.name),
        }
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:?})", self.0.name)
    }
}

/// Argument `i`, or `Undefined` when the caller passed fewer.
pub fn arg(args: &[Value], i: usize) -> Value {
    args.get(i).cloned().unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::runtime::Console;

    #[test]
    fn call_passes_receiver_and_args() {
        let f = Function::native("pick", |_, this, args| {
            Ok(if arg(args, 0).is_truthy() { this.clone() } else { arg(args, 1) })
        });
        let mut rt = Runtime::new(Console::capture());
        let this = Value::from("me");
        assert_eq!(f.call(&mut rt, &this, &[Value::from(true)]).unwrap(), this);
        assert_eq!(f.call(&mut rt, &this, &[Value::from(false)]).unwrap(), Value::Undefined);
    }

    #[test]
    fn names() {
        let named = Function::native("greet", |_, _, _| Ok(Value::Undefined));
        let anon = Function::native("", |_, _, _| Ok(Value::Undefined));
        assert_eq!(named.name(), "greet");
        assert!(anon.is_anonymous());
        assert_eq!(named.source_text(), "function greet() { [native code] }");
    }

    #[test]
    fn attached_source_is_the_string_form() {
        let text = "function () {\n    return 1;\n}";
        let f = Function::native("one", |_, _, _| Ok(Value::from(1))).with_source(text);
        assert_eq!(f.source_text(), text);
        assert_eq!(f.name(), "one");
        assert_eq!(Value::from(f.clone()).to_display_string().unwrap(), text);

        let mut rt = Runtime::new(Console::capture());
        assert_eq!(f.call(&mut rt, &Value::Undefined, &[]).unwrap(), Value::from(1));
    }

    #[test]
    fn with_source_on_a_shared_function() {
        let f = Function::native("g", |_, _, _| Ok(Value::from(2)));
        let g = f.clone().with_source("function g() {}");
        assert!(!f.ptr_eq(&g));
        assert_eq!(f.source_text(), "function g() { [native code] }");
        let mut rt = Runtime::new(Console::capture());
        assert_eq!(g.call(&mut rt, &Value::Undefined, &[]).unwrap(), Value::from(2));
    }

    #[test]
    fn identity() {
        let f = Function::native("f", |_, _, _| Ok(Value::Undefined));
        let g = Function::native("f", |_, _, _| Ok(Value::Undefined));
        assert!(f.ptr_eq(&f.clone()));
        assert!(!f.ptr_eq(&g));
    }
}
