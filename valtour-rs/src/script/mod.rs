//! Value model for a small dynamically typed scripting language.
//!
//! - Scalars: `undefined`, `null`, booleans, IEEE-754 numbers, bigints,
//!   strings and symbols ([`Value`], [`Symbol`])
//! - Reference values: keyed records ([`Object`]), ordered sequences
//!   ([`Array`]) and callables ([`Function`])
//! - Coercion, loose/strict equality and truthiness rules
//! - Console rendering ([`inspect`]) and output ([`Runtime`], [`Console`])
//!
//! # Quick start
//!
//! ```rust
//! use valtour::script::{Array, Console, Function, Runtime, Value};
//!
//! let mut rt = Runtime::new(Console::capture());
//! let prices = Array::from_values([5, 105, 10, 1000]);
//! let cheap = Value::from(Function::native("", |_, _, args| {
//!     Ok(Value::from(args[0].less_than(&Value::from(100))?))
//! }));
//! let below = prices.filter(&mut rt, &cheap).unwrap();
//! rt.log(&[Value::from(below)]);
//! assert_eq!(rt.console.captured(), ["[ 5, 10 ]"]);
//! ```

pub mod array;
pub mod bigint;
pub mod error;
pub mod function;
pub mod inspect;
pub mod number;
pub mod object;
pub mod runtime;
pub mod symbol;
pub mod value;

// Re-exports for convenience.
pub use array::Array;
pub use error::{Result, ScriptError};
pub use function::{arg, Function};
pub use inspect::inspect;
pub use object::{Object, PropertyKey};
pub use runtime::{Console, Runtime};
pub use symbol::Symbol;
pub use value::Value;
