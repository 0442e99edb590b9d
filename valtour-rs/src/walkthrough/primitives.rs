//! Primitive values: strings, numbers, bigints, booleans, `undefined`,
//! `null` and symbols.
//!
//! Every primitive is immutable.  Bindings can be reassigned, but the value
//! a binding held is never changed in place.

use num_bigint::BigInt;
use tracing::debug;

use crate::script::bigint::to_bigint;
use crate::script::number::{parse_radix_literal, MAX_SAFE_INTEGER};
use crate::script::{Object, Result, Runtime, Symbol, Value};

pub fn run(rt: &mut Runtime) -> Result<()> {
    strings(rt)?;
    numbers(rt)?;
    bigints(rt)?;
    booleans(rt);
    undefined(rt);
    null(rt)?;
    symbols(rt);
    Ok(())
}

fn header(rt: &mut Runtime, title: &str) {
    debug!(section = title, "primitives");
    rt.log(&[Value::from(title)]);
}

fn strings(rt: &mut Runtime) -> Result<()> {
    header(rt, "--- 1. String ---");
    let name = Value::from("John");
    let _single_quote = Value::from("Hello");

    let template = Value::from(format!("Welcome, {}", name.to_display_string()?));
    rt.log(&[template]);

    let multi = Value::from("This is a\nmultiline string");
    rt.log(&[multi]);

    // Writing a character into a string is silently ignored.
    let mut s = Value::from("Hello");
    s.set_member(&Value::from(0), "h")?;
    rt.log(&[s.clone()]);
    s = Value::from("World");
    rt.log(&[s]);
    Ok(())
}

fn numbers(rt: &mut Runtime) -> Result<()> {
    header(rt, "\n--- 2. Number ---");
    let _age = Value::from(25);
    let _price = Value::from(19.99);
    let _infinity = Value::from(f64::INFINITY);
    let _negative_infinity = Value::from(f64::NEG_INFINITY);
    let _not_a_number = Value::from(f64::NAN);

    rt.log(&[Value::from(1).div(&Value::from(0))?]);
    rt.log(&[Value::from("text").div(&Value::from(2))?]);

    let sum = Value::from(0.1).add(&Value::from(0.2))?;
    rt.log(&[sum.clone()]);
    rt.log(&[Value::from(sum.strict_eq(&Value::from(0.3)))]);

    rt.log(&[Value::from(MAX_SAFE_INTEGER)]);

    for literal in ["0b1010", "0o12", "0xA"] {
        rt.log(&[Value::from(parse_radix_literal(literal).unwrap_or(f64::NAN))]);
    }
    Ok(())
}

fn bigints(rt: &mut Runtime) -> Result<()> {
    header(rt, "\n--- 3. BigInt ---");
    rt.log(&[Value::from(BigInt::from(0))]);
    let another_big = Value::from(to_bigint(&Value::from("1234567890123456789012345678901234567890"))?);
    rt.log(&[another_big]);

    // Mixing a bigint with a number is rejected.
    if let Err(e) = Value::from(BigInt::from(1)).add(&Value::from(2)) {
        debug!(error = %e, "1n + 2");
    }
    Ok(())
}

fn booleans(rt: &mut Runtime) {
    header(rt, "\n--- 4. Boolean ---");
    let _is_active = Value::from(true);
    let _is_deleted = Value::from(false);

    if Value::from(0).is_truthy() {
        rt.log(&[Value::from("This won't run")]);
    } else {
        rt.log(&[Value::from("0 is falsy")]);
    }
}

fn undefined(rt: &mut Runtime) {
    header(rt, "\n--- 5. Undefined ---");
    let x = Value::Undefined;
    rt.log(&[x.clone()]);
    rt.log(&[Value::from(x.type_of())]);
}

fn null(rt: &mut Runtime) -> Result<()> {
    header(rt, "\n--- 6. Null ---");
    let y = Value::Null;
    rt.log(&[y.clone()]);
    rt.log(&[Value::from(y.type_of())]);

    rt.log(&[Value::from(Value::Null.loose_eq(&Value::Undefined)?)]);
    rt.log(&[Value::from(Value::Null.strict_eq(&Value::Undefined))]);
    Ok(())
}

fn symbols(rt: &mut Runtime) {
    header(rt, "\n--- 7. Symbol ---");
    let id1 = Value::from(Symbol::new("id"));
    let id2 = Value::from(Symbol::new("id"));
    rt.log(&[Value::from(id1.strict_eq(&id2))]);

    let user = Object::from_entries([("name", "John")]);
    let id = Symbol::new("id");
    user.set(&id, 12345);
    rt.log(&[user.get(&id)]);

    for key in user.keys() {
        rt.log(&[Value::from(key)]);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
