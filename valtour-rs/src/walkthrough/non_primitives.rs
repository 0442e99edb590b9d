//! Reference values: records, sequences, and the sequence transforms.
//!
//! Records and sequences are shared by handle, so a mutation through one
//! binding is visible through every other binding to the same value.

use tracing::debug;

use crate::script::{arg, Array, Function, Object, Result, Runtime, Value};

pub fn run(rt: &mut Runtime) -> Result<()> {
    objects(rt)?;
    arrays(rt)?;
    array_methods(rt)?;
    Ok(())
}

fn header(rt: &mut Runtime, title: &str) {
    debug!(section = title, "non-primitives");
    rt.log(&[Value::from(title)]);
}

const GREET_SOURCE: &str = "function () {\n        console.log(`Hello, I am ${this.name}`);\n    }";

/// `greet` prints a greeting using its receiver's `name`.
fn greet() -> Function {
    Function::native("greet", |rt, this, _| {
        let name = this.get_named("name")?.to_display_string()?;
        rt.log(&[Value::from(format!("Hello, I am {name}"))]);
        Ok(Value::Undefined)
    })
    .with_source(GREET_SOURCE)
}

fn objects(rt: &mut Runtime) -> Result<()> {
    header(rt, "--- 1. Objects ---");
    let user = Object::from_entries([
        ("name", Value::from("John")),
        ("age", Value::from(30)),
        ("isAdmin", Value::from(true)),
    ]);
    user.set("greet", greet());
    let user_ref = Value::from(user.clone());

    rt.log(&[user_ref.get_named("name")?]);
    rt.log(&[user_ref.get_member(&Value::from("age"))?]);

    user_ref.set_named("age", 31)?;
    user_ref.set_named("city", "New York")?;
    user_ref.delete_named("isAdmin")?;

    rt.log(&[Value::from("Looping Object:")]);
    for key in user.keys() {
        let value = user_ref.get_member(&Value::from(key.as_str()))?;
        rt.log(&[Value::from(format!("{key}: {}", value.to_display_string()?))]);
    }
    Ok(())
}

fn arrays(rt: &mut Runtime) -> Result<()> {
    header(rt, "\n--- 2. Arrays ---");
    let numbers = Array::from_values([1, 2, 3, 4, 5]);
    let mixed = Value::from(Array::from_values([
        Value::from(1),
        Value::from("two"),
        Value::from(Object::from_entries([("id", 3)])),
    ]));
    debug!(mixed = %mixed, "mixed array");

    rt.log(&[numbers.get(0)]);
    rt.log(&[Value::from(numbers.len())]);

    rt.log(&[Value::from("Looping Array (for...of):")]);
    for num in numbers.values() {
        rt.log(&[num]);
    }

    rt.log(&[Value::from("Looping Array (Standard for):")]);
    for i in 0..numbers.len() {
        rt.log(&[numbers.get(i)]);
    }
    Ok(())
}

fn item(name: &str, price: i32) -> Value {
    Value::from(Object::from_entries([
        ("name", Value::from(name)),
        ("price", Value::from(price)),
    ]))
}

fn array_methods(rt: &mut Runtime) -> Result<()> {
    header(rt, "\n--- 3. Array Methods (Functional) ---");
    let items = Array::from_values([
        item("Bike", 100),
        item("TV", 200),
        item("Album", 10),
        item("Book", 5),
        item("Phone", 500),
        item("Computer", 1000),
    ]);

    rt.log(&[Value::from("Original Items:"), Value::from(items.clone())]);

    let cheap_items = items.filter(
        rt,
        &Value::from(Function::native("", |_, _, args| {
            let price = arg(args, 0).get_named("price")?;
            Ok(Value::from(price.less_than(&Value::from(100))?))
        })),
    )?;
    rt.log(&[Value::from("Filtered (Cheap Items):"), Value::from(cheap_items)]);

    let item_names = items.map(
        rt,
        &Value::from(Function::native("", |_, _, args| arg(args, 0).get_named("name"))),
    )?;
    rt.log(&[Value::from("Mapped (Names):"), Value::from(item_names)]);

    let found_item = items.find(
        rt,
        &Value::from(Function::native("", |_, _, args| {
            let name = arg(args, 0).get_named("name")?;
            Ok(Value::from(name.strict_eq(&Value::from("Book"))))
        })),
    )?;
    rt.log(&[Value::from("Found Item 'Book':"), found_item]);

    let total = items.reduce(
        rt,
        &Value::from(Function::native("", |_, _, args| {
            let (current_total, item) = (arg(args, 0), arg(args, 1));
            item.get_named("price")?.add(&current_total)
        })),
        Some(Value::from(0)),
    )?;
    rt.log(&[Value::from("Total Price (Reduce):"), total]);

    rt.log(&[Value::from("forEach Output:")]);
    items.for_each(
        rt,
        &Value::from(Function::native("", |rt, _, args| {
            let item = arg(args, 0);
            let name = item.get_named("name")?.to_display_string()?;
            let price = item.get_named("price")?.to_display_string()?;
            rt.log(&[Value::from(format!("- {name}: ${price}"))]);
            Ok(Value::Undefined)
        })),
    )?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Console;

    #[test]
    fn transcript() {
        let mut rt = Runtime::new(Console::capture());
        run(&mut rt).unwrap();
        let expected = [
            "--- 1. Objects ---",
            "John",
            "30",
            "Looping Object:",
            "name: John",
            "age: 31",
            "greet: function () {\n        console.log(`Hello, I am ${this.name}`);\n    }",
            "city: New York",
            "\n--- 2. Arrays ---",
            "1",
            "5",
            "Looping Array (for...of):",
            "1",
            "2",
            "3",
            "4",
            "5",
            "Looping Array (Standard for):",
            "1",
            "2",
            "3",
            "4",
            "5",
            "\n--- 3. Array Methods (Functional) ---",
            "Original Items: [\n  { name: 'Bike', price: 100 },\n  { name: 'TV', price: 200 },\n  { name: 'Album', price: 10 },\n  { name: 'Book', price: 5 },\n  { name: 'Phone', price: 500 },\n  { name: 'Computer', price: 1000 }\n]",
            "Filtered (Cheap Items): [ { name: 'Album', price: 10 }, { name: 'Book', price: 5 } ]",
            "Mapped (Names): [ 'Bike', 'TV', 'Album', 'Book', 'Phone', 'Computer' ]",
            "Found Item 'Book': { name: 'Book', price: 5 }",
            "Total Price (Reduce): 1815",
            "forEach Output:",
            "- Bike: $100",
            "- TV: $200",
            "- Album: $10",
            "- Book: $5",
            "- Phone: $500",
            "- Computer: $1000",
        ];
        assert_eq!(rt.console.captured(), expected);
    }

    #[test]
    fn greet_uses_its_receiver() {
        let mut rt = Runtime::new(Console::capture());
        let user = Object::from_entries([("name", "Ada")]);
        user.set("greet", greet());
        user.call_method(&mut rt, "greet", &[]).unwrap();
        assert_eq!(rt.console.captured(), ["Hello, I am Ada"]);
    }

    #[test]
    fn source_items_survive_transforms() {
        let mut rt = Runtime::new(Console::capture());
        array_methods(&mut rt).unwrap();
        let lines = rt.console.take_captured();
        assert!(lines[1].starts_with("Original Items: ["));
        assert!(lines.iter().any(|l| l == "- Computer: $1000"));
    }
}
