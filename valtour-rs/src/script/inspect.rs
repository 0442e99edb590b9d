//! Console rendering of values.
//!
//! Structures are laid out on one line when they fit within
//! [`BREAK_LENGTH`] columns, otherwise one entry per line with two spaces
//! of indentation per level.  Arrays of more than six short entries are
//! packed into aligned columns first.  Structures nested more than
//! [`MAX_DEPTH`] levels below the top collapse to `[Object]` / `[Array]`,
//! and a structure that contains itself renders `[Circular *n]`.

use std::sync::LazyLock;

use regex::Regex;

use super::function::Function;
use super::number::format_number;
use super::object::PropertyKey;
use super::value::Value;

pub const BREAK_LENGTH: usize = 80;
pub const MAX_DEPTH: usize = 2;

/// Upper bound on grouped columns (`compact * 4` with a compactness of 3).
const MAX_GROUP_COLUMNS: usize = 12;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z_0-9]*$").expect("identifier pattern"));

/// Render a value as it appears inside a console line.  Strings are quoted.
pub fn inspect(v: &Value) -> String {
    Ctx::default().format_value(v, 0)
}

#[derive(Default)]
struct Ctx {
    /// Addresses of the structures currently being rendered.
    seen: Vec<usize>,
    /// Addresses found to be circular, numbered by position + 1.
    circular: Vec<usize>,
    indentation: usize,
}

enum Braces {
    Object,
    Array,
}

impl Ctx {
    fn format_value(&mut self, v: &Value, depth: usize) -> String {
        match v {
            Value::Undefined => "undefined".to_owned(),
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Number(x) => {
                if *x == 0.0 && x.is_sign_negative() {
                    "-0".to_owned()
                } else {
                    format_number(*x)
                }
            }
            Value::BigInt(b) => format!("{b}n"),
            Value::Str(s) => quote(s),
            Value::Symbol(s) => s.to_string(),
            Value::Function(f) => function_label(f),
            Value::Object(o) => {
                let entries = o.all_entries();
                if entries.is_empty() {
                    return "{}".to_owned();
                }
                self.format_structure(o.addr(), depth, Braces::Object, None, |ctx| {
                    // String keys first, then symbol keys, each in insertion order.
                    let (strs, syms): (Vec<_>, Vec<_>) =
                        entries.iter().partition(|(k, _)| matches!(k, PropertyKey::Str(_)));
                    strs.into_iter()
                        .chain(syms)
                        .map(|(k, v)| format!("{}: {}", format_key(k), ctx.format_value(v, depth + 1)))
                        .collect()
                })
            }
            Value::Array(a) => {
                let values = a.values();
                if values.is_empty() {
                    return "[]".to_owned();
                }
                let numeric = values
                    .iter()
                    .all(|v| matches!(v, Value::Number(_) | Value::BigInt(_)));
                self.format_structure(a.addr(), depth, Braces::Array, Some(numeric), |ctx| {
                    values.iter().map(|v| ctx.format_value(v, depth + 1)).collect()
                })
            }
        }
    }

    /// `grouping` is `Some(all_numeric)` for arrays, whose long entry lists
    /// may be packed into columns.
    fn format_structure<F>(
        &mut self,
        addr: usize,
        depth: usize,
        braces: Braces,
        grouping: Option<bool>,
        entries: F,
    ) -> String
    where
        F: FnOnce(&mut Ctx) -> Vec<String>,
    {
        if self.seen.contains(&addr) {
            let idx = match self.circular.iter().position(|a| *a == addr) {
                Some(i) => i + 1,
                None => {
                    self.circular.push(addr);
                    self.circular.len()
                }
            };
            return format!("[Circular *{idx}]");
        }
        if depth > MAX_DEPTH {
            return match braces {
                Braces::Object => "[Object]",
                Braces::Array => "[Array]",
            }
            .to_owned();
        }

        self.seen.push(addr);
        self.indentation += 2;
        let output = entries(self);
        self.indentation -= 2;
        self.seen.pop();

        let (open, close) = match braces {
            Braces::Object => ("{", "}"),
            Braces::Array => ("[", "]"),
        };
        let entry_count = output.len();
        let output = match grouping {
            Some(numeric) if entry_count > 6 => self.group_array_elements(output, numeric),
            _ => output,
        };
        let body = self.reduce_to_single_string(output, open, close, entry_count);
        match self.circular.iter().position(|a| *a == addr) {
            Some(i) => format!("<ref *{}> {body}", i + 1),
            None => body,
        }
    }

    /// Single line when the entries fit, otherwise one entry per line.
    /// Grouped output (fewer rows than entries) always goes multi-line.
    fn reduce_to_single_string(
        &self,
        output: Vec<String>,
        open: &str,
        close: &str,
        entry_count: usize,
    ) -> String {
        let start = output.len() + self.indentation + open.len() + 10;
        if entry_count == output.len() && self.is_below_break_length(&output, start) {
            let joined = output.join(", ");
            if !joined.contains('\n') {
                return format!("{open} {joined} {close}");
            }
        }
        let indentation = format!("\n{}", " ".repeat(self.indentation));
        format!(
            "{open}{indentation}  {}{indentation}{close}",
            output.join(&format!(",{indentation}  "))
        )
    }

    fn is_below_break_length(&self, output: &[String], start: usize) -> bool {
        let mut total = output.len() + start;
        if total + output.len() > BREAK_LENGTH {
            return false;
        }
        for entry in output {
            total += entry.chars().count();
            if total > BREAK_LENGTH {
                return false;
            }
        }
        true
    }

    /// Pack many short array entries into aligned rows.  Numeric entries are
    /// right-aligned, everything else left-aligned.
    fn group_array_elements(&self, output: Vec<String>, numeric: bool) -> Vec<String> {
        const SEPARATOR_SPACE: usize = 2;
        let data_len: Vec<usize> = output.iter().map(|s| s.chars().count()).collect();
        let total_length: usize = data_len.iter().map(|l| l + SEPARATOR_SPACE).sum();
        let max_length = data_len.iter().copied().max().unwrap_or(0);
        let actual_max = max_length + SEPARATOR_SPACE;

        if actual_max * 3 + self.indentation >= BREAK_LENGTH
            || !(total_length as f64 / actual_max as f64 > 5.0 || max_length <= 6)
        {
            return output;
        }

        let approx_char_heights = 2.5;
        let average_bias = (actual_max as f64 - total_length as f64 / output.len() as f64).sqrt();
        let biased_max = (actual_max as f64 - 3.0 - average_bias).max(1.0);
        let columns = ((approx_char_heights * biased_max * output.len() as f64).sqrt() / biased_max)
            .round() as usize;
        let columns = columns
            .min((BREAK_LENGTH - self.indentation) / actual_max)
            .min(MAX_GROUP_COLUMNS);
        if columns <= 1 {
            return output;
        }

        let max_line_length: Vec<usize> = (0..columns)
            .map(|i| {
                let widest = (i..output.len()).step_by(columns).map(|j| data_len[j]).max().unwrap_or(0);
                widest + SEPARATOR_SPACE
            })
            .collect();

        let mut rows = Vec::new();
        for row_start in (0..output.len()).step_by(columns) {
            let row_end = (row_start + columns).min(output.len());
            let mut row = String::new();
            for j in row_start..row_end - 1 {
                let cell = format!("{}, ", output[j]);
                row.push_str(&pad(&cell, max_line_length[j - row_start], numeric));
            }
            let last = row_end - 1;
            if numeric {
                let width = max_line_length[last - row_start] - SEPARATOR_SPACE;
                row.push_str(&pad(&output[last], width, true));
            } else {
                row.push_str(&output[last]);
            }
            rows.push(row);
        }
        rows
    }
}

fn pad(s: &str, width: usize, left: bool) -> String {
    if left {
        format!("{s:>width$}")
    } else {
        format!("{s:<width$}")
    }
}

fn function_label(f: &Function) -> String {
    if f.is_anonymous() {
        "[Function (anonymous)]".to_owned()
    } else {
        format!("[Function: {}]", f.name())
    }
}

fn format_key(key: &PropertyKey) -> String {
    match key {
        PropertyKey::Symbol(s) => format!("[{s}]"),
        PropertyKey::Str(s) if IDENTIFIER.is_match(s) => s.clone(),
        PropertyKey::Str(s) => quote(s),
    }
}

/// Quote a string: single quotes unless the text contains one, then double
/// quotes, then backticks.
pub fn quote(s: &str) -> String {
    let q = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\\' => out.push_str("\\\\"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
