//! Numeric text conversions.
//!
//! Numbers are IEEE-754 doubles.  Rendering follows the shortest
//! round-trip digit string, switching to exponent notation outside
//! `[1e-6, 1e21)`.  Parsing accepts the string-to-number grammar: optional
//! surrounding whitespace, signed decimals, `Infinity`, and unsigned
//! `0x`/`0o`/`0b` integers.

use std::sync::LazyLock;

use regex::Regex;

/// Largest integer `n` such that `n` and `n + 1` are both exactly representable.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
pub const EPSILON: f64 = f64::EPSILON;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern")
});

/// Render a number the way string conversion does.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    if x == 0.0 {
        return "0".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "3.0000000000000004e-1".
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e_sign = if n - 1 >= 0 { '+' } else { '-' };
        let e_abs = (n - 1).abs();
        if k == 1 {
            format!("{digits}e{e_sign}{e_abs}")
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{first}.{rest}e{e_sign}{e_abs}")
        }
    };
    format!("{sign}{body}")
}

/// Convert text to a number; anything outside the grammar is `NaN`.
pub fn string_to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(v) = parse_prefixed_integer(t) {
        return v;
    }
    if DECIMAL.is_match(t) {
        return t.parse().unwrap_or(f64::NAN);
    }
    f64::NAN
}

/// Parse a source-style numeric literal: `0b1010`, `0o12`, `0xA`, or decimal.
pub fn parse_radix_literal(s: &str) -> Option<f64> {
    let t = s.trim();
    if let Some(v) = parse_prefixed_integer(t) {
        return Some(v);
    }
    if DECIMAL.is_match(t) {
        return t.parse().ok();
    }
    None
}

/// Split off a `0x`/`0o`/`0b` prefix, returning the radix and the digits.
pub(crate) fn split_radix_prefix(t: &str) -> Option<(u32, &str)> {
    let bytes = t.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &t[2..]))
}

fn parse_prefixed_integer(t: &str) -> Option<f64> {
    let (radix, digits) = split_radix_prefix(t)?;
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        acc = acc * radix as f64 + d as f64;
    }
    Some(acc)
}

/// `true` if `a` and `b` differ by less than the machine epsilon.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// `true` for finite numbers with no fractional part.
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && x.trunc() == x
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_specials() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_plain() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(19.99), "19.99");
        assert_eq!(format_number(-7.5), "-7.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(MAX_SAFE_INTEGER), "9007199254740991");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn format_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
    }

    #[test]
    fn parse_strings() {
        assert_eq!(string_to_number("  42 "), 42.0);
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("text").is_nan());
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("-0x10").is_nan());
        assert!(string_to_number("inf").is_nan());
    }

    #[test]
    fn radix_literals() {
        assert_eq!(parse_radix_literal("0b1010"), Some(10.0));
        assert_eq!(parse_radix_literal("0o12"), Some(10.0));
        assert_eq!(parse_radix_literal("0xA"), Some(10.0));
        assert_eq!(parse_radix_literal("10"), Some(10.0));
        assert_eq!(parse_radix_literal("0b102"), None);
    }

    #[test]
    fn float_sum_is_close_not_equal() {
        let sum = 0.1 + 0.2;
        assert!(sum != 0.3);
        assert!(approx_eq(sum, 0.3));
    }

    #[test]
    fn integral() {
        assert!(is_integral(3.0));
        assert!(!is_integral(3.5));
        assert!(!is_integral(f64::INFINITY));
        assert!(!is_integral(f64::NAN));
    }
}
