//! `.valtourrc` configuration file parser.
//!
//! | Directive | Action |
//! |-----------|--------|
//! | `/set <name>=<value>` or `/set <name> <value>` | set a setting |
//! | Lines starting with `;` | comment, ignored |
//! | Any other line | silently skipped |
//!
//! Recognised settings:
//!
//! | Name | Value |
//! |------|-------|
//! | `walkthroughs` | comma-separated walkthrough names, or `all` |
//! | `log` | a `tracing` filter directive, e.g. `debug` or `valtour=trace` |
//! | `banner` | `0`/`1` (also `off`/`on`, `false`/`true`) |

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::walkthrough::{parse_selection, Walkthrough};

// ── Public API ────────────────────────────────────────────────────────────────

/// A non-fatal error encountered while loading a config file.
#[derive(Debug)]
pub struct ConfigError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Settings read from an rc file.  `None` means "not set here".
#[derive(Debug, Default)]
pub struct Config {
    pub walkthroughs: Option<Vec<Walkthrough>>,
    pub log: Option<String>,
    pub banner: Option<bool>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an rc string.
    ///
    /// Returns the config and a list of any errors on recognised lines.  A
    /// later `/set` of the same name replaces an earlier one.
    pub fn load_str(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Config::new();
        let mut errors = Vec::new();

        for (i, raw) in s.lines().enumerate() {
            let lineno = i + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let Some(rest) = line.strip_prefix('/') else { continue };

            let (cmd, args_str) = rest
                .split_once(|c: char| c.is_ascii_whitespace())
                .unwrap_or((rest, ""));

            if cmd == "set" {
                let tokens = split_args(args_str.trim());
                if let Err(message) = parse_set(&tokens).and_then(|(n, v)| config.apply(&n, &v)) {
                    errors.push(ConfigError { line: lineno, message });
                }
            }
        }

        (config, errors)
    }

    /// Read and parse an rc file from disk.
    pub fn load_file(path: &Path) -> std::io::Result<(Self, Vec<ConfigError>)> {
        let s = std::fs::read_to_string(path)?;
        Ok(Self::load_str(&s))
    }

    fn apply(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name {
            "walkthroughs" => {
                let names = value.split(',').map(str::trim).filter(|n| !n.is_empty());
                self.walkthroughs = Some(parse_selection(names)?);
            }
            "log" => {
                EnvFilter::try_new(value).map_err(|e| format!("log: {e}"))?;
                self.log = Some(value.to_owned());
            }
            "banner" => self.banner = Some(parse_flag(value)?),
            _ => return Err(format!("unknown setting '{name}'")),
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        _ => Err(format!("banner: expected 0 or 1, got '{value}'")),
    }
}

// ── Argument tokenizer ────────────────────────────────────────────────────────

/// Split `s` into whitespace-delimited tokens, honouring double-quoted strings
/// and `\"` escapes within them.
fn split_args(s: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    cur.push(escaped);
                }
            }
            c if c.is_ascii_whitespace() && !in_quotes => {
                if !cur.is_empty() {
                    args.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if !cur.is_empty() {
        args.push(cur);
    }
    args
}

// ── /set ─────────────────────────────────────────────────────────────────────

/// Parse `/set <name>=<value>` or `/set <name> <value>` into a name/value pair.
fn parse_set(tokens: &[String]) -> Result<(String, String), String> {
    let Some(first) = tokens.first() else {
        return Err("/set: requires an argument".into());
    };

    let (name, value) = if let Some((name, value)) = first.split_once('=') {
        let value = std::iter::once(value)
            .chain(tokens[1..].iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        (name.to_owned(), value)
    } else if tokens.len() >= 2 {
        (first.clone(), tokens[1..].join(" "))
    } else {
        return Err(format!("/set: missing value for '{first}'"));
    };

    if name.is_empty() {
        return Err("/set: setting name cannot be empty".into());
    }
    Ok((name, value))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
