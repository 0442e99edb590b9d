//! Execution context and console output.
//!
//! Output is written one logical line at a time, in the order statements
//! run.  A writer sink writes each line as soon as it is logged; the
//! capture sink keeps them for tests.  The first write failure is kept on
//! the console and later lines are dropped, so the caller can stop early.

use std::fmt;
use std::io::{self, Write};

use super::inspect::inspect;
use super::value::Value;

enum Sink {
    Writer { out: Box<dyn Write>, error: Option<io::Error> },
    Capture(Vec<String>),
}

/// Where `console.log` output goes.
pub struct Console {
    sink: Sink,
}

impl Console {
    pub fn stdout() -> Self {
        Console::writer(io::stdout())
    }

    /// Write lines to `out`, flushing after each one.
    pub fn writer(out: impl Write + 'static) -> Self {
        Console { sink: Sink::Writer { out: Box::new(out), error: None } }
    }

    pub fn capture() -> Self {
        Console { sink: Sink::Capture(Vec::new()) }
    }

    /// Render `args` (strings raw, everything else inspected), separated by
    /// single spaces, as one line.
    pub fn log(&mut self, args: &[Value]) {
        let text = args
            .iter()
            .map(|v| match v {
                Value::Str(s) => s.clone(),
                other => inspect(other),
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.line(text);
    }

    /// Write pre-rendered text as one line.  Embedded newlines are kept.
    pub fn line(&mut self, text: impl Into<String>) {
        let text = text.into();
        match &mut self.sink {
            Sink::Writer { error: Some(_), .. } => {}
            Sink::Writer { out, error } => {
                if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
                    *error = Some(e);
                }
            }
            Sink::Capture(lines) => lines.push(text),
        }
    }

    /// The first write failure, if any.  Clears it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        match &mut self.sink {
            Sink::Writer { error, .. } => error.take(),
            Sink::Capture(_) => None,
        }
    }

    /// Captured lines; empty for the stdout sink.
    pub fn captured(&self) -> &[String] {
        match &self.sink {
            Sink::Capture(lines) => lines,
            Sink::Writer { .. } => &[],
        }
    }

    pub fn take_captured(&mut self) -> Vec<String> {
        match &mut self.sink {
            Sink::Capture(lines) => std::mem::take(lines),
            Sink::Writer { .. } => Vec::new(),
        }
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sink {
            Sink::Writer { error, .. } => write!(f, "Console(writer, error: {error:?})"),
            Sink::Capture(lines) => write!(f, "Console(capture, {} lines)", lines.len()),
        }
    }
}

/// State threaded through every call: currently just the console.
#[derive(Debug)]
pub struct Runtime {
    pub console: Console,
}

impl Runtime {
    pub fn new(console: Console) -> Self {
        Runtime { console }
    }

    /// `console.log(...args)`.
    pub fn log(&mut self, args: &[Value]) {
        self.console.log(args);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
