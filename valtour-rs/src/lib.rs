//! A guided tour of the value categories of a small dynamically typed
//! scripting language.
//!
//! [`script`] holds the value model and its coercion, equality and
//! rendering rules; [`walkthrough`] holds the two demonstration programs
//! written against it.  [`cli`] and [`config`] back the `valtour` binary.

pub mod cli;
pub mod config;
pub mod script;
pub mod walkthrough;
