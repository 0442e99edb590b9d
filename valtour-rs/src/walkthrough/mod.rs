//! The two walkthroughs and a small registry for selecting them by name.
//!
//! Each walkthrough is a straight-line sequence of statements that prints
//! through the [`Runtime`]'s console.  They share no state and can run in
//! any order or alone.

pub mod non_primitives;
pub mod primitives;

use tracing::debug;

use crate::script::{Result, Runtime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walkthrough {
    Primitives,
    NonPrimitives,
}

impl Walkthrough {
    /// Every walkthrough, in the order `all` runs them.
    pub fn all() -> [Walkthrough; 2] {
        [Walkthrough::Primitives, Walkthrough::NonPrimitives]
    }

    pub fn name(self) -> &'static str {
        match self {
            Walkthrough::Primitives => "primitives",
            Walkthrough::NonPrimitives => "non-primitives",
        }
    }

    /// Look up a walkthrough by name.  `_` and `-` are interchangeable.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "primitives" | "primitive" => Some(Walkthrough::Primitives),
            "non-primitives" | "non-primitive" | "nonprimitives" => Some(Walkthrough::NonPrimitives),
            _ => None,
        }
    }

    pub fn run(self, rt: &mut Runtime) -> Result<()> {
        debug!(walkthrough = self.name(), "starting");
        match self {
            Walkthrough::Primitives => primitives::run(rt),
            Walkthrough::NonPrimitives => non_primitives::run(rt),
        }?;
        debug!(walkthrough = self.name(), "finished");
        Ok(())
    }
}

/// Parse a list of walkthrough names; `all` expands to every walkthrough.
/// Duplicates are dropped, first occurrence wins.
pub fn parse_selection<'a, I>(names: I) -> std::result::Result<Vec<Walkthrough>, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for name in names {
        let picked: Vec<Walkthrough> = if name.trim().eq_ignore_ascii_case("all") {
            Walkthrough::all().to_vec()
        } else {
            vec![Walkthrough::from_name(name).ok_or_else(|| format!("unknown walkthrough: {name}"))?]
        };
        for w in picked {
            if !out.contains(&w) {
                out.push(w);
            }
        }
    }
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for w in Walkthrough::all() {
            assert_eq!(Walkthrough::from_name(w.name()), Some(w));
        }
        assert_eq!(Walkthrough::from_name("non_primitives"), Some(Walkthrough::NonPrimitives));
        assert_eq!(Walkthrough::from_name("objects"), None);
    }

    #[test]
    fn selection() {
        assert_eq!(parse_selection(["all"]).unwrap(), Walkthrough::all());
        assert_eq!(
            parse_selection(["non-primitives", "primitives", "non-primitives"]).unwrap(),
            [Walkthrough::NonPrimitives, Walkthrough::Primitives]
        );
        assert!(parse_selection(["bogus"]).is_err());
        assert!(parse_selection([]).unwrap().is_empty());
    }
}
