//! Command-line argument parsing.
//!
//! Usage:
//!   valtour [-q] [-d] [-f[<file>]] [<walkthrough>...]

use std::path::PathBuf;

use directories::BaseDirs;

use crate::walkthrough::{parse_selection, Walkthrough};

pub const USAGE: &str = "Usage: valtour [-q] [-d] [-f[<file>]] [primitives|non-primitives|all ...]";

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Suppress the startup banner (`-q`).
    pub quiet: bool,
    /// Debug logging (`-d`).
    pub debug: bool,
    /// Which rc file to load.
    pub config: ConfigFile,
    /// Walkthroughs named on the command line; empty when none were given.
    pub walkthroughs: Vec<Walkthrough>,
}

/// How to choose the user config file.
#[derive(Debug, Default)]
pub enum ConfigFile {
    /// Search `~/.valtourrc`, `~/valtourrc`, `./.valtourrc`, `./valtourrc`
    /// in order (default).
    #[default]
    Search,
    /// `-f` with no file argument: skip user config.
    Skip,
    /// `-f<file>`: load this specific file.
    Explicit(PathBuf),
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(raw.get(1..).unwrap_or_default())
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut positional: Vec<String> = Vec::new();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        // `--` ends flag processing.
        if arg == "--" {
            i += 1;
            positional.extend(argv[i..].iter().cloned());
            break;
        }

        if !arg.starts_with('-') || arg == "-" {
            positional.push(arg.to_owned());
            i += 1;
            continue;
        }

        let chars: Vec<char> = arg[1..].chars().collect();
        let mut j = 0;
        while j < chars.len() {
            match chars[j] {
                'd' => args.debug = true,
                'q' => args.quiet = true,

                // -f[<file>]
                'f' => {
                    if j + 1 < chars.len() {
                        let file: String = chars[j + 1..].iter().collect();
                        args.config = ConfigFile::Explicit(PathBuf::from(file));
                        j = chars.len();
                    } else if i + 1 < argv.len() && looks_like_file(&argv[i + 1]) {
                        i += 1;
                        args.config = ConfigFile::Explicit(PathBuf::from(&argv[i]));
                    } else {
                        args.config = ConfigFile::Skip;
                    }
                }

                c => return Err(format!("unknown option: -{c}")),
            }
            j += 1;
        }
        i += 1;
    }

    args.walkthroughs = parse_selection(positional.iter().map(String::as_str))?;
    Ok(args)
}

/// A separate `-f <file>` argument: not a flag and not a walkthrough name.
fn looks_like_file(arg: &str) -> bool {
    !arg.starts_with('-') && !arg.eq_ignore_ascii_case("all") && Walkthrough::from_name(arg).is_none()
}

// ── Path helpers ──────────────────────────────────────────────────────────────

/// Search for the user config file in the standard locations.
/// Returns the first path that exists, or `None`.
pub fn find_user_config() -> Option<PathBuf> {
    config_candidates().into_iter().find(|p| p.is_file())
}

fn config_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dirs) = BaseDirs::new() {
        let home = dirs.home_dir();
        paths.push(home.join(".valtourrc"));
        paths.push(home.join("valtourrc"));
    }
    paths.push(PathBuf::from("./.valtourrc"));
    paths.push(PathBuf::from("./valtourrc"));
    paths
}

// ── Tests ─────────────────────────────────────────────────────────────────────
