use std::io::IsTerminal;
use std::process::ExitCode;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use valtour::cli::{self, CliArgs, ConfigFile, USAGE};
use valtour::config::Config;
use valtour::script::{Console, Runtime};
use valtour::walkthrough::Walkthrough;

const DEFAULT_LOG: &str = "warn";

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("valtour: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    // ── Load user config ──────────────────────────────────────────────────────
    // Logging is not up yet, so config problems go straight to stderr.
    let config = load_config(&args);

    init_logging(&args, &config);
    debug!(?args, "parsed command line");

    // ── Startup banner (stderr, so stdout carries only walkthrough output) ──
    if !args.quiet && config.banner.unwrap_or(true) {
        let ver = env!("CARGO_PKG_VERSION");
        eprintln!("valtour version {ver}");
    }

    // Command line over rc file over defaults.
    let selected: Vec<Walkthrough> = if !args.walkthroughs.is_empty() {
        args.walkthroughs
    } else {
        config
            .walkthroughs
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| Walkthrough::all().to_vec())
    };

    let mut rt = Runtime::new(Console::stdout());
    for w in selected {
        let result = w.run(&mut rt);
        if let Some(e) = rt.console.take_error() {
            eprintln!("valtour: cannot write output: {e}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = result {
            eprintln!("valtour: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn load_config(args: &CliArgs) -> Config {
    let path = match &args.config {
        ConfigFile::Skip => return Config::new(),
        ConfigFile::Explicit(path) => path.clone(),
        ConfigFile::Search => match cli::find_user_config() {
            Some(path) => path,
            None => return Config::new(),
        },
    };
    match Config::load_file(&path) {
        Ok((config, errors)) => {
            for e in errors {
                eprintln!("valtour: warning: {}: {e}", path.display());
            }
            config
        }
        Err(e) => {
            eprintln!("valtour: warning: {}: {e}", path.display());
            Config::new()
        }
    }
}

/// `VALTOUR_LOG` beats `-d`, which beats the rc file's `log` setting.
fn init_logging(args: &CliArgs, config: &Config) {
    let directive = if args.debug {
        "debug"
    } else {
        config.log.as_deref().unwrap_or(DEFAULT_LOG)
    };
    let filter = EnvFilter::try_from_env("VALTOUR_LOG").unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(args.debug)
        .init();

    if args.debug && config.log.is_some() {
        warn!("-d overrides the configured log filter");
    }
}
