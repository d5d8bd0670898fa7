//! adpage - Marketing landing page and sign-up form in the terminal

use adpage::app::{App, Page};
use adpage::config::Config;
use adpage::validate::FieldKind;
use adpage::{paths, tui};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Marketing landing page and sign-up form in the terminal
#[derive(Parser)]
#[command(name = "adpage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page shown on start-up
    #[arg(long, value_enum, default_value_t = Page::Home)]
    page: Page,

    /// Configuration file (overrides `ADPAGE_CONFIG_PATH`)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one field validator; exits 1 and prints the warning on rejection
    Check {
        /// Field whose rules apply (name, email or password)
        field: FieldKind,
        /// Value to validate
        value: String,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {e}");
            Cli::command().print_help()?;
            std::process::exit(2);
        }
    };

    match cli.command {
        Some(Commands::Check { field, value }) => {
            if !cmd_check(field, &value) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Config) => {
            let config = load_config(cli.config.as_deref())?;
            println!("{}", config.to_json()?);
            Ok(())
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            let mut app = App::new(config, cli.page);
            tui::run(&mut app)?;

            if let Some(submission) = app.last_submission {
                println!("Signed up {} <{}>", submission.full_name, submission.email);
            }
            Ok(())
        }
    }
}

/// Log to the temp dir - tail with: tail -f "$TMPDIR/adpage.log"
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(dir, "adpage.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Returns whether `value` is accepted
fn cmd_check(field: FieldKind, value: &str) -> bool {
    if field.accepts(value) {
        println!("{field}: ok");
        true
    } else {
        println!("{field}: {}", field.warning());
        false
    }
}
