//! urlclean library crate
//!
//! This crate provides the core functionality for the `urlclean` CLI. It is
//! organized into small modules: `cleaner` (the URL transform), `policy`
//! (the fixed tracking-parameter set and name patterns), `clipboard`
//! (cross-platform clipboard access), `popup` (the "clean current URL" and
//! "clean from clipboard" actions) and `url_list` (newline-delimited URL
//! files). The binary `src/main.rs` calls `urlclean_lib::run()` to execute
//! the CLI.
//!
//! Public API
//!
//! - `cleaner::clean` / `cleaner::clean_batch` — strip tracking parameters.
//! - `run()` — CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod cleaner;
pub mod clipboard;
pub mod policy;
pub mod popup;
pub mod url_list;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, error, info};

use crate::cleaner::clean_batch;
use crate::clipboard::{SystemClipboard, copy_to_clipboard};
use crate::popup::{Notice, clean_from_clipboard, clean_tab_url};
use crate::url_list::{read_url_file, write_url_file};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long = "debug", global = true, action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clean URLs given as arguments and/or read from a file
    Clean {
        /// URLs to clean
        urls: Vec<String>,

        /// File containing URLs (one per line)
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,

        /// Write cleaned URLs to this file instead of printing a summary
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Copy the result to the clipboard
        #[arg(long = "copy", action = ArgAction::SetTrue)]
        copy: bool,
    },
    /// Clean the active tab's URL and copy it if anything was stripped
    Tab {
        /// URL of the current tab
        url: String,
    },
    /// Clean the text on the clipboard in place
    Paste,
}

/// Run the urlclean CLI.
///
/// This function is the high-level entrypoint used by the `urlclean` binary.
/// It parses CLI arguments, sets up logging and dispatches to module
/// functions. Errors are logged to stderr and turn into a non-zero exit code.
///
/// Behavior summary:
/// - `clean` — clean URLs from arguments and `--file`, then either write
///   them to `--output` or print an original/cleaned summary. `--copy` puts
///   the result on the clipboard.
/// - `tab` — the popup's "clean current URL" action.
/// - `paste` — the popup's "clean from clipboard" action.
///
/// Example:
///
/// ```no_run
/// let _ = urlclean_lib::run(); // called from src/main.rs
/// ```
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Same as [`run`], but with an explicit argument list (the first item is
/// the program name).
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.debug);
    debug!("parsed arguments: {cli:?}");

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    // A second init (tests calling `run_from` repeatedly) is harmless.
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_secs()
        .try_init();
}

fn dispatch(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Clean {
            urls,
            file,
            output,
            copy,
        } => {
            run_clean(urls, file, output, copy)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Tab { url } => {
            let notice =
                clean_tab_url(&url, SystemClipboard::new).context("copying cleaned URL")?;
            println!("{}", notice);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Paste => {
            let notice = match SystemClipboard::new() {
                Ok(mut clipboard) => clean_from_clipboard(&mut clipboard),
                Err(e) => {
                    error!("{e}");
                    Notice::ClipboardError
                }
            };
            println!("{}", notice);
            Ok(if notice == Notice::ClipboardError {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn run_clean(
    mut urls: Vec<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    copy: bool,
) -> Result<()> {
    if let Some(path) = &file {
        let from_file = read_url_file(path)
            .with_context(|| format!("reading URL file {}", path.display()))?;
        info!("loaded {} URL(s) from {}", from_file.len(), path.display());
        urls.extend(from_file);
    }

    if urls.is_empty() {
        bail!("no URLs to clean: pass them as arguments or with --file");
    }

    let cleaned = clean_batch(&urls);

    if let Some(path) = &output {
        write_url_file(path, &cleaned)
            .with_context(|| format!("writing output file {}", path.display()))?;
        info!("wrote {} cleaned URL(s) to {}", cleaned.len(), path.display());
    } else {
        print!("{}", summary(&urls, &cleaned));
    }

    if copy {
        copy_to_clipboard(&cleaned.join("\n")).context("copying result to clipboard")?;
        println!("Result copied to clipboard!");
    }

    Ok(())
}

/// Human-readable before/after report, one block per URL.
fn summary(urls: &[String], cleaned: &[String]) -> String {
    let mut out = String::new();
    for (original, cleaned) in urls.iter().zip(cleaned) {
        if original != cleaned {
            out.push_str(&format!("Original: {}\n", original));
            out.push_str(&format!("Cleaned:  {}\n\n", cleaned));
        } else {
            out.push_str(&format!("No tracking parameters found: {}\n\n", original));
        }
    }
    out
}
