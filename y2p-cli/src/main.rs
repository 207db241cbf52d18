//! Command-line interface for y2p
//! This binary converts a document written in the y2p markup subset into Apple PLIST XML.
//!
//! Usage:
//!   y2p `<path>`                        - Print the PLIST document
//!   y2p --debug `<path>`                - Print the parse trace instead of the document
//!   y2p `<path>` --output `<file>`      - Write the result to a file
//!   y2p `<path>` --config `<file>`      - Layer a configuration file over the defaults

mod cli;

use clap::ArgMatches;
use std::io::Write;
use std::process;
use y2p_config::{Loader, Y2pConfig, LOCAL_CONFIG_FILE};
use y2p_parser::y2p::loader::{DocumentLoader, LoaderError};
use y2p_parser::y2p::pipeline::Mode;

fn main() {
    let matches = cli::cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    setup_tracing(&config.logging.filter);

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    handle_convert_command(path, matches.get_one::<String>("output"), &config);
}

/// Defaults, then `./y2p.toml`, then `--config`, then flags
fn load_config(matches: &ArgMatches) -> Result<Y2pConfig, y2p_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("debug") {
        loader = loader.set_override("convert.debug", true)?;
    }
    loader.build()
}

fn setup_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("Y2P_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handle the conversion
fn handle_convert_command(path: &str, output: Option<&String>, config: &Y2pConfig) {
    let mode = if config.convert.debug {
        Mode::Trace
    } else {
        Mode::Plist
    };

    let result = DocumentLoader::from_path(path).and_then(|loader| loader.execute(mode));
    let mut text = match result {
        Ok(output) => output.into_text(),
        Err(e @ LoaderError::SourceUnreadable { .. }) => {
            tracing::debug!(error = ?e, "source unreadable");
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if config.output.trailing_newline && !text.is_empty() {
        text.push('\n');
    }

    let written = match output {
        Some(target) => std::fs::write(target, &text),
        None => std::io::stdout().write_all(text.as_bytes()),
    };
    if let Err(e) = written {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}
