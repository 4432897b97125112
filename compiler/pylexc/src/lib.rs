//! Pylex command-line driver.
//!
//! Everything the `pylex` binary does lives here so it can be driven from
//! tests with in-memory readers and writers:
//! - [`load`] reads a source file into memory
//! - [`views`] renders a token list in the four human-readable forms
//! - [`session`] runs the prompt-and-tokenize loop
//! - [`args`] parses the command line

pub mod args;
pub mod load;
pub mod session;
pub mod views;

pub use args::{parse_args, ArgsError, Command};
pub use load::{load_source, LoadError};
pub use session::{Outcome, Session, SessionConfig};
pub use views::{write_errors, write_layout, write_lexemes, write_source, ViewSet};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Only installs a subscriber if `RUST_LOG` is set, e.g.
/// `RUST_LOG=pylex_lexer=trace pylex file.py`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
