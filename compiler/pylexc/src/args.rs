//! Command-line parsing.
//!
//! Flags are few and simple, so they are matched by hand.

use std::path::PathBuf;

use thiserror::Error;

use crate::views::ViewSet;

pub const USAGE: &str = "\
Usage: pylex [--view=<view>]... [FILE]...

With no FILE, prompt for file names on standard input until end of input.

Options:
  --view=<view>   Print only the given view; repeat to select several.
                  One of: source, layout, tokens, errors, all (default: all)
  -h, --help      Print this help";

/// What the binary should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Prompt for file names.
    Interactive { views: ViewSet },
    /// Tokenize the named files and exit.
    Batch { views: ViewSet, files: Vec<PathBuf> },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("unknown view '{0}' (expected source, layout, tokens, errors or all)")]
    UnknownView(String),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, ArgsError> {
    let mut views = ViewSet::empty();
    let mut files = Vec::new();
    let mut only_files = false;

    for arg in args.iter().map(AsRef::as_ref) {
        if only_files || !arg.starts_with('-') || arg == "-" {
            files.push(PathBuf::from(arg));
        } else if arg == "--" {
            only_files = true;
        } else if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(name) = arg.strip_prefix("--view=") {
            let view =
                ViewSet::parse(name).ok_or_else(|| ArgsError::UnknownView(name.to_string()))?;
            views |= view;
        } else {
            return Err(ArgsError::UnknownFlag(arg.to_string()));
        }
    }

    if views.is_empty() {
        views = ViewSet::default();
    }
    Ok(if files.is_empty() {
        Command::Interactive { views }
    } else {
        Command::Batch { views, files }
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
