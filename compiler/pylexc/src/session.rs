//! The prompt-and-tokenize loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use pylex_lexer::{Lexer, PatternTable};
use tracing::{debug, warn};

use crate::load::load_source;
use crate::views::ViewSet;

/// How a session behaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Views printed for each file.
    pub views: ViewSet,
    /// Written before each file name is read.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            views: ViewSet::default(),
            prompt: "Input file name: ".to_string(),
        }
    }
}

/// Result of handling one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Tokenized without diagnostic tokens.
    Clean,
    /// Tokenized, but the token list contains diagnostics.
    HasErrors,
    /// The file could not be loaded; the failure went to the error sink.
    LoadFailed,
}

impl Outcome {
    pub fn is_clean(self) -> bool {
        self == Outcome::Clean
    }
}

/// Reads file names from `input`, tokenizes each file and writes the
/// selected views to `out`. Load failures go to `err` and never end the
/// session; end of input does.
pub struct Session<'t, R, W, E> {
    lexer: Lexer<'t>,
    config: SessionConfig,
    input: R,
    out: W,
    err: E,
}

impl<'t, R: BufRead, W: Write, E: Write> Session<'t, R, W, E> {
    pub fn new(table: &'t PatternTable, config: SessionConfig, input: R, out: W, err: E) -> Self {
        Session {
            lexer: Lexer::new(table),
            config,
            input,
            out,
            err,
        }
    }

    /// Prompt for file names until end of input.
    ///
    /// Blank lines are ignored. Only failures writing to the sinks or
    /// reading the input are returned as errors.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            self.out.write_all(self.config.prompt.as_bytes())?;
            self.out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input, session finished");
                return Ok(());
            }
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            self.process_file(Path::new(name))?;
        }
    }

    /// Load, tokenize and render one file.
    pub fn process_file(&mut self, path: &Path) -> io::Result<Outcome> {
        let source = match load_source(path) {
            Ok(source) => source,
            Err(e) => {
                warn!(error = %e, "load failed");
                writeln!(self.err, "error: {e}")?;
                return Ok(Outcome::LoadFailed);
            }
        };

        let tokens = self.lexer.tokenize(&source);
        self.config.views.write(&mut self.out, &source, &tokens)?;
        self.out.flush()?;

        Ok(if tokens.has_errors() {
            Outcome::HasErrors
        } else {
            Outcome::Clean
        })
    }

    /// Give back the sinks, e.g. to inspect captured output.
    pub fn into_sinks(self) -> (W, E) {
        (self.out, self.err)
    }
}
