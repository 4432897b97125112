//! Pylex CLI
//!
//! Tokenizes Python-like source files and prints the token stream.

use std::io;
use std::process::ExitCode;

use pylex_lexer::PatternTable;
use pylexc::args::USAGE;
use pylexc::{init_tracing, parse_args, Command, Session, SessionConfig};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let table = match PatternTable::standard() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("internal error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Interactive { views } => {
            let config = SessionConfig {
                views,
                ..SessionConfig::default()
            };
            let stdin = io::stdin();
            Session::new(&table, config, stdin.lock(), io::stdout(), io::stderr())
                .run()
                .map(|()| true)
        }
        Command::Batch { views, files } => {
            let config = SessionConfig {
                views,
                prompt: String::new(),
            };
            let mut session = Session::new(&table, config, io::empty(), io::stdout(), io::stderr());
            files.iter().try_fold(true, |clean, path| {
                let outcome = session.process_file(path)?;
                Ok::<_, io::Error>(clean && outcome.is_clean())
            })
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
