use super::*;
use pretty_assertions::assert_eq;

#[test]
fn no_arguments_is_interactive_with_all_views() {
    assert_eq!(
        parse_args::<&str>(&[]).unwrap(),
        Command::Interactive {
            views: ViewSet::all()
        }
    );
}

#[test]
fn files_select_batch_mode() {
    assert_eq!(
        parse_args(&["a.py", "b.py"]).unwrap(),
        Command::Batch {
            views: ViewSet::all(),
            files: vec![PathBuf::from("a.py"), PathBuf::from("b.py")],
        }
    );
}

#[test]
fn view_flags_accumulate() {
    assert_eq!(
        parse_args(&["--view=tokens", "x.py", "--view=errors"]).unwrap(),
        Command::Batch {
            views: ViewSet::TOKENS | ViewSet::ERRORS,
            files: vec![PathBuf::from("x.py")],
        }
    );
    assert_eq!(
        parse_args(&["--view=layout"]).unwrap(),
        Command::Interactive {
            views: ViewSet::LAYOUT
        }
    );
}

#[test]
fn help_wins() {
    assert_eq!(parse_args(&["x.py", "--help"]).unwrap(), Command::Help);
    assert_eq!(parse_args(&["-h"]).unwrap(), Command::Help);
}

#[test]
fn double_dash_ends_options() {
    assert_eq!(
        parse_args(&["--", "--view=tokens"]).unwrap(),
        Command::Batch {
            views: ViewSet::all(),
            files: vec![PathBuf::from("--view=tokens")],
        }
    );
}

#[test]
fn bad_flags_are_rejected() {
    assert_eq!(
        parse_args(&["--verbose"]),
        Err(ArgsError::UnknownFlag("--verbose".to_string()))
    );
    assert_eq!(
        parse_args(&["--view=ast"]),
        Err(ArgsError::UnknownView("ast".to_string()))
    );
}
