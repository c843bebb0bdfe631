//! Handles all user-facing output for the CLI.
//!
//! Centralizing the colorized reporting here keeps the commands free of
//! formatting concerns and the output consistent between them.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::reporting::RunResult;
use crate::runner::ProjectOutcome;

fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn colored(stream: &mut StandardStream, color: Color, text: &str) {
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    print!("{text}");
    let _ = stream.reset();
}

/// Prints the aggregate tally of a run.
pub fn print_summary(result: &RunResult) {
    let mut stream = stdout();
    print!("Run summary: total {}, ", result.total());
    colored(&mut stream, Color::Green, "passed");
    print!(" {}, ", result.passed);
    colored(&mut stream, Color::Red, "failed");
    print!(" {}, ", result.failed);
    colored(&mut stream, Color::Yellow, "errored");
    println!(" {}", result.errored);
}

/// Prints collected source-script and parse failures from a project run.
pub fn print_project_failures(outcome: &ProjectOutcome) {
    for failure in &outcome.script_failures {
        eprintln!(
            "source script failed: {}: {}",
            failure.path.display(),
            failure.message
        );
    }
    for failure in &outcome.parse_failures {
        eprintln!("{}:", failure.path.display());
        print_error(&failure.error);
    }
}

/// Prints an error and its cause chain on stderr.
pub fn print_error(error: &crate::errors::StanzaError) {
    eprintln!("error: {error}");
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
