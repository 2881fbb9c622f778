use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ylox::{
    errors::errors::{Error, ErrorReporter},
    format_error,
    lexer::lexer::Scanner,
};

/// Scan ylox source and print its tokens.
#[derive(Parser, Debug)]
#[command(name = "ylox", version, about)]
struct Cli {
    /// Script to scan; starts an interactive prompt when omitted
    script: Option<PathBuf>,

    /// Only report errors, do not print tokens
    #[arg(short, long)]
    quiet: bool,
}

/// Exit code for input data errors (sysexits `EX_DATAERR`).
const EXIT_DATA_ERR: u8 = 65;
/// Exit code for I/O errors (sysexits `EX_IOERR`).
const EXIT_IO_ERR: u8 = 74;

/// Prints every lexical error to stderr and remembers that one happened.
struct StderrReporter<'a> {
    source: &'a str,
    file: &'a str,
    had_error: bool,
}

impl<'a> StderrReporter<'a> {
    fn new(source: &'a str, file: &'a str) -> Self {
        StderrReporter {
            source,
            file,
            had_error: false,
        }
    }
}

impl ErrorReporter for StderrReporter<'_> {
    fn report(&mut self, error: Error) {
        self.had_error = true;
        eprintln!("{}", error);
        eprintln!("{}\n", format_error(&error, self.source, self.file));
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match &cli.script {
        Some(path) => run_file(path, cli.quiet),
        None => run_prompt(cli.quiet).map(|_| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::from(EXIT_IO_ERR)
        }
    }
}

/// Returns `true` when the source scanned without errors.
fn run(source: &str, file: &str, quiet: bool) -> bool {
    let mut reporter = StderrReporter::new(source, file);
    let tokens = Scanner::new(source).scan_tokens(&mut reporter);

    if !quiet {
        for token in &tokens {
            println!("{}", token);
        }
    }

    !reporter.had_error
}

fn run_file(path: &Path, quiet: bool) -> Result<ExitCode> {
    let source = read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file = path.to_string_lossy();

    info!("scanning {}", file);

    if run(&source, &file, quiet) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_DATA_ERR))
    }
}

fn run_prompt(quiet: bool) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start the prompt")?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                run(&line, "<prompt>", quiet);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(error) => return Err(error).context("failed to read from the prompt"),
        }
    }
}
