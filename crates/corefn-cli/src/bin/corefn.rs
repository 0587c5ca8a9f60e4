//! `corefn` — compile a single source file, or drive a line-buffered REPL
//! over standard input when no file is given.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use corefn_cli::{compile, CliArgs, Reporter};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let had_error = match &args.file {
        Some(path) => run_file(path)?,
        None => run_repl()?,
    };

    if had_error {
        std::process::exit(1);
    }
    Ok(())
}

fn run_file(path: &std::path::Path) -> Result<bool> {
    let (source, result) = corefn_cli::compile_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let reporter = Reporter::new(true);
    let file = path.display().to_string();

    match result {
        Ok(()) => Ok(false),
        Err(diagnostic) => {
            eprintln!("{}", reporter.render(&file, &source, &diagnostic));
            Ok(true)
        }
    }
}

/// Each non-empty line read from stdin is compiled as its own program.
fn run_repl() -> Result<bool> {
    let reporter = Reporter::new(true);
    let stdin = io::stdin();
    let mut had_error = false;

    print!("> ");
    io::stdout().flush().ok();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from standard input")?;
        if !line.trim().is_empty() {
            match compile(&line) {
                Ok(()) => println!("ok"),
                Err(diagnostic) => {
                    had_error = true;
                    println!("{}", reporter.render("<stdin>", &line, &diagnostic));
                }
            }
        }
        print!("> ");
        io::stdout().flush().ok();
    }
    println!();

    Ok(had_error)
}
