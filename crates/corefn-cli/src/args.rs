//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Type-check a corefn program.
///
/// With a `file` argument, the file is read and compiled once. With no
/// argument, source is read from standard input as a line-buffered REPL:
/// each non-empty line is compiled as an independent program.
#[derive(Parser, Debug)]
#[command(name = "corefn", about = "Type-check a corefn program", version)]
pub struct CliArgs {
    /// Source file to compile. Omit to read a REPL from standard input.
    pub file: Option<PathBuf>,

    /// Disable ANSI color in diagnostic output.
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod tests;
