//! Command line configuration for the `lambdac` REPL.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "One-pass λ-calculus to C compiler and REPL")]
pub struct Cli {
    /// The C compiler to invoke when translating and running a term.
    #[arg(long, default_value = "cc")]
    pub cc: PathBuf,

    /// Keep the generated C translation unit instead of deleting it
    /// after each run.
    #[arg(long)]
    pub keep_c: bool,

    /// Run the named file as a sequence of REPL command lines, then
    /// exit instead of dropping to an interactive prompt.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Raise logging verbosity. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
