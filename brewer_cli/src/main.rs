//! Line-oriented REPL over stdin/stdout around `brewer_core::Session`.

mod cli;

use std::io::{self, BufRead, Write};

use brewer_core::{GREETING, MachineCfg, Reply, Session};
use clap::Parser;
use eyre::{Result, WrapErr};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    cli::init_tracing(&args.log_level)?;

    let mut session =
        Session::new(MachineCfg::default()).wrap_err("invalid machine configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{GREETING}")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        // Failure of the input stream is the only abnormal termination
        // path; EOF simply ends the iterator and the loop.
        let line = line.wrap_err("reading input")?;
        match session.eval(&line) {
            Reply::Output(text) => {
                writeln!(out, "{text}")?;
                out.flush()?;
            }
            Reply::Quit => break,
        }
    }
    tracing::debug!(cups_made = session.machine().cups_made(), "session ended");
    Ok(())
}
