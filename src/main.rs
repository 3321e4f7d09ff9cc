//! Competition entry point
//!
//! Reads engine commands from stdin and answers move requests on
//! stdout. Diagnostics go to stderr so they never mix with the wire.

use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use uttt::engine::BotConfig;
use uttt::protocol::Session;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(BotConfig::default());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(reply) = session.handle_line(&line)? {
            writeln!(stdout, "{}", reply)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
