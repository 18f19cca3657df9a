//! REPL Module
//!
//! Line-oriented command loop over a [`Session`].

pub mod commands;
pub mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

pub use commands::{Command, CommandInfo, COMMANDS};
pub use session::{Flow, Session};

use crate::error::Result;

/// Prompt printed before every line is read
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Reads commands from `input` until `exit` or end of input.
///
/// A failing command prints `Error: <message>` and the loop carries on.
/// Only failures to read input or write output end the loop with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match session.execute(command, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                debug!("Command {} failed: {}", command.name(), e);
                writeln!(out, "Error: {}", e)?;
            }
        }
    }

    Ok(())
}
