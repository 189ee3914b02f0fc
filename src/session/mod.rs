//! Interactive calculator session.
//!
//! The session prompts for a purchase amount, prints both discounted
//! amounts, and repeats until the user quits or input runs out.
//! Input lines arrive as an async stream.

use std::io::{self, Write};
use tokio_stream::{Stream, StreamExt};
use tracing::warn;

use crate::Amount;
use crate::discount::Discount;

pub mod text;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user entered [`text::QUIT`].
    Quit,
    /// The input stream closed.
    EndOfInput,
}

/// A read-compute-print loop writing to `out`.
pub struct Session<W> {
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print usage tips.
    pub fn preamble(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", text::ENTRY_TIPS)?;
        writeln!(self.out, "{}", text::HOW_TO_QUIT)
    }

    /// Run the session with the given stream of input lines
    pub async fn run(
        &mut self,
        mut lines: impl Stream<Item = String> + Unpin,
    ) -> io::Result<Exit> {
        loop {
            // blank line between iterations
            writeln!(self.out)?;
            write!(self.out, "{}", text::PROMPT)?;
            self.out.flush()?;

            let Some(line) = lines.next().await else {
                return Ok(Exit::EndOfInput);
            };
            if line == text::QUIT {
                return Ok(Exit::Quit);
            }
            self.respond(&line)?;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print every discount for one input line.
    /// Unparseable input is reported and skipped.
    fn respond(&mut self, line: &str) -> io::Result<()> {
        let amount: Amount = match line.parse() {
            Ok(amount) => amount,
            Err(e) => {
                warn!("{e}");
                return Ok(());
            }
        };

        for discount in Discount::ALL {
            writeln!(self.out, "{}", discount.render(amount))?;
        }
        Ok(())
    }
}
