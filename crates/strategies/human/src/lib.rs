//! Interactive Strategy
//!
//! Prompts a human for a move on every round and re-prompts until the
//! input parses. Generic over the input/output streams so tests can drive
//! it from a buffer; the CLI hands it locked stdin/stdout.
//!
//! Selecting a move blocks until valid input arrives, with no timeout.
//! That stalls the whole match by design: one human, one automated
//! opponent, nothing else waiting.

use rps_core::{Move, Strategy};
use std::io::{BufRead, Write};

#[cfg(test)]
mod lib_tests;

const PROMPT: &str = "Rock, paper, scissors? > ";

/// A strategy driven by a human at the other end of `input`.
///
/// Round feedback is ignored; the human saw the round happen.
pub struct HumanStrategy<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn select_move(&mut self) -> Move {
        loop {
            write!(self.output, "{PROMPT}").ok();
            self.output.flush().ok();

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .unwrap_or_else(|e| panic!("failed to read a move: {e}"));
            if read == 0 {
                // EOF: no move can ever be produced, and the match engine
                // has no way to recover from a player with no moves.
                panic!("input closed while waiting for a move");
            }

            match Move::parse(&line) {
                Some(mv) => return mv,
                None => continue,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
