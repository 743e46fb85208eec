//! Whitespace-delimited token input.

use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

/// Reads user answers one whitespace-delimited token at a time.
///
/// Several answers may be typed on one line; the extra tokens are held
/// back for the following prompts.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, reading further lines as needed.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&buf)
                    .split_whitespace()
                    .map(ToString::to_string),
            );
        }
    }

    /// Drops whatever is left of the current input line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
