//! Line-oriented console I/O.
//!
//! Wraps any `BufRead`/`Write` pair so interactive flows can be driven by
//! stdin/stdout in the binary and by in-memory buffers in tests.

use crate::error::{MenuError, Result};
use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its line ending.
    ///
    /// End of input is reported as `MenuError::InputClosed`.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::InputClosed);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(line)
    }

    /// Print `message` on its own line, then read the answer
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        self.write_line(message)?;
        self.read_line()
    }

    pub fn write_line(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Direct access to the output, for multi-line rendering
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
