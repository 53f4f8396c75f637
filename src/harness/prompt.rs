//! Interactive input: parse a positive integer, re-prompting on bad input.

use crate::error::{Error, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Printed after a rejected line, before reading the next one.
pub const RETRY_MESSAGE: &str = "Invalid input. Please enter a positive integer: ";

/// Parse `input` (surrounding whitespace ignored) as a value greater than
/// zero.
pub fn parse_positive<T>(input: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
    T::Err: Display,
{
    let trimmed = input.trim();
    let value: T = trimmed.parse().map_err(|e: T::Err| Error::InvalidInput {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if value <= T::default() {
        return Err(Error::InvalidInput {
            input: trimmed.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

/// Write `message`, then read lines from `input` until one parses with
/// [`parse_positive`]. Each rejected line is discarded and answered with
/// [`RETRY_MESSAGE`].
///
/// Fails with [`Error::InputClosed`] if `input` runs out first.
pub fn prompt_positive<T, R, W>(input: &mut R, output: &mut W, message: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        match parse_positive(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(error = %e, "rejected input");
                write!(output, "{}", RETRY_MESSAGE)?;
                output.flush()?;
            }
        }
    }
}
