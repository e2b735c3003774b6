//! Menu-driven CLI loops for the two applications.
//!
//! The loops are generic over their input and output streams so tests can
//! drive them with in-memory buffers; the binaries pass locked stdin and
//! stdout.

mod budget;
mod todo;

pub use budget::run as run_budget;
pub use todo::run as run_todo;

use crate::error::Result;
use std::io::{BufRead, Write};

/// Print a prompt without a trailing newline and read one trimmed line.
///
/// Exhausted input is an error: the loops have no sensible way to continue
/// without a user.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed while waiting for a response",
        )
        .into());
    }
    Ok(line.trim().to_string())
}

/// Prompt for a 1-based record number and convert it to a zero-based index.
///
/// Zero maps to `None` (there is no record 0 to the user); non-numeric input
/// propagates as a parse error, terminating the loop.
fn prompt_index(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> Result<Option<usize>> {
    let number: usize = prompt(input, out, label)?.parse()?;
    Ok(number.checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_input() {
        let mut input = Cursor::new("  hello  \n");
        let mut out = Vec::new();
        let answer = prompt(&mut input, &mut out, "Say: ").unwrap();
        assert_eq!(answer, "hello");
        assert_eq!(String::from_utf8(out).unwrap(), "Say: ");
    }

    #[test]
    fn test_prompt_eof_is_error() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(prompt(&mut input, &mut out, "Say: ").is_err());
    }

    #[test]
    fn test_prompt_index_one_based() {
        let mut input = Cursor::new("3\n");
        let mut out = Vec::new();
        let index = prompt_index(&mut input, &mut out, "Number: ").unwrap();
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_prompt_index_zero_maps_to_none() {
        let mut input = Cursor::new("0\n");
        let mut out = Vec::new();
        let index = prompt_index(&mut input, &mut out, "Number: ").unwrap();
        assert_eq!(index, None);
    }

    #[test]
    fn test_prompt_index_non_numeric_is_error() {
        let mut input = Cursor::new("five\n");
        let mut out = Vec::new();
        assert!(prompt_index(&mut input, &mut out, "Number: ").is_err());
    }
}
