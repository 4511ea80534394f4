// Input validation helpers. Pure functions over their input, used by the
// startup prompts, the book list and the `/start` registration.

use crate::error::{BookError, Result};

/// Reject empty or whitespace-only text. Returns the input unchanged.
pub fn validate_non_blank(input: &str) -> Result<&str> {
    if input.trim().is_empty() {
        return Err(BookError::InvalidInput(
            "the text must not be empty or consist only of whitespace".into(),
        ));
    }
    Ok(input)
}

/// Parse an integer and check it lies in `[min, max]` inclusive.
///
/// Surrounding whitespace is ignored, so `" 42 "` parses as `42`.
pub fn parse_bounded_int(input: &str, min: i64, max: i64) -> Result<i64> {
    let value: i64 = input.trim().parse().map_err(|_| {
        BookError::InvalidInput(format!("'{}' could not be converted to a number", input))
    })?;

    if value < min || value > max {
        return Err(BookError::OutOfRange { value, min, max });
    }
    Ok(value)
}
