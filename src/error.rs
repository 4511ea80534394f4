// Recoverable error kinds for validation and list management.
// The command loop catches every variant, prints its message and keeps
// the session alive. Anything not listed here travels as `anyhow::Error`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("The number must be between {min} and {max}, got {value}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("The list already holds the maximum of {max_count} books")]
    CapacityExceeded { max_count: usize },

    #[error("The entry is {length} characters long, the maximum is {max_length}")]
    LengthExceeded { length: usize, max_length: usize },

    #[error("Book '{0}' is already on the list")]
    DuplicateEntry(String),

    #[error("There is no book number {index} on a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, BookError>;
