use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BufferError {
    #[error("Access of {needed} bytes at offset {offset} exceeds capacity {capacity}!")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        capacity: usize,
    },
    #[error("Cannot move the cursor at {position} by {count}!")]
    CursorOutOfRange { position: usize, count: isize },
    #[error("Invalid length prefix {length}!")]
    InvalidLength { length: i64 },
    #[error("Codepoint {codepoint} does not fit in a single byte!")]
    UnsupportedCodepoint { codepoint: u32 },
}
