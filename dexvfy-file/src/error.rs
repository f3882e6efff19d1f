use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Offset {0:#x} out of bounds (data size: {1:#x})")]
    OffsetOutOfBounds(usize, usize),

    #[error("Invalid LEB128 encoding at offset {0:#x}")]
    InvalidLeb128(usize),

    #[error("Truncated {what} at offset {offset:#x}")]
    Truncated { what: &'static str, offset: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;
