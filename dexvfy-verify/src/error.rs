use dexvfy_file::ParseError;
use thiserror::Error;

/// Reasons the structural pre-pass rejects a method.
///
/// Every variant rejects only the method being verified. Addresses are in
/// code units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The width lookup did not recognize the instruction at `addr`.
    #[error("invalid instruction {unit:#06x} at {addr:#x}")]
    InvalidOpcode { addr: usize, unit: u16 },

    /// The instruction at `addr` claims an impossible width.
    #[error("instruction at {addr:#x} has insane width {width}")]
    WidthOverflow { addr: usize, width: usize },

    /// The last instruction runs past the end of the code.
    #[error("code ends at {end:#x} instead of {len:#x}")]
    TruncatedInstruction { end: usize, len: usize },

    /// A try range is empty or ends before it starts.
    #[error("bad try range: start={start:#x} end={end:#x} (size={len:#x})")]
    InvertedRange { start: u32, end: u64, len: usize },

    /// A try range reaches beyond the code.
    #[error("try range out of bounds: start={start:#x} end={end:#x} (size={len:#x})")]
    RangeOutOfBounds { start: u32, end: u64, len: usize },

    /// A try range starts in the middle of an instruction.
    #[error("try range starts inside an instruction ({start:#x})")]
    MisalignedTryStart { start: u32 },

    /// An exception handler does not start on an instruction.
    #[error("exception handler starts at bad address ({addr:#x})")]
    BadHandlerTarget { addr: u32 },

    /// The catch handler list could not be decoded.
    #[error("malformed catch handler list: {0}")]
    MalformedHandlers(#[from] ParseError),
}

/// Fieldless discriminant of [`VerifyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOpcode,
    WidthOverflow,
    TruncatedInstruction,
    InvertedRange,
    RangeOutOfBounds,
    MisalignedTryStart,
    BadHandlerTarget,
    MalformedHandlers,
}

impl VerifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifyError::InvalidOpcode { .. } => ErrorKind::InvalidOpcode,
            VerifyError::WidthOverflow { .. } => ErrorKind::WidthOverflow,
            VerifyError::TruncatedInstruction { .. } => ErrorKind::TruncatedInstruction,
            VerifyError::InvertedRange { .. } => ErrorKind::InvertedRange,
            VerifyError::RangeOutOfBounds { .. } => ErrorKind::RangeOutOfBounds,
            VerifyError::MisalignedTryStart { .. } => ErrorKind::MisalignedTryStart,
            VerifyError::BadHandlerTarget { .. } => ErrorKind::BadHandlerTarget,
            VerifyError::MalformedHandlers(_) => ErrorKind::MalformedHandlers,
        }
    }
}
