use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad parameters, bad secret or malformed shares supplied by the caller.
    Validation,
    /// Division by or inversion of the zero field element.
    Arithmetic,
    /// Recovered bytes could not be turned into text.
    Encoding,
    Io,
    Config,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("secret must not be empty")]
    EmptySecret,

    #[error("invalid threshold {0}: must be at least 2")]
    InvalidThreshold(usize),

    #[error("share count {shares} is below the threshold {threshold}")]
    ShareCountBelowThreshold { threshold: usize, shares: usize },

    #[error("too many shares: {0} requested, at most 255 fit in a one byte index")]
    TooManyShares(usize),

    #[error("not enough shares: have {have}, need {need}")]
    NotEnoughShares { have: usize, need: usize },

    #[error("share is too short: {0} bytes, need an index byte and at least one payload byte")]
    ShareTooShort(usize),

    #[error("shares have unequal length: expected {expected} bytes, found {found}")]
    SharesUnequalLength { expected: usize, found: usize },

    #[error("share index cannot be zero")]
    ZeroShareIndex,

    #[error("duplicate share index detected: {0}")]
    DuplicateShareIndex(u8),

    #[error("share {index} does not agree with the other shares")]
    InconsistentShares { index: u8 },

    #[error("share length {share} does not match refresh key length {key}")]
    RefreshKeyMismatch { share: usize, key: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("division by zero in GF(256)")]
    DivisionByZero,

    #[error("inverse of zero is not defined in GF(256)")]
    ZeroInverse,

    #[error("recovered secret is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("word list is empty")]
    EmptyWordlist,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DivisionByZero | Error::ZeroInverse => ErrorKind::Arithmetic,
            Error::InvalidUtf8(_) => ErrorKind::Encoding,
            Error::Io(_) => ErrorKind::Io,
            Error::Config(_) => ErrorKind::Config,
            _ => ErrorKind::Validation,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
