use thiserror::Error;

#[derive(Error, Debug)]
pub enum LzwError {
    /// A canonical symbol fell outside the seeded alphabet.
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Decoding error: code {code} is unknown (next free code is {next_code})")]
    UnknownCode { code: u32, next_code: u64 },
    #[error("Decoding error: container length {len} is not a multiple of {width} bytes")]
    TruncatedContainer { len: usize, width: usize },
    #[error("Decoding error: malformed escape sequence at offset {offset}")]
    MalformedEscape { offset: usize },
    #[error("Decoding error: {0}")]
    Decoding(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LzwError {
    /// Failure category used when rendering errors to users.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Encoding(_) => "encoding",
            Self::UnknownCode { .. }
            | Self::TruncatedContainer { .. }
            | Self::MalformedEscape { .. }
            | Self::Decoding(_) => "decoding",
            Self::InvalidInput(_) => "input",
            Self::InvalidConfig(_) | Self::Serialization(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, LzwError>;
