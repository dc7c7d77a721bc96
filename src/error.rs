use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    InvalidArgument = 11,
    IoError = 12,
    UnsupportedMethod = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Error)]
pub enum DecodexError {
    #[error("{method} decode failed: {message}")]
    Decode { method: &'static str, message: String },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("{method} encode failed: {message}")]
    Encode { method: &'static str, message: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported method: {name}")]
    UnsupportedMethod { name: String },
}

impl DecodexError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DecodexError::Decode { .. }
            | DecodexError::InvalidCharacter { .. }
            | DecodexError::Encode { .. } => ExitCode::InvalidInput,
            DecodexError::InvalidArgument { .. } => ExitCode::InvalidArgument,
            DecodexError::Io(_) => ExitCode::IoError,
            DecodexError::UnsupportedMethod { .. } => ExitCode::UnsupportedMethod,
        }
    }

    // Helper constructors for common error patterns
    pub fn decode(method: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            method,
            message: message.into(),
        }
    }

    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn encode(method: &'static str, message: impl Into<String>) -> Self {
        Self::Encode {
            method,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn unsupported_method(name: impl Into<String>) -> Self {
        Self::UnsupportedMethod { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, DecodexError>;
