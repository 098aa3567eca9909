use thiserror::Error;

pub type Result<T> = std::result::Result<T, LottoError>;

/// Everything that can go wrong between reading the environment and printing a report.
#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid input: {message}")]
    Input { message: String },

    #[error("Sampling failed: {message}")]
    Sampling { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl LottoError {
    pub fn input(message: impl Into<String>) -> Self {
        LottoError::Input {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        LottoError::Transport {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for LottoError {
    fn from(err: std::io::Error) -> Self {
        LottoError::Transport {
            message: format!("cache I/O failed: {}", err),
        }
    }
}

impl From<reqwest::Error> for LottoError {
    fn from(err: reqwest::Error) -> Self {
        LottoError::Transport {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<serde_json::Error> for LottoError {
    fn from(err: serde_json::Error) -> Self {
        LottoError::Input {
            message: format!("malformed drawing payload: {}", err),
        }
    }
}
