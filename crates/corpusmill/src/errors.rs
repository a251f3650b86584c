//! # Error Types

/// Errors from corpusmill operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusmillError {
    /// The exclusion list removed every type from the frequency table.
    #[error("after the exclusion list there are no types left in the corpus")]
    EmptyFilteredVocab,

    /// Window size must be a positive integer.
    #[error("window size cannot be 0, must be a positive integer")]
    ZeroWindowSize,

    /// A token was not in the vocabulary, and no unknown token is configured.
    #[error("token {token:?} not in vocab, and no unknown token is configured")]
    TokenNotInVocab {
        /// The token that failed lookup.
        token: String,
    },

    /// Vocab size exceeds the capacity of the target index type.
    #[error("vocab size ({size}) exceeds index type capacity")]
    IndexOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for CorpusmillError {
    fn from(err: serde_json::Error) -> Self {
        CorpusmillError::Serde(err.to_string())
    }
}

/// Result type for corpusmill operations.
pub type CMResult<T> = core::result::Result<T, CorpusmillError>;
