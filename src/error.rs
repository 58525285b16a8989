#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("base64 input length {0} is not a multiple of 4")]
    InvalidLength(usize),

    #[error("unknown base64 char '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("invalid base64 padding")]
    InvalidPadding,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    #[error("algorithm '{algorithm}' unavailable: {reason}")]
    AlgorithmUnavailable {
        algorithm: String,
        reason: &'static str,
    },

    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] DecodeError),
}
