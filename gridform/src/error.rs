use thiserror::Error;

/// Errors from building widget configuration.
///
/// Widget operation itself never fails; these only come out of parsing
/// option names and compiling validation rules.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown field variant '{0}' (expected filled, outlined or ghost)")]
    UnknownVariant(String),

    #[error("unknown field size '{0}' (expected small, medium or large)")]
    UnknownSize(String),

    #[error("unknown field type '{0}' (expected text, email, password or number)")]
    UnknownKind(String),

    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
