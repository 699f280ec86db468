// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Bella failures.
///
/// Non-unit generator determinants are not represented here: they are
/// advisory and only logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BellaError {
    /// A word string contained a label with no letter assigned to it.
    #[error("lookup error: unknown generator label {0:?}")]
    Lookup(String),

    /// A word referenced a letter outside the alphabet `[0, alphabet)`.
    #[error("invalid letter {letter}: alphabet has {alphabet} letters")]
    InvalidLetter { letter: usize, alphabet: usize },

    /// Input points coincide or are otherwise not in general position.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Invalid input parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type BellaResult<T> = Result<T, BellaError>;
