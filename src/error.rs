//! Error types shared by every analysis operation.

use thiserror::Error;

/// Failure of a single sequence computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A ratio or index whose denominator is zero for this sequence.
    #[error("cannot compute {quantity}: {denominator} is zero")]
    DivisionByZero {
        quantity: &'static str,
        denominator: &'static str,
    },

    /// The operation has no meaning for a sequence without residues.
    #[error("empty protein sequence")]
    EmptySequence,

    /// Coding DNA that cannot be translated.
    #[error("invalid coding DNA: {0}")]
    InvalidDna(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
