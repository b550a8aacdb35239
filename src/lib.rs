//! Protstat - protein sequence statistics
//!
//! This library computes descriptive physicochemical properties of a protein
//! from its amino acid sequence: residue composition, hydrophobicity ratios,
//! aliphatic index, charge, molecular weight, isoelectric point and the
//! presence of a few structural motifs.

pub mod error;
pub mod protein;
pub mod sequence;

// Re-export main types for convenience
pub use error::{AnalysisError, Result};
pub use protein::{BisectionSolver, IsoelectricSolver, ProteinReport};
