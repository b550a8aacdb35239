//! Molecular weights of amino acids
//!
//! Average masses of the free amino acids in Daltons (Da). A chain loses one
//! water per peptide bond, which `molecular_weight` subtracts.

use log::debug;

use crate::error::{AnalysisError, Result};
use crate::protein::residues::{normalize, seq_length};

/// Water released by each peptide bond.
pub const PEPTIDE_BOND_WATER: f64 = 18.02;

/// Fixed terminal adjustment added once per chain.
pub const TERMINAL_ADJUSTMENT: f64 = 16.02;

/// Average mass of a free amino acid by its single-letter code
pub fn amino_acid_weight(amino_acid: char) -> Option<f64> {
    let weight = match amino_acid.to_ascii_uppercase() {
        'A' => 89.09,  // Alanine
        'R' => 174.20, // Arginine
        'N' => 132.12, // Asparagine
        'D' => 133.10, // Aspartic acid
        'C' => 121.16, // Cysteine
        'Q' => 146.15, // Glutamine
        'E' => 147.13, // Glutamic acid
        'G' => 75.07,  // Glycine
        'H' => 155.16, // Histidine
        'I' => 131.17, // Isoleucine
        'L' => 131.17, // Leucine
        'K' => 146.19, // Lysine
        'M' => 149.21, // Methionine
        'F' => 165.19, // Phenylalanine
        'P' => 115.13, // Proline
        'O' => 255.31, // Pyrrolysine
        'S' => 105.09, // Serine
        'T' => 119.12, // Threonine
        'W' => 204.23, // Tryptophan
        'Y' => 181.19, // Tyrosine
        'V' => 117.15, // Valine
        _ => return None,
    };
    Some(weight)
}

/// Average molecular weight of a protein sequence.
///
/// Unrecognized characters add no mass but still count towards the chain
/// length used for the water correction.
pub fn molecular_weight(sequence: &str) -> Result<f64> {
    let sequence = normalize(sequence);
    let length = seq_length(&sequence);
    if length == 0 {
        return Err(AnalysisError::EmptySequence);
    }

    let residue_mass: f64 = sequence.chars().filter_map(amino_acid_weight).sum();
    let weight = residue_mass - PEPTIDE_BOND_WATER * (length - 1) as f64 + TERMINAL_ADJUSTMENT;

    debug!("Molecular weight of {length}-residue sequence: {weight:.2} Da");
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::residues::AMINO_ACIDS;

    #[test]
    fn test_individual_amino_acid_weights() {
        assert_eq!(amino_acid_weight('A'), Some(89.09));
        assert_eq!(amino_acid_weight('g'), Some(75.07));
        assert_eq!(amino_acid_weight('W'), Some(204.23));
        assert_eq!(amino_acid_weight('*'), None);
        assert_eq!(amino_acid_weight('X'), None);
    }

    #[test]
    fn test_every_alphabet_code_has_a_weight() {
        for code in AMINO_ACIDS {
            assert!(amino_acid_weight(code).is_some(), "missing weight for {code}");
        }
    }

    #[test]
    fn test_single_residue() {
        let weight = molecular_weight("A").unwrap();
        assert!((weight - 105.11).abs() < 1e-9);
    }

    #[test]
    fn test_dipeptide() {
        // 89.09 + 75.07 - 18.02 + 16.02
        let weight = molecular_weight("ag").unwrap();
        assert!((weight - 162.16).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_residue_adds_no_mass() {
        // 89.09 + 0 - 18.02 + 16.02
        let weight = molecular_weight("AX").unwrap();
        assert!((weight - 87.09).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(molecular_weight(""), Err(AnalysisError::EmptySequence));
    }
}
