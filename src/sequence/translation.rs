use bio_seq::prelude::*;
use bio_seq::translation::{TranslationTable, STANDARD};
use log::debug;

use crate::error::{AnalysisError, Result};

/// Translate a coding DNA sequence with the standard genetic code.
///
/// Translation ends at the first stop codon, which is not included.
pub fn translate_coding_dna(dna: &str) -> Result<String> {
    let dna = dna.trim().to_ascii_uppercase();

    if dna.len() % 3 != 0 {
        return Err(AnalysisError::InvalidDna(format!(
            "length {} is not a multiple of 3",
            dna.len()
        )));
    }

    if let Some(base) = dna.chars().find(|c| !matches!(c, 'A' | 'C' | 'G' | 'T')) {
        return Err(AnalysisError::InvalidDna(format!("unexpected base '{base}'")));
    }

    let seq: Seq<Dna> = dna
        .parse()
        .map_err(|_| AnalysisError::InvalidDna("could not parse sequence".to_string()))?;

    let mut protein = String::with_capacity(dna.len() / 3);
    for codon in seq.chunks(3) {
        let amino = STANDARD.to_amino(codon).to_string();
        if amino == "*" {
            break;
        }
        protein.push_str(&amino);
    }

    debug!("Translated {} codons into {} residues", dna.len() / 3, protein.len());
    Ok(protein)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_stops_at_stop_codon() {
        assert_eq!(translate_coding_dna("ATGAAACGTTAAGGG").unwrap(), "MKR");
    }

    #[test]
    fn test_lowercase_input() {
        assert_eq!(translate_coding_dna("atggcc").unwrap(), "MA");
    }

    #[test]
    fn test_rejects_partial_codon() {
        assert!(matches!(
            translate_coding_dna("ATGA"),
            Err(AnalysisError::InvalidDna(_))
        ));
    }

    #[test]
    fn test_rejects_non_dna() {
        assert!(matches!(
            translate_coding_dna("ATGNNN"),
            Err(AnalysisError::InvalidDna(_))
        ));
    }
}
