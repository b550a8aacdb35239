//! Amino acid alphabet and residue classification
//!
//! The classification tables are fixed at compile time. Every counting function
//! uppercases its input first and silently skips characters that are not part
//! of the reference alphabet.

use log::trace;

/// Reference alphabet: the 20 standard residues plus pyrrolysine (`O`).
pub const AMINO_ACIDS: [char; 21] = [
    'A', 'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'O', 'S', 'T', 'W',
    'Y', 'V',
];

pub const HYDROPHOBIC: [char; 9] = ['A', 'G', 'F', 'I', 'L', 'M', 'P', 'V', 'W'];
pub const HYDROPHILIC: [char; 11] = ['R', 'K', 'H', 'D', 'E', 'S', 'T', 'N', 'Q', 'C', 'Y'];
pub const POSITIVE: [char; 3] = ['R', 'K', 'H'];
pub const NEGATIVE: [char; 2] = ['D', 'E'];
pub const AROMATIC: [char; 3] = ['F', 'Y', 'W'];

/// Chemical category a residue may fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    Hydrophobic,
    Hydrophilic,
    Positive,
    Negative,
    Aromatic,
}

impl ResidueClass {
    pub const ALL: [ResidueClass; 5] = [
        ResidueClass::Hydrophobic,
        ResidueClass::Hydrophilic,
        ResidueClass::Positive,
        ResidueClass::Negative,
        ResidueClass::Aromatic,
    ];

    pub fn members(self) -> &'static [char] {
        match self {
            ResidueClass::Hydrophobic => &HYDROPHOBIC,
            ResidueClass::Hydrophilic => &HYDROPHILIC,
            ResidueClass::Positive => &POSITIVE,
            ResidueClass::Negative => &NEGATIVE,
            ResidueClass::Aromatic => &AROMATIC,
        }
    }

    /// Whether an (already uppercased) residue belongs to this class.
    pub fn contains(self, residue: char) -> bool {
        self.members().contains(&residue)
    }
}

/// Per-category residue counts of one sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResidueCounts {
    pub hydrophobic: usize,
    pub hydrophilic: usize,
    pub positive: usize,
    pub negative: usize,
    pub aromatic: usize,
}

impl ResidueCounts {
    pub fn get(&self, class: ResidueClass) -> usize {
        match class {
            ResidueClass::Hydrophobic => self.hydrophobic,
            ResidueClass::Hydrophilic => self.hydrophilic,
            ResidueClass::Positive => self.positive,
            ResidueClass::Negative => self.negative,
            ResidueClass::Aromatic => self.aromatic,
        }
    }
}

pub fn normalize(sequence: &str) -> String {
    sequence.to_ascii_uppercase()
}

pub fn is_amino_acid(residue: char) -> bool {
    AMINO_ACIDS.contains(&residue.to_ascii_uppercase())
}

/// Number of characters in the sequence, recognized or not.
pub fn seq_length(sequence: &str) -> usize {
    sequence.chars().count()
}

fn recognized(sequence: &str) -> impl Iterator<Item = char> + '_ {
    sequence
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| AMINO_ACIDS.contains(&c))
}

pub fn count_residues(sequence: &str, class: ResidueClass) -> usize {
    recognized(sequence).filter(|&c| class.contains(c)).count()
}

/// Occurrences of a single residue code, case-insensitive.
pub fn count_amino_acid(sequence: &str, code: char) -> usize {
    let code = code.to_ascii_uppercase();
    recognized(sequence).filter(|&c| c == code).count()
}

pub fn hydrophobic_res_count(sequence: &str) -> usize {
    count_residues(sequence, ResidueClass::Hydrophobic)
}

pub fn hydrophilic_res_count(sequence: &str) -> usize {
    count_residues(sequence, ResidueClass::Hydrophilic)
}

pub fn positive_res_count(sequence: &str) -> usize {
    count_residues(sequence, ResidueClass::Positive)
}

pub fn negative_res_count(sequence: &str) -> usize {
    count_residues(sequence, ResidueClass::Negative)
}

pub fn aromatic_res_count(sequence: &str) -> usize {
    count_residues(sequence, ResidueClass::Aromatic)
}

/// All five category counts in a single pass over the sequence.
pub fn residue_counts(sequence: &str) -> ResidueCounts {
    let mut counts = ResidueCounts::default();

    for residue in recognized(sequence) {
        if HYDROPHOBIC.contains(&residue) {
            counts.hydrophobic += 1;
        }
        if HYDROPHILIC.contains(&residue) {
            counts.hydrophilic += 1;
        }
        if POSITIVE.contains(&residue) {
            counts.positive += 1;
        }
        if NEGATIVE.contains(&residue) {
            counts.negative += 1;
        }
        if AROMATIC.contains(&residue) {
            counts.aromatic += 1;
        }
    }

    trace!("Residue counts for sequence of length {}: {counts:?}", seq_length(sequence));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 6] = [
        "",
        "A",
        "MKTAYIAKQRQISFVKSHFSRQ",
        "xyz123--",
        "NGSOOPQWYF",
        "gattacaKRHDE",
    ];

    #[test]
    fn test_category_counts() {
        assert_eq!(hydrophobic_res_count("AGFILMPVW"), 9);
        assert_eq!(hydrophilic_res_count("RKHDESTNQCY"), 11);
        assert_eq!(positive_res_count("RKHA"), 3);
        assert_eq!(negative_res_count("DDEA"), 3);
        assert_eq!(aromatic_res_count("FYWA"), 3);
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        assert_eq!(hydrophobic_res_count("agf"), 3);
        assert_eq!(positive_res_count("rKh"), 3);
        assert_eq!(count_amino_acid("aAa", 'a'), 3);
    }

    #[test]
    fn test_unknown_characters_are_ignored() {
        assert_eq!(hydrophobic_res_count("A-1*A"), 2);
        assert_eq!(residue_counts("BJZX*"), ResidueCounts::default());
        assert_eq!(seq_length("A-1*A"), 5);
    }

    #[test]
    fn test_pyrrolysine_is_recognized_but_unclassified() {
        assert!(is_amino_acid('o'));
        for class in ResidueClass::ALL {
            assert_eq!(count_residues("OOO", class), 0);
        }
    }

    #[test]
    fn test_single_pass_matches_individual_counts() {
        for sequence in SAMPLES {
            let counts = residue_counts(sequence);
            for class in ResidueClass::ALL {
                assert_eq!(counts.get(class), count_residues(sequence, class), "{sequence} {class:?}");
            }
        }
    }

    #[test]
    fn test_hydrophobic_and_hydrophilic_never_exceed_length() {
        for sequence in SAMPLES {
            let counts = residue_counts(sequence);
            assert!(counts.hydrophobic + counts.hydrophilic <= seq_length(sequence));
        }
        for residue in HYDROPHOBIC {
            assert!(!HYDROPHILIC.contains(&residue));
        }
    }
}
