//! Composition ratios, aliphatic index and titration charge.

use log::{debug, trace};

use crate::error::{AnalysisError, Result};
use crate::protein::residues::{
    aromatic_res_count, count_amino_acid, hydrophilic_res_count, hydrophobic_res_count, normalize,
    seq_length,
};

pub const DEFAULT_PH: f64 = 7.0;

/// C-terminal carboxyl group, always present once.
const PKA_C_TERMINUS: f64 = 3.3;
/// N-terminal amino group, always present once.
const PKA_N_TERMINUS: f64 = 7.7;

const PKA_D: f64 = 3.65;
const PKA_E: f64 = 4.25;
const PKA_K: f64 = 10.53;
const PKA_R: f64 = 12.48;
const PKA_H: f64 = 6.0;

fn ratio(numerator: usize, denominator: usize, quantity: &'static str, of: &'static str) -> Result<f64> {
    if denominator == 0 {
        return Err(AnalysisError::DivisionByZero {
            quantity,
            denominator: of,
        });
    }
    Ok(numerator as f64 / denominator as f64)
}

/// Fraction of the sequence made of hydrophobic residues.
pub fn hydrophobic_ratio(sequence: &str) -> Result<f64> {
    ratio(
        hydrophobic_res_count(sequence),
        seq_length(sequence),
        "hydrophobic ratio",
        "sequence length",
    )
}

/// Fraction of the sequence made of hydrophilic residues.
pub fn hydrophilic_ratio(sequence: &str) -> Result<f64> {
    ratio(
        hydrophilic_res_count(sequence),
        seq_length(sequence),
        "hydrophilic ratio",
        "sequence length",
    )
}

/// Fraction of the sequence made of aromatic residues.
pub fn aromatic_ratio(sequence: &str) -> Result<f64> {
    ratio(
        aromatic_res_count(sequence),
        seq_length(sequence),
        "aromatic ratio",
        "sequence length",
    )
}

/// Hydrophobic residues per hydrophilic residue.
pub fn hydro_ratio(sequence: &str) -> Result<f64> {
    ratio(
        hydrophobic_res_count(sequence),
        hydrophilic_res_count(sequence),
        "hydrophobic/hydrophilic ratio",
        "hydrophilic residue count",
    )
}

/// Relative volume occupied by aliphatic side chains (A, V, I, L).
///
/// `100 / len * (A + 2.9 V + 3.9 (I + L))`
pub fn aliphatic_index(sequence: &str) -> Result<f64> {
    let length = seq_length(sequence);
    if length == 0 {
        return Err(AnalysisError::DivisionByZero {
            quantity: "aliphatic index",
            denominator: "sequence length",
        });
    }

    let alanine = count_amino_acid(sequence, 'A') as f64;
    let valine = count_amino_acid(sequence, 'V') as f64;
    let isoleucine = count_amino_acid(sequence, 'I') as f64;
    let leucine = count_amino_acid(sequence, 'L') as f64;

    let index = 100.0 / length as f64 * (alanine + 2.9 * valine + 3.9 * (isoleucine + leucine));
    trace!("Aliphatic index: A={alanine} V={valine} I={isoleucine} L={leucine} -> {index:.3}");
    Ok(index)
}

/// Titratable groups split into carboxyl-like and amino-like pKa lists.
fn titratable_groups(sequence: &str) -> (Vec<f64>, Vec<f64>) {
    let mut acidic = vec![PKA_C_TERMINUS];
    let mut basic = vec![PKA_N_TERMINUS];

    for residue in normalize(sequence).chars() {
        match residue {
            'D' => acidic.push(PKA_D),
            'E' => acidic.push(PKA_E),
            'K' => basic.push(PKA_K),
            'R' => basic.push(PKA_R),
            'H' => basic.push(PKA_H),
            _ => {}
        }
    }

    (acidic, basic)
}

/// Simplified net charge at `ph`.
///
/// Each group is treated as fully charged or fully neutral: basic groups with a
/// pKa above the pH carry +1, acidic groups with a pKa below the pH carry -1.
/// The result never increases as the pH rises.
pub fn charge_at_ph(sequence: &str, ph: f64) -> i64 {
    let (acidic, basic) = titratable_groups(sequence);

    let positive = basic.iter().filter(|&&pka| pka > ph).count() as i64;
    let negative = acidic.iter().filter(|&&pka| pka < ph).count() as i64;

    let charge = positive - negative;
    debug!("Charge at pH {ph}: +{positive} -{negative} = {charge}");
    charge
}

/// Net charge at [`DEFAULT_PH`].
pub fn net_charge(sequence: &str) -> i64 {
    charge_at_ph(sequence, DEFAULT_PH)
}
