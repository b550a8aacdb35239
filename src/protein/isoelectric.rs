//! Isoelectric point estimation
//!
//! The pI computation is a collaborator behind [`IsoelectricSolver`]. Any
//! `Fn(&str) -> f64` qualifies, so callers can plug in an external solver or a
//! fixed stub. [`BisectionSolver`] is the built-in default.

use log::{debug, trace};

use crate::error::{AnalysisError, Result};
use crate::protein::residues::{normalize, seq_length};

/// Computes the pH at which a sequence carries no net charge.
pub trait IsoelectricSolver {
    fn isoelectric_point(&self, sequence: &str) -> f64;
}

impl<F> IsoelectricSolver for F
where
    F: Fn(&str) -> f64,
{
    fn isoelectric_point(&self, sequence: &str) -> f64 {
        self(sequence)
    }
}

// EMBOSS pKa values
const PKA_N_TERMINUS: f64 = 8.6;
const PKA_C_TERMINUS: f64 = 3.6;
const PKA_D: f64 = 3.9;
const PKA_E: f64 = 4.1;
const PKA_C: f64 = 8.5;
const PKA_Y: f64 = 10.1;
const PKA_H: f64 = 6.5;
const PKA_K: f64 = 10.8;
const PKA_R: f64 = 12.5;

/// Henderson-Hasselbalch charge curve solved by bisection over pH 0-14.
#[derive(Debug, Clone, Copy)]
pub struct BisectionSolver {
    /// Absolute net charge accepted as neutral.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for BisectionSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 100,
        }
    }
}

fn positive_fraction(pka: f64, ph: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(ph - pka))
}

fn negative_fraction(pka: f64, ph: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(pka - ph))
}

impl BisectionSolver {
    /// Fractional net charge of an uppercased sequence at `ph`.
    pub fn charge(&self, sequence: &str, ph: f64) -> f64 {
        let mut charge = positive_fraction(PKA_N_TERMINUS, ph) - negative_fraction(PKA_C_TERMINUS, ph);

        for residue in sequence.chars() {
            match residue {
                'D' => charge -= negative_fraction(PKA_D, ph),
                'E' => charge -= negative_fraction(PKA_E, ph),
                'C' => charge -= negative_fraction(PKA_C, ph),
                'Y' => charge -= negative_fraction(PKA_Y, ph),
                'H' => charge += positive_fraction(PKA_H, ph),
                'K' => charge += positive_fraction(PKA_K, ph),
                'R' => charge += positive_fraction(PKA_R, ph),
                _ => {}
            }
        }
        charge
    }
}

impl IsoelectricSolver for BisectionSolver {
    fn isoelectric_point(&self, sequence: &str) -> f64 {
        let sequence = normalize(sequence);
        let mut low = 0.0_f64;
        let mut high = 14.0_f64;

        for iteration in 0..self.max_iterations {
            let mid = (low + high) / 2.0;
            let charge = self.charge(&sequence, mid);
            if charge.abs() < self.tolerance {
                trace!("pI converged after {iteration} iterations");
                return mid;
            }
            if charge > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
        }
        (low + high) / 2.0
    }
}

/// Isoelectric point of `sequence` as reported by `solver`.
pub fn isoelectric_point<S>(sequence: &str, solver: &S) -> Result<f64>
where
    S: IsoelectricSolver + ?Sized,
{
    if seq_length(sequence) == 0 {
        return Err(AnalysisError::EmptySequence);
    }
    let pi = solver.isoelectric_point(sequence);
    debug!("Isoelectric point: {pi:.3}");
    Ok(pi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_solver_is_called_with_raw_sequence() {
        let stub = |sequence: &str| {
            assert_eq!(sequence, "mkV");
            6.25
        };
        assert_eq!(isoelectric_point("mkV", &stub).unwrap(), 6.25);
    }

    #[test]
    fn test_empty_sequence_is_rejected_before_solving() {
        let stub = |_: &str| -> f64 { panic!("solver must not run") };
        assert_eq!(isoelectric_point("", &stub), Err(AnalysisError::EmptySequence));
    }

    #[test]
    fn test_bisection_acidic_and_basic() {
        let solver = BisectionSolver::default();
        assert!(isoelectric_point("DDDDD", &solver).unwrap() < 4.0);
        assert!(isoelectric_point("KKKKK", &solver).unwrap() > 10.0);
    }

    #[test]
    fn test_bisection_neutral_peptide() {
        let solver = BisectionSolver::default();
        let pi = isoelectric_point("ggggg", &solver).unwrap();
        assert!(pi > 5.0 && pi < 7.0, "pI was {pi}");
        assert!(solver.charge("GGGGG", pi).abs() < 1e-2);
    }

    #[test]
    fn test_solver_as_trait_object() {
        let solver: Box<dyn IsoelectricSolver> = Box::new(BisectionSolver::default());
        let pi = isoelectric_point("ACDEFGHIKLMNPQRSTVWY", solver.as_ref()).unwrap();
        assert!((0.0..=14.0).contains(&pi));
    }
}
