pub mod isoelectric;
pub mod molecular_weights;
pub mod motifs;
pub mod properties;
pub mod report;
pub mod residues;

pub use isoelectric::*;
pub use molecular_weights::*;
pub use motifs::*;
pub use properties::*;
pub use report::*;
pub use residues::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_analysis_of_insulin_b_chain() -> Result<(), Box<dyn std::error::Error>> {
        let sequence = "FVNQHLCGSHLVEALYLVCGERGFFYTPKT";

        let counts = residue_counts(sequence);
        assert_eq!(counts.positive, 4);
        assert_eq!(counts.negative, 2);
        assert_eq!(counts.aromatic, 5);
        assert!(counts.hydrophobic + counts.hydrophilic <= seq_length(sequence));

        let ratio = hydrophobic_ratio(sequence)?;
        assert!((ratio - counts.hydrophobic as f64 / 30.0).abs() < 1e-12);

        let pi = isoelectric_point(sequence, &BisectionSolver::default())?;
        assert!(pi > 6.0 && pi < 8.5, "pI was {pi}");

        assert!(!cardin_weintraub(sequence));
        assert!(!n_glycosylation(sequence));
        Ok(())
    }

    #[test]
    fn test_calls_are_independent_across_threads() {
        let sequence = "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQFEVVHSLAKWKRQTLGQHDFSAGEGLYTHMKALRPDEDRLSPLHSVYVDQWDWERVMGDGERQFSTLKSTVEAIWAGIKATEAAVSEEFGLAPFLPDQIHFVHSQELLSRYPDLDAKGRERAIAKDLGAVFLVGIGGKLSDGHRHDVRAPDYDDWUAELS";
        let expected = ProteinReport::analyze(sequence, DEFAULT_PH, &BisectionSolver::default());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(move || {
                    ProteinReport::analyze(sequence, DEFAULT_PH, &BisectionSolver::default())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
