//! One-shot analysis of a sequence combining every property.

use std::fmt;

use log::{debug, warn};

use crate::error::Result;
use crate::protein::isoelectric::{isoelectric_point, IsoelectricSolver};
use crate::protein::molecular_weights::molecular_weight;
use crate::protein::motifs::{cardin_weintraub, n_glycosylation_sites};
use crate::protein::properties::{
    aliphatic_index, aromatic_ratio, charge_at_ph, hydro_ratio, hydrophilic_ratio,
    hydrophobic_ratio,
};
use crate::protein::residues::{normalize, residue_counts, seq_length, ResidueCounts};

/// Every descriptive statistic of one sequence.
///
/// Quantities that are undefined for a degenerate sequence are `None` instead
/// of failing the whole report.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinReport {
    pub sequence: String,
    pub length: usize,
    pub counts: ResidueCounts,
    pub hydrophobic_ratio: Option<f64>,
    pub hydrophilic_ratio: Option<f64>,
    pub aromatic_ratio: Option<f64>,
    pub hydro_ratio: Option<f64>,
    pub aliphatic_index: Option<f64>,
    pub ph: f64,
    pub charge: i64,
    pub molecular_weight: Option<f64>,
    pub isoelectric_point: Option<f64>,
    pub cardin_weintraub: bool,
    pub n_glycosylation_sites: Vec<usize>,
}

fn defined(name: &str, value: Result<f64>) -> Option<f64> {
    match value {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{name} undefined: {e}");
            None
        }
    }
}

impl ProteinReport {
    pub fn analyze<S>(sequence: &str, ph: f64, solver: &S) -> ProteinReport
    where
        S: IsoelectricSolver + ?Sized,
    {
        let sequence = normalize(sequence);
        debug!("Analyzing sequence of length {}", seq_length(&sequence));

        ProteinReport {
            length: seq_length(&sequence),
            counts: residue_counts(&sequence),
            hydrophobic_ratio: defined("hydrophobic ratio", hydrophobic_ratio(&sequence)),
            hydrophilic_ratio: defined("hydrophilic ratio", hydrophilic_ratio(&sequence)),
            aromatic_ratio: defined("aromatic ratio", aromatic_ratio(&sequence)),
            hydro_ratio: defined("hydro ratio", hydro_ratio(&sequence)),
            aliphatic_index: defined("aliphatic index", aliphatic_index(&sequence)),
            ph,
            charge: charge_at_ph(&sequence, ph),
            molecular_weight: defined("molecular weight", molecular_weight(&sequence)),
            isoelectric_point: defined("isoelectric point", isoelectric_point(&sequence, solver)),
            cardin_weintraub: cardin_weintraub(&sequence),
            n_glycosylation_sites: n_glycosylation_sites(&sequence),
            sequence,
        }
    }

    pub fn n_glycosylation(&self) -> bool {
        !self.n_glycosylation_sites.is_empty()
    }
}

struct Maybe(Option<f64>, usize);

impl fmt::Display for Maybe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.prec$}", prec = self.1),
            None => write!(f, "n/a"),
        }
    }
}

fn flag(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for ProteinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequence:              {}", self.sequence)?;
        writeln!(f, "Length:                {}", self.length)?;
        writeln!(
            f,
            "Residues:              hydrophobic {}, hydrophilic {}, positive {}, negative {}, aromatic {}",
            self.counts.hydrophobic,
            self.counts.hydrophilic,
            self.counts.positive,
            self.counts.negative,
            self.counts.aromatic
        )?;
        writeln!(f, "Hydrophobic ratio:     {}", Maybe(self.hydrophobic_ratio, 3))?;
        writeln!(f, "Hydrophilic ratio:     {}", Maybe(self.hydrophilic_ratio, 3))?;
        writeln!(f, "Aromatic ratio:        {}", Maybe(self.aromatic_ratio, 3))?;
        writeln!(f, "Hydrophobic/philic:    {}", Maybe(self.hydro_ratio, 3))?;
        writeln!(f, "Aliphatic index:       {}", Maybe(self.aliphatic_index, 2))?;
        writeln!(f, "Charge at pH {:<5.2}     {:+}", self.ph, self.charge)?;
        writeln!(f, "Molecular weight (Da): {}", Maybe(self.molecular_weight, 2))?;
        writeln!(f, "Isoelectric point:     {}", Maybe(self.isoelectric_point, 2))?;
        writeln!(f, "Cardin-Weintraub:      {}", flag(self.cardin_weintraub))?;
        if self.n_glycosylation() {
            let sites: Vec<String> = self
                .n_glycosylation_sites
                .iter()
                .map(|site| (site + 1).to_string())
                .collect();
            write!(f, "N-glycosylation:       yes (at {})", sites.join(", "))
        } else {
            write!(f, "N-glycosylation:       no")
        }
    }
}
