//! Structural sequence motifs
//!
//! Cardin-Weintraub heparin-binding patterns are matched on a basic/other mask
//! of the sequence. N-glycosylation sites are matched directly on residues.

use log::trace;

use crate::protein::residues::{normalize, POSITIVE};

/// Heparin-binding consensus patterns over the basic mask.
pub const CARDIN_WEINTRAUB_PATTERNS: [&str; 4] = ["XBBXBX", "XBXBBX", "XBBBXXBX", "XBXXBBBX"];

/// Masks every residue as `B` (R, K or H) or `X`.
pub fn basic_mask(sequence: &str) -> String {
    normalize(sequence)
        .chars()
        .map(|c| if POSITIVE.contains(&c) { 'B' } else { 'X' })
        .collect()
}

/// Whether any Cardin-Weintraub pattern occurs in the sequence.
pub fn cardin_weintraub(sequence: &str) -> bool {
    let mask = basic_mask(sequence);
    let found = CARDIN_WEINTRAUB_PATTERNS
        .iter()
        .any(|pattern| mask.contains(pattern));
    trace!("Cardin-Weintraub mask {mask}: {found}");
    found
}

fn is_glycosylation_window(window: &[char]) -> bool {
    matches!(window, ['N', x, 'S' | 'T'] if *x != 'P')
}

/// 0-based start of every N-X-S/T window (X not proline).
pub fn n_glycosylation_sites(sequence: &str) -> Vec<usize> {
    let residues: Vec<char> = normalize(sequence).chars().collect();
    residues
        .windows(3)
        .enumerate()
        .filter(|(_, window)| is_glycosylation_window(window))
        .map(|(position, _)| position)
        .collect()
}

/// Whether the sequence has at least one N-glycosylation consensus site.
pub fn n_glycosylation(sequence: &str) -> bool {
    let residues: Vec<char> = normalize(sequence).chars().collect();
    residues.windows(3).any(is_glycosylation_window)
}
