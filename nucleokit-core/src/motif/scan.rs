use super::MotifProfile;
use crate::alphabets::dna::{base_index, complement};
use crate::error::{BioError, BioResult};

/// Orientation a window scored best in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

/// Scores of the window starting at `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanRecord {
    pub position: usize,
    pub forward: f64,
    pub reverse: f64,
    pub best: f64,
}

impl ScanRecord {
    /// `Forward` unless the reverse complement scored strictly higher.
    pub fn strand(&self) -> Strand {
        if self.reverse > self.forward {
            Strand::Reverse
        } else {
            Strand::Forward
        }
    }
}

/// Sum of `profile[base_index(b)][i]` over the bases; non-ACGT contributes 0.
#[inline]
fn score_bases<I>(bases: I, profile: &MotifProfile) -> f64
where
    I: IntoIterator<Item = u8>,
{
    bases
        .into_iter()
        .enumerate()
        .filter_map(|(i, b)| base_index(b).map(|row| profile.weight(row, i)))
        .sum()
}

/// Score `window` against `profile`. The window must be exactly as wide as the profile.
pub fn score_window(window: &[u8], profile: &MotifProfile) -> BioResult<f64> {
    if window.len() != profile.width() {
        return Err(BioError::invalid_argument(format!(
            "window length {} does not match motif width {}",
            window.len(),
            profile.width()
        )));
    }
    Ok(score_bases(window.iter().copied(), profile))
}

/// Score every window of `seq` on both strands, one record per start offset.
///
/// The reverse score is the score of the window's reverse complement. A
/// sequence shorter than the motif yields no records.
pub fn scan_sequence(seq: &[u8], profile: &MotifProfile) -> Vec<ScanRecord> {
    let width = profile.width();
    if seq.len() < width {
        return Vec::new();
    }

    par_map!(0..=seq.len() - width, |position: usize| {
        let window = &seq[position..position + width];
        let forward = score_bases(window.iter().copied(), profile);
        let reverse = score_bases(window.iter().rev().map(|&b| complement(b)), profile);
        ScanRecord {
            position,
            forward,
            reverse,
            best: forward.max(reverse),
        }
    })
}

/// Record with the highest `best` score; the earliest wins ties.
pub fn best_hit(records: &[ScanRecord]) -> Option<&ScanRecord> {
    let mut best: Option<&ScanRecord> = None;
    for rec in records {
        if best.map_or(true, |b| rec.best > b.best) {
            best = Some(rec);
        }
    }
    best
}
