//! Open reading frame discovery over the three forward frames.
//!
//! An ORF starts at an in-frame `ATG` and runs up to, but not including, the
//! first in-frame stop codon. Without a stop it runs to the end of the input,
//! so an unterminated ORF may end on a partial codon.

use crate::seq::ReadingFrame;
use crate::translation::{is_start_codon, is_stop_codon};
use std::fmt;


/// An ORF located in a parent sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orf<'a> {
    pub frame: ReadingFrame,
    /// Offset of the start codon in the parent sequence.
    pub start: usize,
    pub bases: &'a [u8],
    pub stop_terminated: bool,
}

impl<'a> Orf<'a> {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Exclusive end offset in the parent sequence.
    pub fn end(&self) -> usize {
        self.start + self.bases.len()
    }
}

/// Length of the ORF beginning at offset 0 of `seq`, and whether a stop ended it.
fn orf_extent(seq: &[u8]) -> (usize, bool) {
    match seq.chunks_exact(3).position(is_stop_codon) {
        Some(codon) => (codon * 3, true),
        None => (seq.len(), false),
    }
}

/// Offsets of every in-frame start codon, scanning codons from offset 0.
fn start_offsets(seq: &[u8]) -> impl Iterator<Item = usize> + '_ {
    seq.chunks_exact(3)
        .enumerate()
        .filter(|(_, codon)| is_start_codon(codon))
        .map(|(i, _)| i * 3)
}

/// Prefix of `seq` ending just before the first in-frame stop codon.
///
/// `seq` is assumed to begin at a start codon. If no stop is found the whole
/// input is returned.
pub fn orf_from_start(seq: &[u8]) -> &[u8] {
    let (len, _) = orf_extent(seq);
    &seq[..len]
}

/// Every ORF in frame 0 of `seq`, left to right.
///
/// Starts nested inside an earlier ORF are reported as ORFs of their own.
pub fn orfs_in_frame(seq: &[u8]) -> Vec<&[u8]> {
    start_offsets(seq)
        .map(|start| orf_from_start(&seq[start..]))
        .collect()
}

/// ORFs from frames 0, 1 and 2 in that order, each frame left to right.
pub fn find_orfs(seq: &[u8]) -> Vec<Orf<'_>> {
    let mut out = Vec::new();
    for frame in ReadingFrame::ALL {
        let framed = frame.slice(seq);
        let before = out.len();
        out.extend(start_offsets(framed).map(|offset| {
            let start = frame.offset() + offset;
            let (len, stop_terminated) = orf_extent(&seq[start..]);
            Orf {
                frame,
                start,
                bases: &seq[start..start + len],
                stop_terminated,
            }
        }));
        log::trace!("frame {frame}: {} ORFs", out.len() - before);
    }
    out
}

/// The longest ORF across all three frames, first found on ties.
pub fn longest_orf_record(seq: &[u8]) -> Option<Orf<'_>> {
    let mut best: Option<Orf<'_>> = None;
    for orf in find_orfs(seq) {
        if best.map_or(true, |b| orf.len() > b.len()) {
            best = Some(orf);
        }
    }
    best
}

/// Longest ORF across frames 0, 1 and 2; empty when there is none.
pub fn longest_orf(seq: &[u8]) -> &[u8] {
    longest_orf_record(seq).map(|orf| orf.bases).unwrap_or(&[])
}

/// Outcome of checking whether a string is, as a whole, an ORF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrfVerdict {
    Valid,
    TooShort,
    MissingStart,
    MissingStop,
    BadLength,
}

impl OrfVerdict {
    pub fn is_valid(self) -> bool {
        self == OrfVerdict::Valid
    }
}

impl fmt::Display for OrfVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            OrfVerdict::Valid => "This is an ORF.",
            OrfVerdict::TooShort => {
                "The string is too short to be an ORF (minimum 3 bases required)."
            }
            OrfVerdict::MissingStart => "The first three bases are not ATG.",
            OrfVerdict::MissingStop => "The last three bases are not a stop codon.",
            OrfVerdict::BadLength => "The string is not of the correct length.",
        };
        f.write_str(msg)
    }
}

/// Check that `candidate` starts with ATG, ends with a stop codon and is a
/// whole number of codons. Case-insensitive.
pub fn classify_orf(candidate: &[u8]) -> OrfVerdict {
    if candidate.len() < 3 {
        return OrfVerdict::TooShort;
    }
    let head = &candidate[..3];
    let tail = &candidate[candidate.len() - 3..];

    if !is_start_codon(head) {
        OrfVerdict::MissingStart
    } else if !is_stop_codon(tail) {
        OrfVerdict::MissingStop
    } else if candidate.len() % 3 != 0 {
        OrfVerdict::BadLength
    } else {
        OrfVerdict::Valid
    }
}
