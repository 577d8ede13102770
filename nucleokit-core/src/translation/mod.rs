//! Standard genetic code lookups.
//!
//! Codons are indexed by packing the base index (A=0, C=1, G=2, T=3) of each
//! position into two bits, so the table below is ordered AAA, AAC, ... TTT.
//! The ORF finder only needs [`is_start_codon`] and [`is_stop_codon`]; it
//! never consults the amino-acid table.

use crate::alphabets::dna::base_index;
use crate::error::{BioError, BioResult};
use crate::seq::ReadingFrame;

/// Amino-acid code emitted for stop codons.
pub const STOP: u8 = b'*';

/// Amino-acid code emitted for codons that are not in the table.
pub const UNKNOWN_AMINO_ACID: u8 = b'X';

pub const START_CODON: &[u8; 3] = b"ATG";

pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

#[inline]
fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [a, b, c] => {
            let i1 = base_index(*a)?;
            let i2 = base_index(*b)?;
            let i3 = base_index(*c)?;
            Some((i1 << 4) | (i2 << 2) | i3)
        }
        _ => None,
    }
}

/// One-letter code for `codon`, case-insensitive.
///
/// Anything that is not exactly three canonical bases maps to
/// [`UNKNOWN_AMINO_ACID`]; this never fails.
#[inline]
pub fn amino_acid_for(codon: &[u8]) -> u8 {
    codon_index(codon).map_or(UNKNOWN_AMINO_ACID, |idx| CODON_TABLE[idx])
}

pub fn amino_acid_for_checked(codon: &[u8]) -> BioResult<u8> {
    if codon.len() != 3 {
        return Err(BioError::invalid_argument(format!(
            "codon must be exactly 3 bases, got {}",
            codon.len()
        )));
    }
    Ok(amino_acid_for(codon))
}

#[inline]
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon.eq_ignore_ascii_case(START_CODON)
}

#[inline]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon.eq_ignore_ascii_case(*stop))
}

/// Translate whole codons from offset 0; a trailing 1-2 base fragment is dropped.
pub fn translate(seq: &[u8]) -> Vec<u8> {
    seq.chunks_exact(3).map(amino_acid_for).collect()
}

pub fn translate_frame(seq: &[u8], frame: ReadingFrame) -> Vec<u8> {
    translate(frame.slice(seq))
}
