use crate::alphabets::Alphabet;
use crate::error::{BioError, BioResult};
use std::sync::LazyLock;

/// Sentinel emitted for any symbol without a Watson-Crick partner.
pub const UNKNOWN_BASE: u8 = b'N';

/// Number of canonical bases; also the row count of a motif profile.
pub const BASES: usize = 4;

/// Canonical bases in base-index order.
pub const BASE_ORDER: [u8; BASES] = *b"ACGT";

/// The canonical bases, either case.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

/// IUPAC nucleotide codes including `N`, either case.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTURYSWKMBDHVNacgturyswkmbdhvn")
}

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [UNKNOWN_BASE; 256];
    b"ACGT"
        .iter()
        .zip(b"TGCA".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a.to_ascii_lowercase() as usize] = b;
        });
    comp
});

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [u8::MAX; 256];
    for (idx, &b) in BASE_ORDER.iter().enumerate() {
        map[b as usize] = idx as u8;
        map[b.to_ascii_lowercase() as usize] = idx as u8;
    }
    map
});

/// Uppercase complement of `a`; either case is accepted.
#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

/// Checked form of [`complement`] for callers holding an arbitrary slice.
pub fn complement_of(base: &[u8]) -> BioResult<u8> {
    match base {
        [b] => Ok(complement(*b)),
        _ => Err(BioError::invalid_argument(format!(
            "expected a single base, got {} symbols",
            base.len()
        ))),
    }
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

/// Row of `a` in a motif profile (A=0, C=1, G=2, T=3).
#[inline]
pub fn base_index(a: u8) -> Option<usize> {
    match BASE_INDEX[a as usize] {
        u8::MAX => None,
        idx => Some(idx as usize),
    }
}
