use crate::alphabets::dna;
use crate::error::{BioError, BioResult};
use crate::motif::{self, MotifProfile, ScanRecord};
use crate::orf::{self, Orf};
use crate::seq::protein::ProteinSeq;
use crate::seq::ReadingFrame;
use crate::translation::{self, START_CODON};

use memchr::{memchr_iter, memmem};

/// GC percentage at or above which a sequence counts as GC rich.
pub const GC_RICH_PERCENT: f64 = 55.0;

/// An owned DNA sequence, normalized to uppercase.
///
/// Bases outside ACGT are carried through and handled leniently by the
/// scanners: they never match a codon and score 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    /// Strict constructor: every byte must be an IUPAC nucleotide code.
    pub fn new(mut bytes: Vec<u8>) -> BioResult<Self> {
        if let Some((pos, b)) = dna::iupac_alphabet().first_foreign(&bytes) {
            return Err(BioError::InvalidChar { ch: b as char, pos });
        }
        bytes.make_ascii_uppercase();
        Ok(Self { bytes })
    }

    /// Accept any bytes (gaps, stop marks, digits) and only uppercase them.
    pub fn from_lenient(mut bytes: Vec<u8>) -> Self {
        bytes.make_ascii_uppercase();
        Self { bytes }
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse_complement(&self) -> Self {
        Self::from_bytes_unchecked(dna::reverse_complement(self.as_bytes()))
    }

    /// Number of bytes outside ACGT.
    pub fn non_canonical_count(&self) -> usize {
        let canonical = dna::alphabet();
        self.bytes.iter().filter(|&&b| !canonical.contains(b)).count()
    }

    /// Occurrences of a single base; case-insensitive.
    pub fn count(&self, letter: &[u8]) -> BioResult<usize> {
        match letter {
            [b] => Ok(memchr_iter(b.to_ascii_uppercase(), self.as_bytes()).count()),
            _ => Err(BioError::invalid_argument(format!(
                "letter must be a single character, got {}",
                letter.len()
            ))),
        }
    }

    /// G plus C as a percentage of the length; 0 for an empty sequence.
    pub fn gc_percent(&self) -> f64 {
        if self.bytes.is_empty() {
            return 0.0;
        }
        let gc = memchr_iter(b'G', &self.bytes).count() + memchr_iter(b'C', &self.bytes).count();
        100.0 * gc as f64 / self.bytes.len() as f64
    }

    pub fn is_gc_rich(&self) -> bool {
        self.gc_percent() >= GC_RICH_PERCENT
    }

    /// Offset of the last `ATG` at any offset, regardless of frame.
    pub fn last_start_codon(&self) -> Option<usize> {
        memmem::rfind(self.as_bytes(), START_CODON)
    }

    pub fn translate(&self) -> ProteinSeq {
        ProteinSeq::from_bytes_unchecked(translation::translate(self.as_bytes()))
    }

    pub fn translate_frame(&self, frame: ReadingFrame) -> ProteinSeq {
        ProteinSeq::from_bytes_unchecked(translation::translate_frame(self.as_bytes(), frame))
    }

    pub fn orfs(&self) -> Vec<Orf<'_>> {
        orf::find_orfs(self.as_bytes())
    }

    pub fn longest_orf(&self) -> &[u8] {
        orf::longest_orf(self.as_bytes())
    }

    pub fn scan(&self, profile: &MotifProfile) -> Vec<ScanRecord> {
        motif::scan_sequence(self.as_bytes(), profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_case() {
        let s = DnaSeq::new(b"acgTn".to_vec()).unwrap();
        assert_eq!(s.as_bytes(), b"ACGTN");
        assert_eq!(s.non_canonical_count(), 1);
    }

    #[test]
    fn new_rejects_non_nucleotides() {
        let err = DnaSeq::new(b"AC#T".to_vec()).unwrap_err();
        match err {
            BioError::InvalidChar { ch: '#', pos: 2 } => {}
            other => panic!("expected invalid char error, got {other:?}"),
        }
        assert!(DnaSeq::new(b"AC-GT".to_vec()).is_err());
    }

    #[test]
    fn lenient_keeps_gaps_and_marks() {
        let s = DnaSeq::from_lenient(b"ac-gt*.1".to_vec());
        assert_eq!(s.as_bytes(), b"AC-GT*.1");
        assert_eq!(s.non_canonical_count(), 4);
    }

    #[test]
    fn reverse_complement_basic() {
        let s = DnaSeq::new(b"ttgac".to_vec()).unwrap();
        assert_eq!(s.reverse_complement().as_bytes(), b"GTCAA");
    }

    #[test]
    fn count_single_base() {
        let s = DnaSeq::new(b"ACGTACGT".to_vec()).unwrap();
        assert_eq!(s.count(b"A").unwrap(), 2);
        assert_eq!(s.count(b"g").unwrap(), 2);
        assert_eq!(s.count(b"N").unwrap(), 0);
    }

    #[test]
    fn count_rejects_multi_symbol_letter() {
        let s = DnaSeq::new(b"AAAA".to_vec()).unwrap();
        assert!(matches!(
            s.count(b"AA"),
            Err(BioError::InvalidArgument { .. })
        ));
        assert!(s.count(b"").is_err());
    }

    #[test]
    fn gc_percent_and_richness() {
        let s = DnaSeq::new(b"GGCCAATT".to_vec()).unwrap();
        assert!((s.gc_percent() - 50.0).abs() < 1e-12);
        assert!(!s.is_gc_rich());

        let s = DnaSeq::new(b"gtaccgt".to_vec()).unwrap();
        // 4 of 7
        assert!((s.gc_percent() - 400.0 / 7.0).abs() < 1e-12);
        assert!(s.is_gc_rich());

        assert_eq!(DnaSeq::from_lenient(Vec::new()).gc_percent(), 0.0);
    }

    #[test]
    fn last_start_codon_ignores_frame() {
        let s = DnaSeq::new(b"ttacatgcatgc".to_vec()).unwrap();
        assert_eq!(s.last_start_codon(), Some(8));
        let s = DnaSeq::new(b"gtaccca".to_vec()).unwrap();
        assert_eq!(s.last_start_codon(), None);
    }

    #[test]
    fn translate_and_orfs() {
        let s = DnaSeq::new(b"ccatgaaatagccc".to_vec()).unwrap();
        assert_eq!(s.translate_frame(ReadingFrame::Two).as_bytes(), b"MK*P");
        assert_eq!(s.longest_orf(), b"ATGAAA");
        assert_eq!(s.orfs().len(), 1);
    }
}
