pub mod dna;
pub mod protein;
pub mod record;

pub use dna::DnaSeq;
pub use protein::ProteinSeq;
pub use record::SeqRecord;

use crate::error::BioError;
use std::fmt;

/// Codon alignment of a sequence: the offset of the first codon boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadingFrame {
    Zero,
    One,
    Two,
}

impl ReadingFrame {
    pub const ALL: [ReadingFrame; 3] = [ReadingFrame::Zero, ReadingFrame::One, ReadingFrame::Two];

    #[inline]
    pub fn offset(self) -> usize {
        match self {
            ReadingFrame::Zero => 0,
            ReadingFrame::One => 1,
            ReadingFrame::Two => 2,
        }
    }

    /// The part of `seq` read in this frame; empty when `seq` is shorter than the offset.
    #[inline]
    pub fn slice(self, seq: &[u8]) -> &[u8] {
        &seq[self.offset().min(seq.len())..]
    }
}

impl TryFrom<usize> for ReadingFrame {
    type Error = BioError;

    fn try_from(frame: usize) -> Result<Self, Self::Error> {
        match frame {
            0 => Ok(ReadingFrame::Zero),
            1 => Ok(ReadingFrame::One),
            2 => Ok(ReadingFrame::Two),
            _ => Err(BioError::InvalidFrame { frame }),
        }
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset())
    }
}
