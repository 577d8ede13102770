use crate::alphabets::dna::BASES;
use crate::error::{BioError, BioResult};

/// Additive weight table: one row per base in A, C, G, T order, one column
/// per motif position.
#[derive(Clone, Debug, PartialEq)]
pub struct MotifProfile {
    rows: [Vec<f64>; BASES],
    width: usize,
}

impl MotifProfile {
    pub fn new(rows: Vec<Vec<f64>>) -> BioResult<Self> {
        let rows: [Vec<f64>; BASES] = rows
            .try_into()
            .map_err(|rows: Vec<Vec<f64>>| BioError::ProfileRowCount { found: rows.len() })?;

        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(BioError::ProfileInconsistentWidth {
                widths: rows.iter().map(Vec::len).collect(),
            });
        }
        if width == 0 {
            return Err(BioError::ProfileEmpty);
        }

        Ok(Self { rows, width })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Weights of the base with index `base` (A=0, C=1, G=2, T=3).
    #[inline]
    pub fn row(&self, base: usize) -> &[f64] {
        &self.rows[base]
    }

    #[inline]
    pub fn weight(&self, base: usize, column: usize) -> f64 {
        self.rows[base][column]
    }

    pub fn rows(&self) -> &[Vec<f64>; BASES] {
        &self.rows
    }
}
