use std::fmt;

/// Residues produced by translating a [`DnaSeq`](crate::seq::DnaSeq).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
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
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the codon table only emits ASCII
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_residues() {
        let p = ProteinSeq::from_bytes_unchecked(b"SPGF".to_vec());
        assert_eq!(p.to_string(), "SPGF");
        assert_eq!(p.len(), 4);
        assert!(!p.is_empty());
    }
}
