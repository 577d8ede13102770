pub mod motif;
pub mod orf;
pub mod stats;
pub mod translate;

use anyhow::{Context, Result};
use nucleokit_core::io::read_sequence_from_path;
use nucleokit_core::seq::DnaSeq;
use std::path::Path;

pub(crate) fn load_sequence(path: &Path) -> Result<DnaSeq> {
    read_sequence_from_path(path)
        .with_context(|| format!("failed to load sequence from {}", path.display()))
}
