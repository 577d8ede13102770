use anyhow::{Context, Result};
use log::info;
use nucleokit_core::io::{read_profile_from_path, write_scan_tsv, write_scan_tsv_to_path};
use nucleokit_core::motif::best_hit;
use std::io::Write;
use std::path::Path;

use super::load_sequence;

pub fn execute(
    profile_path: &Path,
    sequence_path: &Path,
    output: Option<&Path>,
    stdout: &mut impl Write,
) -> Result<()> {
    let profile = read_profile_from_path(profile_path).with_context(|| {
        format!("failed to load motif profile from {}", profile_path.display())
    })?;
    let sequence = load_sequence(sequence_path)?;

    info!(
        "Scanning sequence of length {} with motif length {}...",
        sequence.len(),
        profile.width()
    );

    let records = sequence.scan(&profile);
    if let Some(hit) = best_hit(&records) {
        info!(
            "Best window at position {} ({:?} strand, score {:.4})",
            hit.position,
            hit.strand(),
            hit.best
        );
    }

    match output {
        Some(path) => {
            write_scan_tsv_to_path(path, &records)
                .with_context(|| format!("failed to write results to {}", path.display()))?;
            info!("Results written to {}", path.display());
        }
        None => write_scan_tsv(stdout, &records).context("failed to write results")?,
    }

    Ok(())
}
