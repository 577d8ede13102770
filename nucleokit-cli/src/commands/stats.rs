use anyhow::Result;
use nucleokit_core::alphabets::dna::BASE_ORDER;
use std::io::Write;
use std::path::Path;

use super::load_sequence;

/// Print length, per-base counts, GC content and the last `ATG` offset.
pub fn execute(sequence_path: &Path, out: &mut impl Write) -> Result<()> {
    let sequence = load_sequence(sequence_path)?;
    writeln!(out, "length\t{}", sequence.len())?;
    for base in BASE_ORDER {
        writeln!(out, "{}\t{}", base as char, sequence.count(&[base])?)?;
    }
    writeln!(out, "gc_percent\t{:.2}", sequence.gc_percent())?;
    writeln!(out, "gc_rich\t{}", sequence.is_gc_rich())?;
    match sequence.last_start_codon() {
        Some(pos) => writeln!(out, "last_start\t{pos}")?,
        None => writeln!(out, "last_start\t-")?,
    }
    Ok(())
}
