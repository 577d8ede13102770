use anyhow::Result;
use log::{debug, info};
use nucleokit_core::orf::classify_orf;
use std::io::Write;
use std::path::Path;

use super::load_sequence;

pub fn execute(sequence_path: &Path, all: bool, out: &mut impl Write) -> Result<()> {
    let sequence = load_sequence(sequence_path)?;
    let orfs = sequence.orfs();
    debug!("found {} ORFs across three frames", orfs.len());

    if all {
        writeln!(out, "frame\tstart\tlength\tstop\tsequence")?;
        for orf in &orfs {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                orf.frame,
                orf.start,
                orf.len(),
                if orf.stop_terminated { "yes" } else { "no" },
                String::from_utf8_lossy(orf.bases)
            )?;
        }
        return Ok(());
    }

    let longest = sequence.longest_orf();
    if longest.is_empty() {
        info!("No ORF found in any frame");
    } else {
        info!("Longest ORF has {} bases", longest.len());
    }
    writeln!(out, "{}", String::from_utf8_lossy(longest))?;
    Ok(())
}

pub fn check(candidate: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", classify_orf(candidate.trim().as_bytes()))?;
    Ok(())
}
