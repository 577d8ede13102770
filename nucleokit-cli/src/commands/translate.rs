use anyhow::Result;
use nucleokit_core::seq::ReadingFrame;
use std::io::Write;
use std::path::Path;

use super::load_sequence;

pub fn execute(sequence_path: &Path, frame: usize, out: &mut impl Write) -> Result<()> {
    let frame = ReadingFrame::try_from(frame)?;
    let sequence = load_sequence(sequence_path)?;
    writeln!(out, "{}", sequence.translate_frame(frame))?;
    Ok(())
}

pub fn revcomp(sequence_path: &Path, out: &mut impl Write) -> Result<()> {
    let sequence = load_sequence(sequence_path)?;
    out.write_all(sequence.reverse_complement().as_bytes())?;
    writeln!(out)?;
    Ok(())
}
