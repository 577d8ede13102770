use crate::error::BioResult;
use crate::motif::ScanRecord;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

pub const SCAN_HEADER: [&str; 4] = ["position", "score_forward", "score_reverse", "score_best"];

/// Write scan records as tab-delimited rows under [`SCAN_HEADER`], scores to 4 decimals.
pub fn write_scan_tsv<W: Write>(writer: W, records: &[ScanRecord]) -> BioResult<()> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    writer.write_record(SCAN_HEADER)?;
    for rec in records {
        writer.write_record([
            rec.position.to_string(),
            format!("{:.4}", rec.forward),
            format!("{:.4}", rec.reverse),
            format!("{:.4}", rec.best),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_scan_tsv_to_path(path: impl AsRef<Path>, records: &[ScanRecord]) -> BioResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_scan_tsv(file, records)
}
