use crate::error::{BioError, BioResult};
use crate::io::extend_seq_bytes;
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one sequence from FASTA-style text.
///
/// Lines starting with `>` are headers: the first one names the record and
/// any later ones are skipped. All other lines are concatenated with their
/// whitespace removed. Any other byte is kept and uppercased; only empty
/// or unreadable input fails. `source_name` is only used in error messages.
pub fn read_record_from_reader<R: BufRead>(
    mut reader: R,
    source_name: &str,
) -> BioResult<SeqRecord> {
    let mut header: Option<String> = None;
    let mut seq_buf: Vec<u8> = Vec::new();
    let mut buf_line = String::new();
    let mut line_no = 0usize;

    loop {
        buf_line.clear();
        if reader.read_line(&mut buf_line)? == 0 {
            break;
        }
        line_no += 1;
        if let Some(rest) = buf_line.strip_prefix('>') {
            if header.is_none() {
                header = Some(rest.trim().to_string());
            } else {
                log::debug!("{source_name}: skipping extra header on line {line_no}");
            }
            continue;
        }
        extend_seq_bytes(&mut seq_buf, &buf_line);
    }

    if seq_buf.is_empty() {
        return Err(BioError::EmptySequence {
            source_name: source_name.to_string(),
        });
    }

    let seq = DnaSeq::from_lenient(seq_buf);
    log::debug!("{source_name}: read {} bases over {line_no} lines", seq.len());
    let foreign = seq.non_canonical_count();
    if foreign > 0 {
        log::warn!("{source_name}: {foreign} non-ACGT symbols will be ignored by scans");
    }

    let mut record = SeqRecord::new(seq);
    if let Some(header) = header.filter(|h| !h.is_empty()) {
        match header.split_once(char::is_whitespace) {
            Some((id, desc)) => {
                record = record.with_id(id);
                let desc = desc.trim();
                if !desc.is_empty() {
                    record = record.with_desc(desc);
                }
            }
            None => record = record.with_id(header.as_str()),
        }
    }
    Ok(record)
}

pub fn read_sequence_from_reader<R: BufRead>(reader: R, source_name: &str) -> BioResult<DnaSeq> {
    read_record_from_reader(reader, source_name).map(SeqRecord::into_seq)
}

pub fn read_sequence_from_path(path: impl AsRef<Path>) -> BioResult<DnaSeq> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_sequence_from_reader(BufReader::new(file), &path.display().to_string())
}
