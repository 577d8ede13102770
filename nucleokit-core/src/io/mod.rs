pub mod fasta;
pub mod profile;
pub mod tsv;

pub use fasta::{read_record_from_reader, read_sequence_from_path, read_sequence_from_reader};
pub use profile::{read_profile_from_path, read_profile_from_reader};
pub use tsv::{write_scan_tsv, write_scan_tsv_to_path, SCAN_HEADER};

/// Append `input` to `out`, dropping ASCII whitespace.
pub(crate) fn extend_seq_bytes(out: &mut Vec<u8>, input: &str) {
    out.extend(input.bytes().filter(|b| !b.is_ascii_whitespace()));
}
