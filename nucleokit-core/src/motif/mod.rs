//! Position-weight-matrix scoring of fixed-width windows.

mod profile;
mod scan;

pub use profile::MotifProfile;
pub use scan::{best_hit, scan_sequence, score_window, ScanRecord, Strand};

#[cfg(test)]
mod tests;
