use crate::error::{BioError, BioResult};
use crate::motif::MotifProfile;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a whitespace-delimited weight table, one row per line (A, C, G, T).
///
/// Blank lines are ignored but still counted for error line numbers.
pub fn read_profile_from_reader<R: BufRead>(reader: R) -> BioResult<MotifProfile> {
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(4);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| BioError::ProfileNonNumeric {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<BioResult<Vec<f64>>>()?;
        rows.push(row);
    }

    let profile = MotifProfile::new(rows)?;
    log::debug!("loaded motif profile of width {}", profile.width());
    Ok(profile)
}

pub fn read_profile_from_path(path: impl AsRef<Path>) -> BioResult<MotifProfile> {
    let file = File::open(path.as_ref())?;
    read_profile_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn read(data: &str) -> BioResult<MotifProfile> {
        read_profile_from_reader(Cursor::new(data.as_bytes()))
    }

    #[test]
    fn parse_four_rows() {
        let p = read("1 0\n0 1\n\n0.5\t-0.25\n0 0\n").unwrap();
        assert_eq!(p.width(), 2);
        assert_eq!(p.row(2), &[0.5, -0.25]);
        assert_eq!(p.weight(1, 1), 1.0);
    }

    #[test]
    fn non_numeric_token_reports_line() {
        match read("1 0\n\n0 x1\n0 0\n0 0\n").unwrap_err() {
            BioError::ProfileNonNumeric { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "x1");
            }
            other => panic!("expected non-numeric error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_row_count() {
        let err = read("1 0\n0 1\n0 0\n").unwrap_err();
        assert!(matches!(err, BioError::ProfileRowCount { found: 3 }));
        let err = read("").unwrap_err();
        assert!(matches!(err, BioError::ProfileRowCount { found: 0 }));
    }

    #[test]
    fn inconsistent_widths() {
        let err = read("1 0\n0 1 2\n0 0\n0 0\n").unwrap_err();
        assert!(matches!(err, BioError::ProfileInconsistentWidth { .. }));
    }

    #[test]
    fn read_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 2 3\n4 5 6\n7 8 9\n0 0 0\n").unwrap();
        let p = read_profile_from_path(file.path()).unwrap();
        assert_eq!(p.width(), 3);
        assert_eq!(p.weight(2, 0), 7.0);
    }
}
