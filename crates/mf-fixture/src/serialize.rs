use std::io::Write;

use mf_matrix::Matrix;

use crate::error::{FixtureError, Result};

/// Flatten a matrix row-major into one comma-separated record and append it
/// to the writer, terminated by a line break.
///
/// The record is formatted in memory and written with a single `write_all`,
/// so a failed call never leaves a partial record behind. Values use Rust's
/// shortest-round-trip f64 formatting; parsing the record back reproduces
/// the matrix bit for bit.
pub fn write_row<W: Write>(matrix: &Matrix, writer: &mut W) -> Result<()> {
    let mut record = String::new();
    for (i, v) in matrix.data().iter().enumerate() {
        if i > 0 {
            record.push(',');
        }
        record.push_str(&v.to_string());
    }
    record.push('\n');
    writer.write_all(record.as_bytes())?;
    Ok(())
}

/// Parse one flattened record back into a matrix of the declared shape.
///
/// Fails if the record does not hold exactly `rows * cols` values or if any
/// field is not valid decimal text.
pub fn parse_row(line: &str, rows: usize, cols: usize) -> Result<Matrix> {
    let mut data = Vec::with_capacity(rows * cols);
    for field in line.trim_end_matches(['\r', '\n']).split(',') {
        let v: f64 = field
            .parse()
            .map_err(|_| FixtureError::Parse(format!("invalid value '{field}'")))?;
        data.push(v);
    }
    if data.len() != rows * cols {
        return Err(FixtureError::Parse(format!(
            "record holds {} values but shape {}x{} needs {}",
            data.len(),
            rows,
            cols,
            rows * cols
        )));
    }
    Ok(Matrix::new(data, rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_row_format() {
        let m = Matrix::new(vec![1.0, 2.5, 3.0, 4.0], 2, 2);
        let mut buf = Vec::new();
        write_row(&m, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,2.5,3,4\n");
    }

    #[test]
    fn test_each_call_is_one_record() {
        let m = Matrix::new(vec![1.0, 2.0], 1, 2);
        let mut buf = Vec::new();
        write_row(&m, &mut buf).unwrap();
        write_row(&m, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        // Values with no finite decimal expansion must survive unchanged.
        let m = Matrix::new(
            vec![0.1, 1.0 / 3.0, f64::MIN_POSITIVE, 1e300, 0.0, 0.30000000000000004],
            2,
            3,
        );
        let mut buf = Vec::new();
        write_row(&m, &mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        let back = parse_row(&line, 2, 3).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_parse_row_wrong_arity() {
        assert!(matches!(
            parse_row("1,2,3\n", 2, 2),
            Err(FixtureError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_row_bad_value() {
        assert!(matches!(
            parse_row("1,zap,3,4\n", 2, 2),
            Err(FixtureError::Parse(_))
        ));
    }

    #[test]
    fn test_write_row_failure_leaves_no_partial_record() {
        struct FullSink;
        impl Write for FullSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "sink full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let m = Matrix::new(vec![1.0, 2.0], 1, 2);
        assert!(matches!(
            write_row(&m, &mut FullSink),
            Err(FixtureError::Io(_))
        ));
    }
}
