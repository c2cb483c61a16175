//! Reads matrices back from text.
//!
//! The accepted format is what [`Matrix`]'s `Display` prints (numpy style), plus looser forms:
//!
//! ```text
//! [[1. 2.]          [[1, 2], [3, 4]]          1 2
//!  [3. 4.]]                                   3 4
//! ```
//!
//! Without brackets each non-empty line or `;`-separated segment is a row.

use std::path::Path;

use regex::Regex;

use crate::{Error, Matrix, Result};

pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let re_row = Regex::new(r"\[([^\[\]]*)\]").expect("Regex failed!");
    let re_separator = Regex::new(r"[\s,]+").expect("Regex failed!");

    let segments: Vec<&str> = if text.contains('[') {
        re_row
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|row| !row.trim().is_empty())
            .collect()
    } else {
        text.split(|c: char| c == '\n' || c == ';')
            .filter(|row| !row.trim().is_empty())
            .collect()
    };

    let mut rows = Vec::with_capacity(segments.len());
    for (row, segment) in segments.iter().enumerate() {
        let values = re_separator
            .split(segment.trim())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| Error::Parse {
                    row,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(values);
    }
    log::trace!("parsed {} rows", rows.len());
    Matrix::from_rows(&rows)
}

pub fn read_matrix(path: &Path) -> Result<Matrix> {
    let text = std::fs::read_to_string(path)?;
    parse_matrix(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_by_two() -> Matrix {
        Matrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap()
    }

    #[test]
    fn numpy_style() {
        assert_eq!(parse_matrix("[[1. 2.]\n [3. 4.]]").unwrap(), two_by_two());
    }

    #[test]
    fn wrapped_numpy_rows() {
        let text = "[[1.0 2.0\n  3.0]\n [4.0 5.0\n  6.0]\n [7.0 8.0\n  9.0]]";
        let m = parse_matrix(text).unwrap();
        assert_eq!(m.dimension(), 3);
        assert_eq!(m.row(2), &[7., 8., 9.]);
    }

    #[test]
    fn nested_lists_and_plain_rows() {
        assert_eq!(parse_matrix("[[1, 2], [3, 4]]").unwrap(), two_by_two());
        assert_eq!(parse_matrix("1 2\n\n3 4\n").unwrap(), two_by_two());
        assert_eq!(parse_matrix("1,2; 3,4").unwrap(), two_by_two());
    }

    #[test]
    fn empty_input_is_the_empty_matrix() {
        assert_eq!(parse_matrix("").unwrap(), Matrix::zero(0));
        assert_eq!(parse_matrix("[]").unwrap(), Matrix::zero(0));
        assert_eq!(parse_matrix(" \n ").unwrap(), Matrix::zero(0));
    }

    #[test]
    fn display_output_reads_back() {
        let m = Matrix::from_rows(&[[0.125, -2.5, 1e-3], [7., 0., 3.75], [1., 2., 3.]]).unwrap();
        assert_eq!(parse_matrix(&format!("{:.4}", m)).unwrap(), m);
    }

    #[test]
    fn bad_token() {
        match parse_matrix("1 2\n3 x") {
            Err(Error::Parse { row: 1, token }) => assert_eq!(token, "x"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn ragged_rows() {
        assert!(matches!(
            parse_matrix("[[1 2] [3]]"),
            Err(Error::NotSquare { row: 1, .. })
        ));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("densemul-does-not-exist.txt");
        assert!(matches!(read_matrix(&path), Err(Error::Io(_))));
    }
}
