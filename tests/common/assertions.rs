//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Valid nfp codes
const CODES: &str = "0123456789abcdef";

/// Assert text is a rectangular nfp document of the given size
pub fn assert_nfp_shape(text: &str, width: usize, height: usize) {
    assert!(
        !text.ends_with('\n'),
        "nfp output should not end with a newline"
    );
    let rows: Vec<&str> = text.split('\n').collect();
    assert_eq!(rows.len(), height, "row count of:\n{text}");
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "length of row {i}");
        assert!(
            row.chars().all(|c| CODES.contains(c)),
            "row {i} has characters outside the palette: {row:?}"
        );
    }
}

/// Assert every row of an nfp document is a single repeated code
pub fn assert_nfp_filled_with(text: &str, code: char) {
    assert!(
        text.split('\n').all(|row| row.chars().all(|c| c == code)),
        "Expected only '{code}', got:\n{text}"
    );
}
