//! Row-key matching over raw row sets.

/// Find the first row whose keyed columns all equal the given values,
/// comparing exact strings after trimming both sides. Missing columns
/// never match.
///
/// No uniqueness is enforced: writes are append-only with no
/// dedup-on-write, so duplicate keys can exist and the first match wins.
pub fn find_row(rows: &[Vec<String>], keys: &[(usize, &str)]) -> Option<usize> {
    rows.iter().position(|row| {
        keys.iter()
            .all(|(col, want)| row.get(*col).is_some_and(|cell| cell.trim() == want.trim()))
    })
}
