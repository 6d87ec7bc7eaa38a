//! Tests for the row-key matcher.

use intake_tracking::matcher::find_row;

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn matches_on_all_keyed_columns_after_trimming() {
    let table = rows(&[
        &["jane_doe_1", "phq9", "Not Started"],
        &[" jane_doe_1 ", " gad7 ", "Not Started"],
    ]);

    assert_eq!(find_row(&table, &[(0, "jane_doe_1"), (1, "gad7")]), Some(1));
    assert_eq!(find_row(&table, &[(0, "jane_doe_1 "), (1, "phq9")]), Some(0));
    assert_eq!(find_row(&table, &[(0, "jane_doe_2"), (1, "gad7")]), None);
}

#[test]
fn first_match_wins_when_duplicate_keys_exist() {
    let table = rows(&[
        &["jane_doe_1", "gad7", "Not Started"],
        &["jane_doe_1", "gad7", "Completed"],
    ]);

    assert_eq!(find_row(&table, &[(0, "jane_doe_1"), (1, "gad7")]), Some(0));
}

#[test]
fn short_rows_never_match() {
    let table = rows(&[&["jane_doe_1"], &[]]);
    assert_eq!(find_row(&table, &[(0, "jane_doe_1"), (1, "gad7")]), None);
}
