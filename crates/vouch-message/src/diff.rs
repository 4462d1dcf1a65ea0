//! Plain-text diff between the rendered actual and expected values.
//!
//! The diff aligns three rows per compared line:
//!
//! ```text
//! actual  : foo-bar
//! diff    : ====-==+
//! expected: foo=baz
//! ```
//!
//! where `-` marks a character to remove from the actual value, `+` a
//! character to add, and padding keeps the rows aligned. Multiline values
//! label each row with `@line-number`.

/// Legend appended after every diff section.
pub const DIFF_LEGEND: &[&str] = &[
    "",
    "Legend",
    "------",
    "+           : Add this character to the value",
    "-           : Remove this character from the value",
    "@line-number: Refers to the line number of a multiline string",
];

/// Character count beyond which the diff is skipped; a diff of two huge
/// renderings is noise, not help.
const MAX_DIFF_LEN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Equal(char),
    Delete(char),
    Insert(char),
}

/// Produces diff lines comparing two rendered values, or `None` when the
/// values are equal, identical-looking, or too large to diff usefully.
pub fn diff_values(actual: &str, expected: &str) -> Option<Vec<String>> {
    if actual == expected {
        return None;
    }
    if actual.chars().count() > MAX_DIFF_LEN || expected.chars().count() > MAX_DIFF_LEN {
        return None;
    }

    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let multiline = actual_lines.len() > 1 || expected_lines.len() > 1;

    let mut out = Vec::new();
    let line_count = actual_lines.len().max(expected_lines.len());
    for index in 0..line_count {
        let actual_line = actual_lines.get(index).copied().unwrap_or("");
        let expected_line = expected_lines.get(index).copied().unwrap_or("");
        if multiline && actual_line == expected_line {
            continue;
        }
        let (actual_row, diff_row, expected_row) = render_rows(actual_line, expected_line);
        if multiline {
            let label = index + 1;
            let actual_label = format!("actual@{label}");
            let expected_label = format!("expected@{label}");
            // The widest label sets the column so the rows stay aligned
            // for any line number.
            let width = expected_label.len();
            out.push(format!("{actual_label:<width$}: {actual_row}"));
            out.push(format!("{:<width$}: {diff_row}", "diff"));
            out.push(format!("{expected_label:<width$}: {expected_row}"));
        } else {
            out.push(format!("actual  : {actual_row}"));
            out.push(format!("diff    : {diff_row}"));
            out.push(format!("expected: {expected_row}"));
        }
    }
    out.extend(DIFF_LEGEND.iter().map(|line| (*line).to_string()));
    Some(out)
}

/// Renders one line pair as aligned actual/diff/expected rows.
fn render_rows(actual: &str, expected: &str) -> (String, String, String) {
    let mut actual_row = String::new();
    let mut diff_row = String::new();
    let mut expected_row = String::new();

    for edit in edit_script(actual, expected) {
        match edit {
            Edit::Equal(c) => {
                actual_row.push(c);
                diff_row.push(' ');
                expected_row.push(c);
            }
            Edit::Delete(c) => {
                actual_row.push(c);
                diff_row.push('-');
                expected_row.push(' ');
            }
            Edit::Insert(c) => {
                actual_row.push(' ');
                diff_row.push('+');
                expected_row.push(c);
            }
        }
    }
    (actual_row, diff_row, expected_row)
}

/// Longest-common-subsequence edit script, deletions before insertions.
fn edit_script(actual: &str, expected: &str) -> Vec<Edit> {
    let a: Vec<char> = actual.chars().collect();
    let b: Vec<char> = expected.chars().collect();

    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut edits = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            edits.push(Edit::Equal(a[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            edits.push(Edit::Delete(a[i]));
            i += 1;
        } else {
            edits.push(Edit::Insert(b[j]));
            j += 1;
        }
    }
    edits.extend(a[i..].iter().map(|&c| Edit::Delete(c)));
    edits.extend(b[j..].iter().map(|&c| Edit::Insert(c)));
    edits
}
