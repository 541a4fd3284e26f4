use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").expect("separator pattern is valid"));

pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Whether the line belongs to a table (trimmed form starts with a pipe).
    pub fn is_row(line: &str) -> bool {
        line.trim().starts_with(Self::PIPE)
    }

    /// Splits a row into trimmed cells, dropping the fields outside the
    /// boundary pipes.
    ///
    /// A row without a closing pipe loses its last cell, as the dialect has
    /// always done.
    pub fn cells(line: &str) -> Vec<String> {
        let fields: Vec<&str> = line.split(Self::PIPE).collect();
        if fields.len() < 2 {
            return vec![];
        }
        fields[1..fields.len() - 1]
            .iter()
            .map(|c| c.trim().to_string())
            .collect()
    }

    /// An alignment row like `|---|:--:|`. Empty cells are ignored, so a row
    /// with no non-empty cells also counts.
    pub fn is_separator(cells: &[String]) -> bool {
        cells
            .iter()
            .filter(|c| !c.is_empty())
            .all(|c| SEPARATOR_CELL.is_match(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn splits_cells() {
        assert_eq!(Table::cells("| Name | Value |"), vec!["Name", "Value"]);
    }

    #[test]
    fn keeps_surrounding_whitespace_out_of_cells() {
        assert_eq!(Table::cells("  | x |  1 |  "), vec!["x", "1"]);
    }

    #[test]
    fn missing_closing_pipe_drops_last_field() {
        assert_eq!(Table::cells("| a | b"), vec!["a"]);
    }

    #[rstest]
    #[case("|------|-------|", true)]
    #[case("|:---|---:|:-:|", true)]
    #[case("|---||", true)]
    #[case("| x | 1 |", false)]
    #[case("|---| x |", false)]
    fn separator_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Table::is_separator(&Table::cells(line)), expected);
    }

    #[test]
    fn row_detection_uses_trimmed_line() {
        assert!(Table::is_row("   | a |"));
        assert!(!Table::is_row("a | b"));
    }
}
