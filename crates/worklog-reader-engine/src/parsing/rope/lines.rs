use xi_rope::Rope;

/// A single source line with its number.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-indexed line number. This is the value anchors are built from.
    pub number: usize,
    /// The line text without its trailing `\n` / `\r\n`.
    pub text: String,
}

/// Returns an iterator over the numbered lines of the rope.
///
/// A trailing newline does not produce an extra empty line.
pub fn numbered_lines(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    rope.lines_raw(..).enumerate().map(|(idx, line)| LineRef {
        number: idx + 1,
        text: line.trim_end_matches(['\r', '\n']).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_lines_from_one() {
        let rope = Rope::from("a\nb\nc");
        let numbers: Vec<_> = numbered_lines(&rope).map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn strips_line_terminators() {
        let rope = Rope::from("one\r\ntwo\n");
        let texts: Vec<_> = numbered_lines(&rope).map(|l| l.text).collect();
        assert_eq!(texts, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn blank_lines_are_kept() {
        let rope = Rope::from("a\n\nb");
        let texts: Vec<_> = numbered_lines(&rope).map(|l| l.text).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }

    #[test]
    fn empty_rope_has_no_lines() {
        let rope = Rope::from("");
        assert_eq!(numbered_lines(&rope).count(), 0);
    }
}
