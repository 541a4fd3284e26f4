use crate::parsing::rope::LineRef;

use super::kinds::{CodeFence, Heading, Rule, Table};

/// What a single line means once fence and table state are taken into account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Opening fence delimiter, with the language tag if one trails it.
    FenceOpen { lang: Option<String> },
    /// Closing fence delimiter.
    FenceClose,
    /// Opaque line inside a fence. Never a heading, row, rule or blank.
    Fenced,
    /// `#{1,5} text` outside a fence.
    Heading(Heading),
    /// `---` and longer.
    Rule,
    /// Whitespace-only line.
    Blank,
    /// Alignment row such as `|---|:-:|`; consumed without producing cells.
    TableSeparator,
    /// A table row. `header` is set on the first row of a table.
    TableRow { cells: Vec<String>, header: bool },
    /// Anything else.
    Text,
}

/// A classified line: the line itself plus the event it produces.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-indexed source line number.
    pub number: usize,
    /// Line text without its terminator.
    pub text: String,
    pub kind: LineKind,
    /// Set when this line ended a table that was open before it.
    pub closes_table: bool,
}

/// Scan state threaded through a document, top to bottom.
#[derive(Debug, Default)]
struct ScanState {
    in_fence: bool,
    in_table: bool,
}

/// Classifies worklog lines, carrying fence and table state between calls.
///
/// The same classifier output drives both the tree builder and the content
/// renderer, which is what keeps tree nodes and rendered anchors aligned.
#[derive(Debug, Default)]
pub struct WorklogLineClassifier {
    state: ScanState,
}

impl WorklogLineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies the next line of the document.
    ///
    /// Precedence outside a fence: fence delimiter, heading, rule, blank,
    /// table row, text.
    pub fn classify(&mut self, lr: &LineRef) -> LineClass {
        let text = lr.text.as_str();
        let kind = self.kind_of(text);

        let is_table_line = matches!(kind, LineKind::TableRow { .. } | LineKind::TableSeparator);
        let closes_table = self.state.in_table && !is_table_line;
        if closes_table {
            self.state.in_table = false;
        }
        if let LineKind::TableRow { .. } = kind {
            self.state.in_table = true;
        }

        LineClass {
            number: lr.number,
            text: lr.text.clone(),
            kind,
            closes_table,
        }
    }

    /// Whether a fence is still open (only meaningful once input is exhausted).
    pub fn in_fence(&self) -> bool {
        self.state.in_fence
    }

    fn kind_of(&mut self, text: &str) -> LineKind {
        let delimiter = CodeFence::is_delimiter(text);

        if self.state.in_fence {
            if delimiter {
                self.state.in_fence = false;
                return LineKind::FenceClose;
            }
            return LineKind::Fenced;
        }

        if delimiter {
            self.state.in_fence = true;
            return LineKind::FenceOpen {
                lang: CodeFence::lang(text),
            };
        }

        if let Some(heading) = Heading::parse(text) {
            return LineKind::Heading(heading);
        }

        if Rule::matches(text) {
            return LineKind::Rule;
        }

        if text.trim().is_empty() {
            return LineKind::Blank;
        }

        if Table::is_row(text) {
            let cells = Table::cells(text);
            if Table::is_separator(&cells) {
                return LineKind::TableSeparator;
            }
            return LineKind::TableRow {
                cells,
                header: !self.state.in_table,
            };
        }

        LineKind::Text
    }
}
