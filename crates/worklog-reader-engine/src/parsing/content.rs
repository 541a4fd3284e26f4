use crate::models::Anchor;

use super::{
    classify::{LineClass, LineKind},
    inline::{escape, escape_and_format},
};

/// One block of the rendered content stream.
///
/// Text-bearing variants hold markup that is already escaped and inline
/// formatted; code holds escaped source only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBlock {
    Heading {
        anchor: Anchor,
        level: u8,
        markup: String,
    },
    Paragraph {
        anchor: Anchor,
        markup: String,
    },
    Code {
        /// First interior line; `None` for an empty fence.
        anchor: Option<Anchor>,
        lang: Option<String>,
        code: String,
    },
    Table(TableBlock),
    Rule,
    Blank,
}

impl RenderBlock {
    pub fn anchor(&self) -> Option<Anchor> {
        match self {
            RenderBlock::Heading { anchor, .. } | RenderBlock::Paragraph { anchor, .. } => {
                Some(*anchor)
            }
            RenderBlock::Code { anchor, .. } => *anchor,
            RenderBlock::Table(table) => Some(table.anchor),
            RenderBlock::Rule | RenderBlock::Blank => None,
        }
    }
}

/// A table collapsed into one block: a header row plus body rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    /// Line of the header row.
    pub anchor: Anchor,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug)]
struct OpenFence {
    lang: Option<String>,
    first_line: Option<usize>,
    lines: Vec<String>,
}

/// Builds the render-block stream from classified lines.
#[derive(Debug, Default)]
pub struct ContentBuilder {
    fence: Option<OpenFence>,
    table: Option<TableBlock>,
    out: Vec<RenderBlock>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.closes_table {
            self.flush_table();
        }

        match &c.kind {
            LineKind::FenceOpen { lang } => {
                self.fence = Some(OpenFence {
                    lang: lang.clone(),
                    first_line: None,
                    lines: vec![],
                });
            }
            LineKind::Fenced => {
                if let Some(fence) = self.fence.as_mut() {
                    fence.first_line.get_or_insert(c.number);
                    fence.lines.push(c.text.clone());
                }
            }
            LineKind::FenceClose => self.flush_fence(),
            LineKind::Heading(heading) => self.out.push(RenderBlock::Heading {
                anchor: Anchor(c.number),
                level: heading.level,
                markup: escape_and_format(&heading.title),
            }),
            LineKind::Rule => self.out.push(RenderBlock::Rule),
            LineKind::Blank => self.out.push(RenderBlock::Blank),
            LineKind::TableSeparator => {}
            LineKind::TableRow { cells, header } => self.push_row(c.number, cells, *header),
            LineKind::Text => self.out.push(RenderBlock::Paragraph {
                anchor: Anchor(c.number),
                markup: escape_and_format(&c.text),
            }),
        }
    }

    pub fn finish(mut self) -> Vec<RenderBlock> {
        // EOF flush
        self.flush_table();
        self.flush_fence();
        self.out
    }

    fn push_row(&mut self, line: usize, cells: &[String], header: bool) {
        let cells: Vec<String> = cells.iter().map(|c| escape_and_format(c)).collect();
        if !header && let Some(table) = self.table.as_mut() {
            table.rows.push(cells);
            return;
        }

        self.flush_table();
        self.table = Some(TableBlock {
            anchor: Anchor(line),
            header: cells,
            rows: vec![],
        });
    }

    fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            self.out.push(RenderBlock::Table(table));
        }
    }

    fn flush_fence(&mut self) {
        // Unterminated fence: emit as code block anyway
        if let Some(fence) = self.fence.take() {
            self.out.push(RenderBlock::Code {
                anchor: fence.first_line.map(Anchor),
                lang: fence.lang,
                code: escape(&fence.lines.join("\n")),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{classify::WorklogLineClassifier, rope::numbered_lines};
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    fn render(src: &str) -> Vec<RenderBlock> {
        let rope = Rope::from(src);
        let mut classifier = WorklogLineClassifier::new();
        let mut builder = ContentBuilder::new();
        for lr in numbered_lines(&rope) {
            builder.push(&classifier.classify(&lr));
        }
        builder.finish()
    }

    #[test]
    fn table_round_trip() {
        let blocks = render("| Name | Value |\n|------|-------|\n| x    | 1     |");
        assert_eq!(
            blocks,
            vec![RenderBlock::Table(TableBlock {
                anchor: Anchor(1),
                header: vec!["Name".into(), "Value".into()],
                rows: vec![vec!["x".into(), "1".into()]],
            })]
        );
    }

    #[test]
    fn table_is_flushed_before_following_block() {
        let blocks = render("| a |\n| b |\nafter");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], RenderBlock::Table(t) if t.rows.len() == 1));
        assert_eq!(
            blocks[1],
            RenderBlock::Paragraph {
                anchor: Anchor(3),
                markup: "after".into()
            }
        );
    }

    #[test]
    fn blank_line_splits_tables() {
        let blocks = render("| a |\n\n| b |");
        assert!(matches!(blocks[0], RenderBlock::Table(_)));
        assert_eq!(blocks[1], RenderBlock::Blank);
        assert!(matches!(&blocks[2], RenderBlock::Table(t) if t.anchor == Anchor(3)));
    }

    #[test]
    fn table_cells_are_formatted() {
        let blocks = render("| **k** | `v<1` |");
        let RenderBlock::Table(table) = &blocks[0] else {
            panic!("expected table, got {blocks:?}");
        };
        assert_eq!(
            table.header,
            vec!["<strong>k</strong>", "<code>v&lt;1</code>"]
        );
    }

    #[test]
    fn code_block_is_emitted_once_on_close() {
        let blocks = render("```rust\nfn main() {}\n## not a heading\n```");
        assert_eq!(
            blocks,
            vec![RenderBlock::Code {
                anchor: Some(Anchor(2)),
                lang: Some("rust".into()),
                code: "fn main() {}\n## not a heading".into(),
            }]
        );
    }

    #[test]
    fn code_is_escaped_verbatim() {
        let blocks = render("```\n<a> & **b**\n```");
        assert_eq!(
            blocks,
            vec![RenderBlock::Code {
                anchor: Some(Anchor(2)),
                lang: None,
                code: "&lt;a&gt; &amp; **b**".into(),
            }]
        );
    }

    #[test]
    fn empty_fence_has_no_anchor() {
        let blocks = render("```\n```");
        assert_eq!(blocks[0].anchor(), None);
    }

    #[test]
    fn unterminated_fence_is_flushed_at_end() {
        let blocks = render("```\nleft open");
        assert!(matches!(&blocks[0], RenderBlock::Code { code, .. } if code == "left open"));
    }

    #[test]
    fn headings_and_paragraphs_carry_line_anchors() {
        let blocks = render("# Title\n\nSome *text*\n---");
        assert_eq!(
            blocks,
            vec![
                RenderBlock::Heading {
                    anchor: Anchor(1),
                    level: 1,
                    markup: "Title".into()
                },
                RenderBlock::Blank,
                RenderBlock::Paragraph {
                    anchor: Anchor(3),
                    markup: "Some <em>text</em>".into()
                },
                RenderBlock::Rule,
            ]
        );
    }

    #[test]
    fn heading_text_is_escaped_and_formatted() {
        let blocks = render("### [LOG-001] - [EXEC] - Use ~~<old>~~ new");
        assert_eq!(
            blocks[0],
            RenderBlock::Heading {
                anchor: Anchor(1),
                level: 3,
                markup: "[LOG-001] - [EXEC] - Use <del>&lt;old&gt;</del> new".into()
            }
        );
    }
}
