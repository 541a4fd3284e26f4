use serde::{Deserialize, Serialize};

use super::anchor::Anchor;

/// A generic heading node (levels 2-5) with its nested headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub level: u8,
    /// Raw heading text, not escaped.
    pub title: String,
    /// 1-indexed line of the heading.
    pub line: usize,
    pub children: Vec<Section>,
}

impl Section {
    pub fn anchor(&self) -> Anchor {
        Anchor(self.line)
    }
}

/// One journal entry, opened by a `### [LOG-NNN] - [TYPE] - title` heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// e.g. `LOG-043`.
    pub id: String,
    /// Uppercase category token such as `DECISION`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw title; may contain a `~~struck~~` span.
    pub title: String,
    /// True iff the title contains a strikethrough span.
    pub superseded: bool,
    pub line: usize,
    /// Task reference from a `- Task: ABC-1` suffix in the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    pub children: Vec<Section>,
}

impl LogEntry {
    pub fn anchor(&self) -> Anchor {
        Anchor(self.line)
    }
}

/// The document model: top-level sections and log entries, both in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worklog {
    pub sections: Vec<Section>,
    pub logs: Vec<LogEntry>,
}

impl Worklog {
    /// Pretty JSON with two-space indentation, the interchange format for
    /// other renderers.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Every anchor the outline can link to, in discovery (pre-order) order.
    pub fn anchors(&self) -> Vec<Anchor> {
        fn walk(sections: &[Section], out: &mut Vec<Anchor>) {
            for s in sections {
                out.push(s.anchor());
                walk(&s.children, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.sections, &mut out);
        for log in &self.logs {
            out.push(log.anchor());
            walk(&log.children, &mut out);
        }
        out
    }
}

/// Document-level facts gathered during the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorklogMeta {
    /// Text of the first `# ` heading within the first lines, if any.
    pub title: Option<String>,
    pub total_lines: usize,
    pub total_logs: usize,
}
