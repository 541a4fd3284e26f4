use log::{debug, trace};

use crate::models::{LogEntry, Section, Worklog, WorklogMeta};

use super::{
    classify::{LineClass, LineKind},
    kinds::{Heading, LogHeading},
};

/// Only the first few lines are searched for the document title.
const TITLE_SCAN_LINES: usize = 10;

type NodeId = usize;

/// Header data of an arena slot.
#[derive(Debug)]
enum NodeHead {
    Section { level: u8, title: String, line: usize },
    Log(Box<LogHead>),
}

#[derive(Debug)]
struct LogHead {
    id: String,
    kind: String,
    title: String,
    superseded: bool,
    line: usize,
    task: Option<String>,
}

#[derive(Debug)]
struct Node {
    head: NodeHead,
    children: Vec<NodeId>,
}

/// Builds the section/log forest from classified lines.
///
/// Nodes live in an arena while the document is scanned; the ancestry stack
/// holds `(level, node)` pairs for the chain of open headings. A heading that
/// finds no parent stays in the arena without being linked from any root, so
/// it disappears from the output while still being able to parent deeper
/// headings.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    sections: Vec<NodeId>,
    logs: Vec<NodeId>,
    stack: Vec<(u8, NodeId)>,
    open_log: Option<NodeId>,
    title: Option<String>,
    total_lines: usize,
    dropped: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: &LineClass) {
        self.total_lines = c.number;

        let LineKind::Heading(heading) = &c.kind else {
            return;
        };

        if let Some(log) = LogHeading::parse(&c.text) {
            self.open_log_entry(log, c.number);
            return;
        }

        match heading.level {
            1 => self.note_title(heading, c.number),
            2 => {
                let id = self.alloc_section(heading, c.number);
                self.sections.push(id);
                self.stack = vec![(2, id)];
                self.open_log = None;
            }
            3 if self.open_log.is_none() => {
                let id = self.alloc_section(heading, c.number);
                self.sections.push(id);
                self.stack = vec![(3, id)];
            }
            level => self.nest(heading, level, c.number),
        }
    }

    pub fn finish(self) -> (Worklog, WorklogMeta) {
        if self.dropped > 0 {
            debug!("{} heading(s) had no parent and were left out", self.dropped);
        }

        let Self {
            nodes,
            sections,
            logs,
            title,
            total_lines,
            ..
        } = self;

        let mut slots: Vec<Option<Node>> = nodes.into_iter().map(Some).collect();
        let sections: Vec<Section> = sections
            .into_iter()
            .filter_map(|id| match take(&mut slots, id) {
                Materialized::Section(s) => Some(s),
                Materialized::Log(_) | Materialized::Gone => None,
            })
            .collect();
        let logs: Vec<LogEntry> = logs
            .into_iter()
            .filter_map(|id| match take(&mut slots, id) {
                Materialized::Log(l) => Some(l),
                Materialized::Section(_) | Materialized::Gone => None,
            })
            .collect();

        let meta = WorklogMeta {
            title,
            total_lines,
            total_logs: logs.len(),
        };
        (Worklog { sections, logs }, meta)
    }

    fn open_log_entry(&mut self, log: LogHeading, line: usize) {
        let superseded = LogHeading::is_superseded(&log.title);
        let task = LogHeading::task(&log.title);
        let id = self.alloc(NodeHead::Log(Box::new(LogHead {
            id: log.id,
            kind: log.kind,
            title: log.title,
            superseded,
            line,
            task,
        })));
        self.logs.push(id);
        self.stack = vec![(LogHeading::LEVEL, id)];
        self.open_log = Some(id);
    }

    fn nest(&mut self, heading: &Heading, level: u8, line: usize) {
        let id = self.alloc_section(heading, line);
        while self.stack.last().is_some_and(|&(top, _)| top >= level) {
            self.stack.pop();
        }
        match self.stack.last() {
            Some(&(_, parent)) => self.nodes[parent].children.push(id),
            None => {
                trace!("line {line}: level {level} heading has no parent");
                self.dropped += 1;
            }
        }
        self.stack.push((level, id));
    }

    fn note_title(&mut self, heading: &Heading, line: usize) {
        if self.title.is_none() && line <= TITLE_SCAN_LINES {
            self.title = Some(heading.title.trim().to_string());
        }
    }

    fn alloc_section(&mut self, heading: &Heading, line: usize) -> NodeId {
        self.alloc(NodeHead::Section {
            level: heading.level,
            title: heading.title.clone(),
            line,
        })
    }

    fn alloc(&mut self, head: NodeHead) -> NodeId {
        self.nodes.push(Node {
            head,
            children: vec![],
        });
        self.nodes.len() - 1
    }
}

enum Materialized {
    Section(Section),
    Log(LogEntry),
    Gone,
}

/// Moves a node and its reachable descendants out of the arena.
fn take(slots: &mut [Option<Node>], id: NodeId) -> Materialized {
    let Some(node) = slots.get_mut(id).and_then(Option::take) else {
        return Materialized::Gone;
    };
    let children = node
        .children
        .into_iter()
        .filter_map(|child| match take(slots, child) {
            Materialized::Section(s) => Some(s),
            Materialized::Log(_) | Materialized::Gone => None,
        })
        .collect();

    match node.head {
        NodeHead::Section { level, title, line } => Materialized::Section(Section {
            level,
            title,
            line,
            children,
        }),
        NodeHead::Log(head) => Materialized::Log(LogEntry {
            id: head.id,
            kind: head.kind,
            title: head.title,
            superseded: head.superseded,
            line: head.line,
            task: head.task,
            children,
        }),
    }
}
