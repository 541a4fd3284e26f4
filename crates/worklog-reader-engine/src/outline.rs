//! # Outline Assembly
//!
//! Pairs the document model with the rendered block stream. The outline
//! lists sections in document order and logs newest first, and remembers
//! where the most recent log lives so a viewer can jump straight to it.
//! Nothing here scans text again; it only reorders what the parser built.

use crate::{
    models::{Anchor, LogEntry, Section, Worklog, WorklogMeta},
    parsing::{ParsedWorklog, content::RenderBlock},
};

/// Navigation view over a [`Worklog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline<'a> {
    pub sections: &'a [Section],
    /// Newest first. Each log's children keep document order.
    pub logs: Vec<&'a LogEntry>,
    /// Anchor of the last log in the document.
    pub latest: Option<Anchor>,
}

impl<'a> Outline<'a> {
    pub fn assemble(doc: &'a Worklog) -> Self {
        Self {
            sections: &doc.sections,
            logs: doc.logs.iter().rev().collect(),
            latest: doc.logs.last().map(LogEntry::anchor),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.logs.is_empty()
    }
}

/// Everything a renderer needs: outline, content blocks and document facts.
#[derive(Debug, Clone)]
pub struct Viewer<'a> {
    pub outline: Outline<'a>,
    pub blocks: &'a [RenderBlock],
    pub meta: &'a WorklogMeta,
}

impl<'a> Viewer<'a> {
    pub fn new(parsed: &'a ParsedWorklog) -> Self {
        Self {
            outline: Outline::assemble(&parsed.worklog),
            blocks: &parsed.blocks,
            meta: &parsed.meta,
        }
    }
}
