//! # Worklog Parsing
//!
//! Source text is held in a [`Rope`] and walked line by line. Every line goes
//! through the [`WorklogLineClassifier`] once; the resulting [`LineClass`]
//! events are fed to the [`TreeBuilder`] (outline) and the [`ContentBuilder`]
//! (render blocks). Both read the same events, so every heading that becomes
//! a tree node also becomes exactly one anchored heading block.
//!
//! [`LineClass`]: classify::LineClass

pub mod classify;
pub mod content;
pub mod inline;
pub mod kinds;
pub mod rope;
pub mod tree;

#[cfg(test)]
mod tests;

use log::debug;
use xi_rope::Rope;

use crate::models::{Worklog, WorklogMeta};

use classify::WorklogLineClassifier;
use content::{ContentBuilder, RenderBlock};
use rope::numbered_lines;
use tree::TreeBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWorklog {
    pub worklog: Worklog,
    pub meta: WorklogMeta,
    pub blocks: Vec<RenderBlock>,
}

/// Parses a worklog in a single pass, building the model and the block
/// stream side by side.
pub fn parse_worklog(rope: &Rope) -> ParsedWorklog {
    let mut classifier = WorklogLineClassifier::new();
    let mut tree = TreeBuilder::new();
    let mut content = ContentBuilder::new();

    for lr in numbered_lines(rope) {
        let lc = classifier.classify(&lr);
        tree.push(&lc);
        content.push(&lc);
    }

    if classifier.in_fence() {
        debug!("input ended inside a code fence");
    }

    let (worklog, meta) = tree.finish();
    let blocks = content.finish();
    debug!(
        "parsed {} lines: {} sections, {} logs, {} blocks",
        meta.total_lines,
        worklog.sections.len(),
        worklog.logs.len(),
        blocks.len()
    );

    ParsedWorklog {
        worklog,
        meta,
        blocks,
    }
}

/// Convenience for callers holding a plain string.
pub fn parse_str(text: &str) -> ParsedWorklog {
    parse_worklog(&Rope::from(text))
}

/// Builds only the document model.
pub fn build_tree(rope: &Rope) -> (Worklog, WorklogMeta) {
    let mut classifier = WorklogLineClassifier::new();
    let mut tree = TreeBuilder::new();
    for lr in numbered_lines(rope) {
        tree.push(&classifier.classify(&lr));
    }
    tree.finish()
}

/// Renders only the block stream.
pub fn render_blocks(rope: &Rope) -> Vec<RenderBlock> {
    let mut classifier = WorklogLineClassifier::new();
    let mut content = ContentBuilder::new();
    for lr in numbered_lines(rope) {
        content.push(&classifier.classify(&lr));
    }
    content.finish()
}
