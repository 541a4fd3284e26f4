//! # Context Documents
//!
//! PROJECT.md and ARCHITECTURE.md are split into their root (`##`) sections
//! so a reader can copy one section at a time. Headings inside fences are
//! ignored. Unlike the worklog scan, fence detection here works on the
//! trimmed line, so indented fences count too.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::parsing::kinds::CodeFence;

static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(.+)$").expect("h1 pattern is valid"));
static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+(.+)$").expect("h2 pattern is valid"));

/// Only the first few lines are searched for the document title.
const TITLE_SCAN_LINES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    Project,
    Architecture,
}

impl ContextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::Project => "project",
            ContextKind::Architecture => "architecture",
        }
    }

    /// Conventional file name for this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            ContextKind::Project => "PROJECT.md",
            ContextKind::Architecture => "ARCHITECTURE.md",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown context kind: {0} (expected project or architecture)")]
pub struct UnknownContextKind(String);

impl FromStr for ContextKind {
    type Err = UnknownContextKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "project" => Ok(ContextKind::Project),
            "architecture" => Ok(ContextKind::Architecture),
            _ => Err(UnknownContextKind(s.to_string())),
        }
    }
}

/// One root section of a context document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSection {
    /// `<kind>-section-<index>`, unique within the document.
    pub key: String,
    pub title: String,
    pub line: usize,
    /// `<kind>-line-<line>`.
    pub anchor_id: String,
    /// Section text including its heading.
    pub markdown: String,
    /// Section text without the heading line.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextDocument {
    pub kind: ContextKind,
    pub file_name: String,
    pub title: String,
    pub total_lines: usize,
    pub sections: Vec<DocSection>,
}

impl ContextDocument {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Splits a context document into its `##` sections.
///
/// A document with text but no `##` heading becomes a single synthetic
/// "Overview" section.
pub fn parse_context_document(text: &str, kind: ContextKind, file_name: &str) -> ContextDocument {
    let lines: Vec<&str> = text.split('\n').collect();

    let title = lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .find_map(|l| H1.captures(l).map(|c| c[1].trim().to_string()))
        .unwrap_or_else(|| file_name.to_string());

    // (title, start index) of each root section
    let mut starts: Vec<(String, usize)> = Vec::new();
    let mut in_fence = false;
    for (idx, line) in lines.iter().enumerate() {
        if CodeFence::is_delimiter(line.trim()) {
            in_fence = !in_fence;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = H2.captures(line) {
            starts.push((caps[1].trim().to_string(), idx));
        }
    }

    // A blank `##` still ends the section before it but is not listed
    let mut sections: Vec<DocSection> = starts
        .iter()
        .enumerate()
        .filter(|(_, (title, _))| !title.is_empty())
        .map(|(i, (title, start))| {
            let end = starts.get(i + 1).map_or(lines.len(), |(_, next)| *next);
            (title, &lines[*start..end], *start)
        })
        .enumerate()
        .map(|(index, (title, body, start))| build_section(kind, title, start, body, index))
        .collect();

    if sections.is_empty() {
        let fallback = text.trim_end();
        if !fallback.is_empty() {
            sections.push(DocSection {
                key: format!("{kind}-section-0"),
                title: "Overview".to_string(),
                line: 1,
                anchor_id: format!("{kind}-line-1"),
                markdown: format!("## Overview\n\n{fallback}"),
                content: fallback.to_string(),
            });
        }
    }

    ContextDocument {
        kind,
        file_name: file_name.to_string(),
        title,
        total_lines: lines.len(),
        sections,
    }
}

fn build_section(
    kind: ContextKind,
    title: &str,
    start: usize,
    lines: &[&str],
    index: usize,
) -> DocSection {
    let line = start + 1;
    DocSection {
        key: format!("{kind}-section-{index}"),
        title: title.to_string(),
        line,
        anchor_id: format!("{kind}-line-{line}"),
        markdown: lines.join("\n").trim_end().to_string(),
        content: lines[1..].join("\n").trim_end().to_string(),
    }
}
