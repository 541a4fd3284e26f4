//! Fixture-driven tests for the full parse.
//!
//! Fixtures (.md) live in `fixtures/`; every fixture is run through the
//! structural checks in [`invariants`] before its own assertions.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::{
    models::{Anchor, Section},
    parsing::{
        ParsedWorklog, build_tree, content::RenderBlock, parse_str, parse_worklog, render_blocks,
    },
};

fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(path).unwrap()
}

fn parse_fixture(name: &str) -> ParsedWorklog {
    let parsed = parse_str(&load_fixture(name));
    invariants::check(&parsed);
    parsed
}

fn section(level: u8, title: &str, line: usize, children: Vec<Section>) -> Section {
    Section {
        level,
        title: title.to_string(),
        line,
        children,
    }
}

#[test]
fn fixture_worklog_basic() {
    let parsed = parse_fixture("worklog_basic");

    assert_eq!(parsed.meta.title.as_deref(), Some("Reader Worklog"));
    assert_eq!(parsed.meta.total_lines, 32);
    assert_eq!(
        parsed.worklog.sections,
        vec![
            section(
                2,
                "Current Understanding",
                3,
                vec![section(4, "Open Questions", 7, vec![section(5, "Storage", 9, vec![])])]
            ),
            section(2, "Key Events Index", 11, vec![]),
        ]
    );

    let logs = &parsed.worklog.logs;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, "LOG-001");
    assert!(logs[0].superseded);
    assert_eq!(logs[0].task.as_deref(), Some("READER-001"));
    assert_eq!(
        logs[0].children,
        vec![
            section(4, "Rationale", 20, vec![]),
            section(4, "Alternatives", 24, vec![section(5, "SQLite", 26, vec![])]),
        ]
    );
    assert_eq!(logs[1].id, "LOG-002");
    assert_eq!(logs[1].kind, "EXEC");
    assert!(!logs[1].superseded);
    assert_eq!(logs[1].task, None);
}

#[test]
fn fixture_worklog_basic_table_block() {
    let parsed = parse_fixture("worklog_basic");
    let tables: Vec<_> = parsed
        .blocks
        .iter()
        .filter_map(|b| match b {
            RenderBlock::Table(t) => Some(t),
            _ => None,
        })
        .collect();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].anchor, Anchor(13));
    assert_eq!(tables[0].header, vec!["Log", "Type", "Summary"]);
    assert_eq!(
        tables[0].rows,
        vec![
            vec!["LOG-001", "DECISION", "Pick storage"],
            vec!["LOG-002", "EXEC", "Wire parser"],
        ]
    );
}

#[test]
fn fixture_orphans_and_stray() {
    let parsed = parse_fixture("orphans_and_stray");
    assert_eq!(
        parsed.worklog.sections,
        vec![
            section(2, "Real Section", 4, vec![]),
            section(2, "Closing Section", 12, vec![]),
            section(3, "Plain H3 after close", 14, vec![section(4, "Under plain", 16, vec![])]),
        ]
    );
    assert_eq!(parsed.worklog.logs.len(), 1);
    assert!(parsed.worklog.logs[0].children.is_empty());

    // dropped headings still render
    let headings = parsed
        .blocks
        .iter()
        .filter(|b| matches!(b, RenderBlock::Heading { .. }))
        .count();
    assert_eq!(headings, 9);
}

#[test]
fn fixture_fences() {
    let parsed = parse_fixture("fences");
    assert_eq!(
        parsed.worklog.sections,
        vec![section(2, "Examples", 1, vec![section(4, "After fences", 13, vec![])])]
    );
    assert!(parsed.worklog.logs.is_empty());

    let code: Vec<_> = parsed
        .blocks
        .iter()
        .filter_map(|b| match b {
            RenderBlock::Code { anchor, lang, .. } => Some((*anchor, lang.as_deref())),
            _ => None,
        })
        .collect();
    assert_eq!(
        code,
        vec![
            (Some(Anchor(4)), Some("markdown")),
            (Some(Anchor(10)), None),
            (None, None),
        ]
    );
}

#[test]
fn three_line_example_model() {
    let parsed =
        parse_str("## Overview\n### [LOG-001] - [DECISION] - Pick storage engine\n#### Rationale");
    let json = serde_json::to_value(&parsed.worklog).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "sections": [{"level": 2, "title": "Overview", "line": 1, "children": []}],
            "logs": [{
                "id": "LOG-001",
                "type": "DECISION",
                "title": "Pick storage engine",
                "superseded": false,
                "line": 2,
                "children": [{"level": 4, "title": "Rationale", "line": 3, "children": []}]
            }]
        })
    );
}

#[test]
fn orphan_header_law() {
    let parsed = parse_str("#### Orphan\n##### Child");
    assert!(parsed.worklog.sections.is_empty());
    assert!(parsed.worklog.logs.is_empty());
}

#[rstest]
#[case("worklog_basic")]
#[case("orphans_and_stray")]
#[case("fences")]
fn parsing_is_idempotent(#[case] name: &str) {
    let text = load_fixture(name);
    assert_eq!(parse_str(&text), parse_str(&text));
}

#[rstest]
#[case("worklog_basic")]
#[case("orphans_and_stray")]
#[case("fences")]
fn single_pass_matches_separate_passes(#[case] name: &str) {
    let rope = Rope::from(load_fixture(name).as_str());
    let parsed = parse_worklog(&rope);
    let (worklog, meta) = build_tree(&rope);
    assert_eq!(parsed.worklog, worklog);
    assert_eq!(parsed.meta, meta);
    assert_eq!(parsed.blocks, render_blocks(&rope));
}

#[test]
fn fence_opacity() {
    let parsed = parse_str("```\n## Hidden\n### [LOG-001] - [EXEC] - Hidden\n```");
    assert!(parsed.worklog.sections.is_empty());
    assert!(parsed.worklog.logs.is_empty());
    assert!(
        parsed
            .blocks
            .iter()
            .all(|b| !matches!(b, RenderBlock::Heading { .. }))
    );
}

#[test]
fn superseded_iff_strikethrough() {
    let parsed = parse_str(
        "### [LOG-001] - [DECISION] - ~~Old~~ plan\n### [LOG-002] - [DECISION] - ~ not ~ struck",
    );
    let flags: Vec<_> = parsed.worklog.logs.iter().map(|l| l.superseded).collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn empty_input_yields_empty_model() {
    let parsed = parse_str("");
    assert!(parsed.worklog.sections.is_empty());
    assert!(parsed.worklog.logs.is_empty());
    assert!(parsed.blocks.is_empty());
    assert_eq!(parsed.meta.total_lines, 0);
}
