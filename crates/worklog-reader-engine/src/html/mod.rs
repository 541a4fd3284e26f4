//! # HTML Viewer
//!
//! Writes the self-contained viewer page: a top bar, the outline `<nav>`, the
//! anchored content `<main>` and a footer. Outline links and content ids are
//! both built from [`Anchor`], so every outline entry lands on its heading.

mod page;

use crate::{
    models::{Anchor, LogEntry, Section},
    outline::{Outline, Viewer},
    parsing::{
        content::{RenderBlock, TableBlock},
        inline::escape,
    },
};

const ELLIPSIS: char = '…';
const TOGGLE: &str = "<span class=\"toggle-btn\">▼</span>";

/// Presentation knobs for the generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Page title; falls back to the document's H1, then to "Worklog".
    pub title: Option<String>,
    pub log_title_width: usize,
    pub section_title_width: usize,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: None,
            log_title_width: 40,
            section_title_width: 50,
        }
    }
}

/// Renders the full page.
pub fn render_page(viewer: &Viewer<'_>, options: &ViewerOptions) -> String {
    let title = escape(
        options
            .title
            .as_deref()
            .or(viewer.meta.title.as_deref())
            .unwrap_or("Worklog"),
    );

    let latest = viewer
        .outline
        .latest
        .map(|a| format!("\n<button class=\"btn-latest\" onclick=\"jumpTo('{a}')\">Latest</button>"))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<header class="top-bar">
<button class="btn-outline-toggle" onclick="toggleOutline()">Outline</button>
<span class="top-bar-title">{title}</span>{latest}
</header>
{outline}
<main class="content" id="content">
{content}
</main>
<footer class="page-footer">{logs} logs, {lines} lines</footer>
<script>{script}</script>
</body>
</html>
"#,
        style = page::STYLE,
        outline = render_outline_html(&viewer.outline, options),
        content = render_blocks_html(viewer.blocks),
        logs = viewer.meta.total_logs,
        lines = viewer.meta.total_lines,
        script = page::SCRIPT,
    )
}

/// Renders the content stream, one element per block.
pub fn render_blocks_html(blocks: &[RenderBlock]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(block: &RenderBlock) -> String {
    match block {
        RenderBlock::Heading {
            anchor,
            level,
            markup,
        } => format!("<h{level} id=\"{anchor}\">{markup}</h{level}>"),
        RenderBlock::Paragraph { anchor, markup } => format!("<p id=\"{anchor}\">{markup}</p>"),
        RenderBlock::Code { anchor, lang, code } => {
            let class = lang
                .as_deref()
                .map(|l| format!(" class=\"language-{}\"", escape(l)))
                .unwrap_or_default();
            format!("<pre{}><code{class}>{code}</code></pre>", id_attr(*anchor))
        }
        RenderBlock::Table(table) => render_table(table),
        RenderBlock::Rule => "<hr>".to_string(),
        RenderBlock::Blank => "<br>".to_string(),
    }
}

fn render_table(table: &TableBlock) -> String {
    let row = |cells: &[String], tag: &str| {
        let cells: String = cells
            .iter()
            .map(|c| format!("<{tag}>{c}</{tag}>"))
            .collect();
        format!("<tr>{cells}</tr>")
    };

    let body: String = table.rows.iter().map(|r| row(r, "td")).collect();
    format!(
        "<table id=\"{}\"><thead>{}</thead><tbody>{body}</tbody></table>",
        table.anchor,
        row(&table.header, "th"),
    )
}

fn id_attr(anchor: Option<Anchor>) -> String {
    anchor.map(|a| format!(" id=\"{a}\"")).unwrap_or_default()
}

/// Renders the outline panel: sections first, then logs newest first.
pub fn render_outline_html(outline: &Outline<'_>, options: &ViewerOptions) -> String {
    let sections: String = outline
        .sections
        .iter()
        .map(|s| section_item(s, options))
        .collect();
    let logs: String = outline
        .logs
        .iter()
        .map(|l| log_item(l, options))
        .collect();

    format!(
        "<nav class=\"outline\" id=\"outline\">
<h3 class=\"outline-section-title\">Sections</h3>
<ul class=\"outline-list\">{sections}</ul>
<h3 class=\"outline-section-title\">Logs ({})</h3>
<ul class=\"outline-list\">{logs}</ul>
</nav>",
        outline.logs.len()
    )
}

fn section_item(section: &Section, options: &ViewerOptions) -> String {
    let title = escape(&truncate(&section.title, options.section_title_width));
    let (state, toggle) = collapsible(&section.children);
    format!(
        "<li class=\"outline-item section-item indent-{}{state}\"><div class=\"outline-row\">{toggle}\
<a href=\"#{}\" class=\"outline-link\">{title}</a></div>{}</li>",
        section.level,
        section.anchor(),
        children(&section.children, options),
    )
}

fn log_item(log: &LogEntry, options: &ViewerOptions) -> String {
    let superseded = if log.superseded { " superseded" } else { "" };
    let title = escape(&truncate(&log.title, options.log_title_width));
    let (state, toggle) = collapsible(&log.children);
    format!(
        "<li class=\"outline-item log-item{superseded}{state}\"><div class=\"outline-row\">{toggle}\
<a href=\"#{}\" class=\"outline-link\"><span class=\"badge badge-{kind}\">{kind}</span> \
<span class=\"log-id\">{id}</span> <span class=\"log-title\">{title}</span></a></div>{}</li>",
        log.anchor(),
        children(&log.children, options),
        kind = log.kind,
        id = log.id,
    )
}

/// Class suffix and toggle control for an item; items with children start
/// collapsed.
fn collapsible(children: &[Section]) -> (&'static str, &'static str) {
    if children.is_empty() {
        ("", "")
    } else {
        (" has-children collapsed", TOGGLE)
    }
}

fn children(children: &[Section], options: &ViewerOptions) -> String {
    if children.is_empty() {
        return String::new();
    }
    let items: String = children.iter().map(|c| section_item(c, options)).collect();
    format!("<ul class=\"outline-children\">{items}</ul>")
}

/// Shortens `text` to at most `width` characters, ending in an ellipsis
/// when anything was cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}
