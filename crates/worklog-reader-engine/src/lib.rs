pub mod context;
pub mod html;
pub mod io;
pub mod models;
pub mod outline;
pub mod parsing;

// Re-export key types for easier usage
pub use context::{ContextDocument, ContextKind, DocSection, parse_context_document};
pub use html::{ViewerOptions, render_blocks_html, render_outline_html, render_page};
pub use io::*;
pub use models::{Anchor, LogEntry, Section, Worklog, WorklogMeta};
pub use outline::{Outline, Viewer};
pub use parsing::{
    ParsedWorklog, build_tree, content::RenderBlock, inline::format_inline, parse_str,
    parse_worklog, render_blocks,
};
