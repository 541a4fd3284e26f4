use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,5}) (.+)$").expect("heading pattern is valid"));

static LOG_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^### \[LOG-(\d+)\] - \[([A-Z_]+)\] - (.+)$").expect("log heading pattern is valid")
});

static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~.+~~").expect("strikethrough pattern is valid"));

static TASK_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- Task: ([A-Z0-9-]+)").expect("task pattern is valid"));

/// An ATX heading of depth 1-5: `#`, a space, then text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    /// Raw text after the marker and its separating space.
    pub title: String,
}

impl Heading {
    /// Deepest heading the dialect recognises.
    pub const MAX_LEVEL: u8 = 5;

    pub fn parse(line: &str) -> Option<Self> {
        let caps = HEADING.captures(line)?;
        Some(Self {
            // at most five '#', always fits
            level: caps[1].len() as u8,
            title: caps[2].to_string(),
        })
    }
}

/// The `### [LOG-NNN] - [TYPE] - title` heading that opens a log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHeading {
    /// `LOG-` followed by the digits exactly as written.
    pub id: String,
    pub kind: String,
    /// Everything after the second ` - `, verbatim.
    pub title: String,
}

impl LogHeading {
    /// Nesting level a log entry occupies on the ancestry stack.
    pub const LEVEL: u8 = 3;

    pub fn parse(line: &str) -> Option<Self> {
        let caps = LOG_HEADING.captures(line)?;
        Some(Self {
            id: format!("LOG-{}", &caps[1]),
            kind: caps[2].to_string(),
            title: caps[3].to_string(),
        })
    }

    /// A struck-through span anywhere in the title marks the entry superseded.
    pub fn is_superseded(title: &str) -> bool {
        STRIKETHROUGH.is_match(title)
    }

    /// Task reference embedded as `- Task: ABC-123`, if present.
    pub fn task(title: &str) -> Option<String> {
        TASK_REF.captures(title).map(|caps| caps[1].to_string())
    }
}
