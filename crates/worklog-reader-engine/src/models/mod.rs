pub mod anchor;
pub mod worklog;

pub use anchor::Anchor;
pub use worklog::{LogEntry, Section, Worklog, WorklogMeta};
