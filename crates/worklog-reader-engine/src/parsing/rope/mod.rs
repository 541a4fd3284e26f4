pub mod lines;

pub use lines::{LineRef, numbered_lines};
