use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier linking an outline node to its rendered block.
///
/// Anchors are derived from the 1-indexed source line, so the same document
/// always yields the same anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anchor(pub usize);

impl Anchor {
    pub const PREFIX: &'static str = "line-";
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}
