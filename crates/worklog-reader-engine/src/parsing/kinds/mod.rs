//! # Line Kinds
//!
//! Each construct of the worklog dialect owns its delimiters and recognition
//! rule here. The classifier asks these types; it never hardcodes a `#`,
//! a fence or a pipe itself.
//!
//! - **`CodeFence`**: ```` ``` ```` / `~~~` delimiters and the language tag
//! - **`Heading`** / **`LogHeading`**: `#{1,5} text` and `### [LOG-N] - [TYPE] - title`
//! - **`Table`**: pipe rows, cell splitting and alignment rows
//! - **`Rule`**: `---`

pub mod code_fence;
pub mod heading;
pub mod rule;
pub mod table;

pub use code_fence::CodeFence;
pub use heading::{Heading, LogHeading};
pub use rule::Rule;
pub use table::Table;
