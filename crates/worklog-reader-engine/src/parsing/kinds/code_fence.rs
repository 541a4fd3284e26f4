pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Whether the line starts with a fence delimiter.
    ///
    /// Indented delimiters are not fences in the worklog dialect. Any
    /// delimiter toggles: a `~~~` line closes a fence opened with backticks
    /// and vice versa.
    pub fn is_delimiter(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS) || line.starts_with(Self::TILDES)
    }

    /// Language tag trailing an opening delimiter, if any.
    pub fn lang(line: &str) -> Option<String> {
        let tag = line.get(Self::BACKTICKS.len()..)?.trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }
}
