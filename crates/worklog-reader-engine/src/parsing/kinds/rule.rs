/// Horizontal rule: a line made only of three or more hyphens.
pub struct Rule;

impl Rule {
    pub const DASH: char = '-';

    pub fn matches(line: &str) -> bool {
        line.len() >= 3 && line.chars().all(|c| c == Self::DASH)
    }
}
