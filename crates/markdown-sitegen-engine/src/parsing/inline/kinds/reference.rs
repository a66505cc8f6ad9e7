use std::sync::OnceLock;

use regex::Regex;

/// Image reference `![alt](url)`. The alt text may be empty.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\]]*)\]\(([^)]+)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }
}

/// Link reference `[label](url)`. The label must be non-empty.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\]]+)\]\(([^)]+)\)";

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }
}
