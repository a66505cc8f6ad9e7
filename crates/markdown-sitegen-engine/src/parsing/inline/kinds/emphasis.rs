pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Only `*` marks italics; `_` is plain text in this dialect.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "*";
}
