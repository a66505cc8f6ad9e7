/// ATX heading `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Level of a heading line: 1-6 markers followed by a space.
    pub fn level(line: &str) -> Option<u8> {
        let count = line.chars().take_while(|&c| c == Self::MARKER).count();
        if count == 0 || count > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        line[count..]
            .starts_with(' ')
            .then_some(count as u8)
    }

    /// Heading text after the marker run and its space, trimmed.
    pub fn content(block: &str, level: u8) -> &str {
        block
            .get(usize::from(level) + 1..)
            .unwrap_or_default()
            .trim()
    }
}
