pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// A fenced block spans several lines and both ends carry a fence.
    pub fn encloses(lines: &[&str]) -> bool {
        match lines {
            [first, .., last] => Self::is_fence(first) && Self::is_fence(last),
            _ => false,
        }
    }

    /// Literal content of a fenced block.
    ///
    /// One fence is removed from the start of the first line and one from the
    /// start of the last line; anything left (such as an info string) stays.
    pub fn content(block: &str) -> String {
        let lines: Vec<&str> = block.lines().collect();
        let Some((first, rest)) = lines.split_first() else {
            return String::new();
        };
        let Some((last, middle)) = rest.split_last() else {
            return strip_fence(first).trim().to_string();
        };

        let mut body = vec![strip_fence(first)];
        body.extend_from_slice(middle);
        body.push(strip_fence(last));
        body.join("\n").trim().to_string()
    }
}

fn strip_fence(line: &str) -> &str {
    line.strip_prefix(CodeFence::BACKTICKS).unwrap_or(line)
}
