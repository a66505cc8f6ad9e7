/// Splits a document into blocks separated by blank lines.
///
/// A line counts as blank when it is empty after trimming whitespace. Each
/// block is trimmed; blocks that end up empty are dropped.
pub fn split_blocks(document: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];

    fn flush(blocks: &mut Vec<String>, current: &mut Vec<&str>) {
        if current.is_empty() {
            return;
        }
        let block = current.join("\n");
        let trimmed = block.trim();
        if !trimmed.is_empty() {
            blocks.push(trimmed.to_string());
        }
        current.clear();
    }

    for line in document.lines() {
        if line.trim().is_empty() {
            flush(&mut blocks, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut blocks, &mut current);

    blocks
}
