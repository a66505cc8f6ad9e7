// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another [link](/a.html)\n\n1. First\n2. Second\n\n> Quoted ![img](i.png)\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(words: usize) -> String {
    let mut content = String::new();
    for i in 0..words {
        match i % 5 {
            0 => content.push_str("**strong** "),
            1 => content.push_str("*soft* "),
            2 => content.push_str("`tick` "),
            3 => content.push_str("[link](/x.html) "),
            _ => content.push_str("plain "),
        }
    }
    content
}
