// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Paragraph with <em>inline</em> markup and `code` spans.  \nA second line with <https://example.com> and <!-- a note -->.\n\n> Quoted <b>text</b>\n> over two lines\n\n```rust\nfn example() {\n    println!(\"<Hello>\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_markup_heavy(tags: usize) -> String {
    let mut content = String::new();
    for i in 0..tags {
        content.push_str(&format!(
            "<span class=\"c{i}\" data-n='{i}' hidden>item {i}</span> < not a tag {i} "
        ));
    }
    content
}
