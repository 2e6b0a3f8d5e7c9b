//! Utility functions for line-oriented text edits

/// Indentation characters recognised at the start of a line
pub fn is_indent_char(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Leading run of spaces and tabs
pub fn leading_indent(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !is_indent_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}

/// True when `text` is non-empty and made only of spaces and tabs
pub fn is_indent_only(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_indent_char)
}

/// Apply `f` to every `\n`-separated line of `block` and rejoin.
///
/// An empty block is one empty line, and a trailing newline yields a final
/// empty line, so every line start is visited exactly once.
pub fn map_lines(block: &str, f: impl FnMut(&str) -> String) -> String {
    block.split('\n').map(f).collect::<Vec<_>>().join("\n")
}
