//! String helpers for decoding tool output and rendering Markdown tables

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANSI_ESCAPE: Regex = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove ANSI colour/control sequences (SVF colours its leak reports)
pub fn strip_ansi_codes(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs into single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Characters with inline meaning in Markdown or HTML
const MARKDOWN_SPECIALS: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '&', '|', '~'];

/// Make text safe for a single Markdown table cell
///
/// Inline specials are backslash-escaped so that text such as
/// `std::vector<int>` or `__attribute__` is shown literally.
pub fn escape_table_cell(text: &str) -> String {
    let text = normalize_whitespace(text);
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIALS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[1;31mNeverFree\x1b[0m : memory allocation";
        assert_eq!(strip_ansi_codes(colored), "NeverFree : memory allocation");
        assert_eq!(strip_ansi_codes("plain"), "plain");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \t b\n c  "), "a b c");
    }

    #[test]
    fn test_escape_table_cell() {
        assert_eq!(escape_table_cell("a | b"), "a \\| b");
        assert_eq!(escape_table_cell("line\nbreak"), "line break");
        assert_eq!(escape_table_cell(r"C:\path"), r"C:\\path");
        assert_eq!(escape_table_cell("std::vector<int>"), r"std::vector\<int\>");
        assert_eq!(escape_table_cell("__attribute__ *p"), r"\_\_attribute\_\_ \*p");
        assert_eq!(escape_table_cell("a && `b`"), r"a \&\& \`b\`");
    }
}
