//! Low-level text helpers shared by the emitters: line splitting,
//! indentation, key quoting and multiline value wrapping.

/// Splits on `\r\n`, `\r` or `\n`, keeping empty segments.
///
/// Unlike [`str::lines`], a trailing newline yields a trailing empty
/// segment, and a lone `\r` counts as a line break. Indented multiline
/// values depend on both.
#[must_use]
pub fn split_any_newline(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                segments.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                segments.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    segments.push(&text[start..]);
    segments
}

/// Prefixes every line of `text` with `spaces` spaces, normalizing line
/// endings to `\n`. Empty input stays empty; blank lines are padded too.
#[must_use]
pub fn indent_spaces(text: &str, spaces: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let pad = " ".repeat(spaces);
    split_any_newline(text)
        .iter()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indents by one block level (two spaces).
#[must_use]
pub fn indent(text: &str) -> String {
    indent_spaces(text, 2)
}

/// Quotes a key when it contains a character the grammar reserves
/// (`:`, `"`, `{`, `}` or space), escaping inner double quotes.
#[must_use]
pub fn key_string(key: &str) -> String {
    const QUOTABLE: [char; 5] = [':', '"', '{', '}', ' '];
    if key.contains(QUOTABLE) {
        format!("\"{}\"", key.replace('"', "\\\""))
    } else {
        key.to_string()
    }
}

/// Renders a value, wrapping it in an indented `'''` block when it spans
/// multiple lines.
#[must_use]
pub fn value_string(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if !value.contains('\n') && !value.contains('\r') {
        return value.to_string();
    }
    format!("'''\n{}\n'''", indent(value))
}

/// Renders a URL value. Multiline URLs indent two levels so the `'''`
/// body lines up under the `url:` key inside the method block.
#[must_use]
pub fn url_string(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if !url.contains('\n') && !url.contains('\r') {
        return url.to_string();
    }
    format!("'''\n{}\n'''", indent_spaces(url, 4))
}

/// Removes one trailing `\n` or `\r\n`, if present.
#[must_use]
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(split_any_newline(""), vec![""]);
        assert_eq!(split_any_newline("a\n"), vec!["a", ""]);
        assert_eq!(split_any_newline("a\r\nb\rc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_indent_pads_blank_lines() {
        assert_eq!(indent("a\n\nb"), "  a\n  \n  b");
        assert_eq!(indent(""), "");
    }

    #[test]
    fn test_indent_normalizes_line_endings() {
        assert_eq!(indent("a\r\nb"), "  a\n  b");
    }

    #[test]
    fn test_key_string_quotes_reserved_chars() {
        assert_eq!(key_string("plain"), "plain");
        assert_eq!(key_string("has space"), "\"has space\"");
        assert_eq!(key_string("a:b"), "\"a:b\"");
        assert_eq!(key_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(key_string("{x}"), "\"{x}\"");
    }

    #[test]
    fn test_value_string_single_line_passthrough() {
        assert_eq!(value_string("hello world"), "hello world");
        assert_eq!(value_string(""), "");
    }

    #[test]
    fn test_value_string_multiline_block() {
        assert_eq!(value_string("a\nb"), "'''\n  a\n  b\n'''");
    }

    #[test]
    fn test_url_string_multiline_indents_two_levels() {
        assert_eq!(url_string("a\nb"), "'''\n    a\n    b\n'''");
    }

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("x\n"), "x");
        assert_eq!(strip_trailing_newline("x\r\n"), "x");
        assert_eq!(strip_trailing_newline("x\n\n"), "x\n");
        assert_eq!(strip_trailing_newline("x"), "x");
    }
}
