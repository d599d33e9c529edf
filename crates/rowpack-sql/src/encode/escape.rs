//! Dialect-specific character escaping.
//!
//! Each dialect maps a handful of control and quote characters to
//! multi-character escape sequences; everything else passes through
//! unchanged. Escaping is a single left-to-right scan that reports
//! insufficient space instead of overflowing the destination.

/// Escape sequence for a character under MySQL's string grammar, or `None`
/// when the character passes through unchanged.
pub fn escape_mysql(c: char) -> Option<&'static str> {
    match c {
        '\u{1a}' => Some("\\Z"),
        '\0' => Some("\\0"),
        '\'' => Some("\\'"),
        '"' => Some("\\\""),
        '\u{8}' => Some("\\b"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

/// Escape sequence under PostgreSQL's extended (`E'…'`) string grammar.
pub fn escape_postgresql(c: char) -> Option<&'static str> {
    match c {
        '\u{c}' => Some("\\f"),
        '\0' => Some("\\0"),
        '\'' => Some("\\'"),
        '\u{8}' => Some("\\b"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

/// Escape sequence under SQLite's string grammar. SQLite has no backslash
/// escapes; only the quote is doubled.
pub fn escape_sqlite(c: char) -> Option<&'static str> {
    match c {
        '\'' => Some("''"),
        _ => None,
    }
}

/// Escapes `src` into `dst` using the given per-character table.
///
/// Returns the number of bytes written, or `None` if `dst` cannot hold the
/// fully escaped text.
pub fn try_escape(
    src: &str,
    table: fn(char) -> Option<&'static str>,
    dst: &mut [u8],
) -> Option<usize> {
    let mut written = 0;

    for c in src.chars() {
        match table(c) {
            Some(escaped) => {
                if written + escaped.len() > dst.len() {
                    return None;
                }
                dst[written..written + escaped.len()].copy_from_slice(escaped.as_bytes());
                written += escaped.len();
            }
            None => {
                let len = c.len_utf8();
                if written + len > dst.len() {
                    return None;
                }
                c.encode_utf8(&mut dst[written..written + len]);
                written += len;
            }
        }
    }

    Some(written)
}

/// Worst-case escaped size in bytes: every character replaced by a two-byte
/// sequence, or kept verbatim when wider.
pub fn escaped_max_len(src: &str) -> usize {
    src.chars().map(|c| c.len_utf8().max(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_to_string(src: &str, table: fn(char) -> Option<&'static str>) -> String {
        let mut buf = vec![0u8; escaped_max_len(src)];
        let n = try_escape(src, table, &mut buf).unwrap();
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn mysql_control_characters() {
        assert_eq!(
            escape_to_string("a'b\\c\nd\te\u{1a}f\0", escape_mysql),
            "a\\'b\\\\c\\nd\\te\\Zf\\0"
        );
    }

    #[test]
    fn postgresql_table_differs_from_mysql() {
        // SUB passes through; form feed is escaped.
        assert_eq!(escape_to_string("\u{1a}\u{c}", escape_postgresql), "\u{1a}\\f");
        assert_eq!(escape_to_string("it's", escape_postgresql), "it\\'s");
    }

    #[test]
    fn sqlite_doubles_quotes_only() {
        assert_eq!(escape_to_string("it's\n", escape_sqlite), "it''s\n");
    }

    #[test]
    fn multibyte_passes_through() {
        assert_eq!(escape_to_string("héllo ∆ 列", escape_mysql), "héllo ∆ 列");
    }

    #[test]
    fn reports_insufficient_space_without_overflow() {
        let mut buf = [0u8; 3];
        assert_eq!(try_escape("a'b", escape_mysql, &mut buf), None);
    }
}
