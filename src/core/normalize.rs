/// Trims the input and collapses every whitespace run (newlines and tabs
/// included) into a single space. Absent input normalizes to "".
pub fn clean_text(input: Option<&str>) -> String {
    input
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text(Some("  hello   world  ")), "hello world");
        assert_eq!(clean_text(Some("line one\n\tline two\r\n")), "line one line two");
        assert_eq!(clean_text(Some("\u{00a0}wide\u{2003}space ")), "wide space");
    }

    #[test]
    fn test_clean_text_empty_inputs() {
        assert_eq!(clean_text(None), "");
        assert_eq!(clean_text(Some("")), "");
        assert_eq!(clean_text(Some(" \n\t ")), "");
    }
}
