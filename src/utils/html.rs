/// Escapes user-supplied text for embedding in an HTML document.
///
/// Uses `ammonia::clean_text`, which entity-encodes every character that
/// could open a tag or break out of an attribute (including spaces), so the
/// result is safe both as element content and inside quoted attributes.
pub fn escape_text(input: &str) -> String {
    ammonia::clean_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutralizes_markup() {
        let escaped = escape_text("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('\''));
    }

    #[test]
    fn leaves_plain_names_alone() {
        assert_eq!(escape_text("Ada"), "Ada");
    }
}
