//! Plain-text input.

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode UTF-8 text. A leading byte order mark is dropped and invalid
/// sequences become U+FFFD rather than failing.
pub fn extract_plain(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    match String::from_utf8_lossy(bytes) {
        std::borrow::Cow::Borrowed(text) => text.to_string(),
        std::borrow::Cow::Owned(text) => {
            tracing::warn!("input is not valid UTF-8, invalid bytes were replaced");
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_passes_through() {
        assert_eq!(extract_plain("Grüße aus Köln.".as_bytes()), "Grüße aus Köln.");
    }

    #[test]
    fn leading_bom_is_dropped() {
        let text = extract_plain(b"\xEF\xBB\xBFThe quick brown fox jumps.");
        assert_eq!(text, "The quick brown fox jumps.");
        assert!(text.starts_with("The"));
    }

    #[test]
    fn only_one_bom_is_dropped() {
        let text = extract_plain("\u{FEFF}\u{FEFF}x".as_bytes());
        assert_eq!(text, "\u{FEFF}x");
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let text = extract_plain(b"abc\xffdef");
        assert_eq!(text, "abc\u{FFFD}def");
    }
}
