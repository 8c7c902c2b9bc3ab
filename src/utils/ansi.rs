use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// CSI sequences: `ESC [` or the C1 byte 0x9B, parameter bytes 0x30-0x3F,
/// intermediate bytes 0x20-0x2F, then one final byte 0x40-0x7E.
static ANSI_CSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\x{9B}|\x1B\[)[0-?]*[ -/]*[@-~]").expect("Invalid ANSI CSI regex")
});

/// Remove every ANSI/VT100 CSI escape sequence from `text`.
///
/// ```rust
/// use stack_review::utils::ansi::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(strip_ansi_codes("plain"), "plain");
/// ```
pub fn strip_ansi_codes(text: &str) -> Cow<'_, str> {
    ANSI_CSI_REGEX.replace_all(text, "")
}

/// Drop exactly one trailing newline, if present.
pub fn trim_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

/// Clean raw process output: strip escape codes, then drop the final newline.
pub fn clean_output(raw: &str) -> String {
    let stripped = strip_ansi_codes(raw);
    trim_trailing_newline(&stripped).to_string()
}

/// Decode process output bytes like `String::from_utf8_lossy`, except that a
/// stray 8-bit C1 CSI byte (0x9B) becomes U+009B instead of U+FFFD.
///
/// 0x9B is also a UTF-8 continuation byte, so it is only mapped when it is
/// not part of a valid character.
pub fn decode_output(raw: &[u8]) -> String {
    let mut text = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        text.push_str(chunk.valid());
        match chunk.invalid() {
            [] => {}
            [0x9B] => text.push('\u{9B}'),
            _ => text.push(char::REPLACEMENT_CHARACTER),
        }
    }
    text
}

/// Decode and clean raw process output bytes.
pub fn clean_output_bytes(raw: &[u8]) -> String {
    clean_output(&decode_output(raw))
}
