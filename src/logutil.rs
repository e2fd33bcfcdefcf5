//! Log helpers for raw player input.
//!
//! Input lines arrive with trailing newlines and whatever a terminal or pipe
//! sends; log records must stay on one line and bounded in size.

/// Longest input preview kept in a log record, in characters.
pub const MAX_INPUT_PREVIEW: usize = 120;

/// Quote a raw input line for single-line logging.
///
/// Newlines, carriage returns, tabs, backslashes and quotes are escaped, other
/// control characters become `\xNN`, and input longer than
/// [`MAX_INPUT_PREVIEW`] characters is cut with an ellipsis.
pub fn escape_log(raw: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(raw.len().min(MAX_INPUT_PREVIEW) + 4);
    out.push('"');
    for (count, ch) in raw.chars().enumerate() {
        if count >= MAX_INPUT_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
