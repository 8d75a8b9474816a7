//! YAML document framing of encoded text

/// Start-of-document marker
pub const DOCUMENT_START: &str = "---";
/// End-of-document marker
pub const DOCUMENT_END: &str = "...";

const LINE_BREAK: &str = "\r\n";

/// Strip surrounding braces and line breaks, then wrap the text in
/// `---` / `...` markers.
pub fn frame_document(text: &str) -> String {
    let body = text.trim_matches(|c| matches!(c, '{' | '}' | '\r' | '\n'));
    format!("{DOCUMENT_START}{LINE_BREAK}{body}{LINE_BREAK}{DOCUMENT_END}")
}
