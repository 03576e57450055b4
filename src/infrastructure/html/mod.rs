//! HTML to plain text conversion

use crate::application::errors::LookupError;

/// Render an HTML fragment as wrapped plain text
pub fn to_plain_text(html: &str, width: usize) -> Result<String, LookupError> {
    html2text::from_read(html.as_bytes(), width).map_err(|e| LookupError::Render(e.to_string()))
}

/// Render an HTML fragment as a single line with whitespace collapsed
pub fn to_single_line(html: &str) -> Result<String, LookupError> {
    let text = to_plain_text(html, 1000)?;
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}
