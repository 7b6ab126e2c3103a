use std::fs;
use std::path::Path;

use scraper::Html;
use thiserror::Error;

/// Errors that can occur while loading HTML from disk.
///
/// Parsing itself never fails: malformed markup is repaired the way a browser
/// would repair it.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input bytes were not valid UTF-8.
    #[error("invalid UTF-8 in HTML input: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Failed to read input file.
    #[error("failed to read HTML file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse an HTML string into a full document tree.
///
/// Fragments are wrapped in the implied `html`/`head`/`body` elements.
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Parse an HTML file into a document tree.
pub fn parse_file(path: &Path) -> Result<Html, ParseError> {
    let bytes = fs::read(path)?;
    let source = std::str::from_utf8(&bytes)?;
    Ok(parse(source))
}
