//! Lenient HTML parsing and plain-text rendering used when importing rich
//! comment bodies into systems that only accept plain text.

pub mod parser;
pub mod text;
pub mod tree;

pub use parser::{parse, parse_file, ParseError};
pub use scraper::Html;
pub use text::{html_to_ascii, html_to_ascii_document, strip_html, HR_RULE_WIDTH};
pub use tree::text_content;
