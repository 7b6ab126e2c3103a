use scraper::node::Text;
use scraper::{Html, Node};
use tendril::StrTendril;

/// Concatenate every text node of the document in document order.
///
/// Comments, doctypes and processing instructions contribute nothing.
pub fn text_content(doc: &Html) -> String {
    let mut out = String::new();
    for node in doc.tree.root().descendants() {
        if let Some(text) = node.value().as_text() {
            out.push_str(&text.text);
        }
    }
    out
}

/// Build a detached text node holding `content`.
pub(crate) fn text_node(content: &str) -> Node {
    Node::Text(Text {
        text: StrTendril::from_slice(content),
    })
}

/// Return the local name of `node` if it is an element.
pub(crate) fn element_name(node: &Node) -> Option<&str> {
    node.as_element().map(|el| el.name())
}

/// Replace each run of whitespace with a single space.
///
/// Whitespace here is space, tab, line feed, carriage return, form feed and
/// vertical tab.
pub(crate) fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if is_space(ch) {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}
