use scraper::Html;

use crate::parser::parse;
use crate::tree::{collapse_whitespace, element_name, text_content, text_node};

/// Number of hyphens used to draw an `<hr>` as text.
pub const HR_RULE_WIDTH: usize = 70;

/// Elements followed by a blank line in plain-text output.
const BLOCK_ELEMENTS: &[&str] = &["p", "div", "address"];

/// Return the text content of an HTML string with all markup removed.
///
/// Entities are decoded. Whitespace is left as the parser produced it.
pub fn strip_html(html: &str) -> String {
    text_content(&parse(html))
}

/// Render an HTML string as readable plain text.
///
/// See [`html_to_ascii_document`] for the conversion rules.
pub fn html_to_ascii(html: &str) -> String {
    html_to_ascii_document(&parse(html))
}

/// Render a parsed document as readable plain text without modifying it.
///
/// Whitespace runs inside text nodes collapse to one space, `<br>` becomes a
/// line break, `<hr>` becomes a line of hyphens on its own line, and every
/// `p`, `div` and `address` element is followed by a blank line. The result
/// is trimmed.
pub fn html_to_ascii_document(doc: &Html) -> String {
    let mut copy = doc.clone();

    // Must run before any break text is inserted.
    collapse_text_nodes(&mut copy);
    swap_breaks(&mut copy);
    append_block_breaks(&mut copy);

    text_content(&copy).trim().to_string()
}

fn collapse_text_nodes(doc: &mut Html) {
    let ids: Vec<_> = doc
        .tree
        .root()
        .descendants()
        .filter(|node| node.value().is_text())
        .map(|node| node.id())
        .collect();

    for id in ids {
        let Some(mut node) = doc.tree.get_mut(id) else {
            continue;
        };
        if let Some(text) = node.value().as_text() {
            let collapsed = collapse_whitespace(&text.text);
            *node.value() = text_node(&collapsed);
        }
    }
}

fn swap_breaks(doc: &mut Html) {
    let swaps: Vec<_> = doc
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            element_name(node.value())
                .and_then(swap_text)
                .map(|text| (node.id(), text))
        })
        .collect();

    for (id, replacement) in swaps {
        let Some(mut node) = doc.tree.get_mut(id) else {
            continue;
        };
        node.insert_before(text_node(&replacement));
        node.detach();
    }
}

fn append_block_breaks(doc: &mut Html) {
    let blocks: Vec<_> = doc
        .tree
        .root()
        .descendants()
        .filter(|node| {
            element_name(node.value()).is_some_and(|name| BLOCK_ELEMENTS.contains(&name))
        })
        .map(|node| node.id())
        .collect();

    for id in blocks {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.insert_after(text_node("\n\n"));
        }
    }
}

fn swap_text(name: &str) -> Option<String> {
    match name {
        "br" => Some("\n".to_string()),
        "hr" => Some(format!("\n{}\n", "-".repeat(HR_RULE_WIDTH))),
        _ => None,
    }
}
