//! The plain-text alternative of a document.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Document, Element, ElementKind};
use crate::sanitize::sanitize;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

struct PlainTextCollector {
    blocks: Vec<String>,
}

impl PlainTextCollector {
    fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    fn push_block(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.blocks.push(text.to_owned());
        }
    }

    fn element(&mut self, element: &Element) {
        match &element.kind {
            ElementKind::Text(props) => self.push_block(&props.content),
            ElementKind::Button(props) => match link_target(props.button_url.as_deref()) {
                Some(url) if props.content.trim().is_empty() => self.push_block(url),
                Some(url) => self.push_block(&format!("{} ({url})", props.content.trim())),
                None => self.push_block(&props.content),
            },
            ElementKind::Image(props) => self.push_block(props.alt.as_deref().unwrap_or("")),
            ElementKind::Divider(..) => self.push_block("----"),
            ElementKind::SocialIcon(props) => {
                if let Some(url) = link_target(props.url.as_deref()) {
                    self.push_block(url);
                }
            }
            ElementKind::RawMarkup(props) => self.push_block(&markup_text(&props.content)),
        }
    }

    fn finish(self) -> String {
        self.blocks.join("\n\n")
    }
}

fn link_target(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|url| !url.is_empty() && *url != "#")
}

/// The visible text of author markup, on one line.
fn markup_text(markup: &str) -> String {
    let markup = sanitize(markup);
    let markup = COMMENT.replace_all(&markup, "");
    let text = TAG.replace_all(&markup, " ");
    let text = html_escape::decode_html_entities(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the readable text of a document, one block per element.
///
/// Elements are visited in the order [`crate::compile`] lays them out: rows
/// first, columns by number, then standalone elements. Blocks are separated
/// by a blank line.
///
/// ```rust
/// use mailsmith::{Document, Element};
///
/// let doc = Document::new()
///     .with_element(Element::text("Hello"))
///     .with_element(Element::raw_markup("<p>Fish &amp; <b>chips</b></p>"));
/// assert_eq!(mailsmith::plain_text(&doc), "Hello\n\nFish & chips");
/// ```
pub fn plain_text(document: &Document) -> String {
    let mut collector = PlainTextCollector::new();
    for row in &document.layout_rows {
        for (_, elements) in row.sorted_columns() {
            for element in elements {
                collector.element(element);
            }
        }
    }
    for element in &document.canvas_items {
        collector.element(element);
    }
    collector.finish()
}
