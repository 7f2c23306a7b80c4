//! A buffered HTML writer shared by every compilation stage.
//!
//! The writer draws the trust boundary of the compiler: [`HtmlWriter::text`]
//! and [`HtmlWriter::attribute`] always escape, while
//! [`HtmlWriter::write_trusted_html`] appends verbatim and must only be fed
//! markup the caller produced itself or ran through
//! [`crate::sanitize::sanitize`].

mod style;
#[cfg(test)]
mod tests;

use std::borrow::Cow;

pub use self::style::InlineStyle;

/// Escapes `&`, `<`, `>` and `"` so that the result is safe both as element
/// text and inside a double-quoted attribute value.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// HTML writer for building email markup.
///
/// # Examples
///
/// ```rust
/// use mailsmith::writer::{HtmlWriter, InlineStyle};
///
/// let mut writer = HtmlWriter::new();
/// writer.start_tag("td");
/// writer.attribute("align", "center");
/// writer.style(&InlineStyle::new().with("color", "#000000"));
/// writer.finish_tag();
/// writer.text("Fish & Chips");
/// writer.end_tag("td");
///
/// assert_eq!(
///     writer.into_string(),
///     "<td align=\"center\" style=\"color:#000000;\">Fish &amp; Chips</td>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    /// Buffer for storing the output text
    buffer: String,
    /// Whether a start tag is waiting for its closing `>`
    tag_opened: bool,
}

impl HtmlWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            tag_opened: false,
        }
    }

    /// Consumes the writer and returns the generated HTML string.
    pub fn into_string(mut self) -> String {
        self.ensure_tag_closed();
        self.buffer
    }

    /// Returns the markup written so far, excluding a pending `>`.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn ensure_tag_closed(&mut self) {
        if self.tag_opened {
            self.buffer.push('>');
            self.tag_opened = false;
        }
    }

    /// Starts an HTML tag with the given name, leaving it open for
    /// attributes.
    pub fn start_tag(&mut self, tag_name: &str) {
        self.ensure_tag_closed();
        self.buffer.push('<');
        self.buffer.push_str(tag_name);
        self.tag_opened = true;
    }

    /// Adds an attribute to the currently open tag. The value is escaped.
    pub fn attribute(&mut self, key: &str, value: &str) {
        if !self.tag_opened {
            log::warn!("attribute `{key}` written with no open tag, dropping it");
            return;
        }
        self.buffer.push(' ');
        self.buffer.push_str(key);
        self.buffer.push_str("=\"");
        self.buffer.push_str(&escape_html(value));
        self.buffer.push('"');
    }

    /// Adds a numeric attribute to the currently open tag.
    pub fn attribute_int(&mut self, key: &str, value: i64) {
        self.attribute(key, &value.to_string());
    }

    /// Adds a `style` attribute unless the declaration list is empty.
    pub fn style(&mut self, style: &InlineStyle) {
        if !style.is_empty() {
            self.attribute("style", &style.to_string());
        }
    }

    /// Finishes the current open tag.
    pub fn finish_tag(&mut self) {
        self.ensure_tag_closed();
    }

    /// Finishes the current open tag as a self-closing tag.
    pub fn finish_self_closing_tag(&mut self) {
        if !self.tag_opened {
            log::warn!("self-closing finish requested with no open tag");
            return;
        }
        self.buffer.push_str(" />");
        self.tag_opened = false;
    }

    /// Closes an HTML tag with the given name.
    pub fn end_tag(&mut self, tag_name: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str("</");
        self.buffer.push_str(tag_name);
        self.buffer.push('>');
    }

    /// Writes text content, escaping HTML special characters.
    pub fn text(&mut self, text: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str(&escape_html(text));
    }

    /// Writes markup that is trusted to be well-formed and safe.
    ///
    /// Use this for fragments the compiler synthesises and for sanitized
    /// raw markup. Author-provided text goes through
    /// [`Self::write_untrusted_html`] instead.
    pub fn write_trusted_html(&mut self, html: &str) {
        self.ensure_tag_closed();
        self.buffer.push_str(html);
    }

    /// Writes content that may contain characters requiring escaping.
    ///
    /// This is a semantic alias for [`Self::text`], making call sites explicit
    /// about handling untrusted content.
    pub fn write_untrusted_html(&mut self, html: &str) {
        self.text(html)
    }

    /// Writes a line break between structural blocks.
    pub fn newline(&mut self) {
        self.write_trusted_html("\n");
    }

    /// Opens a full-width presentation table, the building block of every
    /// email-safe layout.
    pub fn start_presentation_table(&mut self, width: &str) {
        self.start_tag("table");
        self.attribute("role", "presentation");
        self.attribute("width", width);
        self.attribute("cellpadding", "0");
        self.attribute("cellspacing", "0");
        self.attribute("border", "0");
    }
}
