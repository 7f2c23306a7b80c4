//! Composes rendered element fragments into the email body.
//!
//! Rows come first, in document order, and each becomes one table row of the
//! container holding a nested table with one cell per column. Standalone
//! canvas elements follow, each in its own padded container row.

use ecow::eco_format;

use crate::model::{Document, Element, Row};
use crate::options::CompileOptions;
use crate::render::ElementRenderer;
use crate::writer::{HtmlWriter, InlineStyle};
use crate::{plain, shell};

/// Compiles documents with a fixed set of options.
///
/// # Examples
///
/// ```rust
/// use mailsmith::{CompileOptionsBuilder, Compiler, Document, Element};
///
/// let compiler = Compiler::with_options(CompileOptionsBuilder::new().title("Hello").build());
/// let html = compiler.compile(&Document::new().with_element(Element::text("Hi")));
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<title>Hello</title>"));
/// assert_eq!(compiler.plain_text(&Document::new().with_element(Element::text("Hi"))), "Hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Creates a compiler with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with the given options.
    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles a document into a complete HTML email.
    ///
    /// The output depends on nothing but the document and the options:
    /// compiling the same input twice yields identical bytes.
    pub fn compile(&self, document: &Document) -> String {
        let body = self.compose(document);
        let html = shell::assemble(&self.options.shell, &body);
        log::trace!(
            "compiled {} rows and {} standalone elements into {} bytes",
            document.layout_rows.len(),
            document.canvas_items.len(),
            html.len()
        );
        html
    }

    /// Extracts the plain-text alternative of a document.
    pub fn plain_text(&self, document: &Document) -> String {
        plain::plain_text(document)
    }

    /// Composes the body: the rows of the container table, without the
    /// document shell.
    pub fn compose(&self, document: &Document) -> String {
        let renderer = ElementRenderer::new(&self.options.defaults);
        let mut writer = HtmlWriter::new();

        for row in &document.layout_rows {
            write_row(&mut writer, &renderer, row);
        }
        for element in &document.canvas_items {
            self.write_standalone(&mut writer, &renderer, element);
        }

        writer.into_string()
    }

    fn write_standalone(
        &self,
        writer: &mut HtmlWriter,
        renderer: &ElementRenderer<'_>,
        element: &Element,
    ) {
        writer.start_tag("tr");
        writer.finish_tag();
        writer.start_tag("td");
        writer.attribute("class", "standalone");
        writer.style(
            &InlineStyle::new().with("padding", self.options.shell.standalone_padding.clone()),
        );
        writer.finish_tag();
        renderer.write_element(writer, element);
        writer.end_tag("td");
        writer.end_tag("tr");
        writer.newline();
    }
}

fn write_row(writer: &mut HtmlWriter, renderer: &ElementRenderer<'_>, row: &Row) {
    let columns = row.sorted_columns();
    if columns.is_empty() {
        log::debug!("skipping row {:?} without columns", row.id);
        return;
    }

    // Equal split, truncated to whole percent, never below 1%.
    let width = eco_format!("{}%", (100 / columns.len()).max(1));

    writer.start_tag("tr");
    writer.finish_tag();
    writer.start_tag("td");
    writer.attribute("class", "row");
    writer.style(&InlineStyle::new().with("padding", "0"));
    writer.finish_tag();

    writer.start_presentation_table("100%");
    writer.style(&InlineStyle::new().with("border-collapse", "collapse"));
    writer.finish_tag();
    writer.start_tag("tr");
    writer.finish_tag();

    for (_, elements) in columns {
        writer.start_tag("td");
        writer.attribute("class", "column");
        writer.attribute("valign", "top");
        writer.attribute("width", &width);
        writer.style(
            &InlineStyle::new()
                .with("width", width.clone())
                .with("vertical-align", "top"),
        );
        writer.finish_tag();
        for element in elements {
            renderer.write_element(writer, element);
        }
        writer.end_tag("td");
    }

    writer.end_tag("tr");
    writer.end_tag("table");
    writer.end_tag("td");
    writer.end_tag("tr");
    writer.newline();
}

/// Compiles a document with the default options.
pub fn compile(document: &Document) -> String {
    Compiler::new().compile(document)
}
