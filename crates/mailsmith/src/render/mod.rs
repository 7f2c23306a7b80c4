//! Per-kind element renderers.
//!
//! Every element renders to a self-contained presentation table. Its single
//! cell carries the element frame: background color, four explicit pixel
//! paddings, and the alignment, written both as the legacy `align` attribute
//! and as `text-align` because clients honor one or the other.

mod button;
mod divider;
mod image;
mod social;
mod text;

use crate::model::{Element, ElementKind, Frame};
use crate::options::RenderDefaults;
use crate::sanitize::sanitize;
use crate::writer::{HtmlWriter, InlineStyle};

/// Renders elements with a fixed table of defaults.
#[derive(Debug, Clone, Copy)]
pub struct ElementRenderer<'a> {
    defaults: &'a RenderDefaults,
}

impl<'a> ElementRenderer<'a> {
    /// Creates a renderer substituting values from `defaults`.
    pub fn new(defaults: &'a RenderDefaults) -> Self {
        Self { defaults }
    }

    /// The defaults this renderer substitutes.
    pub fn defaults(&self) -> &'a RenderDefaults {
        self.defaults
    }

    /// Renders one element to a markup fragment.
    pub fn render(&self, element: &Element) -> String {
        let mut writer = HtmlWriter::new();
        self.write_element(&mut writer, element);
        writer.into_string()
    }

    /// Writes one element fragment into `writer`.
    pub fn write_element(&self, writer: &mut HtmlWriter, element: &Element) {
        self.open_frame(writer, &element.frame);
        match &element.kind {
            ElementKind::Text(props) => self.write_text(writer, props),
            ElementKind::Button(props) => self.write_button(writer, props),
            ElementKind::Image(props) => self.write_image(writer, props),
            ElementKind::Divider(props) => self.write_divider(writer, props),
            ElementKind::SocialIcon(props) => self.write_social_icon(writer, props),
            // Raw markup is filtered, not escaped.
            ElementKind::RawMarkup(props) => writer.write_trusted_html(&sanitize(&props.content)),
        }
        close_frame(writer);
    }

    fn open_frame(&self, writer: &mut HtmlWriter, frame: &Frame) {
        let defaults = self.defaults;
        let padding = &frame.padding;
        let alignment = frame.alignment.as_str();

        writer.start_presentation_table("100%");
        writer.style(&InlineStyle::new().with("border-collapse", "collapse"));
        writer.finish_tag();
        writer.start_tag("tr");
        writer.finish_tag();

        writer.start_tag("td");
        writer.attribute("align", alignment);
        writer.style(
            &InlineStyle::new()
                .with(
                    "background-color",
                    frame
                        .background_color
                        .clone()
                        .unwrap_or_else(|| defaults.background_color.clone()),
                )
                .with_px("padding-top", padding.top.unwrap_or(defaults.padding))
                .with_px("padding-right", padding.right.unwrap_or(defaults.padding))
                .with_px("padding-bottom", padding.bottom.unwrap_or(defaults.padding))
                .with_px("padding-left", padding.left.unwrap_or(defaults.padding))
                .with("text-align", alignment),
        );
        writer.finish_tag();
    }
}

fn close_frame(writer: &mut HtmlWriter) {
    writer.end_tag("td");
    writer.end_tag("tr");
    writer.end_tag("table");
}

/// Renders one element with the default settings.
pub fn render(element: &Element) -> String {
    ElementRenderer::new(&RenderDefaults::default()).render(element)
}
