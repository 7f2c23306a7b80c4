use crate::model::ButtonProps;
use crate::writer::{HtmlWriter, InlineStyle};

use super::ElementRenderer;

impl ElementRenderer<'_> {
    pub(super) fn write_button(&self, writer: &mut HtmlWriter, props: &ButtonProps) {
        let defaults = self.defaults;
        let radius = props
            .button_shape
            .map_or(defaults.button_radius, |shape| shape.radius());

        writer.start_tag("a");
        writer.attribute("href", props.button_url.as_deref().unwrap_or("#"));
        writer.attribute("target", "_blank");
        writer.style(
            &InlineStyle::new()
                .with("display", "inline-block")
                .with(
                    "background-color",
                    props.button_color.clone().unwrap_or_else(|| defaults.button_color.clone()),
                )
                .with(
                    "color",
                    props.color.clone().unwrap_or_else(|| defaults.button_text_color.clone()),
                )
                .with(
                    "font-size",
                    props.font_size.clone().unwrap_or_else(|| defaults.font_size.clone()),
                )
                .with(
                    "font-family",
                    props.font_family.clone().unwrap_or_else(|| defaults.font_family.clone()),
                )
                .with("padding", defaults.button_padding.clone())
                .with_px("border-radius", radius)
                .with("text-decoration", "none"),
        );
        writer.finish_tag();
        writer.write_untrusted_html(&props.content);
        writer.end_tag("a");
    }
}
