use crate::model::ImageProps;
use crate::writer::{HtmlWriter, InlineStyle};

use super::ElementRenderer;

impl ElementRenderer<'_> {
    pub(super) fn write_image(&self, writer: &mut HtmlWriter, props: &ImageProps) {
        let defaults = self.defaults;
        let width = props.width.unwrap_or(defaults.image_width);
        let height = props.height.unwrap_or(defaults.image_height);
        let object_fit = props.object_fit.unwrap_or(defaults.object_fit);
        let radius = props.border_radius.unwrap_or(defaults.image_border_radius);

        if props.src.is_empty() {
            log::debug!("image element has no source");
        }

        let link = props.link_url.as_deref().filter(|url| !url.is_empty());
        if let Some(url) = link {
            writer.start_tag("a");
            writer.attribute("href", url);
            writer.attribute("target", "_blank");
            writer.finish_tag();
        }

        // Pixel size attributes are emitted even when CSS sizes are.
        writer.start_tag("img");
        writer.attribute("src", &props.src);
        writer.attribute("alt", props.alt.as_deref().unwrap_or(""));
        writer.attribute_int("width", width);
        writer.attribute_int("height", height);
        writer.style(
            &InlineStyle::new()
                .with("display", "inline-block")
                .with_px("width", width)
                .with_px("height", height)
                .with("max-width", "100%")
                .with("border", "0")
                .with("object-fit", object_fit.as_str())
                .with_px("border-radius", radius),
        );
        writer.finish_self_closing_tag();

        if link.is_some() {
            writer.end_tag("a");
        }
    }
}
