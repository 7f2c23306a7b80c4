use crate::model::SocialIconProps;
use crate::writer::{HtmlWriter, InlineStyle};

use super::ElementRenderer;

impl ElementRenderer<'_> {
    pub(super) fn write_social_icon(&self, writer: &mut HtmlWriter, props: &SocialIconProps) {
        let defaults = self.defaults;
        let size = props.size.unwrap_or(defaults.social_size);

        writer.start_tag("a");
        writer.attribute("href", props.url.as_deref().unwrap_or("#"));
        writer.attribute("target", "_blank");
        writer.style(
            &InlineStyle::new()
                .with("display", "inline-block")
                .with("text-decoration", "none"),
        );
        writer.finish_tag();

        writer.start_tag("span");
        writer.style(
            &InlineStyle::new()
                .with("display", "inline-block")
                .with_px("width", size)
                .with_px("height", size)
                .with_px("line-height", size)
                .with("border-radius", "50%")
                .with(
                    "background-color",
                    props.color.clone().unwrap_or_else(|| defaults.social_color.clone()),
                ),
        );
        writer.finish_tag();
        writer.write_trusted_html("&nbsp;");
        writer.end_tag("span");

        writer.end_tag("a");
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Element, ElementKind, SocialIconProps};
    use crate::render::render;

    #[test]
    fn circle_link() {
        let out = render(&Element::new(ElementKind::SocialIcon(SocialIconProps {
            url: Some("https://social.example/@me".into()),
            color: Some("#1da1f2".into()),
            size: Some(32),
        })));
        assert!(
            out.contains(r#"<a href="https://social.example/@me" target="_blank" style="display:inline-block;text-decoration:none;"><span style="display:inline-block;width:32px;height:32px;line-height:32px;border-radius:50%;background-color:#1da1f2;">&nbsp;</span></a>"#),
            "{out}"
        );
    }

    #[test]
    fn defaults() {
        let out = render(&Element::new(ElementKind::SocialIcon(
            SocialIconProps::default(),
        )));
        assert!(out.contains(r##"<a href="#""##), "{out}");
        assert!(out.contains("width:24px;height:24px;"), "{out}");
        assert!(out.contains("background-color:#000000;\">&nbsp;</span>"), "{out}");
    }
}
