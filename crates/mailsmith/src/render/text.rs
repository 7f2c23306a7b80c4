use crate::model::TextProps;
use crate::writer::{HtmlWriter, InlineStyle};

use super::ElementRenderer;

impl ElementRenderer<'_> {
    pub(super) fn write_text(&self, writer: &mut HtmlWriter, props: &TextProps) {
        let defaults = self.defaults;

        let mut style = InlineStyle::new();
        style
            .push(
                "font-size",
                props.font_size.clone().unwrap_or_else(|| defaults.font_size.clone()),
            )
            .push("color", props.color.clone().unwrap_or_else(|| defaults.text_color.clone()))
            .push(
                "font-family",
                props.font_family.clone().unwrap_or_else(|| defaults.font_family.clone()),
            )
            .push("line-height", defaults.line_height.clone());
        if props.font_styles.bold {
            style.push("font-weight", "bold");
        }
        if props.font_styles.italic {
            style.push("font-style", "italic");
        }
        if props.font_styles.underline {
            style.push("text-decoration", "underline");
        }

        writer.start_tag("div");
        writer.style(&style);
        writer.finish_tag();
        writer.write_untrusted_html(&props.content);
        writer.end_tag("div");
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Element, ElementKind, FontStyles, TextProps};
    use crate::render::render;

    fn text(props: TextProps) -> String {
        render(&Element::new(ElementKind::Text(props)))
    }

    #[test]
    fn content_is_escaped() {
        let out = text(TextProps {
            content: "<b>5 > 3 & \"quoted\"</b>".into(),
            ..Default::default()
        });
        assert!(
            out.contains(">&lt;b&gt;5 &gt; 3 &amp; &quot;quoted&quot;&lt;/b&gt;</div>"),
            "{out}"
        );
    }

    #[test]
    fn styles_follow_flags() {
        let out = text(TextProps {
            content: "Hi".into(),
            font_size: Some("24px".into()),
            color: Some("#333333".into()),
            font_family: Some("Georgia, serif".into()),
            font_styles: FontStyles {
                bold: true,
                italic: false,
                underline: true,
            },
        });
        insta::assert_snapshot!(out, @r#"<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="border-collapse:collapse;"><tr><td align="left" style="background-color:transparent;padding-top:16px;padding-right:16px;padding-bottom:16px;padding-left:16px;text-align:left;"><div style="font-size:24px;color:#333333;font-family:Georgia, serif;line-height:1.5;font-weight:bold;text-decoration:underline;">Hi</div></td></tr></table>"#);
    }

    #[test]
    fn empty_content_keeps_the_block() {
        let out = text(TextProps::default());
        assert!(out.contains("line-height:1.5;\"></div>"), "{out}");
    }
}
