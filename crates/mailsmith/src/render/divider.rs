use ecow::eco_format;

use crate::model::{DividerProps, DividerStyle};
use crate::writer::{HtmlWriter, InlineStyle};

use super::ElementRenderer;

impl ElementRenderer<'_> {
    pub(super) fn write_divider(&self, writer: &mut HtmlWriter, props: &DividerProps) {
        let color = props
            .color
            .clone()
            .unwrap_or_else(|| self.defaults.divider_color.clone());

        let (style, glyph) = match props.style {
            DividerStyle::Single => (
                InlineStyle::new()
                    .with("height", "1px")
                    .with("line-height", "1px")
                    .with("font-size", "1px")
                    .with("background-color", color),
                "&nbsp;",
            ),
            DividerStyle::Dotted => (
                InlineStyle::new()
                    .with("height", "0")
                    .with("line-height", "0")
                    .with("font-size", "0")
                    .with("border-top", eco_format!("2px dotted {color}")),
                "&nbsp;",
            ),
            DividerStyle::DoubleArrow => (
                InlineStyle::new()
                    .with("text-align", "center")
                    .with("font-size", "20px")
                    .with("line-height", "1")
                    .with("color", color),
                "&#8596;",
            ),
        };

        writer.start_tag("div");
        writer.style(&style);
        writer.finish_tag();
        writer.write_trusted_html(glyph);
        writer.end_tag("div");
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{DividerProps, DividerStyle, Element, ElementKind};
    use crate::render::render;

    fn divider(style: DividerStyle, color: Option<&str>) -> String {
        let out = render(&Element::new(ElementKind::Divider(DividerProps {
            style,
            color: color.map(Into::into),
        })));
        let start = out.find("<div").unwrap();
        let end = out.rfind("</td>").unwrap();
        out[start..end].to_owned()
    }

    #[test]
    fn templates() {
        insta::assert_snapshot!(divider(DividerStyle::Single, None), @r#"<div style="height:1px;line-height:1px;font-size:1px;background-color:#cccccc;">&nbsp;</div>"#);
        insta::assert_snapshot!(divider(DividerStyle::Dotted, Some("#ff0000")), @r#"<div style="height:0;line-height:0;font-size:0;border-top:2px dotted #ff0000;">&nbsp;</div>"#);
        insta::assert_snapshot!(divider(DividerStyle::DoubleArrow, None), @r#"<div style="text-align:center;font-size:20px;line-height:1;color:#cccccc;">&#8596;</div>"#);
    }
}
