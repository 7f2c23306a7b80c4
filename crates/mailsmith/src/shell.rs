//! The fixed document wrapper around a composed body.

use ecow::eco_format;

use crate::options::ShellOptions;
use crate::writer::{HtmlWriter, InlineStyle};

/// Wraps `body`, the rows of the container table, into a complete document.
pub(crate) fn assemble(options: &ShellOptions, body: &str) -> String {
    let mut writer = HtmlWriter::with_capacity(body.len() + 2048);

    writer.write_trusted_html("<!DOCTYPE html>\n");
    writer.start_tag("html");
    writer.attribute("lang", &options.lang);
    writer.attribute("xmlns", "http://www.w3.org/1999/xhtml");
    writer.finish_tag();
    writer.newline();
    write_head(&mut writer, options);

    writer.start_tag("body");
    writer.style(
        &InlineStyle::new()
            .with("margin", "0")
            .with("padding", "0")
            .with("background-color", options.page_background.clone()),
    );
    writer.finish_tag();
    writer.newline();

    if !options.preheader.is_empty() {
        writer.start_tag("div");
        writer.style(
            &InlineStyle::new()
                .with("display", "none")
                .with("max-height", "0")
                .with("overflow", "hidden")
                .with("mso-hide", "all"),
        );
        writer.finish_tag();
        writer.text(&options.preheader);
        writer.end_tag("div");
        writer.newline();
    }

    writer.start_presentation_table("100%");
    writer.style(&InlineStyle::new().with("background-color", options.page_background.clone()));
    writer.finish_tag();
    writer.write_trusted_html("\n<tr>\n");
    writer.start_tag("td");
    writer.attribute("align", "center");
    writer.style(&InlineStyle::new().with("padding", "20px 0"));
    writer.finish_tag();
    writer.newline();

    writer.start_presentation_table(&options.max_width.to_string());
    writer.attribute("class", "container");
    writer.style(
        &InlineStyle::new()
            .with("width", "100%")
            .with_px("max-width", options.max_width)
            .with("background-color", options.container_background.clone())
            .with("border", "1px solid #e5e5e5")
            .with("border-radius", "4px")
            .with("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.08)"),
    );
    writer.finish_tag();
    writer.newline();

    writer.write_trusted_html(body);

    writer.write_trusted_html("</table>\n</td>\n</tr>\n</table>\n</body>\n</html>\n");
    writer.into_string()
}

fn write_head(writer: &mut HtmlWriter, options: &ShellOptions) {
    writer.write_trusted_html("<head>\n");

    writer.start_tag("meta");
    writer.attribute("charset", "UTF-8");
    writer.finish_self_closing_tag();
    writer.newline();
    for (key, name, content) in [
        ("name", "viewport", "width=device-width, initial-scale=1.0"),
        ("http-equiv", "X-UA-Compatible", "IE=edge"),
    ] {
        writer.start_tag("meta");
        writer.attribute(key, name);
        writer.attribute("content", content);
        writer.finish_self_closing_tag();
        writer.newline();
    }

    writer.start_tag("title");
    writer.finish_tag();
    writer.text(&options.title);
    writer.end_tag("title");
    writer.newline();

    // The only rules that cannot be inlined: the small-screen overrides.
    writer.write_trusted_html(&eco_format!(
        "<style>
@media only screen and (max-width: {}px) {{
  .container {{ width: 100% !important; }}
  .row .column {{ display: block !important; width: 100% !important; max-width: 100% !important; }}
  img {{ max-width: 100% !important; height: auto !important; }}
  a {{ max-width: 100% !important; word-break: break-word; }}
}}
</style>
",
        options.mobile_breakpoint
    ));

    writer.write_trusted_html("</head>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body() {
        let html = assemble(&ShellOptions::default(), "");
        insta::assert_snapshot!(html.trim_end(), @r#"
        <!DOCTYPE html>
        <html lang="en" xmlns="http://www.w3.org/1999/xhtml">
        <head>
        <meta charset="UTF-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <meta http-equiv="X-UA-Compatible" content="IE=edge" />
        <title></title>
        <style>
        @media only screen and (max-width: 620px) {
          .container { width: 100% !important; }
          .row .column { display: block !important; width: 100% !important; max-width: 100% !important; }
          img { max-width: 100% !important; height: auto !important; }
          a { max-width: 100% !important; word-break: break-word; }
        }
        </style>
        </head>
        <body style="margin:0;padding:0;background-color:#f4f4f4;">
        <table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0" style="background-color:#f4f4f4;">
        <tr>
        <td align="center" style="padding:20px 0;">
        <table role="presentation" width="600" cellpadding="0" cellspacing="0" border="0" class="container" style="width:100%;max-width:600px;background-color:#ffffff;border:1px solid #e5e5e5;border-radius:4px;box-shadow:0 2px 8px rgba(0, 0, 0, 0.08);">
        </table>
        </td>
        </tr>
        </table>
        </body>
        </html>
        "#);
    }

    #[test]
    fn title_and_preheader_are_escaped() {
        let options = ShellOptions {
            title: "Deals <today> & more".into(),
            preheader: "Don't miss \"this\"".into(),
            lang: "de".into(),
            ..Default::default()
        };
        let html = assemble(&options, "");
        assert!(html.contains("<title>Deals &lt;today&gt; &amp; more</title>"), "{html}");
        assert!(
            html.contains(
                r#"<div style="display:none;max-height:0;overflow:hidden;mso-hide:all;">Don't miss &quot;this&quot;</div>"#
            ),
            "{html}"
        );
        assert!(html.contains(r#"<html lang="de""#), "{html}");
    }

    #[test]
    fn empty_preheader_is_omitted() {
        let html = assemble(&ShellOptions::default(), "");
        assert!(!html.contains("display:none"), "{html}");
    }

    #[test]
    fn width_and_breakpoint() {
        let options = ShellOptions {
            max_width: 640,
            mobile_breakpoint: 480,
            ..Default::default()
        };
        let html = assemble(&options, "<tr><td>x</td></tr>\n");
        assert!(html.contains(r#"width="640""#), "{html}");
        assert!(html.contains("max-width:640px;"), "{html}");
        assert!(html.contains("(max-width: 480px)"), "{html}");
        assert!(
            html.contains("0.08);\">\n<tr><td>x</td></tr>\n</table>\n</td>"),
            "{html}"
        );
    }
}
