use super::{HtmlWriter, InlineStyle, escape_html};

#[test]
fn write_trusted_html_keeps_fragment_verbatim() {
    let mut writer = HtmlWriter::new();
    writer.start_tag("div");
    writer.finish_tag();
    writer.write_trusted_html("<span>");
    writer.write_trusted_html("&ok");
    writer.end_tag("div");

    assert_eq!(writer.into_string(), "<div><span>&ok</div>");
}

#[test]
fn write_untrusted_html_escapes_fragment() {
    let mut writer = HtmlWriter::new();
    writer.start_tag("div");
    writer.finish_tag();
    writer.write_untrusted_html("<span>&oops");
    writer.end_tag("div");

    assert_eq!(writer.into_string(), "<div>&lt;span&gt;&amp;oops</div>");
}

#[test]
fn attribute_escaping_handles_quotes_and_special_chars() {
    let mut writer = HtmlWriter::new();
    writer.start_tag("div");
    writer.attribute("data-title", "He said \"<Hello>\" & more");
    writer.finish_self_closing_tag();

    assert_eq!(
        writer.into_string(),
        "<div data-title=\"He said &quot;&lt;Hello&gt;&quot; &amp; more\" />"
    );
}

#[test]
fn attribute_without_open_tag_is_dropped() {
    let mut writer = HtmlWriter::new();
    writer.text("body");
    writer.attribute("class", "late");

    assert_eq!(writer.into_string(), "body");
}

#[test]
fn pending_tag_is_closed_on_finish() {
    let mut writer = HtmlWriter::new();
    writer.start_tag("td");
    writer.attribute_int("width", 200);

    assert_eq!(writer.into_string(), "<td width=\"200\">");
}

#[test]
fn empty_style_is_omitted() {
    let mut writer = HtmlWriter::new();
    writer.start_tag("p");
    writer.style(&InlineStyle::new());
    writer.end_tag("p");

    assert_eq!(writer.into_string(), "<p></p>");
}

#[test]
fn style_keeps_declaration_order() {
    let style = InlineStyle::new()
        .with_px("padding-top", 4)
        .with("color", "red")
        .with_px("padding-left", 0);

    insta::assert_snapshot!(style, @"padding-top:4px;color:red;padding-left:0px;");
}

#[test]
fn escape_covers_quotes() {
    assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn presentation_table_attributes() {
    let mut writer = HtmlWriter::new();
    writer.start_presentation_table("100%");
    writer.finish_tag();
    writer.end_tag("table");

    insta::assert_snapshot!(writer.into_string(), @r#"<table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0"></table>"#);
}
