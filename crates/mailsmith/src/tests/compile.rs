use super::*;

#[test]
fn escaped_text_scenario() {
    let html = compile(&doc(json!({
        "canvasItems": [{ "kind": "Text", "content": "<b>Hi</b>" }],
        "layoutRows": [],
    })));
    let body = body(&html);

    assert!(body.starts_with(r#"<tr><td class="standalone""#), "{body}");
    assert!(!body.contains("class=\"row\""), "{body}");
    assert!(body.contains(">&lt;b&gt;Hi&lt;/b&gt;</div></td></tr></table></td></tr>"), "{body}");
    assert!(!html.contains("<b>"), "{html}");
}

#[test]
fn button_and_image_scenario() {
    let html = compile(&doc(json!({
        "layoutRows": [{
            "id": "r1",
            "columns": {
                "col-0": [{ "kind": "Button", "buttonUrl": "https://x.test", "content": "Go" }],
                "col-1": [{
                    "kind": "Image",
                    "content": "https://x.test/a.png",
                    "imageWidth": 200,
                    "imageHeight": 100,
                }],
            },
        }],
    })));
    let body = body(&html);

    assert_eq!(body.matches("<tr><td class=\"row\"").count(), 1, "{body}");
    let cells = body.split("<td class=\"column\"").skip(1).collect::<Vec<_>>();
    assert_eq!(cells.len(), 2, "{body}");
    assert!(cells[0].starts_with(r#" valign="top" width="50%""#), "{body}");
    assert!(cells[0].contains(r#"<a href="https://x.test" target="_blank""#), "{body}");
    assert!(cells[0].contains("border-radius:8px;"), "{body}");
    assert!(cells[0].contains(">Go</a>"), "{body}");
    assert!(cells[1].contains(r#"<img src="https://x.test/a.png" alt="" width="200" height="100""#), "{body}");
}

#[test]
fn deterministic() {
    let doc = doc(json!({
        "canvasItems": [
            { "kind": "text", "content": "a", "fontStyles": ["italic"] },
            { "kind": "divider", "dividerStyle": "dotted" },
        ],
        "layoutRows": [{ "col-0": [{ "kind": "socialIcon" }], "col-1": [] }],
    }));
    let compiler = Compiler::with_options(CompileOptionsBuilder::new().title("t").build());
    assert_eq!(compiler.compile(&doc), compiler.compile(&doc));
    assert_eq!(compiler.compile(&doc), compiler.compile(&doc.clone()));
}

#[test]
fn script_only_appears_escaped() {
    let html = compile(&doc(json!({
        "canvasItems": [
            { "kind": "text", "content": "<script>alert(1)</script>" },
            { "kind": "button", "content": "<script>alert(2)</script>" },
            { "kind": "rawMarkup", "content": "<p>ok</p><script>alert(3)</script>" },
        ],
    })));
    assert!(!html.contains("<script"), "{html}");
    assert_eq!(html.matches("&lt;script&gt;alert(").count(), 2, "{html}");
    assert!(!html.contains("alert(3)"), "{html}");
    assert!(html.contains("<p>ok</p>"), "{html}");
}

#[test]
fn raw_markup_handlers_are_removed() {
    let html = compile(&doc(json!({
        "canvasItems": [{ "kind": "html", "content": "<div onclick=\"steal()\">Hello</div>" }],
    })));
    assert!(html.contains("<div>Hello</div>"), "{html}");
    assert!(!html.contains("onclick"), "{html}");
}

#[test]
fn columns_sort_numerically() {
    let html = compile(&doc(json!({
        "layoutRows": [{
            "columns": {
                "col-10": [{ "kind": "text", "content": "ten" }],
                "col-2": [{ "kind": "text", "content": "two" }],
                "col-1": [{ "kind": "text", "content": "one" }],
            },
        }],
    })));
    let one = html.find(">one<").unwrap();
    let two = html.find(">two<").unwrap();
    let ten = html.find(">ten<").unwrap();
    assert!(one < two && two < ten, "{html}");
    assert_eq!(html.matches(r#"width="33%""#).count(), 3, "{html}");
}

#[test]
fn unnumbered_columns_sort_last_by_name() {
    let html = compile(&doc(json!({
        "layoutRows": [{
            "columns": {
                "col-2": [{ "kind": "text", "content": "col-2" }],
                "side": [{ "kind": "text", "content": "side" }],
                "col-10": [{ "kind": "text", "content": "col-10" }],
                "aside": [{ "kind": "text", "content": "aside" }],
            },
        }],
    })));
    let order = ["col-2", "col-10", "aside", "side"]
        .map(|name| html.find(&format!(">{name}<")).unwrap());
    assert!(order.is_sorted(), "{order:?}\n{html}");
    assert_eq!(html.matches(r#"width="25%""#).count(), 4, "{html}");
}

#[test]
fn rows_precede_standalone_elements() {
    let html = compile(&doc(json!({
        "canvasItems": [{ "kind": "text", "content": "standalone" }],
        "layoutRows": [
            { "columns": { "col-0": [{ "kind": "text", "content": "first row" }] } },
            { "columns": { "col-0": [{ "kind": "text", "content": "second row" }] } },
        ],
    })));
    let body = body(&html);
    let first = body.find("first row").unwrap();
    let second = body.find("second row").unwrap();
    let standalone = body.find("standalone\u{3c}").unwrap();
    assert!(first < second && second < standalone, "{body}");
}

#[test]
fn bare_text_uses_defaults() {
    let html = compile(&doc(json!({ "canvasItems": [{ "kind": "Text", "content": "x" }] })));
    assert!(
        html.contains("padding-top:16px;padding-right:16px;padding-bottom:16px;padding-left:16px;"),
        "{html}"
    );
    assert!(html.contains("font-size:16px;color:#000000;"), "{html}");
}

#[test]
fn options_flow_through() {
    let options = CompileOptions::from_toml_str(
        r##"
[defaults]
padding = 0
textColor = "#111111"

[shell]
title = "Digest"
preheader = "Read me"
maxWidth = 480
"##,
    )
    .unwrap();
    let html = Compiler::with_options(options)
        .compile(&doc(json!({ "canvasItems": [{ "kind": "text", "content": "x" }] })));
    assert!(html.contains("<title>Digest</title>"), "{html}");
    assert!(html.contains(">Read me</div>"), "{html}");
    assert!(html.contains("max-width:480px;"), "{html}");
    assert!(html.contains("padding-top:0px;"), "{html}");
    assert!(html.contains("color:#111111;"), "{html}");
}
