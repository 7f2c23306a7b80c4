//! Deny-list filter for raw markup elements.
//!
//! Raw markup comes from an authenticated template author. Only constructs
//! that execute code or make no sense inside an already complete document are
//! removed; any other vocabulary reaches the recipient unescaped.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Elements removed together with everything between their tags.
const STRIPPED_ELEMENTS: [&str; 3] = ["head", "style", "script"];

/// URI schemes that make a link or source execute script.
const SCRIPT_SCHEMES: [&str; 2] = ["javascript:", "vbscript:"];

static STRIPPED_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STRIPPED_ELEMENTS
        .iter()
        .map(|tag| {
            // An unterminated element swallows the rest of the input.
            Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?(?:</{tag}\s*>|$)")).unwrap()
        })
        .collect()
});

static STRAY_CLOSERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:head|style|script)\b[^>]*>").unwrap());

static DOCUMENT_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!doctype\b[^>]*>|<\?xml\b[^>]*>|</?(?:html|body|meta|title)\b[^>]*>").unwrap()
});

static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^on\w+$").unwrap());

/// Filters author markup so it can be embedded in a compiled email.
///
/// Applied in order:
/// 1. `head`, `style` and `script` elements are removed with their contents;
/// 2. doctype-like tokens and `html`, `body`, `meta`, `title` tags are
///    removed, their contents kept;
/// 3. `on*` event handler attributes are removed;
/// 4. `href`/`src` values with a script URI scheme become `#`.
///
/// Steps 1 and 2 repeat until nothing more is removed, so removals cannot
/// splice the surrounding text into a new tag. Start tags are read the way
/// a browser tokenizer reads them; a start tag left open at the end of the
/// input is dropped, since it would otherwise absorb the markup that follows
/// it in the compiled email.
///
/// The function is total. Malformed markup comes out filtered, never
/// rejected.
pub fn sanitize(markup: &str) -> String {
    let mut out = Cow::Borrowed(markup);

    loop {
        let len = out.len();
        for pattern in STRIPPED_BLOCKS.iter() {
            replace_all(&mut out, pattern, "");
        }
        replace_all(&mut out, &STRAY_CLOSERS, "");
        replace_all(&mut out, &DOCUMENT_TAGS, "");
        // Every pattern only removes text.
        if out.len() == len {
            break;
        }
    }

    let out = filter_start_tags(&out);

    if out.len() != markup.len() {
        log::debug!(
            "sanitizer removed {} bytes of raw markup",
            markup.len().saturating_sub(out.len())
        );
    }

    out
}

fn replace_all(text: &mut Cow<'_, str>, pattern: &Regex, replacement: &str) {
    let replaced = match pattern.replace_all(text.as_ref(), replacement) {
        Cow::Owned(replaced) => replaced,
        Cow::Borrowed(..) => return,
    };
    *text = Cow::Owned(replaced);
}

/// Rewrites every start tag through [`StartTag::write_filtered`].
fn filter_start_tags(markup: &str) -> String {
    let bytes = markup.as_bytes();
    let mut out = String::with_capacity(markup.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = markup[pos..].find('<') {
        let start = pos + offset;
        if !bytes.get(start + 1).is_some_and(u8::is_ascii_alphabetic) {
            pos = start + 1;
            continue;
        }

        out.push_str(&markup[copied..start]);
        let Some(tag) = StartTag::scan(bytes, start) else {
            log::debug!("dropping unterminated start tag at byte {start}");
            return out;
        };
        tag.write_filtered(markup, &mut out);
        copied = tag.end;
        pos = tag.end;
    }

    out.push_str(&markup[copied..]);
    out
}

/// Byte ranges of one start tag. All delimiters are ASCII, so every range
/// falls on a character boundary.
struct StartTag {
    start: usize,
    name_end: usize,
    attributes: Vec<Attribute>,
    /// One past the closing `>`.
    end: usize,
}

struct Attribute {
    /// Start of the separator run (whitespace and `/`) before the name.
    start: usize,
    name: Range<usize>,
    /// The raw value, quotes included.
    value: Option<Range<usize>>,
    end: usize,
}

fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

impl StartTag {
    /// Reads the start tag opening at `start`. Returns `None` when the input
    /// ends before the tag is closed.
    fn scan(bytes: &[u8], start: usize) -> Option<Self> {
        let mut i = start + 1;
        while i < bytes.len() && !is_space(bytes[i]) && !matches!(bytes[i], b'/' | b'>') {
            i += 1;
        }
        let name_end = i;

        let mut attributes = Vec::new();
        loop {
            let attr_start = i;
            while i < bytes.len() && (is_space(bytes[i]) || bytes[i] == b'/') {
                i += 1;
            }
            if *bytes.get(i)? == b'>' {
                return Some(Self {
                    start,
                    name_end,
                    attributes,
                    end: i + 1,
                });
            }

            // The first character is part of the name even when it is `=`.
            let name_start = i;
            i += 1;
            while i < bytes.len() && !is_space(bytes[i]) && !matches!(bytes[i], b'/' | b'>' | b'=')
            {
                i += 1;
            }
            let name = name_start..i;

            let mut j = i;
            while j < bytes.len() && is_space(bytes[j]) {
                j += 1;
            }
            let mut value = None;
            if bytes.get(j) == Some(&b'=') {
                j += 1;
                while j < bytes.len() && is_space(bytes[j]) {
                    j += 1;
                }
                match *bytes.get(j)? {
                    quote @ (b'"' | b'\'') => {
                        let close = j + 1 + bytes[j + 1..].iter().position(|&b| b == quote)?;
                        value = Some(j..close + 1);
                        i = close + 1;
                    }
                    // `name=>`: an empty value, the tag ends here.
                    b'>' => i = j,
                    _ => {
                        let value_start = j;
                        while j < bytes.len() && !is_space(bytes[j]) && bytes[j] != b'>' {
                            j += 1;
                        }
                        value = Some(value_start..j);
                        i = j;
                    }
                }
            }

            attributes.push(Attribute {
                start: attr_start,
                name,
                value,
                end: i,
            });
        }
    }

    /// Writes the tag without event handlers and with script URIs replaced
    /// by `#`. Kept attributes are copied byte for byte.
    fn write_filtered(&self, markup: &str, out: &mut String) {
        out.push_str(&markup[self.start..self.name_end]);

        let mut dropped = false;
        let mut tail = self.name_end;
        for attr in &self.attributes {
            tail = attr.end;
            let name = &markup[attr.name.clone()];
            if EVENT_HANDLER.is_match(name) {
                dropped = true;
                continue;
            }

            // `a="x"b` is two attributes; dropping one in between must not
            // glue the next name onto the tag name or a value.
            if dropped && attr.start == attr.name.start {
                out.push(' ');
            }
            dropped = false;

            let is_link = name.eq_ignore_ascii_case("href") || name.eq_ignore_ascii_case("src");
            match &attr.value {
                Some(value) if is_link && is_script_uri(&markup[value.clone()]) => {
                    out.push_str(&markup[attr.start..attr.name.end]);
                    out.push_str("=\"#\"");
                }
                _ => out.push_str(&markup[attr.start..attr.end]),
            }
        }

        out.push_str(&markup[tail..self.end]);
    }
}

/// Browsers ignore case, entity encoding, whitespace and control characters
/// when they resolve a scheme, so the check does too.
fn is_script_uri(value: &str) -> bool {
    let value = value.trim_matches(|c| c == '"' || c == '\'');
    let decoded = html_escape::decode_html_entities(value);
    let normalized = decoded
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect::<String>();
    SCRIPT_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_with_contents() {
        let out = sanitize(r#"<p>a</p><script type="text/javascript">alert("x")</script><p>b</p>"#);
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn strips_style_and_head_case_insensitively() {
        let out = sanitize("<HEAD><Title>t</Title></HEAD><STYLE>p{}</STYLE><p>kept</p>");
        assert_eq!(out, "<p>kept</p>");
    }

    #[test]
    fn unterminated_script_swallows_the_rest() {
        assert_eq!(sanitize("<b>ok</b><script>steal()"), "<b>ok</b>");
        assert_eq!(sanitize("<b>ok</b></script>"), "<b>ok</b>");
    }

    #[test]
    fn header_is_not_head() {
        let markup = "<header>top</header>";
        assert_eq!(sanitize(markup), markup);
    }

    #[test]
    fn strips_document_tags_keeps_contents() {
        let out = sanitize(
            "<!DOCTYPE html><html><body><meta charset=\"utf-8\"><title>Hi</title><p>x</p></body></html>",
        );
        assert_eq!(out, "Hi<p>x</p>");
        assert_eq!(sanitize("<?xml version=\"1.0\"?><p>x</p>"), "<p>x</p>");
    }

    #[test]
    fn removes_event_handlers_keeps_element() {
        assert_eq!(
            sanitize(r#"<div onclick="alert(1)" class="box">hi</div>"#),
            r#"<div class="box">hi</div>"#
        );
        assert_eq!(
            sanitize("<img src=a.png ONERROR=alert(1) onload='x()' alt=\"\">"),
            "<img src=a.png alt=\"\">"
        );
        assert_eq!(sanitize("<input onfocus autofocus>"), "<input autofocus>");
    }

    #[test]
    fn handler_text_inside_values_is_untouched() {
        let markup = r#"<a title="click onclick=here" data-onclick="x">go on=1</a>"#;
        assert_eq!(sanitize(markup), markup);
    }

    #[test]
    fn neutralizes_script_uris() {
        assert_eq!(
            sanitize(r#"<a href="javascript:alert(1)">x</a>"#),
            r##"<a href="#">x</a>"##
        );
        assert_eq!(
            sanitize("<a HREF=' JavaScript:void(0)'>x</a>"),
            r##"<a HREF="#">x</a>"##
        );
        assert_eq!(
            sanitize(r#"<img src="java&#x09;script:alert(1)">"#),
            r##"<img src="#">"##
        );
        assert_eq!(
            sanitize(r#"<a href="vbscript:msgbox">x</a>"#),
            r##"<a href="#">x</a>"##
        );
    }

    #[test]
    fn ordinary_links_survive() {
        let markup = r#"<a href="https://example.com/?q=javascript:1">x</a><img src="/a.png">"#;
        assert_eq!(sanitize(markup), markup);
    }

    #[test]
    fn other_vocabulary_passes() {
        let markup = "<table><tr><td><font color=\"red\">x</font></td></tr></table><!--[if mso]>v<![endif]-->";
        assert_eq!(sanitize(markup), markup);
    }

    #[test]
    fn removal_cannot_splice_a_script() {
        assert_eq!(sanitize("<scr<script>x</script>ipt>alert(1)</script>"), "");
        assert_eq!(sanitize("<scr</script>ipt>alert(1)</script>"), "");
        assert_eq!(sanitize("<p>a</p><scr<html>ipt>alert(1)</script>"), "<p>a</p>");
    }

    #[test]
    fn handler_after_slash() {
        assert_eq!(sanitize("<img/onerror=alert(1) src=x>"), "<img src=x>");
        assert_eq!(sanitize("<br/onmouseover=x() />"), "<br />");
    }

    #[test]
    fn handler_after_quoted_value() {
        assert_eq!(
            sanitize(r#"<a href="x"onclick="alert(1)">go</a>"#),
            r#"<a href="x">go</a>"#
        );
        assert_eq!(
            sanitize(r#"<a onclick="alert(1)"href="x">go</a>"#),
            r#"<a href="x">go</a>"#
        );
        assert_eq!(
            sanitize(r#"<a id="i"onclick="1"title="t">go</a>"#),
            r#"<a id="i" title="t">go</a>"#
        );
    }

    #[test]
    fn stray_quotes_in_unquoted_values() {
        assert_eq!(
            sanitize("<img src=x onerror=alert(1) title=a'b>"),
            "<img src=x title=a'b>"
        );
        assert_eq!(
            sanitize(r#"<a title=it"s href=javascript:alert(1)>x</a>"#),
            r##"<a title=it"s href="#">x</a>"##
        );
    }

    #[test]
    fn quoted_gt_does_not_end_the_tag() {
        assert_eq!(
            sanitize(r#"<a title="a>b" onclick="x()">go</a>"#),
            r#"<a title="a>b">go</a>"#
        );
    }

    #[test]
    fn unterminated_start_tag_is_dropped() {
        assert_eq!(sanitize("<p>ok</p><img src=x onerror=alert(1)"), "<p>ok</p>");
        assert_eq!(sanitize(r#"<p>ok</p><a title="open>text"#), "<p>ok</p>");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(sanitize("a < b && c > d"), "a < b && c > d");
        assert_eq!(sanitize(""), "");
    }
}
