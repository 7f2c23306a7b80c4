//! Lenient deserialization of editor output.
//!
//! Editors persist templates as loosely typed key/value data. Nothing here
//! rejects a field for having the wrong shape: malformed values are dropped
//! and the renderer substitutes its defaults.

use ecow::EcoString;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::*;

/// The editor's flat element record, before it is split by kind.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct RawElement {
    #[serde(alias = "type")]
    kind: Option<Value>,
    id: Option<Value>,
    content: Option<Value>,

    alignment: Option<Value>,
    background_color: Option<Value>,
    padding: Option<Value>,
    padding_top: Option<Value>,
    padding_right: Option<Value>,
    padding_bottom: Option<Value>,
    padding_left: Option<Value>,

    font_size: Option<Value>,
    color: Option<Value>,
    font_family: Option<Value>,
    font_styles: Option<Value>,

    button_color: Option<Value>,
    button_shape: Option<Value>,
    button_url: Option<Value>,

    image_width: Option<Value>,
    image_height: Option<Value>,
    object_fit: Option<Value>,
    border_radius: Option<Value>,
    alt: Option<Value>,
    link_url: Option<Value>,

    divider_style: Option<Value>,

    social_url: Option<Value>,
    social_color: Option<Value>,
    social_size: Option<Value>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let kind_name = raw.kind.as_ref().and_then(as_str).unwrap_or_default();
        let content = raw.content.as_ref().and_then(as_str).unwrap_or_default();

        let kind = match normalize_kind(&kind_name).as_str() {
            "button" | "cta" => ElementKind::Button(ButtonProps {
                content,
                button_color: non_empty(raw.button_color),
                button_shape: name_of(raw.button_shape, ButtonShape::from_name),
                button_url: non_empty(raw.button_url),
                font_size: font_size(raw.font_size),
                color: non_empty(raw.color),
                font_family: non_empty(raw.font_family),
            }),
            "image" | "img" => ElementKind::Image(ImageProps {
                src: content,
                width: int(raw.image_width),
                height: int(raw.image_height),
                object_fit: name_of(raw.object_fit, ObjectFit::from_name),
                border_radius: int(raw.border_radius),
                alt: non_empty(raw.alt),
                link_url: non_empty(raw.link_url),
            }),
            "divider" | "separator" => ElementKind::Divider(DividerProps {
                style: name_of(raw.divider_style, DividerStyle::from_name).unwrap_or_default(),
                color: non_empty(raw.color),
            }),
            "socialicon" | "social" => ElementKind::SocialIcon(SocialIconProps {
                url: non_empty(raw.social_url),
                color: non_empty(raw.social_color),
                size: int(raw.social_size),
            }),
            "rawmarkup" | "html" | "rawhtml" | "markup" => {
                ElementKind::RawMarkup(RawMarkupProps { content })
            }
            other => {
                if !matches!(other, "text" | "paragraph") {
                    log::debug!("unknown element kind {kind_name:?}, rendering it as text");
                }
                ElementKind::Text(TextProps {
                    content,
                    font_size: font_size(raw.font_size),
                    color: non_empty(raw.color),
                    font_family: non_empty(raw.font_family),
                    font_styles: font_styles(raw.font_styles),
                })
            }
        };

        let padding = int(raw.padding);
        Element {
            id: raw.id.as_ref().and_then(as_str).filter(|id| !id.is_empty()),
            frame: Frame {
                alignment: name_of(raw.alignment, Alignment::from_name).unwrap_or_default(),
                background_color: non_empty(raw.background_color),
                padding: Padding {
                    top: int(raw.padding_top).or(padding),
                    right: int(raw.padding_right).or(padding),
                    bottom: int(raw.padding_bottom).or(padding),
                    left: int(raw.padding_left).or(padding),
                },
            },
            kind,
        }
    }
}

impl From<Map<String, Value>> for Row {
    fn from(mut map: Map<String, Value>) -> Self {
        let id = map.remove("id").as_ref().and_then(as_str);
        let columns = match map.remove("columns") {
            Some(Value::Object(columns)) => columns,
            // A bare column map: `{ "col-0": [...], "col-1": [...] }`.
            _ => map,
        };

        let columns = columns
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Array(items) => Some((ColumnKey::new(key), elements(items))),
                _ => {
                    log::debug!("row {id:?}: ignoring non-list column {key:?}");
                    None
                }
            })
            .collect();

        Row { id, columns }
    }
}

/// Reads `canvasItems`, skipping items that are not elements.
pub(super) fn element_list<'de, D>(deserializer: D) -> Result<Vec<Element>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => elements(items),
        Value::Null => Vec::new(),
        other => {
            log::debug!("ignoring element list of unexpected shape: {other}");
            Vec::new()
        }
    })
}

/// Reads `layoutRows`, skipping rows that are not maps.
pub(super) fn row_list<'de, D>(deserializer: D) -> Result<Vec<Row>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            log::debug!("ignoring row list of unexpected shape: {other}");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(Row::from(map)),
            other => {
                log::debug!("skipping malformed row: {other}");
                None
            }
        })
        .collect())
}

fn elements(items: Vec<Value>) -> Vec<Element> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Element>(item) {
            Ok(element) => Some(element),
            Err(err) => {
                log::debug!("skipping malformed element: {err}");
                None
            }
        })
        .collect()
}

/// Lowercases a kind name and drops separators, so that `SocialIcon`,
/// `social-icon` and `social_icon` compare equal.
fn normalize_kind(name: &str) -> String {
    name.chars()
        .filter(|&c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn as_str(value: &Value) -> Option<EcoString> {
    match value {
        Value::String(s) => Some(s.as_str().into()),
        Value::Number(n) => Some(ecow::eco_format!("{n}")),
        Value::Bool(b) => Some(if *b { "true".into() } else { "false".into() }),
        _ => None,
    }
}

fn non_empty(value: Option<Value>) -> Option<EcoString> {
    value
        .as_ref()
        .and_then(as_str)
        .filter(|s| !s.trim().is_empty())
}

fn name_of<T>(value: Option<Value>, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let name = non_empty(value)?;
    let parsed = parse(name.as_str());
    if parsed.is_none() {
        log::debug!("unrecognized option {name:?}, using the default");
    }
    parsed
}

fn int(value: Option<Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_prefix(&s),
        _ => None,
    }
}

/// Parses the leading integer of a string, ignoring leading whitespace and
/// whatever follows the digits: `" 12px"` is 12, `"-3"` is -3, `"px"` is
/// nothing.
fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Bare numbers are taken as pixels.
fn font_size(value: Option<Value>) -> Option<EcoString> {
    let size = non_empty(value)?;
    let size = size.trim();
    if size.chars().all(|c| c.is_ascii_digit() || c == '.') {
        Some(ecow::eco_format!("{size}px"))
    } else {
        Some(size.into())
    }
}

fn font_styles(value: Option<Value>) -> FontStyles {
    let mut styles = FontStyles::default();
    let mut insert = |name: &str| {
        if !styles.insert_name(name) {
            log::debug!("ignoring unknown font style {name:?}");
        }
    };

    match value {
        Some(Value::Array(items)) => {
            for name in items.iter().filter_map(Value::as_str) {
                insert(name);
            }
        }
        Some(Value::String(names)) => {
            for name in names.split([',', ' ']).filter(|name| !name.is_empty()) {
                insert(name);
            }
        }
        Some(Value::Object(flags)) => {
            for (name, flag) in &flags {
                if flag.as_bool() == Some(true) {
                    insert(name.as_str());
                }
            }
        }
        _ => {}
    }

    styles
}
