//! The typed template document consumed by the compiler.
//!
//! A [`Document`] is built by the template editor and handed over read-only.
//! Every optional property is kept as an `Option` so that the renderer can
//! substitute values from [`crate::RenderDefaults`] in a single place.

mod de;

use core::cmp::Ordering;
use std::fmt;

use ecow::EcoString;
use indexmap::IndexMap;
use serde::Deserialize;

/// A complete email template: layout rows plus standalone elements.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    /// Free elements placed directly on the canvas.
    #[serde(alias = "elements", deserialize_with = "de::element_list")]
    pub canvas_items: Vec<Element>,
    /// Multi-column layout rows.
    #[serde(alias = "rows", deserialize_with = "de::row_list")]
    pub layout_rows: Vec<Row>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a standalone element.
    pub fn with_element(mut self, element: Element) -> Self {
        self.canvas_items.push(element);
        self
    }

    /// Appends a layout row.
    pub fn with_row(mut self, row: Row) -> Self {
        self.layout_rows.push(row);
        self
    }

    /// Reads a document from its JSON form.
    ///
    /// Only text that is not a JSON document is an error. Malformed rows,
    /// elements and properties are skipped or fall back to defaults.
    ///
    /// ```rust
    /// let doc = mailsmith::Document::from_json_str(
    ///     r#"{"canvasItems": [{"type": "text", "content": "Hi", "padding": "8px"}]}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(doc.canvas_items.len(), 1);
    /// assert_eq!(doc.canvas_items[0].frame.padding.top, Some(8));
    /// ```
    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a document from an already parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether the document has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.canvas_items.is_empty() && self.layout_rows.is_empty()
    }
}

/// A horizontal group of side-by-side columns.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct Row {
    /// Editor-assigned identifier, carried for diagnostics only.
    pub id: Option<EcoString>,
    /// Column contents in document order.
    pub columns: IndexMap<ColumnKey, Vec<Element>>,
}

impl Row {
    /// Creates a row without columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends elements to the column `col-<index>`.
    pub fn with_column(mut self, index: u64, elements: Vec<Element>) -> Self {
        self.columns
            .entry(ColumnKey::from_index(index))
            .or_default()
            .extend(elements);
        self
    }

    /// Returns the columns ordered by their numeric suffix.
    ///
    /// Lexical order of the key strings would put `col-10` before `col-2`.
    pub fn sorted_columns(&self) -> Vec<(&ColumnKey, &[Element])> {
        let mut columns = self
            .columns
            .iter()
            .map(|(key, elements)| (key, elements.as_slice()))
            .collect::<Vec<_>>();
        columns.sort_by(|(a, _), (b, _)| a.cmp(b));
        columns
    }
}

/// The key of a column inside a [`Row`], in the form `col-<n>`.
///
/// Keys order by `n` numerically. Keys that do not carry a numeric suffix
/// sort after every numbered key, by their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    name: EcoString,
    index: Option<u64>,
}

impl ColumnKey {
    /// Parses a column key.
    pub fn new(name: impl Into<EcoString>) -> Self {
        let name = name.into();
        let index = name
            .strip_prefix("col-")
            .and_then(|suffix| suffix.parse::<u64>().ok());
        Self { name, index }
    }

    /// Creates the key `col-<index>`.
    pub fn from_index(index: u64) -> Self {
        Self {
            name: ecow::eco_format!("col-{index}"),
            index: Some(index),
        }
    }

    /// The key as written in the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The numeric suffix, if the key has one.
    pub fn index(&self) -> Option<u64> {
        self.index
    }
}

impl Ord for ColumnKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.index.is_none(), self.index, &self.name).cmp(&(
            other.index.is_none(),
            other.index,
            &other.name,
        ))
    }
}

impl PartialOrd for ColumnKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One visual unit of the template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "de::RawElement")]
pub struct Element {
    /// Editor-assigned identifier, carried for diagnostics only.
    pub id: Option<EcoString>,
    /// Properties shared by every kind.
    pub frame: Frame,
    /// The kind-specific payload.
    pub kind: ElementKind,
}

impl Element {
    /// Creates an element with default framing.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: None,
            frame: Frame::default(),
            kind,
        }
    }

    /// Shorthand for a plain text element.
    pub fn text(content: impl Into<EcoString>) -> Self {
        Self::new(ElementKind::Text(TextProps {
            content: content.into(),
            ..Default::default()
        }))
    }

    /// Shorthand for a raw markup element.
    pub fn raw_markup(content: impl Into<EcoString>) -> Self {
        Self::new(ElementKind::RawMarkup(RawMarkupProps {
            content: content.into(),
        }))
    }

    /// Sets the horizontal alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.frame.alignment = alignment;
        self
    }

    /// Sets all four paddings.
    pub fn with_padding(mut self, pixels: i64) -> Self {
        self.frame.padding = Padding::uniform(pixels);
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, color: impl Into<EcoString>) -> Self {
        self.frame.background_color = Some(color.into());
        self
    }

    /// The lowercase kind name, as used in logs.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Alignment, background and padding of an element's outer cell.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Background color; `None` falls back to the configured default.
    pub background_color: Option<EcoString>,
    /// Per-side padding in pixels.
    pub padding: Padding,
}

/// Per-side padding in pixels. `None` sides use the configured default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Top padding.
    pub top: Option<i64>,
    /// Right padding.
    pub right: Option<i64>,
    /// Bottom padding.
    pub bottom: Option<i64>,
    /// Left padding.
    pub left: Option<i64>,
}

impl Padding {
    /// The same padding on every side.
    pub fn uniform(pixels: i64) -> Self {
        Self {
            top: Some(pixels),
            right: Some(pixels),
            bottom: Some(pixels),
            left: Some(pixels),
        }
    }
}

/// Horizontal alignment of an element inside its cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

impl Alignment {
    /// Parses an alignment name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Some(Self::Left),
            "center" | "centre" | "middle" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            _ => None,
        }
    }

    /// The value used for both the `align` attribute and `text-align`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// The closed set of element kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// A block of plain text.
    Text(TextProps),
    /// A call-to-action link styled as a button.
    Button(ButtonProps),
    /// An image.
    Image(ImageProps),
    /// A horizontal separator.
    Divider(DividerProps),
    /// A link to a social profile.
    SocialIcon(SocialIconProps),
    /// Author-written markup, sanitized rather than escaped.
    RawMarkup(RawMarkupProps),
}

impl ElementKind {
    /// The lowercase kind name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text(..) => "text",
            Self::Button(..) => "button",
            Self::Image(..) => "image",
            Self::Divider(..) => "divider",
            Self::SocialIcon(..) => "social-icon",
            Self::RawMarkup(..) => "raw-markup",
        }
    }
}

/// Properties of a text element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextProps {
    /// The text; escaped when rendered.
    pub content: EcoString,
    /// CSS font size, e.g. `16px`.
    pub font_size: Option<EcoString>,
    /// Text color.
    pub color: Option<EcoString>,
    /// CSS font family stack.
    pub font_family: Option<EcoString>,
    /// Bold, italic and underline flags.
    pub font_styles: FontStyles,
}

/// The set of text decorations an editor can toggle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FontStyles {
    /// `font-weight:bold`
    pub bold: bool,
    /// `font-style:italic`
    pub italic: bool,
    /// `text-decoration:underline`
    pub underline: bool,
}

impl FontStyles {
    /// Turns on the style with the given name. Returns `false` for unknown
    /// names.
    pub fn insert_name(&mut self, name: &str) -> bool {
        match name.trim().to_ascii_lowercase().as_str() {
            "bold" | "strong" => self.bold = true,
            "italic" | "em" => self.italic = true,
            "underline" => self.underline = true,
            _ => return false,
        }
        true
    }
}

/// Properties of a button element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ButtonProps {
    /// The label; escaped when rendered.
    pub content: EcoString,
    /// Button fill color.
    pub button_color: Option<EcoString>,
    /// Corner shape; `None` uses the default radius.
    pub button_shape: Option<ButtonShape>,
    /// Link target; `None` renders `#`.
    pub button_url: Option<EcoString>,
    /// CSS font size of the label.
    pub font_size: Option<EcoString>,
    /// Label color.
    pub color: Option<EcoString>,
    /// CSS font family stack of the label.
    pub font_family: Option<EcoString>,
}

/// The corner shape of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonShape {
    /// Sharp corners.
    Square,
    /// Slightly rounded corners.
    Rounded,
    /// Fully rounded ends.
    Pill,
}

impl ButtonShape {
    /// Parses a shape name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "square" | "rectangle" | "sharp" => Some(Self::Square),
            "rounded" | "round" => Some(Self::Rounded),
            "pill" | "capsule" => Some(Self::Pill),
            _ => None,
        }
    }

    /// The corner radius in pixels.
    pub fn radius(self) -> i64 {
        match self {
            Self::Square => 0,
            Self::Rounded => 8,
            Self::Pill => 9999,
        }
    }
}

/// Properties of an image element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImageProps {
    /// Absolute image URL.
    pub src: EcoString,
    /// Width in pixels.
    pub width: Option<i64>,
    /// Height in pixels.
    pub height: Option<i64>,
    /// CSS `object-fit`.
    pub object_fit: Option<ObjectFit>,
    /// Corner radius in pixels.
    pub border_radius: Option<i64>,
    /// Alternative text.
    pub alt: Option<EcoString>,
    /// Optional link wrapping the image.
    pub link_url: Option<EcoString>,
}

/// CSS `object-fit` values understood by the renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    /// Scale to cover, cropping.
    #[default]
    Cover,
    /// Scale to fit, letterboxing.
    Contain,
    /// Stretch.
    Fill,
    /// Natural size.
    None,
}

impl ObjectFit {
    /// Parses an `object-fit` keyword; unknown keywords yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cover" => Some(Self::Cover),
            "contain" => Some(Self::Contain),
            "fill" => Some(Self::Fill),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// The CSS keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Fill => "fill",
            Self::None => "none",
        }
    }
}

/// Properties of a divider element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DividerProps {
    /// Line style.
    pub style: DividerStyle,
    /// Line color.
    pub color: Option<EcoString>,
}

/// The three divider templates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerStyle {
    /// A flat 1px line.
    #[default]
    Single,
    /// A dotted line.
    Dotted,
    /// A centered double-arrow glyph.
    DoubleArrow,
}

impl DividerStyle {
    /// Parses a divider style name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "single" | "solid" | "line" => Some(Self::Single),
            "dotted" | "dots" => Some(Self::Dotted),
            "double-arrow" | "double_arrow" | "doublearrow" | "arrow" => Some(Self::DoubleArrow),
            _ => None,
        }
    }
}

/// Properties of a social icon element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SocialIconProps {
    /// Profile URL; `None` renders `#`.
    pub url: Option<EcoString>,
    /// Circle color.
    pub color: Option<EcoString>,
    /// Circle diameter in pixels.
    pub size: Option<i64>,
}

/// Properties of a raw markup element.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawMarkupProps {
    /// Author markup; sanitized when rendered.
    pub content: EcoString,
}
