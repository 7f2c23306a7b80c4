//! Compilation options.
//!
//! [`RenderDefaults`] is the one table of values substituted for missing
//! element properties. [`ShellOptions`] configures the document wrapper.

use ecow::EcoString;
use serde::Deserialize;

use crate::Result;
use crate::model::ObjectFit;

/// Values used when an element leaves a property unset or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderDefaults {
    /// Padding on each side of an element cell, in pixels.
    pub padding: i64,
    /// Background of an element cell.
    pub background_color: EcoString,
    /// Font size of text and button labels.
    pub font_size: EcoString,
    /// Text color.
    pub text_color: EcoString,
    /// Font family stack.
    pub font_family: EcoString,
    /// Line height of text blocks.
    pub line_height: EcoString,
    /// Button fill color.
    pub button_color: EcoString,
    /// Button label color.
    pub button_text_color: EcoString,
    /// CSS padding inside buttons.
    pub button_padding: EcoString,
    /// Corner radius for buttons without a recognized shape, in pixels.
    pub button_radius: i64,
    /// Image width in pixels.
    pub image_width: i64,
    /// Image height in pixels.
    pub image_height: i64,
    /// Image `object-fit`.
    pub object_fit: ObjectFit,
    /// Image corner radius in pixels.
    pub image_border_radius: i64,
    /// Social icon diameter in pixels.
    pub social_size: i64,
    /// Social icon color.
    pub social_color: EcoString,
    /// Divider line color.
    pub divider_color: EcoString,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            padding: 16,
            background_color: "transparent".into(),
            font_size: "16px".into(),
            text_color: "#000000".into(),
            font_family: "Arial, Helvetica, sans-serif".into(),
            line_height: "1.5".into(),
            button_color: "#007bff".into(),
            button_text_color: "#ffffff".into(),
            button_padding: "12px 24px".into(),
            button_radius: 8,
            image_width: 400,
            image_height: 300,
            object_fit: ObjectFit::Cover,
            image_border_radius: 0,
            social_size: 24,
            social_color: "#000000".into(),
            divider_color: "#cccccc".into(),
        }
    }
}

/// Options of the document shell wrapped around the compiled body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellOptions {
    /// Content of `<title>`.
    pub title: EcoString,
    /// Hidden preview text shown by inbox listings. Omitted when empty.
    pub preheader: EcoString,
    /// Value of the `lang` attribute.
    pub lang: EcoString,
    /// Maximum width of the centered container, in pixels.
    pub max_width: i64,
    /// Background around the container.
    pub page_background: EcoString,
    /// Background of the container.
    pub container_background: EcoString,
    /// Viewport width below which columns stack, in pixels.
    pub mobile_breakpoint: i64,
    /// CSS padding of the cell around each standalone element.
    pub standalone_padding: EcoString,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            title: EcoString::new(),
            preheader: EcoString::new(),
            lang: "en".into(),
            max_width: 600,
            page_background: "#f4f4f4".into(),
            container_background: "#ffffff".into(),
            mobile_breakpoint: 620,
            standalone_padding: "10px 20px".into(),
        }
    }
}

/// All options of a compilation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Element defaults.
    pub defaults: RenderDefaults,
    /// Document shell.
    pub shell: ShellOptions,
}

impl CompileOptions {
    /// Loads options from a TOML document. Missing keys keep their defaults.
    ///
    /// ```rust
    /// let options = mailsmith::CompileOptions::from_toml_str(
    ///     r#"
    /// [defaults]
    /// padding = 8
    ///
    /// [shell]
    /// title = "Weekly digest"
    /// "#,
    /// )
    /// .unwrap();
    /// assert_eq!(options.defaults.padding, 8);
    /// assert_eq!(options.defaults.image_width, 400);
    /// assert_eq!(options.shell.title, "Weekly digest");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Sets the shell options.
    pub fn with_shell(mut self, shell: ShellOptions) -> Self {
        self.shell = shell;
        self
    }

    /// Sets the element defaults.
    pub fn with_defaults(mut self, defaults: RenderDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Builder for [`CompileOptions`]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    /// Create a new CompileOptionsBuilder with default options
    pub fn new() -> Self {
        Self {
            options: CompileOptions::default(),
        }
    }

    /// Set the document title
    pub fn title(mut self, title: impl Into<EcoString>) -> Self {
        self.options.shell.title = title.into();
        self
    }

    /// Set the hidden preview text
    pub fn preheader(mut self, preheader: impl Into<EcoString>) -> Self {
        self.options.shell.preheader = preheader.into();
        self
    }

    /// Set the document language
    pub fn lang(mut self, lang: impl Into<EcoString>) -> Self {
        self.options.shell.lang = lang.into();
        self
    }

    /// Set the maximum container width; non-positive widths are ignored
    pub fn max_width(mut self, pixels: i64) -> Self {
        if pixels > 0 {
            self.options.shell.max_width = pixels;
        }
        self
    }

    /// Set the default element padding
    pub fn padding(mut self, pixels: i64) -> Self {
        self.options.defaults.padding = pixels;
        self
    }

    /// Set the default font family stack
    pub fn font_family(mut self, family: impl Into<EcoString>) -> Self {
        self.options.defaults.font_family = family.into();
        self
    }

    /// Replace all element defaults
    pub fn defaults(mut self, defaults: RenderDefaults) -> Self {
        self.options.defaults = defaults;
        self
    }

    /// Build the CompileOptions
    pub fn build(self) -> CompileOptions {
        self.options
    }
}

impl Default for CompileOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
