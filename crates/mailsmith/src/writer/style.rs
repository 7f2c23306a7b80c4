use std::fmt;

use ecow::EcoString;

/// An ordered list of inline CSS declarations.
///
/// Mail clients drop `<style>` blocks unpredictably, so every visual property
/// the compiler emits travels inline. Declarations keep insertion order so the
/// output stays byte-for-byte reproducible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    decls: Vec<(&'static str, EcoString)>,
}

impl InlineStyle {
    /// Creates an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration.
    pub fn push(&mut self, property: &'static str, value: impl Into<EcoString>) -> &mut Self {
        self.decls.push((property, value.into()));
        self
    }

    /// Appends a pixel declaration, e.g. `padding-top:16px`.
    pub fn push_px(&mut self, property: &'static str, pixels: i64) -> &mut Self {
        self.push(property, ecow::eco_format!("{pixels}px"))
    }

    /// Builder flavour of [`Self::push`].
    pub fn with(mut self, property: &'static str, value: impl Into<EcoString>) -> Self {
        self.push(property, value);
        self
    }

    /// Builder flavour of [`Self::push_px`].
    pub fn with_px(mut self, property: &'static str, pixels: i64) -> Self {
        self.push_px(property, pixels);
        self
    }

    /// Whether no declaration has been added.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in &self.decls {
            write!(f, "{property}:{value};")?;
        }
        Ok(())
    }
}
