#![doc = include_str!("../README.md")]

pub mod model;
pub mod options;
pub mod render;
pub mod sanitize;
pub mod writer;

mod error;
mod layout;
mod plain;
mod shell;

pub use error::*;

pub use crate::layout::{Compiler, compile};
pub use crate::model::{ColumnKey, Document, Element, ElementKind, Row};
pub use crate::options::{CompileOptions, CompileOptionsBuilder, RenderDefaults, ShellOptions};
pub use crate::plain::plain_text;

/// The result type for mailsmith.
pub type Result<T, Err = Error> = std::result::Result<T, Err>;
