//! Image to ASCII-art conversion with an editable glyph palette.
//!
//! An image is padded to power-of-two sides, cut into square cells, and every
//! cell's mean luminance is matched against the normalized ink density of the
//! palette glyphs. The [`shell::Session`] drives this from text commands.

pub mod demo;
pub mod error;
pub mod matching;
pub mod output;
pub mod raster;
pub mod render;
pub mod shell;
pub mod terminal_setup;

pub use error::{AppResult, ArtError};
