pub mod console;
pub mod html;

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ArtError;
use crate::render::AsciiGrid;

pub const DEFAULT_HTML_PATH: &str = "out.html";
pub const DEFAULT_HTML_FONT: &str = "Courier New";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    #[default]
    Console,
    Html,
}

impl OutputKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Html => "html",
        }
    }
}

impl FromStr for OutputKind {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(Self::Console),
            "html" => Ok(Self::Html),
            _ => Err(ArtError::OutputFormat),
        }
    }
}

/// Where finished art goes, plus the HTML file settings used when `kind` is html.
#[derive(Debug, Clone)]
pub struct Output {
    pub kind: OutputKind,
    pub html_path: PathBuf,
    pub html_font: String,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            kind: OutputKind::default(),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            html_font: DEFAULT_HTML_FONT.to_string(),
        }
    }
}

impl Output {
    pub fn emit(&self, art: &AsciiGrid, out: &mut impl Write) -> Result<(), ArtError> {
        match self.kind {
            OutputKind::Console => {
                let term_cols = crossterm::terminal::size().ok().map(|(cols, _)| cols);
                console::write_console(art, out, term_cols)?;
            }
            OutputKind::Html => html::write_html_file(art, &self.html_path, &self.html_font)
                .map_err(|source| ArtError::OutputWrite {
                    path: self.html_path.clone(),
                    source,
                })?,
        }
        Ok(())
    }
}
