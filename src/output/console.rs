use crossterm::{queue, style::Print};
use std::io::{self, Write};

use crate::render::AsciiGrid;

/// Each glyph is followed by a space so cells come out roughly square in a
/// terminal font.
pub fn write_console(
    art: &AsciiGrid,
    out: &mut impl Write,
    term_cols: Option<u16>,
) -> io::Result<()> {
    let printed_width = art.first().map_or(0, |row| row.len() * 2);
    if let Some(cols) = term_cols {
        if printed_width > cols as usize {
            tracing::warn!(
                printed_width,
                terminal_cols = cols,
                "art is wider than the terminal; lines will wrap"
            );
        }
    }

    let mut line = String::with_capacity(printed_width + 1);
    for row in art {
        line.clear();
        for &ch in row {
            line.push(ch);
            line.push(' ');
        }
        line.push('\n');
        queue!(out, Print(&line))?;
    }
    out.flush()
}
