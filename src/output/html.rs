use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::render::AsciiGrid;

// Light glyphs on a dark page, so dense glyphs read as bright cells.
pub fn render_html(art: &AsciiGrid, font: &str) -> String {
    let cols = art.first().map_or(0, Vec::len);
    let mut doc = String::with_capacity(256 + art.len() * (cols + 1));
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    doc.push_str("<title>ASCII art</title>\n</head>\n");
    doc.push_str("<body style=\"margin:0;background:#000;color:#fff\">\n");
    // Writing into a String cannot fail.
    let _ = writeln!(
        doc,
        "<pre style=\"font-family:'{}',monospace;font-size:8px;line-height:1;letter-spacing:0.4em\">",
        escape(font)
    );
    for row in art {
        for &ch in row {
            push_escaped(&mut doc, ch);
        }
        doc.push('\n');
    }
    doc.push_str("</pre>\n</body>\n</html>\n");
    doc
}

pub fn write_html_file(art: &AsciiGrid, path: &Path, font: &str) -> io::Result<()> {
    fs::write(path, render_html(art, font))?;
    tracing::info!(path = %path.display(), rows = art.len(), "wrote html output");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut out, ch);
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_chars_are_escaped() {
        let doc = render_html(&vec![vec!['<', '&', 'a'], vec!['>', '"', ' ']], "Courier New");
        assert!(doc.contains("&lt;&amp;a\n&gt;&quot; \n"));
        assert!(doc.contains("font-family:'Courier New',monospace"));
    }

    #[test]
    fn file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        write_html_file(&vec![vec!['x', 'x']], &path, "Mono").unwrap();
        write_html_file(&vec![vec!['y', 'y']], &path, "Mono").unwrap();
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("yy"));
        assert!(!body.contains("xx"));
        assert!(body.starts_with("<!DOCTYPE html>"));
    }
}
