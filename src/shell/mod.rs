pub mod command;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{BufRead, Write};

use crate::error::ArtError;
use crate::matching::rounding::RoundingPolicy;
use crate::matching::CharMatcher;
use crate::output::Output;
use crate::raster::Image;
use crate::render::AsciiArtRenderer;
use command::{parse_command, parse_res, CharSpec, Command, ResChange};

pub const PROMPT: &str = ">>> ";
pub const DEFAULT_RESOLUTION: usize = 2;
pub const DEFAULT_CHARSET: &str = "0123456789";
const RESOLUTION_FACTOR: usize = 2;

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub charset: Vec<char>,
    pub resolution: usize,
    pub rounding: RoundingPolicy,
    pub output: Output,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.chars().collect(),
            resolution: DEFAULT_RESOLUTION,
            rounding: RoundingPolicy::default(),
            output: Output::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// How the loop talks to its terminal: prompt or not, colours or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellStyle {
    pub prompt: bool,
    pub color: bool,
}

/// One image and the mutable settings the shell commands edit.
#[derive(Debug)]
pub struct Session {
    matcher: CharMatcher,
    renderer: AsciiArtRenderer,
    output: Output,
    resolution: usize,
    min_resolution: usize,
    max_resolution: usize,
}

impl Session {
    /// `padded` must already have power-of-two sides.
    pub fn new(padded: Image, settings: SessionSettings) -> Result<Self, ArtError> {
        if padded.width == 0 || padded.height == 0 {
            return Err(ArtError::InvalidResolution {
                resolution: settings.resolution,
                width: padded.width,
            });
        }
        let max_resolution = padded.width;
        let min_resolution = (padded.width / padded.height).max(1);
        let resolution = settings.resolution;
        if !resolution.is_power_of_two() || resolution < min_resolution || resolution > max_resolution
        {
            return Err(ArtError::InvalidResolution {
                resolution,
                width: padded.width,
            });
        }

        let mut matcher = CharMatcher::new(settings.charset);
        matcher.set_rounding(settings.rounding);
        tracing::debug!(
            resolution,
            min_resolution,
            max_resolution,
            palette = matcher.len(),
            "session ready"
        );
        Ok(Self {
            matcher,
            renderer: AsciiArtRenderer::new(padded),
            output: settings.output,
            resolution,
            min_resolution,
            max_resolution,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn matcher(&self) -> &CharMatcher {
        &self.matcher
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Runs one command line, writing any command output to `out`.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, ArtError> {
        match parse_command(line)? {
            Command::Exit => return Ok(Flow::Exit),
            Command::Chars => self.print_chars(out)?,
            Command::Add(arg) => {
                let spec = CharSpec::parse(arg, true).ok_or(ArtError::AddFormat)?;
                spec.chars().for_each(|c| self.matcher.add_char(c));
            }
            Command::Remove(arg) => {
                let spec = CharSpec::parse(arg, false).ok_or(ArtError::RemoveFormat)?;
                spec.chars().for_each(|c| self.matcher.remove_char(c));
            }
            Command::Res(arg) => self.change_resolution(arg, out)?,
            Command::Round(arg) => self.matcher.set_rounding(arg.parse()?),
            Command::Output(arg) => self.output.kind = arg.parse()?,
            Command::AsciiArt => self.ascii_art(out)?,
        }
        Ok(Flow::Continue)
    }

    pub fn ascii_art(&mut self, out: &mut impl Write) -> Result<(), ArtError> {
        let art = self.renderer.render(self.resolution, &mut self.matcher)?;
        self.output.emit(&art, out)
    }

    /// Reads commands until `exit` or end of input. Command errors are printed
    /// and the loop goes on; I/O failures end it. Lines that are not UTF-8 are
    /// decoded lossily and then fail as ordinary commands.
    pub fn run(
        &mut self,
        mut input: impl BufRead,
        out: &mut impl Write,
        style: ShellStyle,
    ) -> Result<(), ArtError> {
        let mut buf = Vec::new();
        loop {
            if style.prompt {
                write_prompt(out, style.color)?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match self.execute(&line, out) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(command = %line, error = %err, "command failed");
                    write_error(out, &err, style.color)?;
                }
                Err(err) => return Err(err),
            }
        }
        out.flush()?;
        Ok(())
    }

    fn print_chars(&self, out: &mut impl Write) -> Result<(), ArtError> {
        let mut line: String = self.matcher.charset().flat_map(|c| [c, ' ']).collect();
        line.push('\n');
        out.write_all(line.as_bytes())?;
        Ok(())
    }

    fn change_resolution(&mut self, arg: &str, out: &mut impl Write) -> Result<(), ArtError> {
        match parse_res(arg)? {
            ResChange::Up if self.resolution < self.max_resolution => {
                self.resolution *= RESOLUTION_FACTOR;
            }
            ResChange::Down if self.resolution > self.min_resolution => {
                self.resolution /= RESOLUTION_FACTOR;
            }
            ResChange::Up | ResChange::Down => return Err(ArtError::ResolutionBoundary),
            ResChange::Show => {}
        }
        writeln!(out, "Resolution set to {}", self.resolution)?;
        Ok(())
    }
}

fn write_prompt(out: &mut impl Write, color: bool) -> std::io::Result<()> {
    if color {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Cyan),
            Print(PROMPT),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(out, Print(PROMPT))?;
    }
    out.flush()
}

fn write_error(out: &mut impl Write, err: &ArtError, color: bool) -> std::io::Result<()> {
    if color {
        queue!(
            out,
            SetForegroundColor(Color::Red),
            Print(err),
            ResetColor,
            Print('\n')
        )
    } else {
        writeln!(out, "{err}")
    }
}
