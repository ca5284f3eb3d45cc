use crate::error::ArtError;
use crate::matching::glyph::{is_printable, FIRST_PRINTABLE, LAST_PRINTABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Chars,
    Add(&'a str),
    Remove(&'a str),
    Res(&'a str),
    Round(&'a str),
    Output(&'a str),
    AsciiArt,
}

/// Splits on single spaces; only the first argument is looked at, and a
/// missing argument reads as the empty string.
pub fn parse_command(line: &str) -> Result<Command<'_>, ArtError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut parts = line.split(' ');
    let name = parts.next().unwrap_or("");
    let arg = parts.next().unwrap_or("");
    match name {
        "exit" => Ok(Command::Exit),
        "chars" => Ok(Command::Chars),
        "add" => Ok(Command::Add(arg)),
        "remove" => Ok(Command::Remove(arg)),
        "res" => Ok(Command::Res(arg)),
        "round" => Ok(Command::Round(arg)),
        "output" => Ok(Command::Output(arg)),
        "asciiArt" => Ok(Command::AsciiArt),
        _ => Err(ArtError::IncorrectCommand),
    }
}

/// A set of palette chars named by an `add`/`remove` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSpec {
    Single(char),
    All,
    /// Inclusive, already ordered low to high.
    Range(char, char),
    Space,
}

impl CharSpec {
    /// `printable_only` rejects single chars and range ends outside `' '..='~'`;
    /// `add` checks this, `remove` does not.
    pub fn parse(arg: &str, printable_only: bool) -> Option<Self> {
        let accept = |c: char| !printable_only || is_printable(c);
        let chars: Vec<char> = arg.chars().collect();
        match chars.as_slice() {
            [c] => accept(*c).then_some(Self::Single(*c)),
            [..] if arg == "all" => Some(Self::All),
            [a, '-', b] if accept(*a) && accept(*b) => Some(Self::Range(*a.min(b), *a.max(b))),
            [..] if arg == "space" => Some(Self::Space),
            _ => None,
        }
    }

    pub fn chars(self) -> Box<dyn Iterator<Item = char>> {
        match self {
            Self::Single(c) => Box::new(std::iter::once(c)),
            Self::All => Box::new(FIRST_PRINTABLE..=LAST_PRINTABLE),
            Self::Range(lo, hi) => Box::new(lo..=hi),
            Self::Space => Box::new(std::iter::once(' ')),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResChange {
    Show,
    Up,
    Down,
}

pub fn parse_res(arg: &str) -> Result<ResChange, ArtError> {
    match arg {
        "" => Ok(ResChange::Show),
        "up" => Ok(ResChange::Up),
        "down" => Ok(ResChange::Down),
        _ => Err(ArtError::ResolutionFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_argument_only() {
        assert_eq!(parse_command("add a b").unwrap(), Command::Add("a"));
        assert_eq!(parse_command("add\n").unwrap(), Command::Add(""));
        assert_eq!(parse_command("add  a").unwrap(), Command::Add(""));
        assert_eq!(parse_command("asciiArt\r\n").unwrap(), Command::AsciiArt);
    }

    #[test]
    fn unknown_and_empty_commands_fail() {
        assert!(matches!(parse_command(""), Err(ArtError::IncorrectCommand)));
        assert!(matches!(parse_command("asciiart"), Err(ArtError::IncorrectCommand)));
        assert!(matches!(parse_command(" exit"), Err(ArtError::IncorrectCommand)));
    }

    #[test]
    fn char_spec_forms() {
        assert_eq!(CharSpec::parse("x", true), Some(CharSpec::Single('x')));
        assert_eq!(CharSpec::parse("all", true), Some(CharSpec::All));
        assert_eq!(CharSpec::parse("space", true), Some(CharSpec::Space));
        assert_eq!(CharSpec::parse("z-a", true), Some(CharSpec::Range('a', 'z')));
        assert_eq!(CharSpec::parse("---", true), Some(CharSpec::Range('-', '-')));
        assert_eq!(CharSpec::parse("a+z", true), None);
        assert_eq!(CharSpec::parse("ab", true), None);
        assert_eq!(CharSpec::parse("spaces", true), None);
        assert_eq!(CharSpec::parse("", true), None);
    }

    #[test]
    fn printable_check_only_applies_when_asked() {
        assert_eq!(CharSpec::parse("é", true), None);
        assert_eq!(CharSpec::parse("é", false), Some(CharSpec::Single('é')));
        assert_eq!(CharSpec::parse("a-é", true), None);
        assert_eq!(CharSpec::parse("a-é", false), Some(CharSpec::Range('a', 'é')));
    }

    #[test]
    fn spec_expands_to_chars() {
        assert_eq!(CharSpec::All.chars().count(), 95);
        assert_eq!(CharSpec::Range('a', 'c').chars().collect::<String>(), "abc");
        assert_eq!(CharSpec::Space.chars().collect::<String>(), " ");
    }

    #[test]
    fn res_arguments() {
        assert_eq!(parse_res("").unwrap(), ResChange::Show);
        assert_eq!(parse_res("up").unwrap(), ResChange::Up);
        assert!(matches!(parse_res("UP"), Err(ArtError::ResolutionFormat)));
    }
}
