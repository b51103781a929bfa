//! Path description parsing.
//!
//! A path description is a string such as `M 0 0 L 10 10 C 1 2 3 4 5 6 Z`.
//! Parsing happens in two stages:
//!
//! 1. [`PathLexer`] cuts the string into [`PathToken`]s. Every ASCII letter
//!    except `e`/`E` starts a token, so exponents stay inside numbers.
//! 2. [`PathToken::command`] turns a token into a [`PathCommand`]. Only the
//!    absolute `M`, `L`, `C` and `Z` commands are understood; every other
//!    letter is reported as unsupported and skipped by [`parse_path`].
//!
//! Numeric arguments are split on runs of whitespace and commas. Text that
//! is not a number becomes `NaN`, missing arguments become `NaN`, and extra
//! arguments are ignored.

use smallvec::SmallVec;

use crate::coordinate::Coordinate;

/// A drawing command with absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Coordinate),
    LineTo(Coordinate),
    /// Control point 1, control point 2, end point
    CurveTo(Coordinate, Coordinate, Coordinate),
    ClosePath,
}

impl PathCommand {
    /// Points carried by this command, in order.
    pub fn coordinates(&self) -> SmallVec<[Coordinate; 3]> {
        let mut points = SmallVec::new();
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
            PathCommand::CurveTo(c1, c2, end) => {
                points.push(c1);
                points.push(c2);
                points.push(end);
            }
            PathCommand::ClosePath => {}
        }
        points
    }
}

/// One command letter and the raw argument text that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathToken<'a> {
    pub letter: char,
    pub args: &'a str,
}

impl<'a> PathToken<'a> {
    /// Numeric arguments in left-to-right order.
    pub fn numbers(&self) -> Vec<f64> {
        split_fields(self.args.trim())
            .into_iter()
            .map(parse_number)
            .collect()
    }

    /// Typed command for this token, or `None` when the letter is unsupported.
    pub fn command(&self) -> Option<PathCommand> {
        let nums = self.numbers();
        let at = |i: usize| nums.get(i).copied().unwrap_or(f64::NAN);
        let point = |i: usize| Coordinate::new(at(i), at(i + 1));

        match self.letter {
            'M' => Some(PathCommand::MoveTo(point(0))),
            'L' => Some(PathCommand::LineTo(point(0))),
            'C' => Some(PathCommand::CurveTo(point(0), point(2), point(4))),
            'Z' => Some(PathCommand::ClosePath),
            _ => None,
        }
    }
}

/// Iterator over the command tokens of a path description.
#[derive(Debug, Clone)]
pub struct PathLexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> PathLexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

fn is_command_letter(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')
}

impl<'a> Iterator for PathLexer<'a> {
    type Item = PathToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.src[self.pos..];
        // Anything before the first command letter is not part of a token.
        let start = rest.find(is_command_letter)?;
        let letter = rest[start..].chars().next()?;
        let args_start = start + letter.len_utf8();
        let args_len = rest[args_start..]
            .find(is_command_letter)
            .unwrap_or(rest.len() - args_start);

        self.pos += args_start + args_len;
        Some(PathToken {
            letter,
            args: &rest[args_start..args_start + args_len],
        })
    }
}

/// Parse a path description into its supported commands.
///
/// Unsupported letters (arcs, quadratics, shorthands, relative commands)
/// are dropped. An input without any command yields an empty list.
pub fn parse_path(data: &str) -> Vec<PathCommand> {
    PathLexer::new(data)
        .filter_map(|token| {
            let command = token.command();
            if command.is_none() {
                tracing::trace!("Skipping unsupported path command '{}'", token.letter);
            }
            command
        })
        .collect()
}

/// All coordinates of a path description, in command order.
pub fn extract_coordinates(data: &str) -> Vec<Coordinate> {
    parse_path(data)
        .iter()
        .flat_map(|command| command.coordinates())
        .collect()
}

/// Split on runs of whitespace and commas.
///
/// A leading or trailing separator run produces an empty field, and an
/// empty input produces a single empty field.
fn split_fields(s: &str) -> Vec<&str> {
    let is_separator = |c: char| c.is_whitespace() || c == ',';
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_separator = false;

    for (i, c) in s.char_indices() {
        if is_separator(c) {
            if !in_separator {
                fields.push(&s[start..i]);
                in_separator = true;
            }
        } else if in_separator {
            start = i;
            in_separator = false;
        }
    }
    fields.push(if in_separator { "" } else { &s[start..] });
    fields
}

fn parse_number(field: &str) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    field.parse::<f64>().unwrap_or(f64::NAN)
}
