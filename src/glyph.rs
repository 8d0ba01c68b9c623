//! OCR-style account number decoding.
//!
//! A scanned account number arrives as three text rows drawn with pipes and
//! underscores; every digit occupies a 3x3 cell:
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```
//!
//! An all-blank cell is a separator between account numbers scanned on the
//! same line.

use std::fmt;
use std::str::FromStr;

const CELL_WIDTH: usize = 3;
const ROWS: usize = 3;

const DIGIT_PATTERNS: [[&str; ROWS]; 10] = [
    [" _ ", "| |", "|_|"],
    ["   ", "  |", "  |"],
    [" _ ", " _|", "|_ "],
    [" _ ", " _|", " _|"],
    ["   ", "|_|", "  |"],
    [" _ ", "|_ ", " _|"],
    [" _ ", "|_ ", "|_|"],
    [" _ ", "  |", "  |"],
    [" _ ", "|_|", "|_|"],
    [" _ ", "|_|", " _|"],
];

const SEPARATOR_PATTERN: [&str; ROWS] = ["   ", "   ", "   "];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GlyphError {
    #[error("expected 3 glyph rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has a partial trailing cell (width {width})")]
    UnevenWidth { row: usize, width: usize },
    #[error("unrecognized glyph at column {column}: {cells:?}")]
    UnknownGlyph { column: usize, cells: [String; ROWS] },
    #[error("separator at column {column} not allowed")]
    UnexpectedSeparator { column: usize },
    #[error("account number does not fit in 64 bits: {0}")]
    Overflow(String),
    #[error("cannot encode '{0}' as a glyph")]
    UnencodableChar(char),
}

/// A decimal digit, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const fn new(value: u8) -> Option<Self> {
        if value > 9 {
            return None;
        }
        Some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// One decoded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Digit(Digit),
    Separator,
}

impl Glyph {
    /// Match a cell given as its three rows, top to bottom.
    pub fn from_cells<S: AsRef<str>>(cells: &[S; ROWS]) -> Option<Self> {
        let matches =
            |pattern: &[&str; ROWS]| pattern.iter().zip(cells).all(|(p, c)| *p == c.as_ref());
        if matches(&SEPARATOR_PATTERN) {
            return Some(Glyph::Separator);
        }
        DIGIT_PATTERNS.iter().position(matches).map(|d| Glyph::Digit(Digit(d as u8)))
    }

    /// The three rows this glyph is drawn with.
    pub fn pattern(self) -> [&'static str; ROWS] {
        match self {
            Glyph::Digit(d) => DIGIT_PATTERNS[usize::from(d.0)],
            Glyph::Separator => SEPARATOR_PATTERN,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Glyph::Digit(d) => char::from(b'0' + d.0),
            Glyph::Separator => ' ',
        }
    }
}

impl TryFrom<char> for Glyph {
    type Error = GlyphError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' => Ok(Glyph::Separator),
            '0'..='9' => Ok(Glyph::Digit(Digit(c as u8 - b'0'))),
            _ => Err(GlyphError::UnencodableChar(c)),
        }
    }
}

/// A parsed three-row grid, one [`Glyph`] per column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphGrid {
    glyphs: Vec<Glyph>,
}

impl GlyphGrid {
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Digit runs between separator columns, empty runs dropped.
    pub fn segments(&self) -> Vec<String> {
        self.glyphs
            .split(|g| *g == Glyph::Separator)
            .filter(|run| !run.is_empty())
            .map(|run| run.iter().map(|g| g.to_char()).collect())
            .collect()
    }
}

impl FromStr for GlyphGrid {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<char>> = s
            .split('\n')
            .map(|r| r.strip_suffix('\r').unwrap_or(r).chars().collect())
            .collect();
        // Only trailing empty lines are dropped; an all-blank top row may be
        // trimmed down to nothing.
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.len() != ROWS {
            return Err(GlyphError::RowCount(rows.len()));
        }

        // Short rows are padded with blanks; editors strip trailing spaces.
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let columns = width / CELL_WIDTH;
        for (row, chars) in rows.iter().enumerate() {
            let tail = chars.get(columns * CELL_WIDTH..).unwrap_or(&[]);
            if tail.iter().any(|c| *c != ' ') {
                return Err(GlyphError::UnevenWidth { row, width: chars.len() });
            }
        }

        let cell = |chars: &[char], column: usize| -> String {
            let start = column * CELL_WIDTH;
            (start..start + CELL_WIDTH).map(|i| chars.get(i).copied().unwrap_or(' ')).collect()
        };
        let glyphs = (0..columns)
            .map(|column| {
                let cells =
                    [cell(&rows[0], column), cell(&rows[1], column), cell(&rows[2], column)];
                Glyph::from_cells(&cells).ok_or(GlyphError::UnknownGlyph { column, cells })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { glyphs })
    }
}

impl fmt::Display for GlyphGrid {
    /// Three rows, each terminated by `\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for glyph in &self.glyphs {
                f.write_str(glyph.pattern()[row])?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// What [`GlyphDecoder::decode`] does with separator columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorPolicy {
    /// Drop empty runs and join the remaining digit runs with a literal `0`.
    #[default]
    JoinWithZero,
    /// Any separator column is an error.
    Reject,
}

/// Configurable decoder. `GlyphDecoder::default()` joins batched numbers with `0`.
///
/// ```
/// use kata_rs::glyph::{GlyphDecoder, SeparatorPolicy};
///
/// let text = concat!(
///     "    _  _     _  _  _  _  _ \n",
///     "  | _| _||_||_ |_   ||_||_|\n",
///     "  ||_  _|  | _||_|  ||_| _|\n",
/// );
/// let decoder = GlyphDecoder::new().with_separator_policy(SeparatorPolicy::Reject);
/// assert_eq!(decoder.decode(text).unwrap(), 123456789);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphDecoder {
    separator_policy: SeparatorPolicy,
}

impl GlyphDecoder {
    pub const fn new() -> Self {
        Self { separator_policy: SeparatorPolicy::JoinWithZero }
    }

    pub fn with_separator_policy(mut self, policy: SeparatorPolicy) -> Self {
        self.separator_policy = policy;
        self
    }

    pub const fn separator_policy(&self) -> SeparatorPolicy {
        self.separator_policy
    }

    /// Decode the grid into a single number. A grid without digits decodes to `0`.
    pub fn decode(&self, text: &str) -> Result<u64, GlyphError> {
        let grid: GlyphGrid = text.parse()?;
        let digits = match self.separator_policy {
            SeparatorPolicy::JoinWithZero => grid.segments().join("0"),
            SeparatorPolicy::Reject => {
                if let Some(column) = grid.glyphs().iter().position(|g| *g == Glyph::Separator) {
                    return Err(GlyphError::UnexpectedSeparator { column });
                }
                grid.glyphs().iter().map(|g| g.to_char()).collect()
            }
        };
        tracing::debug!(columns = grid.len(), digits = digits.len(), "decoded glyph grid");
        parse_number(&digits)
    }

    /// Decode every separator-delimited account number on its own.
    /// Ignores the separator policy.
    pub fn decode_batch(&self, text: &str) -> Result<Vec<u64>, GlyphError> {
        let grid: GlyphGrid = text.parse()?;
        let segments = grid.segments();
        tracing::debug!(columns = grid.len(), accounts = segments.len(), "decoded glyph batch");
        segments.iter().map(|s| parse_number(s)).collect()
    }
}

fn parse_number(digits: &str) -> Result<u64, GlyphError> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse().map_err(|_| GlyphError::Overflow(digits.to_string()))
}

/// Decode with the default decoder.
///
/// ```
/// let text = concat!(
///     " _  _  _  _  _  _  _  _  _ \n",
///     "| | _| _|| ||_ |_   ||_||_|\n",
///     "|_||_  _||_| _||_|  ||_| _|\n",
/// );
/// assert_eq!(kata_rs::glyph::decode(text).unwrap(), 23056789);
/// ```
pub fn decode(text: &str) -> Result<u64, GlyphError> {
    GlyphDecoder::default().decode(text)
}

/// Draw `digits` as a glyph grid; a space becomes a separator column.
pub fn encode(digits: &str) -> Result<String, GlyphError> {
    let glyphs = digits.chars().map(Glyph::try_from).collect::<Result<Vec<_>, _>>()?;
    Ok(GlyphGrid::new(glyphs).to_string())
}
