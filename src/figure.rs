//! Decomposition of an ASCII figure into its basic rectangles.
//!
//! A figure is drawn with `+` corners, `-` and `|` edges and spaces. A basic
//! rectangle is a closed outline with nothing drawn inside it.
//!
//! ```
//! use kata_rs::figure::figure_rectangles;
//!
//! let figure = concat!(
//!     "   +-----+     \n",
//!     "   |     |     \n",
//!     "+--+-----+----+\n",
//!     "|             |\n",
//!     "|             |\n",
//!     "+-------------+\n",
//! );
//! let parts = figure_rectangles(figure).unwrap();
//! assert_eq!(parts, [
//!     "+-----+\n|     |\n+-----+\n",
//!     "+-------------+\n|             |\n|             |\n+-------------+\n",
//! ]);
//! ```

use crate::shape::Rectangle;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FigureError {
    #[error("unexpected character '{ch}' at row {row}, column {column}")]
    InvalidChar { row: usize, column: usize, ch: char },
    #[error("figure too large")]
    TooLarge,
}

/// A rectangle found in a figure, with the position of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placed {
    pub top: usize,
    pub left: usize,
    pub rect: Rectangle,
}

struct Canvas {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Canvas {
    fn parse(figure: &str) -> Result<Self, FigureError> {
        let mut rows: Vec<Vec<char>> = figure
            .split('\n')
            .map(|r| r.strip_suffix('\r').unwrap_or(r).chars().collect())
            .collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        for (row, chars) in rows.iter().enumerate() {
            if let Some(column) = chars.iter().position(|c| !matches!(c, '+' | '-' | '|' | ' ')) {
                return Err(FigureError::InvalidChar { row, column, ch: chars[column] });
            }
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self { rows, width })
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn at(&self, row: usize, column: usize) -> char {
        self.rows.get(row).and_then(|r| r.get(column)).copied().unwrap_or(' ')
    }

    /// Corners at `(top, left)` and `(bottom, right)`; the top and left edges
    /// are already known to be connected.
    fn is_basic(&self, top: usize, left: usize, bottom: usize, right: usize) -> bool {
        self.at(bottom, right) == '+'
            && (left + 1..right).all(|c| matches!(self.at(bottom, c), '-' | '+'))
            && (top + 1..bottom).all(|r| matches!(self.at(r, right), '|' | '+'))
            && (top + 1..bottom).all(|r| (left + 1..right).all(|c| self.at(r, c) == ' '))
    }

    /// The basic rectangle whose top-left corner is at `(top, left)`, if any.
    fn rectangle_at(&self, top: usize, left: usize) -> Option<(usize, usize)> {
        for right in left + 1..self.width {
            match self.at(top, right) {
                '-' => continue,
                '+' => {}
                _ => break,
            }
            for bottom in top + 1..self.height() {
                match self.at(bottom, left) {
                    '|' => continue,
                    '+' => {}
                    _ => break,
                }
                if self.is_basic(top, left, bottom, right) {
                    return Some((bottom, right));
                }
            }
        }
        None
    }
}

/// Every basic rectangle of `figure`, ordered by the reading position of
/// its top-left corner.
pub fn rectangles(figure: &str) -> Result<Vec<Placed>, FigureError> {
    let canvas = Canvas::parse(figure)?;
    let mut found = Vec::new();
    for top in 0..canvas.height() {
        for left in 0..canvas.width {
            if canvas.at(top, left) != '+' {
                continue;
            }
            if let Some((bottom, right)) = canvas.rectangle_at(top, left) {
                let width = u32::try_from(right - left + 1).map_err(|_| FigureError::TooLarge)?;
                let height = u32::try_from(bottom - top + 1).map_err(|_| FigureError::TooLarge)?;
                found.push(Placed { top, left, rect: Rectangle::new(width, height) });
            }
        }
    }
    tracing::debug!(
        rows = canvas.height(),
        columns = canvas.width,
        rectangles = found.len(),
        "decomposed figure"
    );
    Ok(found)
}

/// Every basic rectangle of `figure`, drawn on its own.
pub fn figure_rectangles(figure: &str) -> Result<Vec<String>, FigureError> {
    Ok(rectangles(figure)?.iter().map(|p| p.rect.to_ascii()).collect())
}
