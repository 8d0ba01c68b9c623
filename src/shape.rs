use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle measured in whole units.
///
/// ```
/// use kata_rs::shape::Rectangle;
///
/// let r = Rectangle::new(10, 20);
/// assert_eq!(r.area(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Outline drawn with `+`, `-` and `|`, one `\n`-terminated line per row.
    /// Width and height count outline characters, so both must be at least 2;
    /// smaller rectangles have no outline and render empty.
    ///
    /// ```
    /// use kata_rs::shape::Rectangle;
    ///
    /// assert_eq!(Rectangle::new(4, 3).to_ascii(), "+--+\n|  |\n+--+\n");
    /// ```
    pub fn to_ascii(&self) -> String {
        if self.width < 2 || self.height < 2 {
            return String::new();
        }
        let inner = self.width as usize - 2;
        let edge = format!("+{}+\n", "-".repeat(inner));
        let side = format!("|{}|\n", " ".repeat(inner));
        let mut out = String::with_capacity((inner + 3) * self.height as usize);
        out.push_str(&edge);
        for _ in 2..self.height {
            out.push_str(&side);
        }
        out.push_str(&edge);
        out
    }
}
