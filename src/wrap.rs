use std::iter::{FusedIterator, Peekable};
use std::str::SplitWhitespace;

/// Lines of `text` broken at word boundaries so that none is longer than
/// `columns` characters. Lines are filled greedily; a word that alone
/// exceeds `columns` gets a line of its own.
///
/// ```
/// use kata_rs::wrap::wrap_text;
///
/// let text = "The String global object is a constructor for strings, or a sequence of characters.";
/// let lines: Vec<String> = wrap_text(text, 26).collect();
/// assert_eq!(lines, [
///     "The String global object",
///     "is a constructor for",
///     "strings, or a sequence of",
///     "characters.",
/// ]);
/// ```
pub fn wrap_text(text: &str, columns: usize) -> WrapLines<'_> {
    WrapLines { words: text.split_whitespace().peekable(), columns }
}

/// Iterator returned by [`wrap_text`].
#[derive(Debug, Clone)]
pub struct WrapLines<'a> {
    words: Peekable<SplitWhitespace<'a>>,
    columns: usize,
}

impl Iterator for WrapLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.words.next()?;
        let mut line = String::from(first);
        let mut width = first.chars().count();
        while let Some(word) = self.words.peek() {
            let next_width = width + 1 + word.chars().count();
            if next_width > self.columns {
                break;
            }
            line.push(' ');
            line.push_str(word);
            width = next_width;
            self.words.next();
        }
        Some(line)
    }
}

impl FusedIterator for WrapLines<'_> {}
