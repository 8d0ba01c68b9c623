//! CSS selector builder.
//!
//! A [`CompoundSelector`] collects element, id, class, attribute,
//! pseudo-class and pseudo-element parts and always renders them in that
//! order. Two selectors joined by a [`Combinator`] form a
//! [`CombinedSelector`]; both are wrapped by [`Selector`].
//!
//! ```
//! use kata_rs::selector::{CssSelectorBuilder as css, Render};
//!
//! let sel = css::combine(
//!     css::element("div").id("main").unwrap(),
//!     "+",
//!     css::element("table").id("data").unwrap(),
//! ).unwrap();
//! assert_eq!(sel.render(), "div#main + table#data");
//! ```

mod builder;
mod combined;
mod compound;

pub use builder::CssSelectorBuilder;
pub use combined::CombinedSelector;
pub use compound::CompoundSelector;

use std::fmt;
use std::str::FromStr;

/// The kinds of simple selector a compound selector is made of, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectorError {
    #[error("{kind} may occur only once in a selector (already set to '{existing}')")]
    DuplicatePart { kind: PartKind, existing: String },
    #[error("invalid combinator: '{0}'")]
    InvalidCombinator(String),
}

/// Relationship between the two sides of a combined selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    NextSibling,
    /// `a ~ b`
    SubsequentSibling,
}

impl Combinator {
    pub const ALL: [Combinator; 4] = [
        Combinator::Descendant,
        Combinator::Child,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
    ];

    pub const fn to_char(self) -> char {
        match self {
            Combinator::Descendant => ' ',
            Combinator::Child => '>',
            Combinator::NextSibling => '+',
            Combinator::SubsequentSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' => Ok(Combinator::Descendant),
            '>' => Ok(Combinator::Child),
            '+' => Ok(Combinator::NextSibling),
            '~' => Ok(Combinator::SubsequentSibling),
            _ => Err(SelectorError::InvalidCombinator(c.to_string())),
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Only the bare symbol is accepted; `" "` is the descendant combinator,
    /// so the input is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Combinator::try_from(c),
            _ => Err(SelectorError::InvalidCombinator(s.to_string())),
        }
    }
}

/// Rendering contract shared by every selector node.
pub trait Render: fmt::Display {
    /// Canonical CSS text of the node (`stringify`).
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Any selector node: a compound selector or a combination of two selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Compound(CompoundSelector),
    Combined(Box<CombinedSelector>),
}

impl Selector {
    pub fn as_compound(&self) -> Option<&CompoundSelector> {
        match self {
            Selector::Compound(c) => Some(c),
            Selector::Combined(_) => None,
        }
    }

    pub fn as_combined(&self) -> Option<&CombinedSelector> {
        match self {
            Selector::Compound(_) => None,
            Selector::Combined(c) => Some(c),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(c: CompoundSelector) -> Self {
        Selector::Compound(c)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(c: CombinedSelector) -> Self {
        Selector::Combined(Box::new(c))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Compound(c) => fmt::Display::fmt(c, f),
            Selector::Combined(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl Render for Selector {}
