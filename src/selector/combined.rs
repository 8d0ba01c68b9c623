use super::{Combinator, Render, Selector};
use std::fmt;

/// Two selectors joined by a combinator. Owns both sides; neither can be
/// changed once combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    left: Selector,
    combinator: Combinator,
    right: Selector,
}

impl CombinedSelector {
    pub fn new(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self { left: left.into(), combinator, right: right.into() }
    }

    pub fn left(&self) -> &Selector {
        &self.left
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// Split back into `(left, combinator, right)`.
    pub fn into_parts(self) -> (Selector, Combinator, Selector) {
        (self.left, self.combinator, self.right)
    }
}

impl fmt::Display for CombinedSelector {
    /// Sides are written as they render. An empty compound side renders as
    /// nothing, so its separating space still appears (`" a"`, `"a > "`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.combinator {
            // The descendant combinator is the single separating space.
            Combinator::Descendant => write!(f, "{} {}", self.left, self.right),
            c => write!(f, "{} {} {}", self.left, c, self.right),
        }
    }
}

impl Render for CombinedSelector {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::CompoundSelector;

    fn el(name: &str) -> CompoundSelector {
        CompoundSelector::new().element(name).unwrap()
    }

    #[test]
    fn symbol_combinators_are_padded() {
        let cases = [
            (Combinator::Child, "ul > li"),
            (Combinator::NextSibling, "ul + li"),
            (Combinator::SubsequentSibling, "ul ~ li"),
        ];
        for (c, expected) in cases {
            assert_eq!(CombinedSelector::new(el("ul"), c, el("li")).render(), expected);
        }
    }

    #[test]
    fn descendant_uses_a_single_space() {
        let sel = CombinedSelector::new(el("nav"), Combinator::Descendant, el("a"));
        assert_eq!(sel.render(), "nav a");
    }

    #[test]
    fn empty_side_keeps_its_separator() {
        let empty = CompoundSelector::new;
        assert_eq!(CombinedSelector::new(empty(), Combinator::Descendant, el("a")).render(), " a");
        assert_eq!(CombinedSelector::new(el("a"), Combinator::Descendant, empty()).render(), "a ");
        assert_eq!(CombinedSelector::new(el("a"), Combinator::Child, empty()).render(), "a > ");
    }

    #[test]
    fn parts_are_kept() {
        let sel = CombinedSelector::new(el("a"), Combinator::Child, el("b"));
        assert_eq!(sel.combinator(), Combinator::Child);
        assert_eq!(sel.left().render(), "a");
        assert_eq!(sel.right().render(), "b");
        let (l, c, r) = sel.into_parts();
        assert_eq!((l.render(), c, r.render()), ("a".into(), Combinator::Child, "b".into()));
    }
}
