use super::{CombinedSelector, Combinator, CompoundSelector, Selector, SelectorError};

/// Entry point for building selectors. Every method starts from a fresh
/// node, so nothing is shared between calls.
///
/// ```
/// use kata_rs::selector::{CssSelectorBuilder as css, Render};
///
/// let sel = css::element("a").attr(r#"href$=".png""#).pseudo_class("focus");
/// assert_eq!(sel.render(), r#"a[href$=".png"]:focus"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSelectorBuilder;

impl CssSelectorBuilder {
    pub fn element(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector { element: Some(name.into()), ..CompoundSelector::default() }
    }

    pub fn id(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector { id: Some(name.into()), ..CompoundSelector::default() }
    }

    pub fn class(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::new().class(name)
    }

    pub fn attr(condition: impl Into<String>) -> CompoundSelector {
        CompoundSelector::new().attr(condition)
    }

    pub fn pseudo_class(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector::new().pseudo_class(name)
    }

    pub fn pseudo_element(name: impl Into<String>) -> CompoundSelector {
        CompoundSelector { pseudo_element: Some(name.into()), ..CompoundSelector::default() }
    }

    /// Join two selectors. `combinator` must be one of `" "`, `"+"`, `"~"`, `">"`.
    pub fn combine(
        left: impl Into<Selector>,
        combinator: &str,
        right: impl Into<Selector>,
    ) -> Result<Selector, SelectorError> {
        let combinator: Combinator = combinator.parse()?;
        let combined = CombinedSelector::new(left, combinator, right);
        tracing::trace!(combinator = %combinator, "combined selectors");
        Ok(combined.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{PartKind, Render};

    type Css = CssSelectorBuilder;

    #[test]
    fn facade_methods_start_fresh_selectors() {
        assert_eq!(Css::element("div").render(), "div");
        assert_eq!(Css::id("main").render(), "#main");
        assert_eq!(Css::class("a").render(), ".a");
        assert_eq!(Css::attr("href").render(), "[href]");
        assert_eq!(Css::pseudo_class("hover").render(), ":hover");
        assert_eq!(Css::pseudo_element("before").render(), "::before");
    }

    #[test]
    fn facade_element_still_guards_duplicates() {
        let res = Css::element("div").element("p");
        assert!(matches!(res, Err(SelectorError::DuplicatePart { kind: PartKind::Element, .. })));
        let res = Css::pseudo_element("before").pseudo_element("after");
        assert!(matches!(
            res,
            Err(SelectorError::DuplicatePart { kind: PartKind::PseudoElement, .. })
        ));
    }

    #[test]
    fn combine_rejects_unknown_combinator() {
        let res = Css::combine(Css::element("a"), "|", Css::element("b"));
        assert_eq!(res, Err(SelectorError::InvalidCombinator("|".into())));
    }
}
