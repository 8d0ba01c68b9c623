use super::{PartKind, Render, SelectorError};
use std::fmt;

/// A selector made of simple parts and no combinator, e.g. `a#nav.item[href]:hover`.
///
/// Methods consume the selector and hand back the extended one, so a value
/// shared between two branches of a tree has to be cloned explicitly.
///
/// ```
/// use kata_rs::selector::{CompoundSelector, Render};
///
/// let sel = CompoundSelector::new()
///     .pseudo_class("focus")
///     .attr(r#"href$=".png""#)
///     .element("a")
///     .unwrap();
/// assert_eq!(sel.render(), r#"a[href$=".png"]:focus"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub(super) element: Option<String>,
    pub(super) id: Option<String>,
    pub(super) classes: Vec<String>,
    pub(super) attrs: Vec<String>,
    pub(super) pseudo_classes: Vec<String>,
    pub(super) pseudo_element: Option<String>,
}

fn set_once(
    slot: &mut Option<String>,
    kind: PartKind,
    value: impl Into<String>,
) -> Result<(), SelectorError> {
    if let Some(existing) = slot {
        return Err(SelectorError::DuplicatePart { kind, existing: existing.clone() });
    }
    *slot = Some(value.into());
    Ok(())
}

impl CompoundSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type selector. Fails if one is already present.
    pub fn element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        set_once(&mut self.element, PartKind::Element, name)?;
        Ok(self)
    }

    /// Set the id selector. Fails if one is already present.
    pub fn id(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        set_once(&mut self.id, PartKind::Id, name)?;
        Ok(self)
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    /// Append an attribute condition, given without brackets (`href$=".png"`).
    pub fn attr(mut self, condition: impl Into<String>) -> Self {
        self.attrs.push(condition.into());
        self
    }

    pub fn pseudo_class(mut self, name: impl Into<String>) -> Self {
        self.pseudo_classes.push(name.into());
        self
    }

    /// Set the pseudo-element. Fails if one is already present.
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        set_once(&mut self.pseudo_element, PartKind::PseudoElement, name)?;
        Ok(self)
    }

    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attrs(&self) -> &[String] {
        &self.attrs
    }

    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// True when no part has been set; renders as the empty string.
    pub fn is_empty(&self) -> bool {
        self.element.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        // All conditions share one bracket pair.
        if !self.attrs.is_empty() {
            write!(f, "[{}]", self.attrs.join(","))?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{pseudo}")?;
        }
        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{pseudo}")?;
        }
        Ok(())
    }
}

impl Render for CompoundSelector {}
