//! Typed Stylesheets
//!
//! Style rules built from typed selectors and declarations whose values may
//! name design tokens. A sheet renders either with `var(--token)`
//! references for a global cascade, or with tokens substituted through a
//! [`TokenResolver`]. It can also compute the style an element of a view
//! tree ends up with.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::theme::TokenResolver;
use crate::view::{AttrValue, Element};

/// One space-separated component of a declaration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Literal(String),
    Token(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    parts: Vec<Part>,
}

/// Literal value
pub fn lit(text: impl Into<String>) -> Value {
    Value { parts: vec![Part::Literal(text.into())] }
}

/// Token reference
pub fn var(token: impl Into<String>) -> Value {
    Value { parts: vec![Part::Token(token.into())] }
}

impl Value {
    /// Append another space-separated component
    pub fn then(mut self, other: Value) -> Self {
        self.parts.extend(other.parts);
        self
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Part::Token(name) => Some(name.as_str()),
            Part::Literal(_) => None,
        })
    }

    fn render(&self, mode: TokenMode<'_>) -> Result<String> {
        let mut rendered = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            rendered.push(match (part, mode) {
                (Part::Literal(text), _) => text.clone(),
                (Part::Token(name), TokenMode::Var) => format!("var({})", name),
                (Part::Token(name), TokenMode::Inline(resolver)) => resolver
                    .resolve(name)
                    .map(str::to_string)
                    .ok_or_else(|| Error::UnresolvedToken(name.clone()))?,
            });
        }
        Ok(rendered.join(" "))
    }
}

/// How token references are written out
#[derive(Clone, Copy)]
pub enum TokenMode<'a> {
    /// `var(--token)`, resolved by the host's cascade
    Var,
    /// Substitute values now
    Inline(&'a dyn TokenResolver),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrSelector {
    Present(String),
    Equals(String, String),
}

/// Class-anchored compound selector: `.class:hover[attr="v"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    class: String,
    hover: bool,
    attrs: Vec<AttrSelector>,
}

impl Compound {
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            hover: false,
            attrs: Vec::new(),
        }
    }

    pub fn hover(mut self) -> Self {
        self.hover = true;
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.push(AttrSelector::Present(name.into()));
        self
    }

    pub fn with_attr_eq(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(AttrSelector::Equals(name.into(), value.into()));
        self
    }

    fn specificity(&self) -> u32 {
        1 + u32::from(self.hover) + self.attrs.len() as u32
    }

    fn matches(&self, cx: &MatchContext<'_>) -> bool {
        cx.classes.iter().any(|c| *c == self.class)
            && (!self.hover || cx.hovered)
            && self.attrs.iter().all(|sel| match sel {
                AttrSelector::Present(name) => cx.attrs.contains_key(name),
                AttrSelector::Equals(name, value) => {
                    matches!(cx.attrs.get(name), Some(AttrValue::Text(v)) if v == value)
                }
            })
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.class)?;
        if self.hover {
            f.write_str(":hover")?;
        }
        for attr in &self.attrs {
            match attr {
                AttrSelector::Present(name) => write!(f, "[{}]", name)?,
                AttrSelector::Equals(name, value) => write!(f, "[{}=\"{}\"]", name, value)?,
            }
        }
        Ok(())
    }
}

/// A compound, optionally as the direct child of another (`a > b`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parent: Option<Compound>,
    subject: Compound,
}

impl Selector {
    pub fn child_of(self, parent: Compound) -> Self {
        Self {
            parent: Some(parent),
            ..self
        }
    }

    pub fn specificity(&self) -> u32 {
        self.subject.specificity() + self.parent.as_ref().map_or(0, Compound::specificity)
    }

    /// `chain` runs from the root down to the element being styled
    pub fn matches(&self, chain: &[MatchContext<'_>]) -> bool {
        let Some((subject, ancestors)) = chain.split_last() else {
            return false;
        };
        if !self.subject.matches(subject) {
            return false;
        }
        match (&self.parent, ancestors.last()) {
            (None, _) => true,
            (Some(parent), Some(cx)) => parent.matches(cx),
            (Some(_), None) => false,
        }
    }
}

impl From<Compound> for Selector {
    fn from(subject: Compound) -> Self {
        Self { parent: None, subject }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.parent {
            write!(f, "{} > ", parent)?;
        }
        write!(f, "{}", self.subject)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: Selector,
    pub declarations: Vec<Declaration>,
}

/// What a selector sees of one element
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub classes: &'a [String],
    pub attrs: &'a BTreeMap<String, AttrValue>,
    pub hovered: bool,
}

impl<'a> MatchContext<'a> {
    pub fn of<P>(el: &'a Element<P>, hovered: bool) -> Self {
        Self {
            classes: el.classes(),
            attrs: el.attrs(),
            hovered,
        }
    }
}

/// Resolved property values of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    values: BTreeMap<String, String>,
}

impl ComputedStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values.get(property).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: impl Into<Selector>, declarations: &[(&str, Value)]) -> Self {
        self.rules.push(StyleRule {
            selector: selector.into(),
            declarations: declarations
                .iter()
                .map(|(property, value)| Declaration {
                    property: property.to_string(),
                    value: value.clone(),
                })
                .collect(),
        });
        self
    }

    /// Every token referenced by the sheet, sorted and deduplicated
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self
            .rules
            .iter()
            .flat_map(|rule| rule.declarations.iter())
            .flat_map(|decl| decl.value.tokens())
            .collect();
        tokens.sort_unstable();
        tokens.dedup();
        tokens
    }

    pub fn render(&self, mode: TokenMode<'_>) -> Result<String> {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&format!("{} {{\n", rule.selector));
            for decl in &rule.declarations {
                css.push_str(&format!("  {}: {};\n", decl.property, decl.value.render(mode)?));
            }
            css.push_str("}\n");
        }
        Ok(css)
    }

    /// Cascade for the last element of `chain`: higher specificity wins,
    /// then later rules.
    pub fn compute(&self, chain: &[MatchContext<'_>], resolver: &dyn TokenResolver) -> Result<ComputedStyle> {
        let mut matched: Vec<(u32, usize, &StyleRule)> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.selector.matches(chain))
            .map(|(idx, rule)| (rule.selector.specificity(), idx, rule))
            .collect();
        matched.sort_by_key(|(specificity, idx, _)| (*specificity, *idx));

        let mut computed = ComputedStyle::default();
        for (_, _, rule) in matched {
            for decl in &rule.declarations {
                let value = decl.value.render(TokenMode::Inline(resolver))?;
                computed.values.insert(decl.property.clone(), value);
            }
        }
        Ok(computed)
    }

    /// Computed style of the first element under `root` carrying `class`.
    ///
    /// `hovered_class` names the element under the pointer; it and all of
    /// its ancestors count as hovered. `Ok(None)` when `class` is absent.
    pub fn compute_in<P>(
        &self,
        root: &Element<P>,
        class: &str,
        hovered_class: Option<&str>,
        resolver: &dyn TokenResolver,
    ) -> Result<Option<ComputedStyle>> {
        let Some(path) = root.path_to(&|el| el.has_class(class)) else {
            return Ok(None);
        };
        let hovered = hovered_class
            .and_then(|hc| root.path_to(&|el| el.has_class(hc)))
            .unwrap_or_default();
        let chain: Vec<MatchContext<'_>> = path
            .iter()
            .map(|el| MatchContext::of(el, hovered.iter().any(|h| std::ptr::eq(*h, *el))))
            .collect();
        self.compute(&chain, resolver).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn sheet() -> StyleSheet {
        StyleSheet::new()
            .rule(Compound::class("card"), &[("color", lit("black")), ("gap", var("--size-3"))])
            .rule(Compound::class("card").hover(), &[("color", lit("blue"))])
            .rule(Compound::class("card").with_attr_eq("data-state", "on"), &[("color", lit("green"))])
            // lower specificity, later in source: loses to the hover rule
            .rule(Compound::class("card"), &[("outline", lit("2px solid").then(var("--color-border")))])
            .rule(Selector::from(Compound::class("tip")).child_of(Compound::class("card").hover()), &[("visibility", lit("visible"))])
    }

    fn el(classes: &[&str]) -> Element<()> {
        classes.iter().fold(Element::new("div"), |el, c| el.class(*c))
    }

    #[test]
    fn test_render_var_mode() {
        let css = sheet().render(TokenMode::Var).unwrap();
        assert!(css.contains(".card {\n  color: black;\n  gap: var(--size-3);\n}\n"));
        assert!(css.contains(".card[data-state=\"on\"] {"));
        assert!(css.contains(".card:hover > .tip {"));
        assert!(css.contains("outline: 2px solid var(--color-border);"));
    }

    #[test]
    fn test_render_inline_mode() {
        let css = sheet().render(TokenMode::Inline(&Theme::default())).unwrap();
        assert!(css.contains("gap: 1rem;"));
        assert!(!css.contains("var("));
    }

    #[test]
    fn test_inline_unresolved_token() {
        let err = sheet().render(TokenMode::Inline(&Theme::empty())).unwrap_err();
        assert!(matches!(err, Error::UnresolvedToken(name) if name == "--size-3"));
    }

    #[test]
    fn test_tokens_deduplicated() {
        let sheet = sheet().rule(Compound::class("x"), &[("gap", var("--size-3"))]);
        assert_eq!(sheet.tokens(), vec!["--color-border", "--size-3"]);
    }

    #[test]
    fn test_compute_specificity_then_order() {
        let theme = Theme::default();
        let card = el(&["card"]);
        let plain = sheet().compute(&[MatchContext::of(&card, false)], &theme).unwrap();
        assert_eq!(plain.get("color"), Some("black"));
        assert_eq!(plain.get("gap"), Some("1rem"));

        let hovered = sheet().compute(&[MatchContext::of(&card, true)], &theme).unwrap();
        assert_eq!(hovered.get("color"), Some("blue"));

        // equal specificity: the later attribute rule wins over hover
        let on = card.attr("data-state", "on");
        let both = sheet().compute(&[MatchContext::of(&on, true)], &theme).unwrap();
        assert_eq!(both.get("color"), Some("green"));
    }

    #[test]
    fn test_child_combinator_needs_hovered_parent() {
        let theme = Theme::default();
        let root = el(&["card"]).child(el(&["tip"]));
        let idle = sheet().compute_in(&root, "tip", None, &theme).unwrap().unwrap();
        assert_eq!(idle.get("visibility"), None);

        // hovering the child hovers its parent too
        let via_child = sheet().compute_in(&root, "tip", Some("tip"), &theme).unwrap().unwrap();
        assert_eq!(via_child.get("visibility"), Some("visible"));

        assert!(sheet().compute_in(&root, "absent", None, &theme).unwrap().is_none());
    }
}
