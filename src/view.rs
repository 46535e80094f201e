//! View Tree
//!
//! Backend-agnostic description of rendered markup: typed elements with
//! attributes, children and bound event handlers. The DOM components in
//! `components` render the same structure through Leptos.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Events a view element can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Input,
    Click,
    Drop,
}

/// Current value carried by an input event
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Checked(bool),
}

/// A user gesture delivered to an element. `P` is the drop payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<P> {
    Input(InputValue),
    Click,
    Drop(P),
}

impl<P> Event<P> {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Input(_) => EventKind::Input,
            Event::Click => EventKind::Click,
            Event::Drop(_) => EventKind::Drop,
        }
    }
}

pub type Handler<P> = Rc<dyn Fn(Event<P>)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute, present without a value
    Flag,
}

/// A node in the view tree
pub enum ViewNode<P> {
    Element(Element<P>),
    Text(String),
}

impl<P> Clone for ViewNode<P> {
    fn clone(&self) -> Self {
        match self {
            ViewNode::Element(el) => ViewNode::Element(el.clone()),
            ViewNode::Text(text) => ViewNode::Text(text.clone()),
        }
    }
}

impl<P> PartialEq for ViewNode<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ViewNode::Element(a), ViewNode::Element(b)) => a == b,
            (ViewNode::Text(a), ViewNode::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl<P> fmt::Debug for ViewNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewNode::Element(el) => el.fmt(f),
            ViewNode::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl<P> ViewNode<P> {
    pub fn as_element(&self) -> Option<&Element<P>> {
        match self {
            ViewNode::Element(el) => Some(el),
            ViewNode::Text(_) => None,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Text(text) => out.push_str(&escape(text)),
            ViewNode::Element(el) => el.write_html(out),
        }
    }
}

impl<P> From<Element<P>> for ViewNode<P> {
    fn from(el: Element<P>) -> Self {
        ViewNode::Element(el)
    }
}

/// A typed element descriptor
pub struct Element<P> {
    tag: &'static str,
    classes: Vec<String>,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<ViewNode<P>>,
    handlers: BTreeMap<EventKind, Handler<P>>,
}

impl<P> Element<P> {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
            handlers: BTreeMap::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Boolean attribute: present iff `on`
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attrs.insert(name.into(), AttrValue::Flag);
        }
        self
    }

    /// Text attribute present only when `value` is `Some`
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn child(mut self, child: impl Into<ViewNode<P>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(ViewNode::Text(text.into()));
        self
    }

    pub fn on(mut self, kind: EventKind, handler: impl Fn(Event<P>) + 'static) -> Self {
        self.handlers.insert(kind, Rc::new(handler));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attrs(&self) -> &BTreeMap<String, AttrValue> {
        &self.attrs
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Value of a text attribute
    pub fn attr_text(&self, name: &str) -> Option<&str> {
        match self.attrs.get(name) {
            Some(AttrValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn bound_events(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.handlers.keys().copied()
    }

    /// Deliver `event` to this element's handler.
    /// Returns false when nothing is bound for its kind.
    pub fn dispatch(&self, event: Event<P>) -> bool {
        match self.handlers.get(&event.kind()) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    /// Depth-first search, self included
    pub fn find(&self, pred: &dyn Fn(&Element<P>) -> bool) -> Option<&Element<P>> {
        self.path_to(pred).and_then(|path| path.last().copied())
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element<P>> {
        self.find(&|el| el.has_class(class))
    }

    /// Chain of elements from `self` down to the first match
    pub fn path_to(&self, pred: &dyn Fn(&Element<P>) -> bool) -> Option<Vec<&Element<P>>> {
        if pred(self) {
            return Some(vec![self]);
        }
        for child in self.children.iter().filter_map(ViewNode::as_element) {
            if let Some(mut path) = child.path_to(pred) {
                path.insert(0, self);
                return Some(path);
            }
        }
        None
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape(&self.classes.join(" "))));
        }
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Flag => out.push_str(&format!(" {}", name)),
                AttrValue::Text(text) => out.push_str(&format!(" {}=\"{}\"", name, escape(text))),
            }
        }
        out.push('>');
        if is_void(self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

impl<P> Clone for Element<P> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            classes: self.classes.clone(),
            attrs: self.attrs.clone(),
            children: self.children.clone(),
            handlers: self.handlers.clone(),
        }
    }
}

/// Structural equality: handlers compare by which events are bound
impl<P> PartialEq for Element<P> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.classes == other.classes
            && self.attrs == other.attrs
            && self.children == other.children
            && self.bound_events().eq(other.bound_events())
    }
}

impl<P> fmt::Debug for Element<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("events", &self.bound_events().collect::<Vec<_>>())
            .field("children", &self.children)
            .finish()
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "br" | "hr" | "img" | "meta" | "link")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample() -> Element<()> {
        Element::new("div")
            .class("row")
            .child(Element::new("input").class("field").attr("value", "a").flag("disabled", true))
            .child(Element::new("span").class("label").text("x"))
    }

    #[test]
    fn test_dispatch_only_bound_kind() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let el: Element<()> = Element::new("button").on(EventKind::Click, move |_| counter.set(counter.get() + 1));

        assert!(el.dispatch(Event::Click));
        assert!(!el.dispatch(Event::Drop(())));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_path_to_class() {
        let root = sample();
        let path = root.path_to(&|el| el.has_class("label")).unwrap();
        assert_eq!(path.iter().map(|el| el.tag()).collect::<Vec<_>>(), vec!["div", "span"]);
        assert!(root.find_by_class("missing").is_none());
    }

    #[test]
    fn test_flag_absent_when_off() {
        let el: Element<()> = Element::new("input").flag("disabled", false);
        assert!(!el.has_attr("disabled"));
    }

    #[test]
    fn test_equality_ignores_closure_identity() {
        let a: Element<()> = Element::new("button").on(EventKind::Click, |_| {});
        let b: Element<()> = Element::new("button").on(EventKind::Click, |_| {});
        let unbound: Element<()> = Element::new("button");
        assert_eq!(a, b);
        assert_ne!(a, unbound);
    }

    #[test]
    fn test_to_html_escapes() {
        let node: ViewNode<()> = Element::new("div")
            .attr("title", "\"quoted\" & <b>")
            .child(Element::new("input").flag("disabled", true))
            .text("1 < 2")
            .into();
        assert_eq!(
            node.to_html(),
            "<div title=\"&quot;quoted&quot; &amp; &lt;b&gt;\"><input disabled>1 &lt; 2</div>"
        );
    }
}
