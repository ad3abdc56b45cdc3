use crate::notify::Notification;
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// HTML elements a card can be made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Tag {
    Main,
    Section,
    Article,
    Header,
    Footer,
    Div,
    H2,
    P,
    Span,
    Ul,
    Li,
    Button,
}

/// Attributes carried by card elements. `class` is kept separately on [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, IntoStaticStr)]
pub enum Attr {
    #[strum(serialize = "aria-label")]
    AriaLabel,
    #[strum(serialize = "aria-hidden")]
    AriaHidden,
    #[strum(serialize = "tabindex")]
    TabIndex,
    #[strum(serialize = "type")]
    Type,
}

/// A renderable tree. Values only: no identity, never updated once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all of its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            },
        }
    }

    /// Depth-first, document-order walk over every element in the tree, including `self`.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.as_element().into_iter().flat_map(|element| element.walk())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// One element of a card tree, assembled with a consuming builder.
///
/// ```rust
/// use pricing_cards::{Attr, Element, Tag};
///
/// let hint = Element::new(Tag::Span).class("icon").attr(Attr::AriaHidden, "true").text("→");
/// assert!(hint.has_class("icon"));
/// assert_eq!(hint.attr_value(Attr::AriaHidden), Some("true"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    class: Option<String>,
    attributes: Vec<(Attr, String)>,
    children: Vec<Node>,
    on_activate: Option<Notification>,
}

impl Element {
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self { tag, class: None, attributes: Vec::new(), children: Vec::new(), on_activate: None }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets an attribute, replacing an earlier value for the same name.
    #[must_use]
    pub fn attr(mut self, name: Attr, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(attr, _)| *attr == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends `child` only when `condition` holds. Nothing is left behind otherwise.
    #[must_use]
    pub fn child_if(self, condition: bool, child: impl FnOnce() -> Node) -> Self {
        if condition { self.child(child()) } else { self }
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Payload delivered to a [`crate::Notifier`] when this element is activated.
    #[must_use]
    pub fn on_activate(mut self, notification: Notification) -> Self {
        self.on_activate = Some(notification);
        self
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class.as_deref().is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    #[must_use]
    pub fn attr_value(&self, name: Attr) -> Option<&str> {
        self.attributes.iter().find(|(attr, _)| *attr == name).map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn attributes(&self) -> &[(Attr, String)] {
        &self.attributes
    }

    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub(crate) const fn child_nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Direct element children, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    #[must_use]
    pub const fn activation(&self) -> Option<&Notification> {
        self.on_activate.as_ref()
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// `self` followed by every descendant element, in document order.
    pub fn walk(&self) -> impl Iterator<Item = &Self> {
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        std::iter::once(self).chain(std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                if let Node::Element(element) = node {
                    stack.extend(element.children.iter().rev());
                    return Some(element);
                }
            }
            None
        }))
    }
}
