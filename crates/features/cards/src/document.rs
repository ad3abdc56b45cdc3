use crate::error::DocumentError;
use crate::host::Host;
use crate::node::{Attr, Element, Node, Tag};
use crate::notify::Notifier;
use std::str::FromStr;

/// An in-memory page that cards can be mounted into.
///
/// Supports the selectors the renderer needs (`.class` or a bare tag name), counts
/// mutations, and can activate a control by its accessible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    body: Element,
    mutations: usize,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::from_body(Element::new(Tag::Main))
    }
}

impl MemoryDocument {
    /// An empty page without a mount point.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose body holds a single `section` with the given class.
    #[must_use]
    pub fn with_mount(class: &str) -> Self {
        Self::from_body(Element::new(Tag::Main).child(Element::new(Tag::Section).class(class)))
    }

    #[must_use]
    pub const fn from_body(body: Element) -> Self {
        Self { body, mutations: 0 }
    }

    #[must_use]
    pub const fn body(&self) -> &Element {
        &self.body
    }

    /// Number of appends performed so far.
    #[must_use]
    pub const fn mutations(&self) -> usize {
        self.mutations
    }

    /// First element matching `selector`, in document order.
    #[must_use]
    pub fn query_selector(&self, selector: &str) -> Option<&Element> {
        let matcher = Selector::parse(selector)?;
        self.body.walk().find(|element| matcher.matches(element))
    }

    /// Every element carrying `class`, in document order.
    #[must_use]
    pub fn query_class(&self, class: &str) -> Vec<&Element> {
        self.body.walk().filter(|element| element.has_class(class)).collect()
    }

    /// Activates the control whose `aria-label` equals `label`.
    ///
    /// Returns `false` when no such control exists or it carries no activation payload.
    pub fn activate<N>(&self, label: &str, notifier: &N) -> bool
    where
        N: Notifier + ?Sized,
    {
        let Some(notification) = self
            .body
            .walk()
            .filter(|element| element.attr_value(Attr::AriaLabel) == Some(label))
            .find_map(Element::activation)
        else {
            return false;
        };

        notifier.notify(notification);
        true
    }

    /// The page as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.body.to_string()
    }
}

impl Host for MemoryDocument {
    /// Child-index path from the body to the mount element.
    type Mount = Vec<usize>;
    type Error = DocumentError;

    fn find_mount(&self, selector: &str) -> Option<Self::Mount> {
        let matcher = Selector::parse(selector)?;
        let mut path = Vec::new();
        find_path(&self.body, &matcher, &mut path).then_some(path)
    }

    fn append(&mut self, mount: &Self::Mount, node: &Node) -> Result<(), Self::Error> {
        let target = element_at_mut(&mut self.body, mount)
            .ok_or_else(|| DocumentError::StaleMount { path: mount.clone(), context: None })?;
        target.child_nodes_mut().push(node.clone());
        self.mutations += 1;
        Ok(())
    }
}

enum Selector {
    Class(String),
    Tag(Tag),
}

impl Selector {
    fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        match selector.strip_prefix('.') {
            Some(class) if !class.is_empty() => Some(Self::Class(class.to_owned())),
            Some(_) => None,
            None => Tag::from_str(selector).ok().map(Self::Tag),
        }
    }

    fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Class(class) => element.has_class(class),
            Self::Tag(tag) => element.tag() == *tag,
        }
    }
}

fn find_path(element: &Element, matcher: &Selector, path: &mut Vec<usize>) -> bool {
    if matcher.matches(element) {
        return true;
    }
    for (index, child) in element.child_nodes().iter().enumerate() {
        let Node::Element(child) = child else { continue };
        path.push(index);
        if find_path(child, matcher, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn element_at_mut<'a>(mut element: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    for &index in path {
        element = match element.child_nodes_mut().get_mut(index)? {
            Node::Element(child) => child,
            Node::Text(_) => return None,
        };
    }
    Some(element)
}
