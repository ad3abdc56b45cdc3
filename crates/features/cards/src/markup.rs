//! HTML output for card trees. Activation payloads have no markup and are left out.

use crate::node::{Element, Node};
use std::fmt::{self, Write};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => fmt::Display::fmt(&Escaped(text), f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        write!(f, "<{tag}")?;
        if let Some(class) = self.class_name() {
            write!(f, " class=\"{}\"", Escaped(class))?;
        }
        for (attr, value) in self.attributes() {
            write!(f, " {attr}=\"{}\"", Escaped(value))?;
        }
        f.write_char('>')?;
        for child in self.child_nodes() {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{tag}>")
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => f.write_char(ch)?,
            }
        }
        Ok(())
    }
}
