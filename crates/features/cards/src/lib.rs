//! Pricing cards feature slice.
//!
//! Building a card is a pure function from a [`PlanDescription`] to an immutable [`Node`] tree.
//! Mounting is a separate step behind the [`Host`] trait, and the only side effect of a card
//! (the selection notice shown when its button is activated) goes through an injected [`Notifier`].
//!
//! ## Example
//!
//! ```rust
//! use pricing_cards::{MemoryDocument, PricingRenderer, Rendered};
//!
//! let mut document = MemoryDocument::with_mount("pricing-grid");
//! let rendered = PricingRenderer::default().render(&mut document).unwrap();
//!
//! assert_eq!(rendered, Rendered::Mounted(3));
//! assert_eq!(document.query_class("pricing-card").len(), 3);
//! ```

mod card;
mod document;
mod error;
mod host;
mod markup;
mod node;
mod notify;
mod render;
#[cfg(feature = "client")]
pub mod view;

pub use crate::card::build_card;
pub use crate::document::MemoryDocument;
pub use crate::error::DocumentError;
pub use crate::host::Host;
pub use crate::node::{Attr, Element, Node, Tag};
pub use crate::notify::{Notification, Notifier};
pub use crate::render::{PricingRenderer, Rendered, render_pricing};
pub use pricing_domain::PlanDescription;
