//! Facade crate for the pricing cards workspace.
//! Re-exports domain, kernel and the cards slice so apps depend on a single crate.
//! Keep this crate thin: it should compose other crates, not implement rendering logic.
//!
//! ## Usage
//! - Add `pricing` with the desired feature flags (`client` for the Dioxus components).
//! - Build a [`cards::PricingRenderer`] from a [`domain::PricingConfig`] and render it into a host.

pub use pricing_cards as cards;
pub use pricing_domain as domain;
pub use pricing_kernel as kernel;

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        "cards",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
