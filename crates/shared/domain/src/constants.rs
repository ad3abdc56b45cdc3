//! Style-class names and fixed copy.
//!
//! External stylesheets key off the class names, so they must stay bit-exact.

// --- Mount ---
pub const MOUNT_CLASS: &str = "pricing-grid";
pub const MOUNT_SELECTOR: &str = ".pricing-grid";

// --- Card ---
pub const CARD: &str = "pricing-card";
pub const CARD_FEATURED: &str = "pricing-card--featured";
pub const CARD_HEADER: &str = "pricing-card-header";
pub const CARD_TITLE: &str = "card-title";
pub const CARD_DESCRIPTION: &str = "card-description";
pub const CARD_FOOTER: &str = "pricing-card-footer";
pub const BADGE: &str = "badge";

// --- Price ---
pub const PRICE_ROW: &str = "price-row";
pub const PRICE_AMOUNT: &str = "price-amount";
pub const PRICE_PERIOD: &str = "price-period";

// --- Features ---
pub const FEATURES_HEADING: &str = "features-heading";
pub const FEATURES: &str = "features";
pub const FEATURE_ICON: &str = "feature-icon";

// --- Call to action ---
pub const BUTTON: &str = "btn";
pub const BUTTON_SECONDARY: &str = "btn-secondary";
pub const ICON: &str = "icon";
pub const HELPER_TEXT: &str = "helper-text";

// --- Copy ---
pub const BADGE_TEXT: &str = "Most popular";
pub const PRICE_PERIOD_TEXT: &str = "/ month";
pub const FEATURES_HEADING_TEXT: &str = "What\u{2019}s included";
pub const CHECKMARK: &str = "\u{2713}";
pub const ARROW: &str = "\u{2192}";
pub const DEFAULT_CTA_LABEL: &str = "Start trial";
