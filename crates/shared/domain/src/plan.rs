use crate::constants::DEFAULT_CTA_LABEL;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// One pricing tier as shown on a card.
///
/// Optional fields fall back to the same defaults whether the plan is built in code
/// or deserialized from configuration: empty `description`, `featured = false`,
/// `cta_label = "Start trial"` and an empty `cta_hint`.
///
/// # Example
///
/// ```rust
/// use pricing_domain::PlanDescription;
///
/// let plan = PlanDescription::builder()
///     .title("Team")
///     .price("$29.99")
///     .features(&["Shared inbox", "Shared inbox"])
///     .featured(true)
///     .build();
///
/// assert_eq!(plan.cta_label, "Start trial");
/// assert_eq!(plan.features.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct PlanDescription {
    #[builder(setter(into))]
    pub title: String,

    /// Display text, rendered verbatim.
    #[builder(setter(into))]
    pub price: String,

    /// Display order. Duplicates are kept.
    #[serde(default)]
    #[builder(default, setter(transform = |items: &[&str]| items.iter().map(|item| (*item).to_owned()).collect()))]
    pub features: Vec<String>,

    #[serde(default)]
    #[builder(default, setter(into))]
    pub description: String,

    #[serde(default)]
    #[builder(default)]
    pub featured: bool,

    #[serde(default = "default_cta_label")]
    #[builder(default = default_cta_label(), setter(into))]
    pub cta_label: String,

    #[serde(default)]
    #[builder(default, setter(into))]
    pub cta_hint: String,
}

impl PlanDescription {
    /// Accessible name of the card root, e.g. `"Pro plan"`.
    #[must_use]
    pub fn card_label(&self) -> String {
        format!("{} plan", self.title)
    }

    /// Accessible name of the activation control, e.g. `"Choose Pro for the Pro plan"`.
    #[must_use]
    pub fn cta_aria_label(&self) -> String {
        format!("{} for the {} plan", self.cta_label, self.title)
    }

    /// Text shown when the activation control is used.
    #[must_use]
    pub fn selection_message(&self) -> String {
        format!("You chose the {} plan at {} per month.", self.title, self.price)
    }
}

fn default_cta_label() -> String {
    DEFAULT_CTA_LABEL.to_owned()
}
