use crate::card::build_card;
use crate::host::Host;
use pricing_domain::{PlanDescription, PricingConfig, default_plans};
use pricing_domain::constants::MOUNT_SELECTOR;
use tracing::debug;

/// Outcome of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// No element matched the selector; nothing was touched.
    Skipped,
    /// This many cards were appended.
    Mounted(usize),
}

/// Appends one card per plan, in order, to the first element matching `selector`.
///
/// A missing mount point is not an error: the call returns [`Rendered::Skipped`] without
/// touching the host. Rendering twice appends a second set of cards.
///
/// # Errors
/// Propagates the first error returned by [`Host::append`].
pub fn render_pricing<H: Host>(
    host: &mut H,
    selector: &str,
    plans: &[PlanDescription],
) -> Result<Rendered, H::Error> {
    let Some(mount) = host.find_mount(selector) else {
        return Ok(Rendered::Skipped);
    };

    for plan in plans {
        host.append(&mount, &build_card(plan))?;
    }

    debug!(selector, cards = plans.len(), "Pricing cards mounted");
    Ok(Rendered::Mounted(plans.len()))
}

/// Owns the mount selector and the plan list of a pricing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRenderer {
    selector: String,
    plans: Vec<PlanDescription>,
}

impl Default for PricingRenderer {
    fn default() -> Self {
        Self::new(MOUNT_SELECTOR, default_plans())
    }
}

impl From<PricingConfig> for PricingRenderer {
    fn from(config: PricingConfig) -> Self {
        Self { selector: config.mount.selector, plans: config.plans }
    }
}

impl PricingRenderer {
    pub fn new(selector: impl Into<String>, plans: Vec<PlanDescription>) -> Self {
        Self { selector: selector.into(), plans }
    }

    #[must_use]
    pub fn with_plans(mut self, plans: Vec<PlanDescription>) -> Self {
        self.plans = plans;
        self
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub fn plans(&self) -> &[PlanDescription] {
        &self.plans
    }

    /// Renders every plan into `host`. See [`render_pricing`].
    ///
    /// # Errors
    /// Propagates the first error returned by [`Host::append`].
    pub fn render<H: Host>(&self, host: &mut H) -> Result<Rendered, H::Error> {
        render_pricing(host, &self.selector, &self.plans)
    }
}
