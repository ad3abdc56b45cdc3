use crate::catalog::default_plans;
use crate::constants::MOUNT_SELECTOR;
use crate::plan::PlanDescription;
use serde::Deserialize;

/// Top-level configuration for a pricing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub mount: MountConfig,
    pub plans: Vec<PlanDescription>,
}

/// Where the cards are appended.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    pub selector: String,
}

// --- Default ---

impl Default for PricingConfig {
    fn default() -> Self {
        Self { mount: MountConfig::default(), plans: default_plans() }
    }
}

impl Default for MountConfig {
    fn default() -> Self {
        Self { selector: MOUNT_SELECTOR.to_owned() }
    }
}
