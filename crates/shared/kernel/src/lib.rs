//! Kernel utilities shared across apps.
//! Keep this crate lightweight; it owns configuration loading and re-exports the domain.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! use pricing_kernel::config::{ConfigSource, load_config};
//! use pricing_kernel::domain::PricingConfig;
//!
//! let cfg: PricingConfig = load_config(&ConfigSource::WorkingDir).unwrap_or_default();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use pricing_domain as domain;
