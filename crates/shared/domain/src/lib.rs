//! # Domain Models
//!
//! This crate contains the pricing domain types with minimal dependencies (`serde`, `typed-builder`).
//! Keep it lean: no I/O, no rendering, just data and the literals the cards are built from.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod plan;

pub use crate::catalog::default_plans;
pub use crate::config::{MountConfig, PricingConfig};
pub use crate::plan::PlanDescription;
