#![windows_subsystem = "windows"]

use pricing::domain::PricingConfig;
use pricing::kernel::config::{ConfigSource, load_config};
use pricing_desktop::DesktopApp;
use pricing_logger::Logger;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    // `pricing-desktop [config-file]`; without an argument `pricing.*` in the working dir is optional.
    let source = ConfigSource::from(std::env::args_os().nth(1).map(PathBuf::from));
    let config = load_config::<PricingConfig>(&source).unwrap_or_else(|err| {
        warn!(%err, "Falling back to the built-in plans");
        PricingConfig::default()
    });

    info!(plans = config.plans.len(), "Starting pricing desktop");
    DesktopApp::new().launch(config);

    Ok(())
}
