use pricing_kernel::config::{ConfigError, ConfigSource, load_config};
use pricing_kernel::domain::PricingConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_plans_from_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("pricing.toml");
    fs::write(
        &path,
        r#"
[mount]
selector = ".plans"

[[plans]]
title = "Solo"
price = "$5"
features = ["One seat", "Email support"]

[[plans]]
title = "Crew"
price = "$25"
featured = true
cta_label = "Pick Crew"
"#,
    )?;

    let cfg: PricingConfig = load_config(&ConfigSource::file(&path))?;

    assert_eq!(cfg.mount.selector, ".plans");
    assert_eq!(cfg.plans.len(), 2);
    assert_eq!(cfg.plans[0].features, ["One seat", "Email support"]);
    assert_eq!(cfg.plans[0].cta_label, "Start trial");
    assert!(cfg.plans[1].featured);
    assert_eq!(cfg.plans[1].cta_label, "Pick Crew");
    Ok(())
}

#[test]
fn empty_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.toml");
    fs::write(&path, "")?;

    let cfg: PricingConfig = load_config(&ConfigSource::file(&path))?;
    assert_eq!(cfg, PricingConfig::default());
    Ok(())
}

#[test]
fn missing_file_is_reported_with_context() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<PricingConfig>(&ConfigSource::file(&path)).expect_err("missing file should fail");
    let ConfigError::Config { context, .. } = &err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
    assert!(err.to_string().starts_with("Config error (Failed to build config): "));
}

#[test]
fn malformed_plan_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[plans]]\nprice = \"$5\"\n")?;

    let err = load_config::<PricingConfig>(&ConfigSource::file(&path)).expect_err("title is required");
    let ConfigError::Config { context, .. } = &err;
    assert_eq!(context.as_deref(), Some("Failed to deserialize config"));
    Ok(())
}

#[test]
fn working_dir_without_file_yields_defaults() -> Result<(), ConfigError> {
    // The crate directory has no pricing.* file.
    let cfg: PricingConfig = load_config(&ConfigSource::WorkingDir)?;
    assert_eq!(cfg.plans, PricingConfig::default().plans);
    Ok(())
}

#[test]
fn source_from_optional_path() {
    assert_eq!(ConfigSource::from(None), ConfigSource::WorkingDir);
    assert_eq!(
        ConfigSource::from(Some("plans.toml".into())),
        ConfigSource::File("plans.toml".into())
    );
}
