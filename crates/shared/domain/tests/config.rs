use pricing_domain::constants::MOUNT_SELECTOR;
use pricing_domain::{MountConfig, PlanDescription, PricingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let mount = MountConfig::default();
    assert_eq!(mount.selector, ".pricing-grid");

    let cfg = PricingConfig::default();
    assert_eq!(cfg.mount.selector, MOUNT_SELECTOR);
    assert_eq!(cfg.plans.len(), 3);
}

#[test]
fn pricing_config_deserializes() {
    let raw = json!({
        "mount": { "selector": ".plans" },
        "plans": [
            { "title": "Solo", "price": "$5", "features": ["One seat"] },
            {
                "title": "Crew",
                "price": "$25",
                "features": [],
                "description": "Up to ten seats.",
                "featured": true,
                "cta_label": "Pick Crew",
                "cta_hint": "Billed yearly."
            }
        ]
    });

    let cfg: PricingConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.mount.selector, ".plans");
    assert_eq!(cfg.plans.len(), 2);

    let solo = &cfg.plans[0];
    assert_eq!(solo.cta_label, "Start trial");
    assert!(solo.description.is_empty());
    assert!(solo.cta_hint.is_empty());
    assert!(!solo.featured);

    let crew = &cfg.plans[1];
    assert!(crew.featured);
    assert!(crew.features.is_empty());
    assert_eq!(crew.cta_label, "Pick Crew");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: PricingConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, PricingConfig::default());
}

#[test]
fn builder_and_serde_agree_on_defaults() {
    let built = PlanDescription::builder().title("Solo").price("$5").build();
    let parsed: PlanDescription =
        serde_json::from_value(json!({ "title": "Solo", "price": "$5" })).expect("plan deserialize");
    assert_eq!(built, parsed);
}
