use pricing_domain::{PlanDescription, default_plans};

#[test]
fn default_catalog_order_and_featured_flag() {
    let plans = default_plans();
    let titles: Vec<&str> = plans.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Basic", "Pro", "Business"]);

    let featured: Vec<&str> =
        plans.iter().filter(|p| p.featured).map(|p| p.title.as_str()).collect();
    assert_eq!(featured, ["Pro"]);
}

#[test]
fn default_catalog_prices_are_display_text() {
    let prices: Vec<String> = default_plans().into_iter().map(|p| p.price).collect();
    assert_eq!(prices, ["$9.99", "$19.99", "$39.99"]);
}

#[test]
fn synthesized_labels() {
    let plan = PlanDescription::builder().title("Pro").price("$19.99").cta_label("Choose Pro").build();

    assert_eq!(plan.card_label(), "Pro plan");
    assert_eq!(plan.cta_aria_label(), "Choose Pro for the Pro plan");
    assert_eq!(plan.selection_message(), "You chose the Pro plan at $19.99 per month.");
}

#[test]
fn duplicate_features_are_kept_in_order() {
    let plan = PlanDescription::builder()
        .title("Dup")
        .price("$1")
        .features(&["b", "a", "b"])
        .build();
    assert_eq!(plan.features, ["b", "a", "b"]);
}
