use pricing_cards::{
    Attr, MemoryDocument, Notification, PlanDescription, PricingRenderer, Rendered, render_pricing,
};
use pricing_domain::{MountConfig, PricingConfig, default_plans};
use std::cell::RefCell;

fn card_labels(doc: &MemoryDocument) -> Vec<String> {
    doc.query_class("pricing-card")
        .into_iter()
        .filter_map(|card| card.attr_value(Attr::AriaLabel).map(str::to_owned))
        .collect()
}

#[test]
fn default_plans_render_in_order() {
    let mut doc = MemoryDocument::with_mount("pricing-grid");

    let rendered = PricingRenderer::default().render(&mut doc).expect("render");

    assert_eq!(rendered, Rendered::Mounted(3));
    assert_eq!(doc.mutations(), 3);
    assert_eq!(card_labels(&doc), ["Basic plan", "Pro plan", "Business plan"]);

    let grid = doc.query_selector(".pricing-grid").expect("grid");
    assert_eq!(grid.child_nodes().len(), 3);
}

#[test]
fn only_pro_is_featured() {
    let mut doc = MemoryDocument::with_mount("pricing-grid");
    PricingRenderer::default().render(&mut doc).expect("render");

    let featured = doc.query_class("pricing-card--featured");
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].attr_value(Attr::AriaLabel), Some("Pro plan"));

    let badges = doc.query_class("badge");
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].text_content(), "Most popular");
}

#[test]
fn missing_mount_point_is_a_silent_no_op() {
    let mut doc = MemoryDocument::new();
    let before = doc.clone();

    let rendered = PricingRenderer::default().render(&mut doc).expect("no error without mount");

    assert_eq!(rendered, Rendered::Skipped);
    assert_eq!(doc.mutations(), 0);
    assert_eq!(doc, before);
}

#[test]
fn rendering_twice_duplicates_cards() {
    let mut doc = MemoryDocument::with_mount("pricing-grid");
    let renderer = PricingRenderer::default();
    renderer.render(&mut doc).expect("first render");
    renderer.render(&mut doc).expect("second render");

    assert_eq!(doc.query_class("pricing-card").len(), 6);
}

#[test]
fn injected_plans_and_selector_are_used() {
    let mut doc = MemoryDocument::with_mount("plans");
    let plans = vec![PlanDescription::builder().title("Solo").price("$5").build()];

    assert_eq!(render_pricing(&mut doc, ".pricing-grid", &plans).expect("render"), Rendered::Skipped);
    assert_eq!(render_pricing(&mut doc, ".plans", &plans).expect("render"), Rendered::Mounted(1));
    assert_eq!(card_labels(&doc), ["Solo plan"]);
}

#[test]
fn empty_plan_list_mounts_nothing() {
    let mut doc = MemoryDocument::with_mount("pricing-grid");
    let rendered = PricingRenderer::default().with_plans(Vec::new()).render(&mut doc).expect("render");

    assert_eq!(rendered, Rendered::Mounted(0));
    assert_eq!(doc.mutations(), 0);
}

#[test]
fn renderer_from_config() {
    let config = PricingConfig {
        mount: MountConfig { selector: ".plans".to_owned() },
        plans: default_plans().into_iter().take(1).collect(),
    };
    let renderer = PricingRenderer::from(config);
    assert_eq!(renderer.selector(), ".plans");
    assert_eq!(renderer.plans().len(), 1);

    let mut doc = MemoryDocument::with_mount("plans");
    assert_eq!(renderer.render(&mut doc).expect("render"), Rendered::Mounted(1));
}

#[test]
fn activation_notifies_exactly_once() {
    let mut doc = MemoryDocument::with_mount("pricing-grid");
    PricingRenderer::default().render(&mut doc).expect("render");

    let seen = RefCell::new(Vec::new());
    let notifier = |n: &Notification| seen.borrow_mut().push(n.message().to_owned());

    assert!(doc.activate("Choose Pro for the Pro plan", &notifier));
    assert!(doc.activate("Talk to sales for the Business plan", &notifier));
    assert!(!doc.activate("Choose Pro", &notifier));
    assert!(!doc.activate("Pro plan", &notifier), "the card root is not an activation control");

    assert_eq!(
        seen.into_inner(),
        [
            "You chose the Pro plan at $19.99 per month.",
            "You chose the Business plan at $39.99 per month.",
        ]
    );
}

#[test]
fn activation_without_cards_does_nothing() {
    let doc = MemoryDocument::with_mount("pricing-grid");
    let calls = RefCell::new(0_u32);
    let notifier = |_: &Notification| *calls.borrow_mut() += 1;

    assert!(!doc.activate("Choose Pro for the Pro plan", &notifier));
    assert_eq!(calls.into_inner(), 0);
}
