use crate::node::{Attr, Element, Node, Tag};
use crate::notify::Notification;
use pricing_domain::PlanDescription;
use pricing_domain::constants::{
    ARROW, BADGE, BADGE_TEXT, BUTTON, BUTTON_SECONDARY, CARD, CARD_DESCRIPTION, CARD_FEATURED,
    CARD_FOOTER, CARD_HEADER, CARD_TITLE, CHECKMARK, FEATURE_ICON, FEATURES, FEATURES_HEADING,
    FEATURES_HEADING_TEXT, HELPER_TEXT, ICON, PRICE_AMOUNT, PRICE_PERIOD, PRICE_PERIOD_TEXT,
    PRICE_ROW,
};

/// Builds the card tree for one plan.
///
/// Total: optional parts are left out entirely when their source text is empty, and an
/// empty feature list yields an empty `ul.features`. The tree always holds exactly one
/// button, whose activation payload is the plan's selection notice.
#[must_use]
pub fn build_card(plan: &PlanDescription) -> Node {
    let class = if plan.featured { format!("{CARD} {CARD_FEATURED}") } else { CARD.to_owned() };

    Element::new(Tag::Article)
        .class(class)
        .attr(Attr::TabIndex, "-1")
        .attr(Attr::AriaLabel, plan.card_label())
        .child(header(plan))
        .child(price_row(plan))
        .child(Element::new(Tag::P).class(FEATURES_HEADING).text(FEATURES_HEADING_TEXT))
        .child(features(&plan.features))
        .child(footer(plan))
        .into()
}

fn header(plan: &PlanDescription) -> Element {
    let title_block = Element::new(Tag::Div)
        .child(Element::new(Tag::H2).class(CARD_TITLE).text(&plan.title))
        .child_if(!plan.description.is_empty(), || {
            Element::new(Tag::P).class(CARD_DESCRIPTION).text(&plan.description).into()
        });

    Element::new(Tag::Header)
        .class(CARD_HEADER)
        .child(title_block)
        .child_if(plan.featured, || Element::new(Tag::Span).class(BADGE).text(BADGE_TEXT).into())
}

fn price_row(plan: &PlanDescription) -> Element {
    Element::new(Tag::Div)
        .class(PRICE_ROW)
        .child(Element::new(Tag::Span).class(PRICE_AMOUNT).text(&plan.price))
        .child(Element::new(Tag::Span).class(PRICE_PERIOD).text(PRICE_PERIOD_TEXT))
}

fn features(items: &[String]) -> Element {
    Element::new(Tag::Ul).class(FEATURES).children(items.iter().map(|item| {
        Node::from(
            Element::new(Tag::Li)
                .child(decorative(FEATURE_ICON, CHECKMARK))
                .child(Element::new(Tag::Span).text(item)),
        )
    }))
}

fn footer(plan: &PlanDescription) -> Element {
    let class =
        if plan.featured { BUTTON.to_owned() } else { format!("{BUTTON} {BUTTON_SECONDARY}") };

    let button = Element::new(Tag::Button)
        .class(class)
        .attr(Attr::Type, "button")
        .attr(Attr::AriaLabel, plan.cta_aria_label())
        .on_activate(Notification::plan_selected(plan))
        .child(Element::new(Tag::Span).text(&plan.cta_label))
        .child(decorative(ICON, ARROW));

    Element::new(Tag::Footer).class(CARD_FOOTER).child(button).child_if(
        !plan.cta_hint.is_empty(),
        || Element::new(Tag::P).class(HELPER_TEXT).text(&plan.cta_hint).into(),
    )
}

/// A glyph hidden from assistive technology.
fn decorative(class: &str, glyph: &str) -> Element {
    Element::new(Tag::Span).class(class).attr(Attr::AriaHidden, "true").text(glyph)
}
