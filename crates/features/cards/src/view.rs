//! Dioxus components rendering card trees.
//!
//! Inside a Dioxus app the grid component is the mount point itself, so there is no selector
//! lookup here. Button clicks are routed to the `on_notify` handler.

use crate::card::build_card;
use crate::node::{Attr, Element as CardElement, Node, Tag};
use crate::notify::Notification;
use dioxus::prelude::*;
use pricing_domain::PlanDescription;
use pricing_domain::constants::MOUNT_CLASS;

/// `section.pricing-grid` holding one card per plan, in order.
#[component]
pub fn PricingGrid(plans: Vec<PlanDescription>, on_notify: EventHandler<Notification>) -> Element {
    rsx! {
        section { class: MOUNT_CLASS,
            for (index, plan) in plans.iter().enumerate() {
                PricingCard { key: "{index}", plan: plan.clone(), on_notify }
            }
        }
    }
}

/// A single card.
#[component]
pub fn PricingCard(plan: PlanDescription, on_notify: EventHandler<Notification>) -> Element {
    rsx! {
        NodeView { node: build_card(&plan), on_notify }
    }
}

/// Renders an arbitrary card tree.
#[component]
pub fn NodeView(node: Node, on_notify: EventHandler<Notification>) -> Element {
    match node {
        Node::Text(text) => rsx! { "{text}" },
        Node::Element(element) => element_view(&element, on_notify),
    }
}

fn element_view(element: &CardElement, on_notify: EventHandler<Notification>) -> Element {
    let class = element.class_name().map(str::to_owned);
    let tabindex = element.attr_value(Attr::TabIndex).map(str::to_owned);
    let aria_label = element.attr_value(Attr::AriaLabel).map(str::to_owned);
    let aria_hidden = element.attr_value(Attr::AriaHidden).map(str::to_owned);

    let children = rsx! {
        for (index, child) in element.child_nodes().iter().cloned().enumerate() {
            NodeView { key: "{index}", node: child, on_notify }
        }
    };

    match element.tag() {
        Tag::Main => rsx! { main { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Section => rsx! { section { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Article => rsx! { article { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Header => rsx! { header { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Footer => rsx! { footer { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Div => rsx! { div { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::H2 => rsx! { h2 { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::P => rsx! { p { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Span => rsx! { span { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Ul => rsx! { ul { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Li => rsx! { li { class, tabindex, aria_label, aria_hidden, {children} } },
        Tag::Button => {
            let kind = element.attr_value(Attr::Type).map(str::to_owned);
            let notification = element.activation().cloned();
            rsx! {
                button {
                    class,
                    r#type: kind,
                    tabindex,
                    aria_label,
                    aria_hidden,
                    onclick: move |_| {
                        if let Some(notification) = &notification {
                            on_notify.call(notification.clone());
                        }
                    },
                    {children}
                }
            }
        },
    }
}
