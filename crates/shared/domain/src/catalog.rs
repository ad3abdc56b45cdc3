use crate::plan::PlanDescription;

/// The three plans shown when no catalog is configured: Basic, Pro (featured), Business.
#[must_use]
pub fn default_plans() -> Vec<PlanDescription> {
    vec![
        PlanDescription::builder()
            .title("Basic")
            .price("$9.99")
            .description("Get started with essential tools for solo projects.")
            .features(&["1 GB secure storage", "Basic email support", "Access to core workflows"])
            .cta_label("Start basic trial")
            .cta_hint("Perfect for quick experiments and personal use.")
            .build(),
        PlanDescription::builder()
            .title("Pro")
            .price("$19.99")
            .description("For growing teams that need more power.")
            .features(&[
                "10 GB secure storage",
                "Priority support",
                "Advanced automation rules",
                "Shared team workspaces",
            ])
            .featured(true)
            .cta_label("Choose Pro")
            .cta_hint("Most teams start here and scale over time.")
            .build(),
        PlanDescription::builder()
            .title("Business")
            .price("$39.99")
            .description("Full control, reporting, and security for companies.")
            .features(&[
                "Unlimited projects",
                "Audit logs & analytics",
                "SSO & advanced permissions",
                "Dedicated success manager",
            ])
            .cta_label("Talk to sales")
            .cta_hint("We\u{2019}ll help you design the right rollout for your org.")
            .build(),
    ]
}
