use pricing_domain::PlanDescription;
use std::fmt;

/// The user-facing notice raised when a card's activation control is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notification(String);

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// `"You chose the <title> plan at <price> per month."`
    #[must_use]
    pub fn plan_selected(plan: &PlanDescription) -> Self {
        Self(plan.selection_message())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presents a [`Notification`] to the user, synchronously.
///
/// Hosts inject their own implementation (`window.alert` in the browser, an evaluated
/// `alert` in the desktop webview); any `Fn(&Notification)` closure works as well.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: Fn(&Notification),
{
    fn notify(&self, notification: &Notification) {
        self(notification);
    }
}
