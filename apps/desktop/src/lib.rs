use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use pricing::cards::view::PricingGrid;
use pricing::cards::{Notification, Notifier};
use pricing::domain::PricingConfig;

const STYLES: &str = include_str!("../assets/pricing.css");

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "Pricing".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the window and renders `config.plans` once.
    pub fn launch(self, config: PricingConfig) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLES}</style>"#
        ));

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(config.clone()))
            .launch(App);
    }
}

/// Shows notifications with a webview `alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::info!(%notification, "Plan selected");
        match alert_script(notification) {
            Ok(script) => {
                let alert = document::eval(&script);
                spawn(async move {
                    if let Err(err) = alert.await {
                        tracing::error!(%err, "Failed to show notification");
                    }
                });
            },
            Err(err) => tracing::error!(%err, "Failed to encode notification"),
        }
    }
}

/// `alert("<message>");` with the message encoded as a JS string literal.
fn alert_script(notification: &Notification) -> Result<String, serde_json::Error> {
    serde_json::to_string(notification.message()).map(|message| format!("alert({message});"))
}

#[component]
fn App() -> Element {
    let config = use_context::<PricingConfig>();

    rsx! {
        main {
            PricingGrid {
                plans: config.plans,
                on_notify: move |notification: Notification| AlertNotifier.notify(&notification),
            }
        }
    }
}
