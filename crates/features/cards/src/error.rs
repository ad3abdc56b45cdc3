use std::borrow::Cow;

/// Errors raised by the in-memory document host.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// A mount path no longer resolves to an element.
    #[error("Stale mount point{}: no element at path {path:?}", format_context(context))]
    StaleMount { path: Vec<usize>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
