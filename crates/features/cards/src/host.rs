use crate::node::Node;

/// A place cards can be mounted into: the browser DOM, a Dioxus tree, or an in-memory document.
///
/// Hosts only locate a mount point and append finished trees to it. Trees are never
/// updated or removed afterwards.
pub trait Host {
    /// Handle to a located mount point.
    type Mount;
    type Error;

    /// Finds the first element matching `selector`, or `None` when the page has no mount point.
    fn find_mount(&self, selector: &str) -> Option<Self::Mount>;

    /// Appends `node` as the last child of `mount`.
    ///
    /// # Errors
    /// Returns the host-specific error when the node cannot be materialized or attached.
    fn append(&mut self, mount: &Self::Mount, node: &Node) -> Result<(), Self::Error>;
}
