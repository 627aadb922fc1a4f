//! Navigation sink port.

/// Client-side route transition sink.
///
/// Invoked only after a successful task submission; failures never navigate
/// away from the creation view.
pub trait Navigator: Send + Sync {
    /// Performs a client-side transition to the given route.
    fn navigate(&self, route: &str);
}
