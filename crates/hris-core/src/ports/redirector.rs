//! Navigation-away port used by logout paths

#[cfg_attr(test, mockall::automock)]
pub trait Redirector: Send + Sync {
    fn redirect(&self, route: &str);
}

/// Redirector for hosts without a view layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRedirector;

impl Redirector for NoopRedirector {
    fn redirect(&self, route: &str) {
        tracing::debug!(route, "Redirect requested without a view layer");
    }
}
