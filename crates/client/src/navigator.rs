//! Where the page goes when a high rating redirects.

/// Performs the browser-level navigation to an external URL.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, url: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn navigate(&self, url: &str) {
        self(url)
    }
}
