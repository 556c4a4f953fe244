//! New-tab navigation adapter for browser contexts.

use edit_host::{ExternalUrlFuture, ExternalUrlService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation adapter that opens URLs with `window.open(url, "_blank")`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::open_in_new_tab(url) })
    }
}
