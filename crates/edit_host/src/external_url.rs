//! New-tab navigation host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the default browser navigation path.
pub trait ExternalUrlService {
    /// Opens `url` in a new browser tab or window.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

/// In-memory navigation service that records every opened URL.
///
/// Clones share the same log, so a test can keep one handle while the launcher owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
    failure: Option<String>,
}

impl RecordingExternalUrlService {
    /// Creates a recorder whose navigations fail with `message` (for example a blocked popup).
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            opened: Rc::default(),
            failure: Some(message.into()),
        }
    }

    /// Returns every URL passed to [`ExternalUrlService::open_url`], in call order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            match &self.failure {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            }
        })
    }
}
