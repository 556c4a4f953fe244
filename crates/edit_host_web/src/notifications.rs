//! Notification adapter for browser contexts.

use edit_host::{NotificationFuture, NotificationService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser notification adapter.
///
/// Uses the Web Notifications API when permission was already granted and falls back to a modal
/// alert otherwise, so failures always reach the user.
pub struct WebNotificationService;

impl NotificationService for WebNotificationService {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::notify(title, body) })
    }
}
