//! Notification service contracts and in-memory adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for user-visible notifications.
pub trait NotificationService {
    /// Dispatches a notification message.
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>>;
}

/// One notification captured by [`RecordingNotificationService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

/// In-memory notification service that keeps every dispatched message.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationService {
    sent: Rc<RefCell<Vec<RecordedNotification>>>,
}

impl RecordingNotificationService {
    /// Returns the notifications dispatched so far.
    pub fn sent(&self) -> Vec<RecordedNotification> {
        self.sent.borrow().clone()
    }
}

impl NotificationService for RecordingNotificationService {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.sent.borrow_mut().push(RecordedNotification {
                title: title.to_string(),
                body: body.to_string(),
            });
            Ok(())
        })
    }
}
