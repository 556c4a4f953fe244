//! The edit-online launcher.

use edit_host::HostServices;
use leptos::logging;

use crate::{
    webdav::normalize_prefix, webdav_url, ActionRecord, ContentReference, EditOnlineConfig,
    EditOnlineError, LaunchOutcome, LaunchPolicy, WebDavPath,
};

/// Opens repository documents in their editor through a freshly ticketed WebDAV URL.
///
/// Each launch is independent: it requests its own ticket, builds its own URL, and shares no
/// mutable state with overlapping launches.
#[derive(Clone)]
pub struct EditOnlineLauncher {
    services: HostServices,
    policy: LaunchPolicy,
    ticket_url: String,
    webdav_prefix: String,
    notification_title: String,
}

impl EditOnlineLauncher {
    /// Creates a launcher over injected host services.
    pub fn new(services: HostServices, config: &EditOnlineConfig) -> Self {
        Self {
            services,
            policy: config.launch_policy(),
            ticket_url: config.ticket_url(),
            webdav_prefix: normalize_prefix(&config.webdav_prefix),
            notification_title: config.notification_title.clone(),
        }
    }

    /// Launches one document.
    ///
    /// Nothing observable happens before the ticket arrives. Afterwards exactly one path runs:
    /// the native editor when the policy asks for it and the probe takes over, new-tab
    /// navigation otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`EditOnlineError::TicketRequest`] when no ticket could be obtained and
    /// [`EditOnlineError::Navigation`] when the new tab could not be opened.
    pub async fn launch(
        &self,
        content: &ContentReference,
    ) -> Result<LaunchOutcome, EditOnlineError> {
        let ticket = self
            .services
            .tickets
            .fetch_ticket(&self.ticket_url)
            .await
            .map_err(EditOnlineError::TicketRequest)?;
        let url = webdav_url(&self.services.origin, &self.webdav_prefix, &ticket, content);
        if !matches!(
            WebDavPath::from_url(&url, &self.webdav_prefix),
            WebDavPath::Document { .. }
        ) {
            logging::warn!(
                "edit online: URL for `{}` falls outside the ticketed WebDAV namespace",
                content.file_name()
            );
        }

        if self
            .policy
            .wants_native_editor(self.services.platform, content.extension())
        {
            if self.services.native_editor.try_open_in_native_editor(&url) {
                logging::log!("edit online: `{}` opened in the native editor", content.file_name());
                return Ok(LaunchOutcome::NativeEditor);
            }
            logging::log!(
                "edit online: native editor unavailable for `{}`, opening a new tab",
                content.file_name()
            );
        }

        self.services
            .external_urls
            .open_url(&url)
            .await
            .map_err(|reason| EditOnlineError::Navigation { reason })?;
        Ok(LaunchOutcome::NewTab)
    }

    /// Parses a host record and launches it.
    ///
    /// # Errors
    ///
    /// Input errors from [`ContentReference::parse`] are returned before any ticket request;
    /// otherwise see [`Self::launch`].
    pub async fn launch_record(
        &self,
        record: &ActionRecord,
    ) -> Result<LaunchOutcome, EditOnlineError> {
        let content = record.content_reference()?;
        self.launch(&content).await
    }

    /// Launches a host record and reports any failure to the user.
    ///
    /// Failures are logged and dispatched through the notification service before being
    /// returned to the caller.
    ///
    /// # Errors
    ///
    /// See [`Self::launch_record`].
    pub async fn launch_and_report(
        &self,
        record: &ActionRecord,
    ) -> Result<LaunchOutcome, EditOnlineError> {
        let result = self.launch_record(record).await;
        if let Err(err) = &result {
            logging::warn!("edit online failed for `{}`: {err}", record.file_name);
            let body = err.to_string();
            if let Err(notify_err) = self
                .services
                .notifications
                .notify(&self.notification_title, &body)
                .await
            {
                logging::warn!("edit online notification dispatch failed: {notify_err}");
            }
        }
        result
    }
}
