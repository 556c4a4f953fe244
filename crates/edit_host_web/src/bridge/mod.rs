//! Browser capability bridge used by the `edit_host_web` service adapters.
//!
//! Public functions here are target-agnostic; `interop` routes them to the `wasm32`
//! implementation or to the native fallback shim.

mod interop;

use edit_host::TicketResponse;

pub async fn fetch_ticket_response(endpoint: &str) -> Result<TicketResponse, String> {
    interop::fetch_ticket_response(endpoint).await
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    interop::open_in_new_tab(url)
}

pub fn try_native_edit(prog_id: &str, url: &str) -> bool {
    interop::try_native_edit(prog_id, url)
}

pub fn notify(title: &str, body: &str) -> Result<(), String> {
    interop::notify(title, body)
}

/// Browser surface a notification is shown on.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationChannel {
    WebNotification,
    Alert,
}

/// Picks the notification surface.
///
/// `permission_granted` is only consulted when the Notifications API exists; reading the
/// permission on browsers without it throws.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn notification_channel(
    api_present: bool,
    permission_granted: impl FnOnce() -> bool,
) -> NotificationChannel {
    if api_present && permission_granted() {
        NotificationChannel::WebNotification
    } else {
        NotificationChannel::Alert
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn render_notification(title: &str, body: &str) -> String {
    if body.trim().is_empty() {
        title.to_string()
    } else {
        format!("{title}: {body}")
    }
}

pub fn user_agent() -> Option<String> {
    interop::user_agent()
}

pub fn location_protocol_and_host() -> Option<(String, String)> {
    interop::location_protocol_and_host()
}
