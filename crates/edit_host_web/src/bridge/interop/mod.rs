//! Target routing for the browser bridge.

use edit_host::TicketResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_ticket_response(endpoint: &str) -> Result<TicketResponse, String> {
    imp::fetch_ticket_response(endpoint).await
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    imp::open_in_new_tab(url)
}

pub fn try_native_edit(prog_id: &str, url: &str) -> bool {
    imp::try_native_edit(prog_id, url)
}

pub fn notify(title: &str, body: &str) -> Result<(), String> {
    imp::notify(title, body)
}

pub fn user_agent() -> Option<String> {
    imp::user_agent()
}

pub fn location_protocol_and_host() -> Option<(String, String)> {
    imp::location_protocol_and_host()
}
