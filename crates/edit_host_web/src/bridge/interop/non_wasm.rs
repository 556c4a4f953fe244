use super::*;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_ticket_response(_endpoint: &str) -> Result<TicketResponse, String> {
    Err(unsupported())
}

pub fn open_in_new_tab(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn try_native_edit(_prog_id: &str, _url: &str) -> bool {
    false
}

pub fn notify(_title: &str, _body: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn user_agent() -> Option<String> {
    None
}

pub fn location_protocol_and_host() -> Option<(String, String)> {
    None
}
