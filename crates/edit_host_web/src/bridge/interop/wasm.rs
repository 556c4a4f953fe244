use super::*;
use crate::bridge::{notification_channel, render_notification, NotificationChannel};
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{NotificationPermission, Request, RequestCredentials, RequestInit, Response};

#[wasm_bindgen(inline_js = r#"
export function jsTryNativeEdit(progId, url) {
  if (typeof ActiveXObject === 'undefined') {
    return false;
  }
  try {
    const editor = new ActiveXObject(progId);
    if (!editor) {
      return false;
    }
    editor.EditDocument(url);
    return true;
  } catch (_err) {
    return false;
  }
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsTryNativeEdit)]
    fn js_try_native_edit(prog_id: &str, url: &str) -> bool;
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "browser window is unavailable".to_string())
}

async fn await_promise(promise: js_sys::Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

pub async fn fetch_ticket_response(endpoint: &str) -> Result<TicketResponse, String> {
    let window = window()?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);
    let request = Request::new_with_str_and_init(endpoint, &init).map_err(js_error_to_string)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error_to_string)?;

    let response: Response = await_promise(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())?;
    if !response.ok() {
        return Err(format!(
            "ticket endpoint answered HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let body = await_promise(response.json().map_err(js_error_to_string)?).await?;
    from_value(body).map_err(|e| format!("malformed ticket response: {e}"))
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    match window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error_to_string)?
    {
        Some(_) => Ok(()),
        None => Err("the browser blocked the new window".to_string()),
    }
}

pub fn try_native_edit(prog_id: &str, url: &str) -> bool {
    js_try_native_edit(prog_id, url)
}

fn notification_api_present() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Notification")).unwrap_or(false)
}

pub fn notify(title: &str, body: &str) -> Result<(), String> {
    let rendered = render_notification(title, body);
    let channel = notification_channel(notification_api_present(), || {
        web_sys::Notification::permission() == NotificationPermission::Granted
    });
    match channel {
        NotificationChannel::WebNotification => web_sys::Notification::new(&rendered)
            .map(|_| ())
            .map_err(|err| format!("notification dispatch failed: {}", js_error_to_string(err))),
        NotificationChannel::Alert => window()?
            .alert_with_message(&rendered)
            .map_err(|err| format!("alert dispatch failed: {}", js_error_to_string(err))),
    }
}

pub fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

pub fn location_protocol_and_host() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    Some((location.protocol().ok()?, location.host().ok()?))
}
