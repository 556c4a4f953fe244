//! Launcher configuration supplied by the hosting page.

use edit_host_web::DEFAULT_NATIVE_EDITOR_PROG_ID;
use serde::{Deserialize, Serialize};

use crate::{policy::DEFAULT_EDITOR_EXTENSIONS, webdav::DEFAULT_WEBDAV_PREFIX, LaunchPolicy};

/// Action identifier the document library dispatches for "Edit Online".
pub const DEFAULT_ACTION_NAME: &str = "onActionEditOnline";
const DEFAULT_PROXY_BASE: &str = "/share/proxy/alfresco/";
const DEFAULT_TICKET_PATH: &str = "online/webdav/auth/get_ticket";
const DEFAULT_NOTIFICATION_TITLE: &str = "Edit Online";

/// Launcher configuration.
///
/// Every field has a default, so hosts only pass what differs from a stock deployment. JSON keys
/// are camelCase (`proxyBase`, `editorExtensions`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditOnlineConfig {
    /// Name the action is registered under.
    pub action_name: String,
    /// URL prefix under which the UI host proxies repository endpoints.
    pub proxy_base: String,
    /// Ticket endpoint path relative to `proxy_base`.
    pub ticket_path: String,
    /// Path of the ticket-authenticated WebDAV namespace.
    pub webdav_prefix: String,
    /// Extensions offered to the native editor on legacy browsers.
    pub editor_extensions: Vec<String>,
    /// Automation object probed on legacy browsers.
    pub native_editor_prog_id: String,
    /// Title of user-visible failure notifications.
    pub notification_title: String,
}

impl Default for EditOnlineConfig {
    fn default() -> Self {
        Self {
            action_name: DEFAULT_ACTION_NAME.to_string(),
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
            ticket_path: DEFAULT_TICKET_PATH.to_string(),
            webdav_prefix: DEFAULT_WEBDAV_PREFIX.to_string(),
            editor_extensions: DEFAULT_EDITOR_EXTENSIONS
                .iter()
                .map(|extension| extension.to_string())
                .collect(),
            native_editor_prog_id: DEFAULT_NATIVE_EDITOR_PROG_ID.to_string(),
            notification_title: DEFAULT_NOTIFICATION_TITLE.to_string(),
        }
    }
}

impl EditOnlineConfig {
    /// Decodes a JSON configuration object, defaulting absent fields.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a JSON object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("invalid edit online config: {e}"))
    }

    /// Ticket endpoint URL: `proxy_base` and `ticket_path` joined by exactly one `/`.
    pub fn ticket_url(&self) -> String {
        format!(
            "{}/{}",
            self.proxy_base.trim_end_matches('/'),
            self.ticket_path.trim_start_matches('/')
        )
    }

    /// Decision policy for the configured extensions.
    pub fn launch_policy(&self) -> LaunchPolicy {
        LaunchPolicy::new(self.editor_extensions.iter().cloned())
    }
}
