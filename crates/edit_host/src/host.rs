//! Shared host-bundle and capability models for browser and native composition.

use std::rc::Rc;

use crate::{ExternalUrlService, NativeEditorService, NotificationService, TicketService};

/// Whether the active browsing environment can hand documents to a native desktop editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformCapability {
    /// Regular browser; documents are only reachable through navigation.
    #[default]
    StandardBrowser,
    /// Legacy browser exposing the native document-editing automation object.
    LegacyEditorCapable,
}

impl PlatformCapability {
    /// Classifies a raw user-agent string.
    ///
    /// The legacy editor-capable family is recognized by a case-insensitive `msie` substring.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.to_lowercase().contains("msie") {
            Self::LegacyEditorCapable
        } else {
            Self::StandardBrowser
        }
    }

    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StandardBrowser => "standard-browser",
            Self::LegacyEditorCapable => "legacy-editor-capable",
        }
    }
}

/// Protocol and host of the current browsing context, as exposed by `window.location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsingOrigin {
    /// Scheme including the trailing colon, for example `https:`.
    pub protocol: String,
    /// Host name with optional port, for example `repo.example.com:8443`.
    pub host: String,
}

impl BrowsingOrigin {
    /// Creates an origin from `location.protocol` and `location.host` values.
    ///
    /// A protocol given without its trailing colon is normalized to carry one.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        let mut protocol = protocol.into();
        if !protocol.ends_with(':') {
            protocol.push(':');
        }
        Self {
            protocol,
            host: host.into(),
        }
    }

    /// Renders `<protocol>//<host>`.
    pub fn as_prefix(&self) -> String {
        format!("{}//{}", self.protocol, self.host)
    }
}

/// Runtime-selected host service bundle injected into the launcher.
///
/// All environment-specific selection (browser detection included) happens before this bundle
/// reaches the launcher, which keeps the launch decision pure.
#[derive(Clone)]
pub struct HostServices {
    /// Ticket issuance service.
    pub tickets: Rc<dyn TicketService>,
    /// New-tab navigation service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Native editor probe.
    pub native_editor: Rc<dyn NativeEditorService>,
    /// User-visible notification service.
    pub notifications: Rc<dyn NotificationService>,
    /// Origin of the current browsing context.
    pub origin: BrowsingOrigin,
    /// Capability of the current browsing environment.
    pub platform: PlatformCapability,
}
