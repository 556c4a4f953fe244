use std::rc::Rc;

use edit_host::{
    BrowsingOrigin, HostServices, NativeEditorService, PlatformCapability,
    UnavailableNativeEditorService,
};

use crate::{
    bridge, WebExternalUrlService, WebNativeEditorService, WebNotificationService,
    WebTicketService,
};

const FALLBACK_PROTOCOL: &str = "http:";
const FALLBACK_HOST: &str = "localhost";

/// Detects the platform capability from the browser's user agent.
///
/// Returns [`PlatformCapability::StandardBrowser`] when no user agent is readable.
pub fn browser_platform_capability() -> PlatformCapability {
    bridge::user_agent()
        .map(|agent| PlatformCapability::from_user_agent(&agent))
        .unwrap_or_default()
}

/// Reads `location.protocol` and `location.host` of the current browsing context.
///
/// Falls back to `http://localhost` when no browsing context is available.
pub fn browser_origin() -> BrowsingOrigin {
    match bridge::location_protocol_and_host() {
        Some((protocol, host)) => BrowsingOrigin::new(protocol, host),
        None => BrowsingOrigin::new(FALLBACK_PROTOCOL, FALLBACK_HOST),
    }
}

/// Returns the native editor probe for `platform`.
///
/// Only legacy editor-capable browsers expose the automation object; every other browser gets a
/// probe that never takes over.
pub fn native_editor_for(
    platform: PlatformCapability,
    native_editor_prog_id: &str,
) -> Rc<dyn NativeEditorService> {
    match platform {
        PlatformCapability::LegacyEditorCapable => {
            Rc::new(WebNativeEditorService::new(native_editor_prog_id))
        }
        PlatformCapability::StandardBrowser => Rc::new(UnavailableNativeEditorService),
    }
}

/// Builds the browser host-service bundle.
///
/// `native_editor_prog_id` names the automation object probed on legacy editor-capable browsers.
pub fn build_host_services(native_editor_prog_id: &str) -> HostServices {
    let platform = browser_platform_capability();
    HostServices {
        tickets: Rc::new(WebTicketService),
        external_urls: Rc::new(WebExternalUrlService),
        native_editor: native_editor_for(platform, native_editor_prog_id),
        notifications: Rc::new(WebNotificationService),
        origin: browser_origin(),
        platform,
    }
}
