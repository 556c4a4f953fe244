//! Browser (`wasm32`) implementations of [`edit_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for ticket requests, new-tab navigation,
//! the legacy native-editor probe, notifications, and environment detection (user agent and
//! location). All JS interop goes through `bridge`, which carries a native fallback shim so the
//! adapters build and test off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Environment detection and host-service bundle factory.
pub mod adapters;
mod bridge;
pub mod external_url;
pub mod native_editor;
pub mod notifications;
pub mod ticket;

pub use adapters::{
    browser_origin, browser_platform_capability, build_host_services, native_editor_for,
};
pub use external_url::WebExternalUrlService;
pub use native_editor::{WebNativeEditorService, DEFAULT_NATIVE_EDITOR_PROG_ID};
pub use notifications::WebNotificationService;
pub use ticket::WebTicketService;
