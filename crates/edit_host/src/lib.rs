//! Typed host-domain contracts shared by the edit-online launcher and its browser adapters.
//!
//! This crate is the API-first boundary for everything the launcher needs from its environment:
//! ticket issuance, new-tab navigation, the native editor probe, and user notifications. Concrete
//! browser adapters live in `edit_host_web`; the in-memory adapters here back native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod native_editor;
pub mod notifications;
pub mod ticket;

pub use external_url::{ExternalUrlFuture, ExternalUrlService, RecordingExternalUrlService};
pub use host::{BrowsingOrigin, HostServices, PlatformCapability};
pub use native_editor::{
    NativeEditorService, ScriptedNativeEditorService, UnavailableNativeEditorService,
};
pub use notifications::{
    NotificationFuture, NotificationService, RecordedNotification, RecordingNotificationService,
};
pub use ticket::{
    EditTicket, MemoryTicketService, PendingTicketService, TicketFuture, TicketResponse,
    TicketService,
};
