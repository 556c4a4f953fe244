//! Edit Online: opens repository documents in their native desktop editor over WebDAV.
//!
//! One user action flows through the crate as follows: the host hands an [`ActionRecord`] to the
//! [`ActionRegistry`], the registered [`EditOnlineLauncher`] parses it into a
//! [`ContentReference`], requests a fresh ticket, builds the ticketed WebDAV URL, and either hands
//! it to the native editor probe or opens it in a new tab, as decided by [`LaunchPolicy`].
//!
//! Environment access goes through the `edit_host` contracts; `install` wires the browser
//! adapters from `edit_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod config;
pub mod content;
pub mod error;
pub mod install;
pub mod launcher;
pub mod policy;
pub mod webdav;

pub use action::{
    register_edit_online, ActionHandler, ActionHandlerFuture, ActionRegistrationHandle,
    ActionRegistry,
};
pub use config::{EditOnlineConfig, DEFAULT_ACTION_NAME};
pub use content::{file_extension, item_uuid, ActionRecord, ContentReference};
pub use error::{ActionError, EditOnlineError};
pub use install::{browser_registry, fire, fire_json, install_browser_action};
pub use launcher::EditOnlineLauncher;
pub use policy::{LaunchOutcome, LaunchPolicy, DEFAULT_EDITOR_EXTENSIONS};
pub use webdav::{webdav_url, WebDavPath, DEFAULT_WEBDAV_PREFIX};
