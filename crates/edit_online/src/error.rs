//! Typed failures for launches and action dispatch.

use thiserror::Error;

/// Why a single edit-online launch did not reach the document.
///
/// Messages are shown to the user verbatim and never include the ticket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditOnlineError {
    /// The node reference lacks the item id segment (index 3 of its `/`-separated parts).
    #[error("node reference `{node_ref}` does not identify a repository item")]
    MalformedNodeRef {
        /// Offending node reference.
        node_ref: String,
    },
    /// The file name has no extension after its first `.`.
    #[error("file name `{file_name}` has no extension")]
    MissingExtension {
        /// Offending file name.
        file_name: String,
    },
    /// The ticket endpoint could not be reached or returned an unusable answer.
    #[error("could not obtain an edit ticket: {0}")]
    TicketRequest(String),
    /// The browser refused to open the document URL.
    #[error("could not open the document: {reason}")]
    Navigation {
        /// Host-reported reason.
        reason: String,
    },
}

/// Failures raised by [`crate::ActionRegistry`] dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No handler is registered under the requested name.
    #[error("no action registered under `{0}`")]
    UnknownAction(String),
    /// The host-supplied record could not be decoded.
    #[error("malformed action record: {0}")]
    MalformedRecord(String),
    /// The handler ran and its launch failed.
    #[error(transparent)]
    Launch(#[from] EditOnlineError),
}
