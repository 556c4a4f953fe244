//! Content references and the host-supplied action record.

use serde::{Deserialize, Serialize};

use crate::{ActionError, EditOnlineError};

/// Returns the item id of a node reference: segment index 3 of its `/`-separated parts.
///
/// `workspace://SpacesStore/<uuid>` splits into `workspace:`, ``, `SpacesStore`, `<uuid>`.
pub fn item_uuid(node_ref: &str) -> Option<&str> {
    node_ref.split('/').nth(3).filter(|segment| !segment.is_empty())
}

/// Returns the extension of a file name: the text between its first and second `.`.
///
/// `report.final.docx` yields `final`; only the first two dot-delimited parts are considered.
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name.split('.').nth(1).filter(|segment| !segment.is_empty())
}

/// A repository item addressed for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReference {
    file_name: String,
    uuid: String,
    extension: String,
}

impl ContentReference {
    /// Parses a node reference and display file name.
    ///
    /// # Errors
    ///
    /// Returns [`EditOnlineError::MalformedNodeRef`] when the node reference has no item id
    /// segment and [`EditOnlineError::MissingExtension`] when the file name has no extension.
    pub fn parse(
        node_ref: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Self, EditOnlineError> {
        let node_ref = node_ref.into();
        let file_name = file_name.into();
        let uuid = item_uuid(&node_ref)
            .ok_or_else(|| EditOnlineError::MalformedNodeRef {
                node_ref: node_ref.clone(),
            })?
            .to_string();
        let extension = file_extension(&file_name)
            .ok_or_else(|| EditOnlineError::MissingExtension {
                file_name: file_name.clone(),
            })?
            .to_string();
        Ok(Self {
            file_name,
            uuid,
            extension,
        })
    }

    /// Display file name as supplied by the host.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Item id extracted from the node reference.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Extension extracted from the file name.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Record handed over by the document library when the user triggers the action.
///
/// Only `nodeRef` and `fileName` are read; any other fields of the host record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Node reference of the selected item.
    pub node_ref: String,
    /// Display file name of the selected item.
    pub file_name: String,
}

impl ActionRecord {
    /// Creates a record from its two fields.
    pub fn new(node_ref: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            node_ref: node_ref.into(),
            file_name: file_name.into(),
        }
    }

    /// Decodes a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MalformedRecord`] when `nodeRef` or `fileName` is missing.
    pub fn from_json(raw: &str) -> Result<Self, ActionError> {
        serde_json::from_str(raw).map_err(|e| ActionError::MalformedRecord(e.to_string()))
    }

    /// Parses the record into a [`ContentReference`].
    ///
    /// # Errors
    ///
    /// See [`ContentReference::parse`].
    pub fn content_reference(&self) -> Result<ContentReference, EditOnlineError> {
        ContentReference::parse(self.node_ref.as_str(), self.file_name.as_str())
    }
}
