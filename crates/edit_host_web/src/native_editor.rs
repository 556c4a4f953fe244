//! Native editor probe backed by the legacy browser's document-editing automation object.

use edit_host::NativeEditorService;

use crate::bridge;

/// Automation object that opens WebDAV documents in the desktop office suite.
pub const DEFAULT_NATIVE_EDITOR_PROG_ID: &str = "SharePoint.OpenDocuments.1";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser native-editor probe.
pub struct WebNativeEditorService {
    prog_id: String,
}

impl WebNativeEditorService {
    /// Creates a probe that instantiates the automation object named `prog_id`.
    pub fn new(prog_id: impl Into<String>) -> Self {
        Self {
            prog_id: prog_id.into(),
        }
    }

    /// Returns the automation object name.
    pub fn prog_id(&self) -> &str {
        &self.prog_id
    }
}

impl Default for WebNativeEditorService {
    fn default() -> Self {
        Self::new(DEFAULT_NATIVE_EDITOR_PROG_ID)
    }
}

impl NativeEditorService for WebNativeEditorService {
    fn try_open_in_native_editor(&self, url: &str) -> bool {
        bridge::try_native_edit(&self.prog_id, url)
    }
}
