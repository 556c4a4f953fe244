//! Launch decision between the native editor and new-tab navigation.

use edit_host::PlatformCapability;

/// Extensions whose documents are offered to the native editor.
pub const DEFAULT_EDITOR_EXTENSIONS: [&str; 8] =
    ["doc", "docx", "xls", "xlsx", "ppt", "pptx", "dot", "dotx"];

/// Which launch path handled a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The native editor probe took over; no navigation happened.
    NativeEditor,
    /// The URL was opened in a new browser tab.
    NewTab,
}

/// Pure decision policy for the native editor path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPolicy {
    editor_extensions: Vec<String>,
}

impl Default for LaunchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_EXTENSIONS)
    }
}

impl LaunchPolicy {
    /// Creates a policy from candidate extensions; blank candidates are dropped.
    pub fn new<I, S>(editor_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            editor_extensions: editor_extensions
                .into_iter()
                .map(Into::into)
                .filter(|candidate: &String| !candidate.trim().is_empty())
                .collect(),
        }
    }

    /// Candidate extensions in configuration order.
    pub fn editor_extensions(&self) -> &[String] {
        &self.editor_extensions
    }

    /// Returns whether `extension` contains any candidate as a substring.
    ///
    /// Matching is case-sensitive containment, so `docm` matches through `doc`.
    pub fn matches_editor_extension(&self, extension: &str) -> bool {
        self.editor_extensions
            .iter()
            .any(|candidate| extension.contains(candidate.as_str()))
    }

    /// Returns whether a launch should first try the native editor.
    pub fn wants_native_editor(&self, platform: PlatformCapability, extension: &str) -> bool {
        platform == PlatformCapability::LegacyEditorCapable
            && self.matches_editor_extension(extension)
    }
}
