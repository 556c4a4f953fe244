//! Native desktop-editor probe contracts.
//!
//! On the legacy editor-capable browser a WebDAV URL can be handed to an automation object that
//! opens the document in its desktop editor. Any failure along that path (object creation throws,
//! the object is falsy, or the open call throws) collapses into `false` so callers fall back to
//! regular navigation without handling exceptions.

use std::{cell::RefCell, rc::Rc};

/// Host capability probe for opening a URL in the native desktop editor.
pub trait NativeEditorService {
    /// Tries to open `url` in the native editor and reports whether it took over.
    fn try_open_in_native_editor(&self, url: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// Probe for hosts without a native editor object; never takes over.
pub struct UnavailableNativeEditorService;

impl NativeEditorService for UnavailableNativeEditorService {
    fn try_open_in_native_editor(&self, _url: &str) -> bool {
        false
    }
}

/// Probe with a fixed answer that records every attempted URL.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNativeEditorService {
    succeeds: bool,
    attempts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedNativeEditorService {
    /// Probe whose editor opens every URL it is handed.
    pub fn succeeding() -> Self {
        Self {
            succeeds: true,
            attempts: Rc::default(),
        }
    }

    /// Probe whose editor object cannot be instantiated.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Returns the URLs handed to the probe, in call order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }
}

impl NativeEditorService for ScriptedNativeEditorService {
    fn try_open_in_native_editor(&self, url: &str) -> bool {
        self.attempts.borrow_mut().push(url.to_string());
        self.succeeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_probe_never_takes_over() {
        let probe: Rc<dyn NativeEditorService> = Rc::new(UnavailableNativeEditorService);
        assert!(!probe.try_open_in_native_editor("https://repo/alfresco/webdav2/T/U.docx"));
    }

    #[test]
    fn scripted_probe_records_attempts_across_clones() {
        let probe = ScriptedNativeEditorService::succeeding();
        let owned: Rc<dyn NativeEditorService> = Rc::new(probe.clone());

        assert!(owned.try_open_in_native_editor("https://repo/a.docx"));
        assert!(!ScriptedNativeEditorService::failing().try_open_in_native_editor("https://repo/b"));
        assert_eq!(probe.attempts(), vec!["https://repo/a.docx"]);
    }
}
