//! Browser wiring: installs the launcher into a registry and fires actions on the event loop.

use std::rc::Rc;

use leptos::logging;

use crate::{
    register_edit_online, ActionError, ActionRecord, ActionRegistrationHandle, ActionRegistry,
    EditOnlineConfig, EditOnlineLauncher,
};

thread_local! {
    static BROWSER_REGISTRY: ActionRegistry = ActionRegistry::default();
}

/// Returns the page-wide registry the browser entry points dispatch through.
pub fn browser_registry() -> ActionRegistry {
    BROWSER_REGISTRY.with(|registry| registry.clone())
}

/// Builds the browser host services and registers the launcher under `config.action_name`.
pub fn install_browser_action(
    registry: &ActionRegistry,
    config: &EditOnlineConfig,
) -> ActionRegistrationHandle {
    let services = edit_host_web::build_host_services(&config.native_editor_prog_id);
    logging::log!(
        "edit online: registering `{}` ({})",
        config.action_name,
        services.platform.as_str()
    );
    let launcher = Rc::new(EditOnlineLauncher::new(services, config));
    register_edit_online(registry, launcher, &config.action_name)
}

/// Dispatches `name` and lets it run to completion in the background.
///
/// Launch failures are reported to the user by the handler itself, so the caller only learns
/// about dispatch errors.
///
/// On `wasm32` the launch is spawned on the browser event loop and `fire` returns immediately.
/// Native builds have no event loop: the launch runs to completion on the calling thread, so a
/// ticket request that never resolves blocks the caller.
///
/// # Errors
///
/// Returns [`ActionError::UnknownAction`] when nothing is registered under `name`.
pub fn fire(
    registry: &ActionRegistry,
    name: &str,
    record: ActionRecord,
) -> Result<(), ActionError> {
    let pending = registry.dispatch(name, record)?;
    spawn(async move {
        let _ = pending.await;
    });
    Ok(())
}

/// Decodes a JSON record and fires `name` with it.
///
/// # Errors
///
/// Returns [`ActionError::MalformedRecord`] for undecodable records; see also [`fire`].
pub fn fire_json(
    registry: &ActionRegistry,
    name: &str,
    raw_record: &str,
) -> Result<(), ActionError> {
    fire(registry, name, ActionRecord::from_json(raw_record)?)
}

fn spawn(task: impl std::future::Future<Output = ()> + 'static) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(task);

    #[cfg(not(target_arch = "wasm32"))]
    futures::executor::block_on(task);
}

#[cfg(target_arch = "wasm32")]
mod js {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use super::*;

    thread_local! {
        static INSTALLED: RefCell<Option<ActionRegistrationHandle>> = const { RefCell::new(None) };
    }

    /// Installs the edit-online action into the page-wide registry.
    ///
    /// `config_json` may be omitted or carry only the fields that differ from the defaults.
    /// Installing again replaces the previous registration.
    #[wasm_bindgen(js_name = installEditOnline)]
    pub fn install_edit_online(config_json: Option<String>) -> Result<(), JsValue> {
        let config = match config_json {
            Some(raw) => EditOnlineConfig::from_json(&raw).map_err(|e| JsValue::from_str(&e))?,
            None => EditOnlineConfig::default(),
        };
        let handle = install_browser_action(&browser_registry(), &config);
        INSTALLED.with(|installed| drop(installed.borrow_mut().replace(handle)));
        Ok(())
    }

    /// Fires a registered action with the document-library record (`nodeRef`, `fileName`).
    #[wasm_bindgen(js_name = fireEditOnlineAction)]
    pub fn fire_edit_online_action(action_name: &str, record: JsValue) -> Result<(), JsValue> {
        let record: ActionRecord = serde_wasm_bindgen::from_value(record).map_err(|e| {
            JsValue::from_str(&ActionError::MalformedRecord(e.to_string()).to_string())
        })?;
        fire(&browser_registry(), action_name, record)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
