//! Explicit action registry that hosts dispatch document-library actions through.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use futures::future::LocalBoxFuture;

use crate::{ActionError, ActionRecord, EditOnlineLauncher, LaunchOutcome};

/// Future returned by an [`ActionHandler`].
pub type ActionHandlerFuture = LocalBoxFuture<'static, Result<LaunchOutcome, ActionError>>;

/// Async action handler.
pub type ActionHandler = Rc<dyn Fn(ActionRecord) -> ActionHandlerFuture>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ActionRegistrationToken(u64);

#[derive(Clone)]
struct RegisteredAction {
    token: ActionRegistrationToken,
    handler: ActionHandler,
}

#[derive(Default)]
struct RegistryState {
    next_token: u64,
    by_name: BTreeMap<String, RegisteredAction>,
}

/// Shared action registry.
///
/// Registering a name that is already taken replaces the previous handler.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl ActionRegistry {
    /// Registers `handler` under `name` and returns a drop-based registration handle.
    pub fn register(
        &self,
        name: impl Into<String>,
        handler: ActionHandler,
    ) -> ActionRegistrationHandle {
        let name = name.into();
        let mut state = self.state.borrow_mut();
        state.next_token = state.next_token.saturating_add(1);
        let token = ActionRegistrationToken(state.next_token);
        state
            .by_name
            .insert(name.clone(), RegisteredAction { token, handler });
        ActionRegistrationHandle {
            registry: self.clone(),
            name,
            token,
            active: Cell::new(true),
        }
    }

    fn unregister(&self, name: &str, token: ActionRegistrationToken) {
        let mut state = self.state.borrow_mut();
        if state.by_name.get(name).map(|registered| registered.token) == Some(token) {
            state.by_name.remove(name);
        }
    }

    /// Returns the registered action names in sorted order.
    pub fn action_names(&self) -> Vec<String> {
        self.state.borrow().by_name.keys().cloned().collect()
    }

    /// Returns whether a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.state.borrow().by_name.contains_key(name)
    }

    /// Starts the handler registered under `name` with `record`.
    ///
    /// The returned future is independent of every other dispatch; the registry is not borrowed
    /// while it runs, so handlers may register or dispatch further actions.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownAction`] when nothing is registered under `name`.
    pub fn dispatch(
        &self,
        name: &str,
        record: ActionRecord,
    ) -> Result<ActionHandlerFuture, ActionError> {
        let handler = self
            .state
            .borrow()
            .by_name
            .get(name)
            .map(|registered| registered.handler.clone())
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;
        Ok(handler(record))
    }
}

/// Drop-based registration handle.
pub struct ActionRegistrationHandle {
    registry: ActionRegistry,
    name: String,
    token: ActionRegistrationToken,
    active: Cell<bool>,
}

impl ActionRegistrationHandle {
    /// Registered action name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unregisters the action if this registration is still the active one.
    pub fn unregister(&self) {
        if self.active.replace(false) {
            self.registry.unregister(&self.name, self.token);
        }
    }

    /// Keeps the action registered for the lifetime of the registry.
    pub fn detach(self) {
        self.active.set(false);
    }
}

impl Drop for ActionRegistrationHandle {
    fn drop(&mut self) {
        self.unregister();
    }
}

/// Registers `launcher` under `name`.
///
/// Every dispatch runs [`EditOnlineLauncher::launch_and_report`], so failures reach the user
/// before the future resolves.
pub fn register_edit_online(
    registry: &ActionRegistry,
    launcher: Rc<EditOnlineLauncher>,
    name: &str,
) -> ActionRegistrationHandle {
    let handler: ActionHandler = Rc::new(move |record: ActionRecord| -> ActionHandlerFuture {
        let launcher = Rc::clone(&launcher);
        Box::pin(async move {
            launcher
                .launch_and_report(&record)
                .await
                .map_err(ActionError::from)
        })
    });
    registry.register(name, handler)
}
