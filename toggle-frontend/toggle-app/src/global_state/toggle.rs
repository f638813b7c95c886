use leptos::prelude::*;

use crate::components::slide_toggle::ToggleStore;
use crate::error::{AppError, AppResult};

/// The app-wide toggled flag. Created once by the shell; components only hold
/// this `Copy` handle to it.
#[derive(Clone, Copy, Debug)]
pub struct ToggleState(RwSignal<bool>);

impl ToggleState {
    pub fn new(initial: bool) -> Self {
        Self(RwSignal::new(initial))
    }

    /// Tracked read, for use inside views and effects.
    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl ToggleStore for ToggleState {
    fn is_toggled(&self) -> bool {
        self.0.get_untracked()
    }

    fn set_is_toggled(&self, next: bool) {
        tracing::debug!(toggled = next, "toggle state updated");
        self.0.set(next);
    }
}

/// Provide the ToggleState if not already present and return it.
pub fn provide_toggle_state(initial: bool) -> ToggleState {
    if let Some(existing) = use_context::<ToggleState>() {
        return existing;
    }
    let state = ToggleState::new(initial);
    provide_context(state);
    state
}

pub fn try_use_toggle_state() -> AppResult<ToggleState> {
    use_context::<ToggleState>().ok_or(AppError::MissingContext("ToggleState"))
}

/// Retrieve the ToggleState from context. Panics if the shell never provided it.
pub fn use_toggle_state() -> ToggleState {
    try_use_toggle_state().unwrap_or_else(|error| panic!("{error}"))
}
