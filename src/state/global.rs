//! Global Application State
//!
//! Reactive state management using Leptos signals. Replaces the classic
//! pair of page-level mutables (user data, report data) with signals
//! provided through context.

use leptos::*;

use crate::api::types::Profile;
use crate::report::Report;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Profile of the signed-in user, fetched on dashboard load
    pub profile: RwSignal<Option<Profile>>,
    /// The yearly report payload; lives only for the lifetime of the view
    pub report: RwSignal<Option<Report>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        profile: create_rw_signal(None),
        report: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
