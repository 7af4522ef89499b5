//! Application bootstrap.

use crate::state::State;

#[cfg(feature = "tracing-subscriber")]
mod tracing_subscriber;

/// Initializes the tracing subscriber with the `[tracing]` table
/// of the shared state.
///
/// Calling it more than once only logs a warning.
#[cfg(feature = "tracing-subscriber")]
#[inline]
pub fn init_tracing(app_name: &str) {
    tracing_subscriber::init(app_name, State::shared());
}

/// Boots the application: initializes tracing and forces the shared state
/// to be loaded, returning it. A config load failure is reported once the
/// subscriber is installed.
pub fn boot(app_name: &str) -> &'static State {
    #[cfg(feature = "tracing-subscriber")]
    init_tracing(app_name);

    let state = State::shared();
    let app_env = state.env().as_str();
    if let Some(err) = state.config_error() {
        tracing::warn!(app_env, app_name, "fail to load the config: {err}");
    }
    tracing::info!(app_env, app_name, "booted the application");
    state
}
