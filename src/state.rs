use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, notify::Notifier, storage::SubmissionStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SubmissionStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn SubmissionStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
