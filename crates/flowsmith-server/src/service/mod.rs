//! Application state and dependency injection.

mod config;

use flowsmith_runtime::archive::ArchiveStore;
use flowsmith_runtime::codegen::BackendGenerator;
use flowsmith_runtime::session::SessionStore;
use flowsmith_runtime::simulator::ExecutionSimulator;

pub use crate::service::config::ServiceConfig;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pub generator: BackendGenerator,
    pub simulator: ExecutionSimulator,
    pub archives: ArchiveStore,
    pub sessions: SessionStore,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            generator: BackendGenerator::new(),
            simulator: ExecutionSimulator::with_delay(config.response_delay()),
            archives: ArchiveStore::new(config.max_stored_archives),
            sessions: SessionStore::default(),
        }
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(generator: BackendGenerator);
impl_di!(simulator: ExecutionSimulator);
impl_di!(archives: ArchiveStore);
impl_di!(sessions: SessionStore);
