//! Application state configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Default values for configuration options.
mod defaults {
    /// Default simulated response delay in milliseconds.
    pub const RESPONSE_DELAY_MS: u64 = 1_500;

    /// Default capacity of the stored archive registry.
    pub const MAX_STORED_ARCHIVES: usize = 32;
}

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Artificial delay applied to simulated executions, in milliseconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "RESPONSE_DELAY_MS", default_value = "1500")
    )]
    pub response_delay_ms: u64,

    /// Maximum number of archives kept in the registry before the oldest
    /// handle is evicted.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "MAX_STORED_ARCHIVES", default_value = "32")
    )]
    pub max_stored_archives: usize,
}

impl ServiceConfig {
    /// Returns the simulated response delay as a [`Duration`].
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: defaults::RESPONSE_DELAY_MS,
            max_stored_archives: defaults::MAX_STORED_ARCHIVES,
        }
    }
}
