//! Client configuration loaded from the environment.

use runtime::RuntimeConfig;

/// Everything the binary needs to assemble a session.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables; see
    /// [`RuntimeConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Self {
        Self {
            runtime: RuntimeConfig::from_env(),
        }
    }
}
