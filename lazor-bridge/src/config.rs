use crate::engine::SurfaceId;
use crate::error::ConfigurationError;
use crate::trigger::TriggerId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod defaults {
    use crate::engine::SurfaceId;
    use crate::trigger::TriggerId;

    #[inline]
    pub fn trigger_id() -> TriggerId {
        TriggerId::from("render_button")
    }

    #[inline]
    pub fn target_surface_id() -> SurfaceId {
        SurfaceId::from("result_canvas")
    }

    #[inline]
    pub fn activation_event() -> String {
        String::from("click")
    }

    #[inline]
    pub fn engine_entry() -> String {
        String::from("render_scene")
    }
}

/// Bridge settings, usually handed over from JavaScript as a plain object.
///
/// Every key is optional; missing keys fall back to [`defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    #[serde(default = "defaults::trigger_id")]
    pub trigger_id: TriggerId,
    #[serde(default = "defaults::target_surface_id")]
    pub target_surface_id: SurfaceId,
    /// DOM event that counts as an activation.
    #[serde(default = "defaults::activation_event")]
    pub activation_event: String,
    /// Global name of the engine entry point, looked up when no function is
    /// passed explicitly.
    #[serde(default = "defaults::engine_entry")]
    pub engine_entry: String,
    /// Upper bound for a single render. `None` waits forever.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> BridgeConfig {
        BridgeConfig {
            trigger_id: defaults::trigger_id(),
            target_surface_id: defaults::target_surface_id(),
            activation_event: defaults::activation_event(),
            engine_entry: defaults::engine_entry(),
            timeout_ms: None,
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.trigger_id.is_blank() {
            return Err(ConfigurationError::InvalidConfig(
                "triggerId must not be empty".into(),
            ));
        }
        if self.target_surface_id.is_blank() {
            return Err(ConfigurationError::InvalidConfig(
                "targetSurfaceId must not be empty".into(),
            ));
        }
        if self.activation_event.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfig(
                "activationEvent must not be empty".into(),
            ));
        }
        if self.engine_entry.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfig(
                "engineEntry must not be empty".into(),
            ));
        }
        if self.timeout_ms == Some(0) {
            return Err(ConfigurationError::InvalidConfig(
                "timeoutMs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
