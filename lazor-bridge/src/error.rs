use crate::engine::SurfaceId;
use crate::trigger::TriggerId;
use thiserror::Error;

/// Raised while wiring a trigger, before any render happens.
///
/// Returned to the caller of `initialize`; no listener is registered when
/// one of these is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("trigger element `{0}` not found in document")]
    TriggerNotFound(TriggerId),

    #[error("could not attach `{event}` listener to `{trigger}`: {reason}")]
    ListenerRejected {
        trigger: TriggerId,
        event: String,
        reason: String,
    },

    #[error("invalid bridge config: {0}")]
    InvalidConfig(String),
}

/// Failure of a single engine invocation.
///
/// Always recovered by the bridge: the in-flight guard is released and the
/// error is logged once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineInvocationError {
    #[error("render_scene(\"{surface}\") failed: {message}")]
    Failed { surface: SurfaceId, message: String },

    #[error("render engine entry point `{0}` is unavailable")]
    Unavailable(String),

    #[error("render_scene(\"{surface}\") did not complete within {timeout_ms}ms")]
    Timeout { surface: SurfaceId, timeout_ms: u64 },
}

impl EngineInvocationError {
    pub fn failed(surface: &SurfaceId, message: impl Into<String>) -> Self {
        Self::Failed {
            surface: surface.clone(),
            message: message.into(),
        }
    }
}
