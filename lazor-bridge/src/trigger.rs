use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Stable id of an activatable UI element (e.g. a button).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(String);

impl TriggerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for TriggerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TriggerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Callback run on every activation of a trigger.
pub type ActivationHandler = Rc<dyn Fn()>;

/// Where triggers live (the document, in a browser).
pub trait TriggerHost {
    /// Attaches `handler` to the `event` of the trigger named `trigger`.
    ///
    /// Must fail with [`ConfigurationError::TriggerNotFound`] and attach
    /// nothing when the trigger does not exist. The listener stays attached
    /// for the lifetime of the host.
    fn attach(
        &self,
        trigger: &TriggerId,
        event: &str,
        handler: ActivationHandler,
    ) -> Result<(), ConfigurationError>;
}

impl<H: TriggerHost + ?Sized> TriggerHost for Rc<H> {
    fn attach(
        &self,
        trigger: &TriggerId,
        event: &str,
        handler: ActivationHandler,
    ) -> Result<(), ConfigurationError> {
        (**self).attach(trigger, event, handler)
    }
}
