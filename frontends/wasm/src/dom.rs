use crate::js_error::describe;
use lazor_bridge::{ActivationHandler, ConfigurationError, TriggerHost, TriggerId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Triggers are elements of a DOM document, looked up by id.
pub struct DomTriggers {
    document: web_sys::Document,
}

impl DomTriggers {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Uses the document of the current window.
    pub fn from_window() -> Result<Self, ConfigurationError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| ConfigurationError::InvalidConfig("no document available".into()))
    }
}

impl TriggerHost for DomTriggers {
    fn attach(
        &self,
        trigger: &TriggerId,
        event: &str,
        handler: ActivationHandler,
    ) -> Result<(), ConfigurationError> {
        let element = self
            .document
            .get_element_by_id(trigger.as_str())
            .ok_or_else(|| ConfigurationError::TriggerNotFound(trigger.clone()))?;

        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handler();
        });

        element
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(|err| ConfigurationError::ListenerRejected {
                trigger: trigger.clone(),
                event: event.to_owned(),
                reason: describe(&err),
            })?;

        // Listener lives as long as the page.
        listener.forget();
        Ok(())
    }
}
