//! Functions exported to JavaScript.
//!
//! A page has a single bridge, created on the first `initialize`. Every
//! trigger registered through it shares one in-flight state.

use crate::dom::DomTriggers;
use crate::engine::JsEngine;
use crate::js_error::to_js_error;
use crate::logging;
use crate::spawner::WasmSpawner;
use crate::timer::BrowserTimer;
use lazor_bridge::{BridgeConfig, ConfigurationError, RenderBridge};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static PAGE: RefCell<PageBridge> = RefCell::new(PageBridge::default());
}

#[derive(Default)]
struct PageBridge {
    config: BridgeConfig,
    /// Explicit entry point; `config.engine_entry` is looked up otherwise.
    render_scene: Option<js_sys::Function>,
    bridge: Option<RenderBridge>,
}

impl PageBridge {
    fn bridge(&mut self) -> Result<&RenderBridge, ConfigurationError> {
        let bridge = match self.bridge.take() {
            Some(bridge) => bridge,
            None => self.build()?,
        };
        Ok(&*self.bridge.insert(bridge))
    }

    fn build(&self) -> Result<RenderBridge, ConfigurationError> {
        let host = DomTriggers::from_window()?;
        let engine = match &self.render_scene {
            Some(render_scene) => JsEngine::from_function(render_scene.clone()),
            None => JsEngine::global(self.config.engine_entry.clone()),
        };

        let mut builder = RenderBridge::builder(host, engine, WasmSpawner)
            .activation_event(self.config.activation_event.clone());
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(BrowserTimer, timeout);
        }

        let bridge = builder.build();
        tracing::debug!(?bridge, "render bridge created");
        Ok(bridge)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
}

/// Sets bridge options (`triggerId`, `targetSurfaceId`, `activationEvent`,
/// `engineEntry`, `timeoutMs`) and optionally the `render_scene` function.
///
/// Must run before the first `initialize`.
#[wasm_bindgen]
pub fn configure(
    options: JsValue,
    render_scene: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        BridgeConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<BridgeConfig>(options)
            .map_err(|err| to_js_error(ConfigurationError::InvalidConfig(err.to_string())))?
    };
    config.validate().map_err(to_js_error)?;

    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        if page.bridge.is_some() {
            return Err(to_js_error(ConfigurationError::InvalidConfig(
                "configure must be called before initialize".into(),
            )));
        }

        tracing::debug!(?config, explicit_entry = render_scene.is_some(), "bridge configured");
        page.config = config;
        page.render_scene = render_scene;
        Ok(())
    })
}

/// Renders into `target_surface_id` whenever `trigger_id` is activated.
#[wasm_bindgen]
pub fn initialize(trigger_id: &str, target_surface_id: &str) -> Result<(), JsValue> {
    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        page.bridge()?
            .initialize(trigger_id, target_surface_id)
            .map(|_| ())
    })
    .map_err(to_js_error)
}

/// `initialize` with the configured trigger and surface ids.
#[wasm_bindgen]
pub fn initialize_default() -> Result<(), JsValue> {
    let (trigger, surface) = PAGE.with(|page| {
        let page = page.borrow();
        (
            page.config.trigger_id.clone(),
            page.config.target_surface_id.clone(),
        )
    });
    initialize(trigger.as_str(), surface.as_str())
}

#[wasm_bindgen]
pub fn is_rendering() -> bool {
    PAGE.with(|page| {
        page.borrow()
            .bridge
            .as_ref()
            .is_some_and(RenderBridge::is_in_flight)
    })
}
