//! Browser frontend for the render bridge.
//!
//! Exposes `configure`, `initialize`, `initialize_default` and `is_rendering`
//! to JavaScript, and provides the web implementations of the bridge seams:
//! [`DomTriggers`], [`JsEngine`], [`WasmSpawner`] and [`BrowserTimer`].

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod engine;
#[cfg(target_arch = "wasm32")]
mod js_error;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod spawner;
#[cfg(target_arch = "wasm32")]
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub use api::{configure, initialize, initialize_default, is_rendering, start};
#[cfg(target_arch = "wasm32")]
pub use dom::DomTriggers;
#[cfg(target_arch = "wasm32")]
pub use engine::JsEngine;
#[cfg(target_arch = "wasm32")]
pub use spawner::WasmSpawner;
#[cfg(target_arch = "wasm32")]
pub use timer::BrowserTimer;
