//! `render_scene` living on the JavaScript side.
//!
//! The entry point receives the target surface id as its only argument. It
//! may return anything: a promise (or thenable) is awaited, any other value
//! counts as an immediate success, and a throw is a failure.

use crate::js_error::describe;
use futures::future::{self, FutureExt};
use lazor_bridge::{CompletionSignal, EngineInvocationError, RenderEngine, SurfaceId};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

enum EntryPoint {
    Function(js_sys::Function),
    /// Property of `globalThis`, resolved on every call.
    Global(String),
}

pub struct JsEngine {
    entry: EntryPoint,
}

impl JsEngine {
    pub fn from_function(render_scene: js_sys::Function) -> Self {
        Self {
            entry: EntryPoint::Function(render_scene),
        }
    }

    /// Looks the entry point up on `globalThis` by `name` at invocation
    /// time, so the engine module may load after the bridge.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            entry: EntryPoint::Global(name.into()),
        }
    }

    fn resolve(&self) -> Result<js_sys::Function, EngineInvocationError> {
        match &self.entry {
            EntryPoint::Function(render_scene) => Ok(render_scene.clone()),
            EntryPoint::Global(name) => {
                js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
                    .ok()
                    .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
                    .ok_or_else(|| EngineInvocationError::Unavailable(name.clone()))
            }
        }
    }
}

impl RenderEngine for JsEngine {
    fn render_scene(&self, target: &SurfaceId) -> CompletionSignal {
        let render_scene = match self.resolve() {
            Ok(render_scene) => render_scene,
            Err(err) => return future::ready(Err(err)).boxed_local(),
        };

        let surface_arg = JsValue::from_str(target.as_str());
        let returned = match render_scene.call1(&JsValue::NULL, &surface_arg) {
            Ok(returned) => returned,
            Err(thrown) => {
                return future::ready(Err(EngineInvocationError::failed(
                    target,
                    describe(&thrown),
                )))
                .boxed_local()
            }
        };

        // Promise.resolve adopts promises and thenables and wraps plain values.
        let completion = JsFuture::from(js_sys::Promise::resolve(&returned));
        let surface = target.clone();
        async move {
            completion
                .await
                .map(|_| ())
                .map_err(|rejected| EngineInvocationError::failed(&surface, describe(&rejected)))
        }
        .boxed_local()
    }
}
