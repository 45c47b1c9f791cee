//! Helpers shared by the browser test binaries.

#![allow(dead_code)]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn add_button(id: &str) -> web_sys::HtmlElement {
    let document = document();
    let button = document
        .create_element("button")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    button.set_id(id);
    document.body().unwrap().append_child(&button).unwrap();
    button
}

/// Lets pending promises and spawned tasks run.
pub async fn settle() {
    sleep_ms(10).await;
}

/// Plain `setTimeout` wait, independent of the timer under test.
pub async fn sleep_ms(millis: i32) {
    let window = web_sys::window().unwrap();
    let elapsed = js_sys::Promise::new(&mut |resolve, _reject| {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });
    JsFuture::from(elapsed).await.unwrap();
}

/// `render_scene` that records the surface id and returns `body`'s result.
pub fn recording_engine(body: &str) -> (js_sys::Function, js_sys::Array) {
    let calls = js_sys::Array::new();
    let render_scene =
        js_sys::Function::new_with_args("calls, id", &format!("calls.push(id); {body}"))
            .bind1(&JsValue::NULL, &calls);
    (render_scene, calls)
}

/// `render_scene` whose promise is resolved by the test through `pending`.
pub fn deferred_engine() -> (js_sys::Function, js_sys::Array, js_sys::Array) {
    let calls = js_sys::Array::new();
    let pending = js_sys::Array::new();
    let render_scene = js_sys::Function::new_with_args(
        "calls, pending, id",
        "calls.push(id); return new Promise(resolve => pending.push(resolve));",
    )
    .bind2(&JsValue::NULL, &calls, &pending);
    (render_scene, calls, pending)
}

/// Resolves the oldest promise handed out by a deferred engine.
pub fn resolve_next(pending: &js_sys::Array) {
    let resolve = pending.shift().dyn_into::<js_sys::Function>().unwrap();
    resolve.call0(&JsValue::NULL).unwrap();
}

pub fn error_message(err: JsValue) -> String {
    let err = err
        .dyn_into::<js_sys::Error>()
        .expect("exported functions throw js Error values");
    String::from(err.message())
}
