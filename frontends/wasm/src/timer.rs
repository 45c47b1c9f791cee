use futures::future::{self, FutureExt, LocalBoxFuture};
use lazor_bridge::Timer;
use std::time::Duration;
use wasm_bindgen_futures::JsFuture;

/// `setTimeout` backed timer.
///
/// Dropping a sleep before it fires clears the pending timeout, so a render
/// that completes early leaves no timer behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

/// Clears the timeout on drop. Clearing an already fired handle is a no-op.
struct ScheduledTimeout {
    window: web_sys::Window,
    handle: i32,
}

impl Drop for ScheduledTimeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window available, render timeout disabled");
            return future::pending().boxed_local();
        };

        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let mut scheduled = Ok(0);
        let fired = js_sys::Promise::new(&mut |resolve, _reject| {
            scheduled =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        });

        let handle = match scheduled {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(error = ?err, "setTimeout failed, render timeout disabled");
                return future::pending().boxed_local();
            }
        };

        let timeout = ScheduledTimeout { window, handle };
        let fired = JsFuture::from(fired);
        async move {
            let _timeout = timeout;
            let _ = fired.await;
        }
        .boxed_local()
    }
}
