use futures::future::LocalBoxFuture;
use std::time::Duration;

/// Clock used to bound how long a render may stay in flight.
pub trait Timer {
    /// Resolves after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

impl<F> Timer for F
where
    F: Fn(Duration) -> LocalBoxFuture<'static, ()>,
{
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self(duration)
    }
}
