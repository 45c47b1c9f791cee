//! Render invocation bridge.
//!
//! Connects a UI trigger (a button) to a rendering engine entry point
//! (`render_scene`) and guarantees that at most one render is in flight.
//!
//! The crate does not know about the DOM or JavaScript. Platform behaviour is
//! injected through a few seams:
//! - [`TriggerHost`] resolves trigger ids and attaches activation handlers
//! - [`RenderEngine`] invokes the engine and hands back a completion signal
//! - [`futures::task::LocalSpawn`] runs the task that waits for completion
//! - [`Timer`] backs the optional invocation timeout
//!
//! The browser implementations live in the `lazor-wasm` frontend.

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod guard;
pub mod timer;
pub mod trigger;

pub use bridge::{Activation, BridgeStats, Registration, RenderBridge, RenderBridgeBuilder};
pub use config::BridgeConfig;
pub use engine::{CompletionSignal, RenderEngine, SurfaceId};
pub use error::{ConfigurationError, EngineInvocationError};
pub use guard::{InvocationGuard, InvocationState};
pub use timer::Timer;
pub use trigger::{ActivationHandler, TriggerHost, TriggerId};
