//! Boundary with the external rendering engine.
//!
//! The engine is opaque: the bridge hands it a surface id and waits for the
//! completion signal. Whether the engine renders synchronously or not only
//! shows up in when that signal resolves.

use crate::error::EngineInvocationError;
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the output surface (a canvas) the engine draws into.
///
/// Never resolved by the bridge itself; the engine validates it when
/// `render_scene` runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(String);

impl SurfaceId {
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

impl From<&str> for SurfaceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SurfaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves once the engine finished (or failed) a render.
pub type CompletionSignal = LocalBoxFuture<'static, Result<(), EngineInvocationError>>;

/// The `render_scene` entry point of a rendering engine.
pub trait RenderEngine {
    /// Starts rendering into `target`.
    ///
    /// A synchronous failure is reported as an already-failed signal, never
    /// as a panic.
    fn render_scene(&self, target: &SurfaceId) -> CompletionSignal;
}

impl<F> RenderEngine for F
where
    F: Fn(&SurfaceId) -> CompletionSignal,
{
    fn render_scene(&self, target: &SurfaceId) -> CompletionSignal {
        self(target)
    }
}
