//! RenderBridge - trigger to `render_scene`
//!
//! Flow:
//! - `initialize` attaches one activation listener per trigger
//! - an activation acquires the in-flight guard and calls the engine
//! - a local task waits for the completion signal (bounded by the optional
//!   timeout), then drops the guard and logs the outcome
//!
//! Activations that arrive while a render is in flight are dropped.

use crate::engine::{CompletionSignal, RenderEngine, SurfaceId};
use crate::error::{ConfigurationError, EngineInvocationError};
use crate::guard::InvocationState;
use crate::timer::Timer;
use crate::trigger::{ActivationHandler, TriggerHost, TriggerId};
use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use futures::task::{LocalSpawn, LocalSpawnExt};
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Result of [`RenderBridge::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new listener was attached.
    Attached,
    /// The trigger already had a listener; nothing was attached.
    AlreadyAttached,
}

/// What a single trigger activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Started,
    /// A render was already in flight.
    OverlapIgnored,
}

/// Counters kept for the lifetime of a bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    /// Engine calls issued.
    pub started: u64,
    pub completed: u64,
    pub failed: u64,
    pub timed_out: u64,
    /// Activations dropped because a render was in flight.
    pub ignored: u64,
}

pub struct RenderBridgeBuilder {
    host: Box<dyn TriggerHost>,
    engine: Box<dyn RenderEngine>,
    spawner: Box<dyn LocalSpawn>,
    activation_event: String,
    deadline: Option<(Box<dyn Timer>, Duration)>,
}

impl RenderBridgeBuilder {
    /// DOM event treated as an activation. Defaults to `click`.
    pub fn activation_event(mut self, event: impl Into<String>) -> Self {
        self.activation_event = event.into();
        self
    }

    /// Releases the in-flight guard if the engine has not completed after
    /// `duration`. The late completion is discarded.
    pub fn timeout(mut self, timer: impl Timer + 'static, duration: Duration) -> Self {
        self.deadline = Some((Box::new(timer), duration));
        self
    }

    pub fn build(self) -> RenderBridge {
        RenderBridge {
            inner: Rc::new(Inner {
                host: self.host,
                engine: self.engine,
                spawner: self.spawner,
                activation_event: self.activation_event,
                deadline: self.deadline,
                state: InvocationState::new(),
                registered: RefCell::new(FxHashMap::default()),
                stats: Rc::new(Cell::new(BridgeStats::default())),
            }),
        }
    }
}

/// Binds triggers to a rendering engine, one render at a time.
///
/// The in-flight state is shared by every trigger registered on the same
/// bridge, so renders are serialized across all of them.
pub struct RenderBridge {
    inner: Rc<Inner>,
}

struct Inner {
    host: Box<dyn TriggerHost>,
    engine: Box<dyn RenderEngine>,
    spawner: Box<dyn LocalSpawn>,
    activation_event: String,
    deadline: Option<(Box<dyn Timer>, Duration)>,
    state: InvocationState,
    /// trigger -> surface it renders into
    registered: RefCell<FxHashMap<TriggerId, SurfaceId>>,
    stats: Rc<Cell<BridgeStats>>,
}

impl RenderBridge {
    pub fn builder(
        host: impl TriggerHost + 'static,
        engine: impl RenderEngine + 'static,
        spawner: impl LocalSpawn + 'static,
    ) -> RenderBridgeBuilder {
        RenderBridgeBuilder {
            host: Box::new(host),
            engine: Box::new(engine),
            spawner: Box::new(spawner),
            activation_event: crate::config::defaults::activation_event(),
            deadline: None,
        }
    }

    /// Attaches an activation listener to `trigger_id` that renders into
    /// `target_surface_id`.
    ///
    /// The surface is not checked here; the engine resolves it on each
    /// render. Calling this again for the same trigger attaches nothing.
    pub fn initialize(
        &self,
        trigger_id: impl Into<TriggerId>,
        target_surface_id: impl Into<SurfaceId>,
    ) -> Result<Registration, ConfigurationError> {
        let trigger = trigger_id.into();
        let surface = target_surface_id.into();

        if trigger.is_blank() {
            return Err(ConfigurationError::InvalidConfig(
                "trigger id must not be empty".into(),
            ));
        }
        if surface.is_blank() {
            return Err(ConfigurationError::InvalidConfig(
                "target surface id must not be empty".into(),
            ));
        }

        if let Some(existing) = self.inner.registered.borrow().get(&trigger) {
            if *existing != surface {
                tracing::warn!(
                    trigger = %trigger,
                    surface = %existing,
                    requested = %surface,
                    "trigger already bound to another surface, keeping the first binding"
                );
            } else {
                tracing::debug!(trigger = %trigger, "trigger already initialized");
            }
            return Ok(Registration::AlreadyAttached);
        }

        let handler = self.activation_handler(trigger.clone(), surface.clone());
        if let Err(err) = self
            .inner
            .host
            .attach(&trigger, &self.inner.activation_event, handler)
        {
            tracing::error!(
                trigger = %trigger,
                error = %err,
                "failed to initialize render trigger"
            );
            return Err(err);
        }

        tracing::info!(
            trigger = %trigger,
            surface = %surface,
            event = %self.inner.activation_event,
            "render trigger attached"
        );
        self.inner.registered.borrow_mut().insert(trigger, surface);
        Ok(Registration::Attached)
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.inner.state.is_in_flight()
    }

    #[inline]
    pub fn stats(&self) -> BridgeStats {
        self.inner.stats.get()
    }

    pub fn registered_surface(&self, trigger: &TriggerId) -> Option<SurfaceId> {
        self.inner.registered.borrow().get(trigger).cloned()
    }

    fn activation_handler(&self, trigger: TriggerId, surface: SurfaceId) -> ActivationHandler {
        // Weak: the host keeps the handler alive, the handler must not keep
        // the bridge alive.
        let inner = Rc::downgrade(&self.inner);
        Rc::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.activate(&trigger, &surface);
            }
        })
    }
}

impl fmt::Debug for RenderBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderBridge")
            .field("activation_event", &self.inner.activation_event)
            .field("in_flight", &self.inner.state.is_in_flight())
            .field("registered", &self.inner.registered.borrow().len())
            .field("stats", &self.inner.stats.get())
            .finish()
    }
}

impl Inner {
    fn activate(&self, trigger: &TriggerId, surface: &SurfaceId) -> Activation {
        let Some(guard) = self.state.try_acquire() else {
            bump(&self.stats, |s| s.ignored += 1);
            tracing::debug!(
                trigger = %trigger,
                surface = %surface,
                "render in flight, activation ignored"
            );
            return Activation::OverlapIgnored;
        };

        bump(&self.stats, |s| s.started += 1);
        tracing::debug!(trigger = %trigger, surface = %surface, "calling render_scene");

        let signal = self.engine.render_scene(surface);
        let signal = match &self.deadline {
            Some((timer, duration)) => {
                with_deadline(signal, timer.sleep(*duration), surface.clone(), *duration)
            }
            None => signal,
        };

        let stats = self.stats.clone();
        let task_surface = surface.clone();
        let task = async move {
            let outcome = signal.await;
            drop(guard);

            match outcome {
                Ok(()) => {
                    bump(&stats, |s| s.completed += 1);
                    tracing::info!(surface = %task_surface, "render complete");
                }
                Err(err) => {
                    if matches!(err, EngineInvocationError::Timeout { .. }) {
                        bump(&stats, |s| s.timed_out += 1);
                    } else {
                        bump(&stats, |s| s.failed += 1);
                    }
                    tracing::error!(surface = %task_surface, error = %err, "render failed");
                }
            }
        };

        // On error the task is dropped together with the guard, so the
        // bridge is idle again.
        if let Err(err) = self.spawner.spawn_local(task) {
            bump(&self.stats, |s| s.failed += 1);
            tracing::error!(surface = %surface, error = %err, "could not watch render completion");
        }

        Activation::Started
    }
}

fn with_deadline(
    signal: CompletionSignal,
    sleep: LocalBoxFuture<'static, ()>,
    surface: SurfaceId,
    duration: Duration,
) -> CompletionSignal {
    async move {
        match future::select(signal, sleep).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => Err(EngineInvocationError::Timeout {
                surface,
                timeout_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
    .boxed_local()
}

#[inline]
fn bump(stats: &Cell<BridgeStats>, update: impl FnOnce(&mut BridgeStats)) {
    let mut current = stats.get();
    update(&mut current);
    stats.set(current);
}
