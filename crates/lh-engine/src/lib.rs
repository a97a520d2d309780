//! Interactive selection engine for Liahona.
//!
//! A sans-IO core: hosts feed [`Event`]s stamped with monotonic milliseconds
//! into a [`Session`] and apply the [`Effect`]s it returns. Time only moves
//! through those timestamps, so every flow can be replayed in tests.

/// Monotonic millisecond clock for hosts.
pub mod clock;
/// Configuration types for sessions and the particle field.
pub mod config;
/// Error types for the engine crate.
pub mod error;
/// Host events, host effects and timer kinds.
pub mod event;
/// The particle field simulation.
pub mod field;
/// Points and viewports.
pub mod geometry;
/// The press/hold/release state machine.
pub mod gesture;
/// Haptic patterns and the pulse loop.
pub mod haptics;
/// Native link dispatch with web fallback.
pub mod navigation;
/// The top-level session controller.
pub mod session;
/// Deterministic cancelable timers.
pub mod timer;

/// Re-export of [`clock::MonotonicClock`].
pub use clock::MonotonicClock;
/// Re-exports of [`config::EngineConfig`] and [`config::FieldConfig`].
pub use config::{EngineConfig, FieldConfig};
/// Re-exports of [`error::EngineError`] and [`error::EngineResult`].
pub use error::{EngineError, EngineResult};
/// Re-exports of [`event::Effect`], [`event::Event`] and [`event::TimerKind`].
pub use event::{Effect, Event, TimerKind};
/// Re-exports of the particle field types.
pub use field::{FieldMode, Particle, ParticleField};
/// Re-exports of [`geometry::Point`] and [`geometry::Viewport`].
pub use geometry::{Point, Viewport};
/// Re-exports of the gesture machine types.
pub use gesture::{GestureMachine, GesturePhase, Release};
/// Re-exports of [`haptics::HapticPattern`] and [`haptics::HapticLoop`].
pub use haptics::{HapticLoop, HapticPattern};
/// Re-exports of the navigation types.
pub use navigation::{NavigationDispatcher, NavigationOutcome, ObserverId, Visibility};
/// Re-export of [`session::Session`].
pub use session::Session;
/// Re-exports of [`timer::TimerHandle`] and [`timer::TimerQueue`].
pub use timer::{TimerHandle, TimerQueue};
