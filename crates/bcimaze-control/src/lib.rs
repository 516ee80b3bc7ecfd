//! Controllers that decide the player's next move, one decision per tick.
//!
//! Every controller implements [`Controller`]. Collaborators are injected
//! at construction: manual controllers read an [`InputSource`] and the
//! error-paradigm controllers report to a [`TelemetrySink`].
//!
//! [`Session`] is a headless driver that owns a live level copy and plays
//! it with any controller.

mod ai;
mod autopilot;
mod controller;
mod erroneous;
mod input;
mod keyboard;
mod session;
mod telemetry;

pub use ai::{AiController, AiState};
pub use autopilot::AutoPilotController;
pub use controller::{ControlError, Controller, ControllerKind};
pub use erroneous::ErroneousKeyboardController;
pub use input::{HeldKeys, InputSource, KEY_PRIORITY, NoInput, intended_action};
pub use keyboard::KeyboardController;
pub use session::{Session, SessionSummary, TickOutcome};
pub use telemetry::{
    ErrorCategory, LogSink, NullSink, RecordingSink, TILE_LABEL, TelemetryEvent, TelemetrySink,
};

#[cfg(test)]
pub(crate) mod testlevel {
    use bcimaze_level::Level;

    /// Parse a test level; `X` marks the player.
    pub fn level(s: &str) -> Level {
        Level::parse(&format!("test\n{s}")).unwrap()
    }
}
