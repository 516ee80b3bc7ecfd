//! The [`Controller`] trait and controller selection.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use bcimaze_core::Action;
use bcimaze_level::Level;
use thiserror::Error;

use crate::ai::AiController;
use crate::autopilot::AutoPilotController;
use crate::erroneous::ErroneousKeyboardController;
use crate::input::InputSource;
use crate::keyboard::KeyboardController;
use crate::telemetry::TelemetrySink;

// ---------------------------------------------------------------------------
// Controller trait
// ---------------------------------------------------------------------------

/// A movement policy, polled once per decision tick.
///
/// `action` must not change the level; the driver applies the returned move.
/// Side effects are limited to the controller's own counters and to
/// telemetry.
pub trait Controller {
    /// Reset per-episode state. Called when a playthrough starts.
    fn reset(&mut self);

    /// Decide the next move for the player of `level`.
    fn action(&mut self, level: &Level) -> Action;

    fn kind(&self) -> ControllerKind;
}

// ---------------------------------------------------------------------------
// ControllerKind
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("unknown controller {0:?} (expected keyboard, auto-pilot, ai or erroneous-keyboard)")]
    UnknownController(String),
}

/// The available controller policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerKind {
    Keyboard,
    AutoPilot,
    Ai,
    ErroneousKeyboard,
}

impl ControllerKind {
    pub const ALL: [ControllerKind; 4] = [
        ControllerKind::Keyboard,
        ControllerKind::AutoPilot,
        ControllerKind::Ai,
        ControllerKind::ErroneousKeyboard,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ControllerKind::Keyboard => "keyboard",
            ControllerKind::AutoPilot => "auto-pilot",
            ControllerKind::Ai => "ai",
            ControllerKind::ErroneousKeyboard => "erroneous-keyboard",
        }
    }

    /// Whether the policy is driven by held keys. A manual controller
    /// returning [`Action::Stop`] just means nothing is held.
    pub const fn is_manual(self) -> bool {
        matches!(self, ControllerKind::Keyboard | ControllerKind::ErroneousKeyboard)
    }

    /// Construct the controller, wiring in its collaborators.
    pub fn build(
        self,
        input: Rc<dyn InputSource>,
        telemetry: Rc<dyn TelemetrySink>,
    ) -> Box<dyn Controller> {
        match self {
            ControllerKind::Keyboard => Box::new(KeyboardController::new(input)),
            ControllerKind::AutoPilot => Box::new(AutoPilotController::new(telemetry)),
            ControllerKind::Ai => Box::new(AiController::new()),
            ControllerKind::ErroneousKeyboard => {
                Box::new(ErroneousKeyboardController::new(input, telemetry))
            }
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControllerKind {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyboard" => Ok(ControllerKind::Keyboard),
            "auto-pilot" | "autopilot" => Ok(ControllerKind::AutoPilot),
            "ai" => Ok(ControllerKind::Ai),
            "erroneous-keyboard" | "erroneous" => Ok(ControllerKind::ErroneousKeyboard),
            _ => Err(ControlError::UnknownController(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NoInput;
    use crate::telemetry::NullSink;

    #[test]
    fn names_parse_back() {
        for kind in ControllerKind::ALL {
            assert_eq!(kind.name().parse::<ControllerKind>(), Ok(kind));
        }
        assert_eq!("AutoPilot".parse(), Ok(ControllerKind::AutoPilot));
        assert_eq!(
            "joystick".parse::<ControllerKind>(),
            Err(ControlError::UnknownController("joystick".into()))
        );
    }

    #[test]
    fn build_matches_kind() {
        for kind in ControllerKind::ALL {
            let ctrl = kind.build(Rc::new(NoInput), Rc::new(NullSink));
            assert_eq!(ctrl.kind(), kind);
        }
    }

    #[test]
    fn manual_kinds() {
        assert!(ControllerKind::Keyboard.is_manual());
        assert!(ControllerKind::ErroneousKeyboard.is_manual());
        assert!(!ControllerKind::AutoPilot.is_manual());
        assert!(!ControllerKind::Ai.is_manual());
    }
}
