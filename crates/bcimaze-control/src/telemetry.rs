//! Telemetry events emitted by the controllers.

use std::cell::RefCell;
use std::fmt;

/// Label of every tile-classification event.
pub const TILE_LABEL: &str = "Tile";

/// Receiver of telemetry events, typically a connection to the recording
/// side of an experiment.
pub trait TelemetrySink {
    fn put_event(&self, label: &str, payload: &str);
}

/// One recorded telemetry event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryEvent {
    pub label: String,
    pub payload: String,
}

/// Writes every event as an `info` log record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn put_event(&self, label: &str, payload: &str) {
        log::info!(target: "bcimaze::telemetry", "{label}: {payload}");
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn put_event(&self, _label: &str, _payload: &str) {}
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<TelemetryEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the events recorded so far.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.borrow().clone()
    }

    /// Payloads recorded so far, in order.
    pub fn payloads(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.payload.clone()).collect()
    }

    /// Remove and return every recorded event.
    pub fn take(&self) -> Vec<TelemetryEvent> {
        self.events.take()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl TelemetrySink for RecordingSink {
    fn put_event(&self, label: &str, payload: &str) {
        self.events.borrow_mut().push(TelemetryEvent {
            label: label.to_string(),
            payload: payload.to_string(),
        });
    }
}

/// Classification of one manual decision in the error paradigm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// The controller overrode the player's intent on an error tile.
    HiddenPointOfError,
    /// The player stepped off the hinted route on their own.
    UserError,
    NoError,
}

impl ErrorCategory {
    /// Whether this category extends the error streak.
    pub const fn is_error(self) -> bool {
        !matches!(self, ErrorCategory::NoError)
    }

    /// Telemetry payload for this category with the current streak.
    pub fn payload(self, streak: u32) -> String {
        match self {
            ErrorCategory::NoError => self.to_string(),
            _ => format!("{self}: {streak}"),
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::HiddenPointOfError => "HiddenPointOfError",
            ErrorCategory::UserError => "UserError",
            ErrorCategory::NoError => "NoError",
        })
    }
}
