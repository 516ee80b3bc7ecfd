use std::rc::Rc;

use bcimaze_core::Action;
use bcimaze_level::{Level, Tile};

use crate::controller::{Controller, ControllerKind};
use crate::telemetry::{TILE_LABEL, TelemetrySink};

/// Tile kinds the auto-pilot steers towards, most wanted first.
const TILE_PRIORITY: [Tile; 4] = [Tile::Goal, Tile::HiddenError, Tile::Route, Tile::Error];

/// Neighbour scan order for each wanted tile kind.
const SCAN: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

/// Follows the painted hints: goal first, then hidden errors, route and
/// visible errors.
///
/// Every move reports the number of consecutive moves into hidden error
/// tiles as an `ErrorStreak` event.
pub struct AutoPilotController {
    telemetry: Rc<dyn TelemetrySink>,
    streak: u32,
}

impl AutoPilotController {
    pub fn new(telemetry: Rc<dyn TelemetrySink>) -> Self {
        Self {
            telemetry,
            streak: 0,
        }
    }

    /// Consecutive moves into hidden error tiles.
    pub fn streak(&self) -> u32 {
        self.streak
    }
}

impl Controller for AutoPilotController {
    fn reset(&mut self) {
        self.streak = 0;
    }

    fn action(&mut self, level: &Level) -> Action {
        let pick = TILE_PRIORITY.into_iter().find_map(|want| {
            SCAN.into_iter()
                .find(|&a| level.tile_towards(a) == Some(want))
                .map(|a| (a, want))
        });

        let Some((action, tile)) = pick else {
            return Action::Stop;
        };
        if tile == Tile::HiddenError {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.telemetry
            .put_event(TILE_LABEL, &format!("ErrorStreak: {}", self.streak));
        action
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::AutoPilot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::RecordingSink;
    use crate::testlevel::level;

    fn pilot() -> (AutoPilotController, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::new());
        (AutoPilotController::new(sink.clone()), sink)
    }

    #[test]
    fn moves_onto_adjacent_route() {
        let (mut ctrl, sink) = pilot();
        let lvl = level("-----\n-X+ -\n-----");
        assert_eq!(ctrl.action(&lvl), Action::Right);
        assert_eq!(sink.payloads(), ["ErrorStreak: 0"]);
    }

    #[test]
    fn goal_beats_route() {
        let (mut ctrl, _) = pilot();
        let lvl = level("-----\n-+XG-\n-----");
        assert_eq!(ctrl.action(&lvl), Action::Right);
    }

    #[test]
    fn scan_order_breaks_ties() {
        let (mut ctrl, _) = pilot();
        let lvl = level("-----\n- + -\n-+X+-\n- + -\n-----");
        assert_eq!(ctrl.action(&lvl), Action::Left);
        let lvl = level("-----\n- + -\n- X -\n- + -\n-----");
        assert_eq!(ctrl.action(&lvl), Action::Up);
    }

    #[test]
    fn hidden_errors_build_a_streak() {
        let (mut ctrl, sink) = pilot();
        let lvl = level("-----\n-XH+-\n-----");
        assert_eq!(ctrl.action(&lvl), Action::Right);
        let lvl = level("------\n- XH+-\n------");
        assert_eq!(ctrl.action(&lvl), Action::Right);
        let lvl = level("-----\n-+X -\n-----");
        assert_eq!(ctrl.action(&lvl), Action::Left);
        assert_eq!(
            sink.payloads(),
            ["ErrorStreak: 1", "ErrorStreak: 2", "ErrorStreak: 0"]
        );
    }

    #[test]
    fn nothing_to_follow_is_stop_without_telemetry() {
        let (mut ctrl, sink) = pilot();
        let lvl = level("-----\n-X  -\n-----");
        assert_eq!(ctrl.action(&lvl), Action::Stop);
        assert!(sink.is_empty());
    }

    #[test]
    fn reset_clears_streak() {
        let (mut ctrl, _) = pilot();
        ctrl.action(&level("----\n-XH-\n----"));
        assert_eq!(ctrl.streak(), 1);
        ctrl.reset();
        assert_eq!(ctrl.streak(), 0);
    }
}
