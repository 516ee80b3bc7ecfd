//! A headless tick driver for one playthrough.

use bcimaze_core::{Action, Point};
use bcimaze_level::{Level, Tile};

use crate::controller::Controller;

/// What happened in one [`Session::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The player moved and is now at the given cell.
    Moved(Action, Point),
    /// The controller returned [`Action::Stop`].
    Stopped,
    /// The controller asked for a move into a wall or off the grid.
    Blocked(Action),
    /// The player is on the goal; no decision was requested.
    Finished,
}

/// Totals of a [`Session::run`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub moves: u64,
    pub reached_goal: bool,
}

/// One playthrough: a live level copy and the controller playing it.
///
/// The session applies the rules that run after a move completes: entering
/// a [`Tile::Route`] cell clears it to blank floor, and leaving a
/// [`Tile::Error`] cell turns it into route.
pub struct Session {
    level: Level,
    controller: Box<dyn Controller>,
    ticks: u64,
    moves: u64,
}

impl Session {
    /// Start a playthrough of `level`, which should already be a copy of
    /// its template. The controller is reset.
    pub fn new(level: Level, mut controller: Box<dyn Controller>) -> Self {
        controller.reset();
        log::debug!(
            "session on {:?} with {} controller",
            level.name,
            controller.kind()
        );
        Self {
            level,
            controller,
            ticks: 0,
            moves: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// End the session and hand back the live level.
    pub fn into_level(self) -> Level {
        self.level
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn reached_goal(&self) -> bool {
        self.level.player_tile() == Tile::Goal
    }

    /// Poll the controller once and apply its move.
    pub fn tick(&mut self) -> TickOutcome {
        if self.reached_goal() {
            return TickOutcome::Finished;
        }
        self.ticks += 1;

        let action = self.controller.action(&self.level);
        if action == Action::Stop {
            return TickOutcome::Stopped;
        }

        let from = self.level.player();
        let to = action.apply(from);
        let left = self.level.player_tile();
        if !self.level.set_player(to) {
            log::debug!("{} from {from} is blocked", action);
            return TickOutcome::Blocked(action);
        }
        self.moves += 1;

        if left == Tile::Error {
            self.level.set_tile(from, Tile::Route);
        }
        if self.level.player_tile() == Tile::Route {
            self.level.set_tile(to, Tile::Blank);
        }

        if self.reached_goal() {
            log::info!(
                "{:?}: goal reached in {} move(s) over {} tick(s)",
                self.level.name,
                self.moves,
                self.ticks
            );
        }
        TickOutcome::Moved(action, to)
    }

    /// Tick until the goal is reached, `max_ticks` ticks have run, or an
    /// automatic controller stops or runs into a wall.
    pub fn run(&mut self, max_ticks: u64) -> SessionSummary {
        let manual = self.controller.kind().is_manual();
        while self.ticks < max_ticks {
            match self.tick() {
                TickOutcome::Finished => break,
                TickOutcome::Stopped | TickOutcome::Blocked(_) if !manual => break,
                _ => {}
            }
            if self.reached_goal() {
                break;
            }
        }
        SessionSummary {
            ticks: self.ticks,
            moves: self.moves,
            reached_goal: self.reached_goal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiController;
    use crate::autopilot::AutoPilotController;
    use crate::controller::ControllerKind;
    use crate::input::HeldKeys;
    use crate::keyboard::KeyboardController;
    use crate::telemetry::{NullSink, RecordingSink};
    use crate::testlevel::level;
    use bcimaze_level::{GenConfig, MazeGen};
    use bcimaze_paths::Router;
    use std::rc::Rc;

    #[test]
    fn autopilot_walks_annotated_level_to_goal() {
        let template = MazeGen::seeded(3).generate(&GenConfig::default()).unwrap();
        let mut router = Router::default();
        let annotated = template.annotate(&mut router);
        let route = annotated.route_to_goal(&mut router, annotated.player());

        let sink = Rc::new(RecordingSink::new());
        let mut session = Session::new(annotated.copy(), Box::new(AutoPilotController::new(sink.clone())));
        let summary = session.run(10_000);

        assert!(summary.reached_goal);
        assert_eq!(summary.moves as usize, route.len());
        assert_eq!(session.level().count(Tile::Route), 0);
        assert!(sink.payloads().iter().all(|p| p == "ErrorStreak: 0"));
        // The annotated level is untouched by play.
        assert_eq!(annotated.count(Tile::Route), route.len() - 1);
    }

    #[test]
    fn ai_plays_back_generated_level() {
        for seed in 0..10 {
            let level = MazeGen::seeded(seed).generate(&GenConfig::default()).unwrap();
            let mut session = Session::new(level, Box::new(AiController::new()));
            let summary = session.run(10_000);
            assert!(summary.reached_goal, "seed {seed}");
            assert_eq!(summary.moves, summary.ticks);
            assert_eq!(session.tick(), TickOutcome::Finished);
        }
    }

    #[test]
    fn error_tile_becomes_route_when_left() {
        let mut lvl = level("------\n-XE  -\n------");
        lvl.set_tile(Point::new(4, 1), Tile::Goal);
        let keys = Rc::new(HeldKeys::new());
        keys.press(Action::Right);
        let mut session = Session::new(lvl, Box::new(KeyboardController::new(keys.clone())));

        assert_eq!(session.tick(), TickOutcome::Moved(Action::Right, Point::new(2, 1)));
        assert_eq!(session.level().tile(Point::new(2, 1)), Some(Tile::Error));
        assert_eq!(session.tick(), TickOutcome::Moved(Action::Right, Point::new(3, 1)));
        assert_eq!(session.level().tile(Point::new(2, 1)), Some(Tile::Route));
    }

    #[test]
    fn entering_route_clears_it() {
        let lvl = level("------\n-X++G-\n------");
        let keys = Rc::new(HeldKeys::new());
        keys.press(Action::Right);
        let mut session = Session::new(lvl, Box::new(KeyboardController::new(keys)));
        let summary = session.run(100);
        assert!(summary.reached_goal);
        assert_eq!(summary.moves, 3);
        assert_eq!(session.level().count(Tile::Route), 0);
        assert_eq!(session.level().count(Tile::Goal), 1);
    }

    #[test]
    fn manual_session_waits_for_keys() {
        let lvl = level("-----\n-X G-\n-----");
        let ctrl = ControllerKind::Keyboard.build(Rc::new(HeldKeys::new()), Rc::new(NullSink));
        let mut session = Session::new(lvl, ctrl);
        let summary = session.run(5);
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.moves, 0);
        assert!(!summary.reached_goal);
    }

    #[test]
    fn automatic_session_ends_on_stop() {
        let lvl = level("-----\n-X  -\n-----");
        let mut session = Session::new(lvl, Box::new(AutoPilotController::new(Rc::new(NullSink))));
        let summary = session.run(50);
        assert_eq!(summary.ticks, 1);
        assert!(!summary.reached_goal);
    }
}
