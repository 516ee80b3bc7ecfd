use std::collections::VecDeque;

use bcimaze_core::Action;
use bcimaze_level::{Level, Tile};
use bcimaze_paths::{Router, route_found};

use crate::controller::{Controller, ControllerKind};

/// Playback state of an [`AiController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AiState {
    /// No cached route; the next call plans one.
    Idle,
    /// Playing back a cached route.
    Executing,
}

/// Plans the whole route to the goal once, then plays it back one move per
/// tick.
pub struct AiController {
    router: Router,
    route: VecDeque<Action>,
}

impl Default for AiController {
    fn default() -> Self {
        Self::new()
    }
}

impl AiController {
    pub fn new() -> Self {
        Self {
            router: Router::default(),
            route: VecDeque::new(),
        }
    }

    pub fn state(&self) -> AiState {
        if self.route.is_empty() {
            AiState::Idle
        } else {
            AiState::Executing
        }
    }

    /// Moves left in the cached route.
    pub fn remaining(&self) -> usize {
        self.route.len()
    }

    fn plan(&mut self, level: &Level) {
        let route = level.route_to_goal(&mut self.router, level.player());
        if !route_found(&route) {
            if level.find(Tile::Goal).is_none() {
                log::warn!("{:?}: no goal to plan for", level.name);
            } else if level.player_tile() != Tile::Goal {
                log::warn!(
                    "{:?}: no route from {} to goal within {} expansions",
                    level.name,
                    level.player(),
                    self.router.last_iterations()
                );
            }
            return;
        }
        log::debug!("{:?}: planned {} move(s)", level.name, route.len());
        self.route.extend(route);
    }
}

impl Controller for AiController {
    fn reset(&mut self) {
        self.route.clear();
    }

    fn action(&mut self, level: &Level) -> Action {
        if self.state() == AiState::Idle {
            self.plan(level);
        }
        self.route.pop_front().unwrap_or(Action::Stop)
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::Ai
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlevel::level;
    use bcimaze_core::Point;

    #[test]
    fn plans_once_then_plays_back() {
        let mut ctrl = AiController::new();
        let mut lvl = level("-------\n-X   G-\n-------");
        assert_eq!(ctrl.state(), AiState::Idle);

        let mut moves = Vec::new();
        for _ in 0..4 {
            let a = ctrl.action(&lvl);
            moves.push(a);
            assert!(lvl.set_player(a.apply(lvl.player())));
        }
        assert_eq!(moves, [Action::Right; 4]);
        assert_eq!(ctrl.state(), AiState::Idle);
        assert_eq!(lvl.player(), Point::new(5, 1));

        // On the goal the next plan is the zero-length route.
        assert_eq!(ctrl.action(&lvl), Action::Stop);
        assert_eq!(ctrl.state(), AiState::Idle);
        assert_eq!(ctrl.remaining(), 0);
    }

    #[test]
    fn cached_route_ignores_level_changes() {
        let mut ctrl = AiController::new();
        let lvl = level("------\n-X  G-\n------");
        assert_eq!(ctrl.action(&lvl), Action::Right);
        assert_eq!(ctrl.state(), AiState::Executing);
        assert_eq!(ctrl.remaining(), 2);

        // Same level object, player not moved: playback continues anyway.
        assert_eq!(ctrl.action(&lvl), Action::Right);
        assert_eq!(ctrl.remaining(), 1);
    }

    #[test]
    fn no_goal_or_no_route_is_stop() {
        let mut ctrl = AiController::new();
        assert_eq!(ctrl.action(&level("-----\n-X  -\n-----")), Action::Stop);
        assert_eq!(ctrl.action(&level("------\n-X -G-\n------")), Action::Stop);
        assert_eq!(ctrl.state(), AiState::Idle);
    }

    #[test]
    fn standing_on_goal_is_stop() {
        let mut ctrl = AiController::new();
        let mut lvl = level("-----\n-X  -\n-----");
        lvl.set_tile(Point::new(1, 1), Tile::Goal);
        assert_eq!(ctrl.action(&lvl), Action::Stop);
    }

    #[test]
    fn reset_drops_cached_route() {
        let mut ctrl = AiController::new();
        ctrl.action(&level("------\n-X  G-\n------"));
        assert_eq!(ctrl.state(), AiState::Executing);
        ctrl.reset();
        assert_eq!(ctrl.state(), AiState::Idle);
    }
}
