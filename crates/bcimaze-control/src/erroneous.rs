use std::rc::Rc;

use bcimaze_core::Action;
use bcimaze_level::{Level, Tile};
use bcimaze_paths::Router;

use crate::controller::{Controller, ControllerKind};
use crate::input::{InputSource, intended_action};
use crate::telemetry::{ErrorCategory, TILE_LABEL, TelemetrySink};

/// Tile kinds an error tile forces the player towards, most wanted first.
const OVERRIDE_PRIORITY: [Tile; 2] = [Tile::HiddenError, Tile::Error];

const SCAN: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

/// Keyboard control with injected errors for the error-potential paradigm.
///
/// A [`Tile::HiddenError`] tile pushes the player on along the error trail
/// whether or not a key is held; an [`Tile::Error`] tile overrides a held
/// key the same way. Every non-stop decision is classified as an
/// [`ErrorCategory`] and reported with a running error streak.
pub struct ErroneousKeyboardController {
    input: Rc<dyn InputSource>,
    telemetry: Rc<dyn TelemetrySink>,
    router: Router,
    streak: u32,
    last_category: Option<ErrorCategory>,
    last_distance: Option<i32>,
}

impl ErroneousKeyboardController {
    pub fn new(input: Rc<dyn InputSource>, telemetry: Rc<dyn TelemetrySink>) -> Self {
        Self {
            input,
            telemetry,
            router: Router::default(),
            streak: 0,
            last_category: None,
            last_distance: None,
        }
    }

    /// Consecutive error decisions, reset by a `NoError` decision.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Classification of the most recent non-stop decision.
    pub fn last_category(&self) -> Option<ErrorCategory> {
        self.last_category
    }

    /// Hops from the most recent destination to the hinted route, or
    /// [`NO_ROUTE_DISTANCE`](bcimaze_paths::NO_ROUTE_DISTANCE) when none
    /// was found.
    pub fn last_distance(&self) -> Option<i32> {
        self.last_distance
    }

    fn forced_action(level: &Level) -> Option<Action> {
        OVERRIDE_PRIORITY
            .into_iter()
            .find_map(|want| SCAN.into_iter().find(|&a| level.tile_towards(a) == Some(want)))
    }
}

impl Controller for ErroneousKeyboardController {
    fn reset(&mut self) {
        self.streak = 0;
        self.last_category = None;
        self.last_distance = None;
    }

    fn action(&mut self, level: &Level) -> Action {
        let intended = intended_action(self.input.as_ref(), level);
        let user_error = intended != Action::Stop
            && !level.tile_towards(intended).is_some_and(Tile::is_on_route);

        let mut action = intended;
        let mut hidden_point_of_error = false;
        let forced_here = match level.player_tile() {
            Tile::HiddenError => true,
            Tile::Error => intended != Action::Stop,
            _ => false,
        };
        if forced_here {
            if let Some(forced) = Self::forced_action(level) {
                hidden_point_of_error = forced != intended;
                action = forced;
            }
        }
        if action == Action::Stop {
            return Action::Stop;
        }

        let dest = action.apply(level.player());
        self.last_distance = Some(level.distance_to_route(&mut self.router, dest));

        let category = if hidden_point_of_error {
            ErrorCategory::HiddenPointOfError
        } else if user_error {
            ErrorCategory::UserError
        } else {
            ErrorCategory::NoError
        };
        if category.is_error() {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.last_category = Some(category);
        self.telemetry.put_event(TILE_LABEL, &category.payload(self.streak));
        action
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::ErroneousKeyboard
    }
}
