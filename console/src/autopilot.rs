use rand::Rng;
use snake_engine::{Cell, CellMarker, Direction, SnakeGame};

use crate::config::AutopilotKind;

/// Stand-in input source that steers on its own between ticks.
pub struct Autopilot {
    kind: AutopilotKind,
}

impl Autopilot {
    pub fn new(kind: AutopilotKind) -> Self {
        Self { kind }
    }

    pub fn calculate_move(&self, game: &SnakeGame) -> Option<Direction> {
        if !game.is_running() {
            return None;
        }
        match self.kind {
            AutopilotKind::Greedy => Self::towards_food(game),
            AutopilotKind::Random => Self::random_safe_move(game),
        }
    }

    fn towards_food(game: &SnakeGame) -> Option<Direction> {
        let Some(food) = game.food_position() else {
            return Self::random_safe_move(game);
        };
        let head = game.head_position();

        Self::safe_directions(game)
            .into_iter()
            .min_by_key(|&dir| head.neighbour(dir).manhattan_distance(&food))
            .or_else(|| Self::random_safe_move(game))
    }

    fn random_safe_move(game: &SnakeGame) -> Option<Direction> {
        let safe_directions = Self::safe_directions(game);

        if safe_directions.is_empty() {
            Some(game.heading())
        } else {
            let idx = rand::rng().random_range(0..safe_directions.len());
            Some(safe_directions[idx])
        }
    }

    fn safe_directions(game: &SnakeGame) -> Vec<Direction> {
        let current = game.heading();
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .filter(|&d| Self::next_position(game, d).is_some())
            .collect()
    }

    fn next_position(game: &SnakeGame, direction: Direction) -> Option<Cell> {
        let head = game.head_position();
        let grid = game.grid();
        if !grid.is_in_bounds(head.x, head.y, direction) {
            return None;
        }
        let next = head.neighbour(direction);
        // the tail is still on the grid when the collision check runs
        (grid.status_at(next) != CellMarker::Occupied).then_some(next)
    }
}
