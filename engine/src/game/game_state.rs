use std::fmt;

use super::body::BodyController;
use super::food::FoodSpawner;
use super::grid::GridState;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::sink::{CellRole, GameSink};
use super::types::{Cell, CellMarker, Direction, TerminationReason};
use crate::config::Validate;
use crate::{EngineError, log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Terminated(TerminationReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced { head: Cell, captured: bool },
    Terminated(TerminationReason),
}

/// One game: the grid, the body, the food and the random source that feeds it.
///
/// Every mutation goes through `&mut self`; callers that share a game between an
/// input source and a clock must funnel both through a single owner.
pub struct SnakeGame {
    grid: GridState,
    body: BodyController,
    food: FoodSpawner,
    rng: SessionRng,
    status: GameStatus,
    ticks: u64,
}

impl SnakeGame {
    pub fn new(settings: &GameSettings, rng: SessionRng) -> Result<Self, EngineError> {
        settings.validate()?;

        let mut grid = GridState::new(settings.grid_width, settings.grid_height);
        let body = BodyController::new(&settings.initial_body, settings.initial_direction);
        for &cell in body.cells() {
            grid.mark_occupied(cell);
        }

        let mut game = Self {
            grid,
            body,
            food: FoodSpawner::new(),
            rng,
            status: GameStatus::Running,
            ticks: 0,
        };

        match settings.initial_food {
            Some(cell) => game.food.place_at(&mut game.grid, cell)?,
            None => game.food.place(&mut game.grid, &mut game.rng)?,
        };

        log!(
            "New {}x{} game (seed {}), body of {} heading {}",
            settings.grid_width,
            settings.grid_height,
            game.rng.seed(),
            game.body.len(),
            game.body.heading()
        );

        Ok(game)
    }

    pub fn draw_initial(&self, sink: &mut impl GameSink) {
        let head = self.body.head_position();
        for &cell in self.body.cells() {
            let role = if cell == head { CellRole::Head } else { CellRole::Body };
            sink.draw_cell(cell, role);
        }
        if let Some(food) = self.food.current_position() {
            sink.draw_cell(food, CellRole::Food);
        }
        sink.score_changed(self.body.score());
    }

    /// Requests a heading change for the next tick. Reversals and requests after the
    /// game has ended are ignored.
    pub fn set_heading(&mut self, direction: Direction) {
        if !self.is_running() {
            return;
        }
        if !self.body.set_heading(direction) {
            log!("Ignoring reversal from {} to {}", self.body.heading(), direction);
        }
    }

    pub fn set_heading_from_key(&mut self, key_code: u32) {
        match Direction::from_key_code(key_code) {
            Some(direction) => self.set_heading(direction),
            None => log!("Ignoring unknown key code {}", key_code),
        }
    }

    pub fn tick(&mut self, sink: &mut impl GameSink) -> Result<TickOutcome, EngineError> {
        if !self.is_running() {
            return Err(EngineError::AlreadyTerminated);
        }

        // computed once; every check below uses the same cell
        let candidate_head = self.body.projected_head();

        if self.body.is_out_of_bounds(&self.grid) {
            return Ok(self.terminate(TerminationReason::WallCollision, sink));
        }
        if self.body.is_self_collision(&self.grid, candidate_head) {
            return Ok(self.terminate(TerminationReason::SelfCollision, sink));
        }

        let is_capture = self.food.current_position() == Some(candidate_head);

        let old_head = self.body.head_position();
        let dropped_tail = self.body.advance(is_capture);
        self.grid.mark_occupied(candidate_head);
        sink.draw_cell(old_head, CellRole::Body);
        sink.draw_cell(candidate_head, CellRole::Head);

        if let Some(tail) = dropped_tail {
            self.grid.clear(tail);
            sink.clear_cell(tail);
        }

        self.ticks += 1;

        if is_capture {
            let score = self.body.score();
            log!("Food captured at {}. Score: {}", candidate_head, score);
            sink.score_changed(score);

            self.food.consume();
            let food = self.food.place(&mut self.grid, &mut self.rng)?;
            sink.draw_cell(food, CellRole::Food);
        }

        Ok(TickOutcome::Advanced {
            head: candidate_head,
            captured: is_capture,
        })
    }

    fn terminate(&mut self, reason: TerminationReason, sink: &mut impl GameSink) -> TickOutcome {
        self.status = GameStatus::Terminated(reason);
        let score = self.body.score();
        log!("Game over after {} ticks: {}. Score: {}", self.ticks, reason, score);
        sink.fill_board();
        sink.game_over(reason, score);
        TickOutcome::Terminated(reason)
    }

    pub fn score(&self) -> u32 {
        self.body.score()
    }

    pub fn head_position(&self) -> Cell {
        self.body.head_position()
    }

    pub fn heading(&self) -> Direction {
        self.body.heading()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn body(&self) -> &BodyController {
        &self.body
    }

    pub fn food_position(&self) -> Option<Cell> {
        self.food.current_position()
    }
}

impl fmt::Display for SnakeGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.body.head_position();
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let cell = Cell::new(x, y);
                let symbol = match self.grid.status_at(cell) {
                    CellMarker::Occupied if cell == head => '@',
                    CellMarker::Occupied => '#',
                    CellMarker::Food => '*',
                    CellMarker::Empty => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
