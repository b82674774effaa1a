use super::types::{Cell, TerminationReason};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Head,
    Body,
    Food,
}

/// Receives board deltas and score changes. The engine never renders on its own.
pub trait GameSink {
    fn draw_cell(&mut self, cell: Cell, role: CellRole);

    fn clear_cell(&mut self, cell: Cell);

    /// Whole-board signal sent once when the game terminates.
    fn fill_board(&mut self);

    fn score_changed(&mut self, _score: u32) {}

    fn game_over(&mut self, _reason: TerminationReason, _score: u32) {}
}

pub struct NullSink;

impl GameSink for NullSink {
    fn draw_cell(&mut self, _cell: Cell, _role: CellRole) {}

    fn clear_cell(&mut self, _cell: Cell) {}

    fn fill_board(&mut self) {}
}
