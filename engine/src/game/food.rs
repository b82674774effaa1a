use super::grid::GridState;
use super::session_rng::SessionRng;
use super::types::{Cell, CellMarker};
use crate::{EngineError, log};

#[derive(Clone, Debug, Default)]
pub struct FoodSpawner {
    position: Option<Cell>,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, grid: &mut GridState, rng: &mut SessionRng) -> Result<Cell, EngineError> {
        self.ensure_inactive()?;
        let cell = grid.random_empty_cell(rng)?;
        grid.mark_food(cell);
        self.position = Some(cell);
        log!("Food spawned at {}", cell);
        Ok(cell)
    }

    pub fn place_at(&mut self, grid: &mut GridState, cell: Cell) -> Result<Cell, EngineError> {
        self.ensure_inactive()?;
        if !grid.contains(cell) || grid.status_at(cell) != CellMarker::Empty {
            return Err(EngineError::CellNotEmpty(cell));
        }
        grid.mark_food(cell);
        self.position = Some(cell);
        Ok(cell)
    }

    /// Forgets the active food after the head has moved onto it. The grid cell is
    /// left alone since the body now occupies it.
    pub fn consume(&mut self) -> Option<Cell> {
        self.position.take()
    }

    pub fn current_position(&self) -> Option<Cell> {
        self.position
    }

    fn ensure_inactive(&self) -> Result<(), EngineError> {
        match self.position {
            Some(active) => Err(EngineError::FoodAlreadyActive(active)),
            None => Ok(()),
        }
    }
}
