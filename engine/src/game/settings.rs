use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::{Cell, Direction};
use crate::config::Validate;

const MIN_GRID_SIDE: usize = 2;
const MAX_GRID_SIDE: usize = 200;
const MIN_TICK_INTERVAL_MS: u64 = 10;
const MAX_TICK_INTERVAL_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub grid_width: usize,
    pub grid_height: usize,
    pub tick_interval_ms: u64,
    pub initial_body: Vec<Cell>,
    pub initial_direction: Direction,
    #[serde(default)]
    pub initial_food: Option<Cell>,
}

impl GameSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    fn contains(&self, cell: &Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.grid_width
            && (cell.y as usize) < self.grid_height
    }

    fn validate_body(&self) -> Result<(), String> {
        let Some(head) = self.initial_body.first() else {
            return Err("Initial body must have at least one cell".to_string());
        };

        if self.initial_body.len() >= self.grid_width * self.grid_height {
            return Err("Initial body must leave room for food".to_string());
        }

        let mut seen = HashSet::new();
        for cell in &self.initial_body {
            if !self.contains(cell) {
                return Err(format!("Initial body cell {} is outside the grid", cell));
            }
            if !seen.insert(*cell) {
                return Err(format!("Initial body cell {} appears twice", cell));
            }
        }

        for pair in self.initial_body.windows(2) {
            if pair[0].manhattan_distance(&pair[1]) != 1 {
                return Err(format!(
                    "Initial body cells {} and {} are not adjacent",
                    pair[0], pair[1]
                ));
            }
        }

        if let Some(neck) = self.initial_body.get(1)
            && head.neighbour(self.initial_direction) == *neck
        {
            return Err(format!(
                "Initial direction {} points back into the body",
                self.initial_direction
            ));
        }

        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            tick_interval_ms: 500,
            initial_body: vec![Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)],
            initial_direction: Direction::Right,
            initial_food: None,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&self.grid_width) {
            return Err(format!(
                "Grid width must be between {} and {}",
                MIN_GRID_SIDE, MAX_GRID_SIDE
            ));
        }
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&self.grid_height) {
            return Err(format!(
                "Grid height must be between {} and {}",
                MIN_GRID_SIDE, MAX_GRID_SIDE
            ));
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }

        self.validate_body()?;

        if let Some(food) = &self.initial_food {
            if !self.contains(food) {
                return Err(format!("Initial food {} is outside the grid", food));
            }
            if self.initial_body.contains(food) {
                return Err(format!("Initial food {} overlaps the body", food));
            }
        }

        Ok(())
    }
}
