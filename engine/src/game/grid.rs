use std::fmt;

use super::session_rng::SessionRng;
use super::types::{Cell, CellMarker, Direction};
use crate::EngineError;

const SAMPLE_ATTEMPTS_PER_CELL: usize = 10;

/// Occupancy matrix of the board, indexed `[x][y]`.
///
/// The grid is the source of truth for collisions: every body cell is marked
/// `Occupied` and the active food cell, if any, is marked `Food`.
#[derive(Clone, Debug)]
pub struct GridState {
    width: usize,
    height: usize,
    matrix: Vec<Vec<CellMarker>>,
}

impl GridState {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            matrix: vec![vec![CellMarker::Empty; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    pub fn mark_occupied(&mut self, cell: Cell) {
        self.set(cell, CellMarker::Occupied);
    }

    pub fn mark_food(&mut self, cell: Cell) {
        self.set(cell, CellMarker::Food);
    }

    pub fn clear(&mut self, cell: Cell) {
        self.set(cell, CellMarker::Empty);
    }

    pub fn status_at(&self, cell: Cell) -> CellMarker {
        let (x, y) = self.index(cell);
        self.matrix[x][y]
    }

    pub fn is_in_bounds(&self, x: i32, y: i32, direction: Direction) -> bool {
        let last_x = self.width as i32 - 1;
        let last_y = self.height as i32 - 1;
        match direction {
            Direction::Left => x > 0,
            Direction::Right => x < last_x,
            Direction::Up => y > 0,
            Direction::Down => y < last_y,
        }
    }

    // falls back to a scan once sampling runs out, so only a full grid fails
    pub fn random_empty_cell(&self, rng: &mut SessionRng) -> Result<Cell, EngineError> {
        let max_attempts = SAMPLE_ATTEMPTS_PER_CELL * self.cell_count();

        for _ in 0..max_attempts {
            let cell = Cell::new(
                rng.random_range(0..self.width as i32),
                rng.random_range(0..self.height as i32),
            );
            if self.status_at(cell) == CellMarker::Empty {
                return Ok(cell);
            }
        }

        let empty_cells = self.cells_with(CellMarker::Empty);
        rng.choose(&empty_cells)
            .copied()
            .ok_or(EngineError::NoEmptyCell {
                attempts: max_attempts,
            })
    }

    pub fn count(&self, marker: CellMarker) -> usize {
        self.matrix
            .iter()
            .flatten()
            .filter(|&&m| m == marker)
            .count()
    }

    pub fn cells_with(&self, marker: CellMarker) -> Vec<Cell> {
        let mut cells = Vec::new();
        for (x, column) in self.matrix.iter().enumerate() {
            for (y, &m) in column.iter().enumerate() {
                if m == marker {
                    cells.push(Cell::new(x as i32, y as i32));
                }
            }
        }
        cells
    }

    fn set(&mut self, cell: Cell, marker: CellMarker) {
        let (x, y) = self.index(cell);
        self.matrix[x][y] = marker;
    }

    fn index(&self, cell: Cell) -> (usize, usize) {
        assert!(
            self.contains(cell),
            "cell {} is outside the {}x{} grid",
            cell,
            self.width,
            self.height
        );
        (cell.x as usize, cell.y as usize)
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = match self.matrix[x][y] {
                    CellMarker::Empty => '.',
                    CellMarker::Occupied => '#',
                    CellMarker::Food => '*',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_all_but(grid: &mut GridState, keep: Cell) {
        for x in 0..grid.width() as i32 {
            for y in 0..grid.height() as i32 {
                let cell = Cell::new(x, y);
                if cell != keep {
                    grid.mark_occupied(cell);
                }
            }
        }
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = GridState::new(4, 3);

        assert_eq!(grid.count(CellMarker::Empty), 12);
        assert_eq!(grid.status_at(Cell::new(3, 2)), CellMarker::Empty);
    }

    #[test]
    fn test_markers_replace_each_other() {
        let mut grid = GridState::new(5, 5);
        let cell = Cell::new(1, 4);

        grid.mark_food(cell);
        assert_eq!(grid.status_at(cell), CellMarker::Food);

        grid.mark_occupied(cell);
        assert_eq!(grid.status_at(cell), CellMarker::Occupied);
        assert_eq!(grid.count(CellMarker::Food), 0);

        grid.clear(cell);
        assert_eq!(grid.status_at(cell), CellMarker::Empty);
    }

    #[test]
    fn test_matrix_is_indexed_by_column_then_row() {
        let mut grid = GridState::new(3, 2);
        grid.mark_occupied(Cell::new(2, 0));

        assert_eq!(grid.cells_with(CellMarker::Occupied), vec![Cell::new(2, 0)]);
        assert_eq!(grid.to_string(), "..#\n...\n");
    }

    #[test]
    #[should_panic(expected = "outside the 5x5 grid")]
    fn test_write_outside_grid_panics() {
        let mut grid = GridState::new(5, 5);
        grid.mark_occupied(Cell::new(5, 0));
    }

    #[test]
    #[should_panic]
    fn test_status_at_negative_cell_panics() {
        let grid = GridState::new(5, 5);
        grid.status_at(Cell::new(-1, 0));
    }

    #[test]
    fn test_is_in_bounds_at_edges() {
        let grid = GridState::new(4, 3);

        assert!(!grid.is_in_bounds(0, 1, Direction::Left));
        assert!(grid.is_in_bounds(0, 1, Direction::Right));
        assert!(!grid.is_in_bounds(3, 1, Direction::Right));
        assert!(grid.is_in_bounds(3, 1, Direction::Left));
        assert!(!grid.is_in_bounds(2, 0, Direction::Up));
        assert!(grid.is_in_bounds(2, 0, Direction::Down));
        assert!(!grid.is_in_bounds(2, 2, Direction::Down));
        assert!(grid.is_in_bounds(2, 2, Direction::Up));
    }

    #[test]
    fn test_random_empty_cell_is_empty() {
        let mut grid = GridState::new(6, 6);
        grid.mark_occupied(Cell::new(0, 0));
        grid.mark_occupied(Cell::new(1, 0));
        let mut rng = SessionRng::new(99);

        for _ in 0..100 {
            let cell = grid.random_empty_cell(&mut rng).unwrap();
            assert!(grid.contains(cell));
            assert_eq!(grid.status_at(cell), CellMarker::Empty);
        }
    }

    #[test]
    fn test_random_empty_cell_finds_the_only_empty_cell() {
        let mut grid = GridState::new(8, 8);
        let only = Cell::new(5, 3);
        fill_all_but(&mut grid, only);

        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(grid.random_empty_cell(&mut rng), Ok(only));
        }
    }

    #[test]
    fn test_random_empty_cell_on_full_grid_fails() {
        let mut grid = GridState::new(3, 3);
        fill_all_but(&mut grid, Cell::new(-1, -1));
        let mut rng = SessionRng::new(3);

        let result = grid.random_empty_cell(&mut rng);

        assert_eq!(result, Err(EngineError::NoEmptyCell { attempts: 90 }));
    }

    #[test]
    fn test_random_empty_cell_on_degenerate_grid_fails() {
        let grid = GridState::new(0, 0);
        let mut rng = SessionRng::new(3);

        assert!(grid.random_empty_cell(&mut rng).is_err());
    }
}
