use std::collections::VecDeque;

use super::grid::GridState;
use super::types::{Cell, CellMarker, Direction};

#[derive(Clone, Debug)]
pub struct BodyController {
    body: VecDeque<Cell>,
    heading: Direction,
    // heading the head last moved along; the neck sits opposite it
    moved_heading: Direction,
    score: u32,
}

impl BodyController {
    pub fn new(initial_body: &[Cell], initial_direction: Direction) -> Self {
        assert!(!initial_body.is_empty(), "body needs at least one cell");
        let moved_heading = match initial_body {
            [head, neck, ..] => Direction::ALL
                .into_iter()
                .find(|&direction| neck.neighbour(direction) == *head)
                .unwrap_or(initial_direction),
            _ => initial_direction,
        };
        Self {
            body: initial_body.iter().copied().collect(),
            heading: initial_direction,
            moved_heading,
            score: 0,
        }
    }

    /// Returns whether the heading was applied. A request opposite to the pending
    /// heading or to the last move is dropped.
    pub fn set_heading(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(&self.heading) || requested.is_opposite(&self.moved_heading) {
            return false;
        }
        self.heading = requested;
        true
    }

    pub fn projected_head(&self) -> Cell {
        self.head_position().neighbour(self.heading)
    }

    pub fn is_self_collision(&self, grid: &GridState, candidate_head: Cell) -> bool {
        grid.status_at(candidate_head) == CellMarker::Occupied
    }

    pub fn is_out_of_bounds(&self, grid: &GridState) -> bool {
        let head = self.head_position();
        !grid.is_in_bounds(head.x, head.y, self.heading)
    }

    /// Returns the dropped tail, or `None` when a capture grows the body.
    pub fn advance(&mut self, is_capture_move: bool) -> Option<Cell> {
        let new_head = self.projected_head();
        self.body.push_front(new_head);
        self.moved_heading = self.heading;

        if is_capture_move {
            self.score += 1;
            None
        } else {
            self.body.pop_back()
        }
    }

    pub fn head_position(&self) -> Cell {
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
