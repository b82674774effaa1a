use std::io::{self, Write};

use snake_engine::{Cell, CellRole, GameSink, TerminationReason, log};

const EMPTY_SYMBOL: char = '.';
const HEAD_SYMBOL: char = '@';
const BODY_SYMBOL: char = '#';
const FOOD_SYMBOL: char = '*';
const END_SYMBOL: char = 'X';

pub fn score_message(score: u32) -> String {
    format!("SCORE: {}", score)
}

pub fn game_over_message(score: u32) -> String {
    format!("GAME OVER!!! -- {}", score_message(score))
}

/// Text-mode board built purely from the engine's draw/clear deltas.
pub struct TerminalRenderer<W: Write> {
    out: W,
    frame: Vec<Vec<char>>,
    status_line: String,
    show_board: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: usize, height: usize, show_board: bool) -> Self {
        Self {
            out,
            frame: vec![vec![EMPTY_SYMBOL; width]; height],
            status_line: score_message(0),
            show_board,
        }
    }

    pub fn present(&mut self) -> io::Result<()> {
        if !self.show_board {
            return Ok(());
        }
        // clear screen, cursor home
        write!(self.out, "\x1b[2J\x1b[H")?;
        for row in &self.frame {
            let line: String = row.iter().collect();
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "{}", self.status_line)?;
        self.out.flush()
    }

    fn put(&mut self, cell: Cell, symbol: char) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        if let Some(slot) = self
            .frame
            .get_mut(cell.y as usize)
            .and_then(|row| row.get_mut(cell.x as usize))
        {
            *slot = symbol;
        }
    }
}

#[cfg(test)]
impl<W: Write> TerminalRenderer<W> {
    fn status_line(&self) -> &str {
        &self.status_line
    }

    fn frame_text(&self) -> String {
        self.frame
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameSink for TerminalRenderer<W> {
    fn draw_cell(&mut self, cell: Cell, role: CellRole) {
        let symbol = match role {
            CellRole::Head => HEAD_SYMBOL,
            CellRole::Body => BODY_SYMBOL,
            CellRole::Food => FOOD_SYMBOL,
        };
        self.put(cell, symbol);
    }

    fn clear_cell(&mut self, cell: Cell) {
        self.put(cell, EMPTY_SYMBOL);
    }

    fn fill_board(&mut self) {
        for row in &mut self.frame {
            row.fill(END_SYMBOL);
        }
    }

    fn score_changed(&mut self, score: u32) {
        self.status_line = score_message(score);
    }

    fn game_over(&mut self, reason: TerminationReason, score: u32) {
        self.status_line = game_over_message(score);
        log!("Game ended by {}", reason);
    }
}
