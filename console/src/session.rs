use std::io::Write;
use std::time::Duration;

use snake_engine::{EngineError, SnakeGame, TerminationReason, TickOutcome, log};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{MissedTickBehavior, interval};

use crate::autopilot::Autopilot;
use crate::input::ConsoleCommand;
use crate::renderer::TerminalRenderer;

#[derive(Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub ticks: u64,
    /// `None` when the player quit or the body filled the board.
    pub reason: Option<TerminationReason>,
}

/// Owns the game for its whole life. Ticks and input are handled one at a time on
/// this task, so no tick can overlap another and the last heading before a tick wins.
pub async fn run<W: Write>(
    mut game: SnakeGame,
    mut renderer: TerminalRenderer<W>,
    mut commands: UnboundedReceiver<ConsoleCommand>,
    tick_interval: Duration,
    autopilot: Option<Autopilot>,
) -> Result<SessionSummary, EngineError> {
    let mut timer = interval(tick_interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut input_open = true;

    game.draw_initial(&mut renderer);
    present(&mut renderer);
    // the first interval tick completes immediately
    timer.tick().await;

    loop {
        tokio::select! {
            _ = timer.tick() => {
                if let Some(direction) = autopilot.as_ref().and_then(|pilot| pilot.calculate_move(&game)) {
                    game.set_heading(direction);
                }

                let outcome = match game.tick(&mut renderer) {
                    Ok(outcome) => outcome,
                    Err(EngineError::NoEmptyCell { .. }) => {
                        present(&mut renderer);
                        log!("Board is full, no cell left for food");
                        return Ok(summarize(&game, None));
                    }
                    Err(e) => return Err(e),
                };
                present(&mut renderer);

                if let TickOutcome::Terminated(reason) = outcome {
                    return Ok(summarize(&game, Some(reason)));
                }
            }
            command = commands.recv(), if input_open => {
                match command {
                    Some(ConsoleCommand::Turn(direction)) => game.set_heading(direction),
                    Some(ConsoleCommand::Quit) => {
                        log!("Player quit");
                        return Ok(summarize(&game, None));
                    }
                    None => {
                        log!("Input closed");
                        input_open = false;
                    }
                }
            }
        }
    }
}

fn present<W: Write>(renderer: &mut TerminalRenderer<W>) {
    if let Err(e) = renderer.present() {
        log!("Failed to draw board: {}", e);
    }
}

fn summarize(game: &SnakeGame, reason: Option<TerminationReason>) -> SessionSummary {
    SessionSummary {
        score: game.score(),
        ticks: game.ticks(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use snake_engine::{Cell, Direction, GameSettings, SessionRng};
    use tokio::sync::mpsc;

    use super::*;
    use crate::config::AutopilotKind;

    fn create_game() -> SnakeGame {
        let settings = GameSettings {
            grid_width: 6,
            grid_height: 6,
            initial_body: vec![Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)],
            initial_direction: Direction::Right,
            initial_food: Some(Cell::new(5, 5)),
            ..GameSettings::default()
        };
        SnakeGame::new(&settings, SessionRng::new(8)).unwrap()
    }

    fn renderer() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new(), 6, 6, false)
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_until_wall() {
        let (tx, rx) = mpsc::unbounded_channel();

        let summary = run(create_game(), renderer(), rx, Duration::from_millis(50), None)
            .await
            .unwrap();
        drop(tx);

        // (2,2) -> (5,2) takes three moves, the fourth hits the wall
        assert_eq!(
            summary,
            SessionSummary {
                score: 0,
                ticks: 3,
                reason: Some(TerminationReason::WallCollision),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_command_stops_session() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(ConsoleCommand::Quit).unwrap();

        let summary = run(create_game(), renderer(), rx, Duration::from_millis(50), None)
            .await
            .unwrap();

        assert_eq!(summary.reason, None);
        assert_eq!(summary.ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_command_applies_before_next_tick() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(ConsoleCommand::Turn(Direction::Down)).unwrap();
        drop(tx);

        let summary = run(create_game(), renderer(), rx, Duration::from_millis(50), None)
            .await
            .unwrap();

        // (2,2) -> (2,5) takes three moves down
        assert_eq!(summary.reason, Some(TerminationReason::WallCollision));
        assert_eq!(summary.ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_board_ends_session() {
        let settings = GameSettings {
            grid_width: 2,
            grid_height: 2,
            initial_body: vec![Cell::new(1, 1), Cell::new(0, 1), Cell::new(0, 0)],
            initial_direction: Direction::Up,
            initial_food: Some(Cell::new(1, 0)),
            ..GameSettings::default()
        };
        let game = SnakeGame::new(&settings, SessionRng::new(4)).unwrap();
        let (_tx, rx) = mpsc::unbounded_channel();

        let summary = run(
            game,
            TerminalRenderer::new(Vec::new(), 2, 2, false),
            rx,
            Duration::from_millis(50),
            None,
        )
        .await
        .unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                score: 1,
                ticks: 1,
                reason: None,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_autopilot_reaches_food() {
        let (tx, rx) = mpsc::unbounded_channel();
        let pilot = Autopilot::new(AutopilotKind::Greedy);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            let _ = tx.send(ConsoleCommand::Quit);
        });

        let summary = run(create_game(), renderer(), rx, Duration::from_millis(10), Some(pilot))
            .await
            .unwrap();

        // food at (5,5) is six moves away
        assert!(summary.score >= 1);
        assert!(summary.ticks >= 6);
    }
}
