pub mod config;
pub mod error;
pub mod game;
pub mod logger;

pub use error::EngineError;
pub use game::{
    BodyController, Cell, CellMarker, CellRole, Direction, FoodSpawner, GameSettings, GameSink,
    GameStatus, GridState, NullSink, SessionRng, SnakeGame, TerminationReason, TickOutcome,
};
