mod body;
mod food;
mod game_state;
mod grid;
mod session_rng;
mod settings;
mod sink;
mod types;

pub use body::BodyController;
pub use food::FoodSpawner;
pub use game_state::{GameStatus, SnakeGame, TickOutcome};
pub use grid::GridState;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use sink::{CellRole, GameSink, NullSink};
pub use types::{Cell, CellMarker, Direction, TerminationReason};
