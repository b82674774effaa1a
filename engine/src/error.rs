use crate::game::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    AlreadyTerminated,
    FoodAlreadyActive(Cell),
    CellNotEmpty(Cell),
    NoEmptyCell { attempts: usize },
    InvalidSettings(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::AlreadyTerminated => write!(f, "Tick requested after the game terminated"),
            EngineError::FoodAlreadyActive(cell) => {
                write!(f, "Food is already active at {}", cell)
            }
            EngineError::CellNotEmpty(cell) => write!(f, "Cell {} is not empty", cell),
            EngineError::NoEmptyCell { attempts } => {
                write!(f, "No empty cell left on the grid after {} attempts", attempts)
            }
            EngineError::InvalidSettings(reason) => write!(f, "Invalid game settings: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<String> for EngineError {
    fn from(reason: String) -> Self {
        EngineError::InvalidSettings(reason)
    }
}
