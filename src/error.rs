use thiserror::Error;

/// Errors surfaced by the simulator and its input parsers.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Grid dimensions were negative or above the configured maximum.
    #[error("Invalid grid dimensions {max_x},{max_y}")]
    InvalidGrid { max_x: i32, max_y: i32 },

    /// Grid input could not be read as two integers.
    #[error("Invalid grid input {0:?}, expected coordinates like 5,3")]
    InvalidGridInput(String),

    /// Robot placement outside of the grid.
    #[error("Invalid robot position {x},{y}")]
    InvalidPosition { x: i32, y: i32 },

    /// Orientation token other than N, S, E or W.
    #[error("Invalid orientation {0:?}, only N, S, E and W are allowed")]
    InvalidOrientation(String),

    /// Robot input could not be read as two integers and an orientation.
    #[error("Invalid robot input {0:?}, expected a position like 1,1,E")]
    InvalidPositionInput(String),

    /// A robot was placed before any grid was set.
    #[error("Grid has not been configured")]
    GridNotConfigured,

    /// A batch mission could not be parsed.
    #[error("Invalid mission: {0}")]
    InvalidMission(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SimulationError {
    /// Whether this error belongs to the family of placement failures.
    pub fn is_invalid_position(&self) -> bool {
        matches!(
            self,
            SimulationError::InvalidPosition { .. }
                | SimulationError::InvalidOrientation(_)
                | SimulationError::InvalidPositionInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_displaying_an_invalid_position_the_coordinates_are_included() {
        let err = SimulationError::InvalidPosition { x: 6, y: 1 };

        assert_eq!(err.to_string(), "Invalid robot position 6,1");
        assert!(err.is_invalid_position());
    }

    #[test]
    fn when_checking_a_grid_error_it_is_not_a_position_error() {
        let err = SimulationError::InvalidGrid { max_x: -1, max_y: 3 };

        assert!(!err.is_invalid_position());
        assert!(SimulationError::InvalidOrientation("Q".to_string()).is_invalid_position());
    }
}
