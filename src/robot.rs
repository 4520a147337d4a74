use crate::orientation::Orientation;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// A grid coordinate together with the direction the robot faces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Position {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Position {
        Position { x, y, orientation }
    }

    /// The coordinate one step ahead. It may lie outside the grid.
    /// `None` when the step leaves the range of `i32`.
    pub fn ahead(&self) -> Option<(i32, i32)> {
        let (dx, dy) = self.orientation.delta();
        Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

/// A robot on the grid.
///
/// Robots are created by [`crate::RobotSimulator::place_robot`] and mutated by
/// [`crate::RobotSimulator::run_instructions`]. Once lost, a robot no longer moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Robot {
    id: String,
    position: Position,
    lost: bool,
}

impl Robot {
    pub(crate) fn new(position: Position) -> Robot {
        Robot {
            id: Uuid::new_v4().to_string(),
            position,
            lost: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    pub fn report(&self) -> Report {
        Report {
            position: self.position,
            lost: self.lost,
        }
    }

    pub(crate) fn turn_left(&mut self) {
        self.position.orientation = self.position.orientation.left();
    }

    pub(crate) fn turn_right(&mut self) {
        self.position.orientation = self.position.orientation.right();
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.position.x = x;
        self.position.y = y;
    }

    pub(crate) fn set_lost(&mut self) {
        self.lost = true;
    }
}

/// The final state of a robot after running its instructions.
///
/// Displays as `"x y O"`, suffixed with `" LOST"` when the robot fell off the grid.
/// A lost robot reports its last position inside the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Report {
    pub position: Position,
    pub lost: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.position.orientation
        )?;

        if self.lost {
            write!(f, " LOST")?;
        }

        Ok(())
    }
}
