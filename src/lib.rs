//! # martian_robots
//!
//! Robots moving across a bounded grid on Mars.
//! A robot that falls off the edge is lost and leaves a scent that keeps later robots
//! from falling off at the same spot.

pub mod error;
pub mod grid;
pub mod input;
pub mod orientation;
pub mod robot;
pub mod simulator;

pub use error::{Result, SimulationError};
pub use grid::{Grid, Scents};
pub use input::{Mission, RobotPlan};
pub use orientation::{Instruction, Orientation};
pub use robot::{Position, Report, Robot};
pub use simulator::{RobotSimulator, SimulatorConfig};

mod replay;
