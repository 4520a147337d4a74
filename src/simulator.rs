use crate::error::{Result, SimulationError};
use crate::grid::{Grid, Scents};
use crate::input::Mission;
use crate::orientation::{Instruction, Orientation};
use crate::replay::{create_replay_logger, ReplayLogger};
use crate::robot::{Position, Report, Robot};
use log::{debug, info, trace};

/// Settings for a [`RobotSimulator`].
#[derive(Clone, Debug, Default)]
pub struct SimulatorConfig {
    /// The file to save the replay to. If `None`, no replay is recorded.
    pub replay_filename: Option<String>,
    /// The largest accepted grid dimension. If `None`, any non-negative size is accepted.
    pub max_coordinate: Option<i32>,
    /// The most instructions run per robot. Anything after the limit is ignored.
    pub max_instructions: Option<usize>,
}

/// The Martian robots simulation.
/// Main entry point: set a grid, place robots on it and run their instructions one robot at a time.
pub struct RobotSimulator {
    grid: Option<Grid>,
    scents: Scents,
    max_coordinate: Option<i32>,
    max_instructions: Option<usize>,
    replay_logger: Box<dyn ReplayLogger>,
}

impl Default for RobotSimulator {
    fn default() -> Self {
        RobotSimulator::new(SimulatorConfig::default())
    }
}

impl RobotSimulator {
    /// Creates a simulator without a grid.
    pub fn new(config: SimulatorConfig) -> RobotSimulator {
        RobotSimulator {
            grid: None,
            scents: Scents::new(),
            max_coordinate: config.max_coordinate,
            max_instructions: config.max_instructions,
            replay_logger: create_replay_logger(config.replay_filename),
        }
    }

    /// Sets the grid bounds and forgets every scent.
    ///
    /// On error the previous grid and scents are kept.
    pub fn set_grid(&mut self, max_x: i32, max_y: i32) -> Result<()> {
        let too_large = self
            .max_coordinate
            .is_some_and(|limit| max_x > limit || max_y > limit);

        let grid = match Grid::new(max_x, max_y) {
            Some(grid) if !too_large => grid,
            _ => return Err(SimulationError::InvalidGrid { max_x, max_y }),
        };

        debug!("Grid set to {},{}", max_x, max_y);
        self.grid = Some(grid);
        self.scents = Scents::new();
        self.replay_logger.log_grid(grid);

        Ok(())
    }

    /// Creates a robot at the given position. The simulator itself is not changed.
    pub fn place_robot(&self, x: i32, y: i32, orientation: Orientation) -> Result<Robot> {
        let grid = self.grid.ok_or(SimulationError::GridNotConfigured)?;

        if !grid.contains(x, y) {
            return Err(SimulationError::InvalidPosition { x, y });
        }

        Ok(Robot::new(Position::new(x, y, orientation)))
    }

    /// Runs the instructions left to right and returns where the robot ended up.
    ///
    /// Characters other than `L`, `R` and `F` are skipped. Once the robot is lost the rest
    /// of the string is ignored and a scent is left at its last position. A lost robot keeps
    /// its final report. A robot that is not lost must stand inside the current grid, which
    /// fails for robots placed before the grid was changed.
    pub fn run_instructions(&mut self, robot: &mut Robot, instructions: &str) -> Result<Report> {
        if robot.lost() {
            return Ok(robot.report());
        }

        let grid = self.grid.ok_or(SimulationError::GridNotConfigured)?;
        let start = robot.position();
        if !grid.contains(start.x, start.y) {
            return Err(SimulationError::InvalidPosition {
                x: start.x,
                y: start.y,
            });
        }

        self.replay_logger
            .log_robot(robot.id().to_string(), start, instructions.to_string());

        let limit = self.max_instructions.unwrap_or(usize::MAX);
        for (step, value) in instructions.chars().take(limit).enumerate() {
            if robot.lost() {
                break;
            }

            match Instruction::from_char(value) {
                Some(Instruction::Left) => {
                    robot.turn_left();
                    self.log_turn(robot, step);
                }
                Some(Instruction::Right) => {
                    robot.turn_right();
                    self.log_turn(robot, step);
                }
                Some(Instruction::Forward) => self.move_forward(&grid, robot, step),
                None => trace!("Robot {} skipped {:?}", robot.id(), value),
            }
        }

        let report = robot.report();
        self.replay_logger.log_report(report);

        Ok(report)
    }

    /// Places a robot and runs its instructions in one go.
    pub fn run_robot(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
        instructions: &str,
    ) -> Result<Report> {
        let mut robot = self.place_robot(x, y, orientation)?;
        self.run_instructions(&mut robot, instructions)
    }

    /// Sets the mission's grid and runs its robots in order.
    ///
    /// Stops at the first robot that can't be placed; scents left by earlier robots remain.
    pub fn run_mission(&mut self, mission: &Mission) -> Result<Vec<Report>> {
        self.set_grid(mission.max_x, mission.max_y)?;

        mission
            .robots
            .iter()
            .map(|plan| self.run_robot(plan.x, plan.y, plan.orientation, &plan.instructions))
            .collect()
    }

    /// Writes the replay, if one is being recorded.
    pub fn save_replay(&self) -> Result<()> {
        self.replay_logger.save()
    }

    pub fn grid(&self) -> Option<Grid> {
        self.grid
    }

    pub fn scents(&self) -> &Scents {
        &self.scents
    }

    pub fn has_scent(&self, x: i32, y: i32) -> bool {
        self.scents.contains(x, y)
    }
}

impl RobotSimulator {
    fn move_forward(&mut self, grid: &Grid, robot: &mut Robot, step: usize) {
        let position = robot.position();
        let from = (position.x, position.y);
        let ahead = position.ahead();

        if let Some((x, y)) = ahead.filter(|&(x, y)| grid.contains(x, y)) {
            robot.move_to(x, y);
            debug!("Robot {} moved to {},{}", robot.id(), x, y);
            self.replay_logger.log_move(step, from, (x, y));
            return;
        }

        // A scent where the robot stands means an earlier robot fell off here
        if self.scents.contains(from.0, from.1) {
            info!(
                "Robot {} ignored move off the grid at {},{} due to scent",
                robot.id(),
                from.0,
                from.1
            );
            self.replay_logger.log_scent_blocked(step, from, ahead);
            return;
        }

        robot.set_lost();
        self.scents.insert(from.0, from.1);
        info!("Robot {} lost at {},{}", robot.id(), from.0, from.1);
        self.replay_logger.log_lost(step, from, ahead);
    }

    fn log_turn(&mut self, robot: &Robot, step: usize) {
        let position = robot.position();
        debug!("Robot {} turned {}", robot.id(), position.orientation);
        self.replay_logger
            .log_turn(step, (position.x, position.y), position.orientation);
    }
}
