use crate::error::Result;
use crate::grid::Grid;
use crate::orientation::Orientation;
use crate::robot::{Position, Report};
use serde_json::json;
use std::{fs::File, io::BufWriter};

pub fn create_replay_logger(filename: Option<String>) -> Box<dyn ReplayLogger> {
    match filename {
        None => Box::new(NoOpReplayLogger {}),
        Some(filename) => Box::new(JsonReplayLogger::new(filename)),
    }
}

/// Records what happens during a simulation.
///
/// Every method defaults to doing nothing so implementations only pick what they need.
pub trait ReplayLogger {
    #[allow(unused_variables)]
    fn log_grid(&mut self, grid: Grid) {}

    #[allow(unused_variables)]
    fn log_robot(&mut self, id: String, start: Position, instructions: String) {}

    #[allow(unused_variables)]
    fn log_event(&mut self, event: Event) {}

    #[allow(unused_variables)]
    fn log_report(&mut self, report: Report) {}

    fn clear(&mut self) {}

    fn save(&self) -> Result<()> {
        Ok(())
    }

    fn log_turn(&mut self, step: usize, location: (i32, i32), orientation: Orientation) {
        self.log_event(Event {
            event_type: EventType::Turn,
            step,
            location,
            destination: None,
            orientation: Some(orientation),
        });
    }

    fn log_move(&mut self, step: usize, location: (i32, i32), destination: (i32, i32)) {
        self.log_event(Event {
            event_type: EventType::Move,
            step,
            location,
            destination: Some(destination),
            orientation: None,
        });
    }

    fn log_lost(
        &mut self,
        step: usize,
        location: (i32, i32),
        destination: Option<(i32, i32)>,
    ) {
        self.log_event(Event {
            event_type: EventType::Lost,
            step,
            location,
            destination,
            orientation: None,
        });
    }

    fn log_scent_blocked(
        &mut self,
        step: usize,
        location: (i32, i32),
        destination: Option<(i32, i32)>,
    ) {
        self.log_event(Event {
            event_type: EventType::ScentBlocked,
            step,
            location,
            destination,
            orientation: None,
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum EventType {
    Turn,
    Move,
    Lost,
    ScentBlocked,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Event {
    event_type: EventType,
    step: usize,
    location: (i32, i32),
    destination: Option<(i32, i32)>,
    orientation: Option<Orientation>,
}

#[derive(serde::Serialize)]
struct RobotRun {
    id: String,
    start: Position,
    instructions: String,
    events: Vec<Event>,
    report: Option<Report>,
}

struct NoOpReplayLogger;
impl ReplayLogger for NoOpReplayLogger {}

struct JsonReplayLogger {
    filename: String,
    grid: Option<Grid>,
    runs: Vec<RobotRun>,
}

impl JsonReplayLogger {
    pub fn new(filename: String) -> JsonReplayLogger {
        JsonReplayLogger {
            filename,
            grid: None,
            runs: Vec::new(),
        }
    }
}

impl ReplayLogger for JsonReplayLogger {
    fn log_grid(&mut self, grid: Grid) {
        // A new grid starts a new replay
        self.clear();
        self.grid = Some(grid);
    }

    fn log_robot(&mut self, id: String, start: Position, instructions: String) {
        self.runs.push(RobotRun {
            id,
            start,
            instructions,
            events: Vec::new(),
            report: None,
        });
    }

    fn log_event(&mut self, event: Event) {
        if let Some(run) = self.runs.last_mut() {
            run.events.push(event);
        }
    }

    fn log_report(&mut self, report: Report) {
        if let Some(run) = self.runs.last_mut() {
            run.report = Some(report);
        }
    }

    fn clear(&mut self) {
        self.grid = None;
        self.runs.clear();
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.filename)?;
        let data = json!({
            "grid": self.grid.map(|grid| json!({
                "max_x": grid.max_x(),
                "max_y": grid.max_y(),
            })),
            "robots": self.runs,
        });

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &data)?;

        Ok(())
    }
}
