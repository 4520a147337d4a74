use log::error;
use martian_robots::{Mission, RobotSimulator, SimulatorConfig};
use std::io::{self, Read};
use std::{env, fs, process};

/// Usage: `martian_robots [INPUT_FILE] [REPLAY_FILE]`
///
/// Reads a mission from `INPUT_FILE` (or stdin) and prints one line per robot.
fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input_file = args.next();
    let replay_filename = args.next();

    if let Err(e) = run(input_file, replay_filename) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(input_file: Option<String>, replay_filename: Option<String>) -> martian_robots::Result<()> {
    let contents = match input_file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            contents
        }
    };

    let mission = Mission::parse(&contents)?;
    let mut simulator = RobotSimulator::new(SimulatorConfig {
        replay_filename,
        ..Default::default()
    });

    for report in simulator.run_mission(&mission)? {
        println!("{}", report);
    }

    simulator.save_replay()
}
