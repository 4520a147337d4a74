//! Parsing of the text a user types: grid sizes such as `5,3`, robot positions such as
//! `1,1,E` and whole missions in the classic line-based format.

use crate::error::{Result, SimulationError};
use crate::orientation::Orientation;
use regex::Regex;
use std::sync::LazyLock;

static GRID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d+)\s*[,\s]\s*(-?\d+)\s*$").unwrap());

static ROBOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*[,\s]\s*(-?\d+)\s*[,\s]\s*([A-Za-z]\w*)\s*$").unwrap()
});

/// Parses grid dimensions separated by a comma or whitespace.
///
/// Negative values are accepted here and rejected when the grid is set.
pub fn parse_grid(input: &str) -> Result<(i32, i32)> {
    let invalid = || SimulationError::InvalidGridInput(input.to_string());
    let captures = GRID.captures(input).ok_or_else(invalid)?;

    let max_x = captures[1].parse().map_err(|_| invalid())?;
    let max_y = captures[2].parse().map_err(|_| invalid())?;

    Ok((max_x, max_y))
}

/// Parses a robot position and orientation, e.g. `1,1,E` or `3 2 n`.
pub fn parse_robot(input: &str) -> Result<(i32, i32, Orientation)> {
    let invalid = || SimulationError::InvalidPositionInput(input.to_string());
    let captures = ROBOT.captures(input).ok_or_else(invalid)?;

    let x = captures[1].parse().map_err(|_| invalid())?;
    let y = captures[2].parse().map_err(|_| invalid())?;

    let token = &captures[3];
    let mut chars = token.chars();
    let orientation = match (chars.next(), chars.next()) {
        (Some(value), None) => Orientation::from_char(value),
        _ => None,
    }
    .ok_or_else(|| SimulationError::InvalidOrientation(token.to_string()))?;

    Ok((x, y, orientation))
}

/// Upper-cases an instruction string so lower-case commands are honoured.
pub fn normalize_instructions(input: &str) -> String {
    input.trim().to_uppercase()
}

/// One robot of a mission.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotPlan {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub instructions: String,
}

/// A grid followed by the robots to run on it, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mission {
    pub max_x: i32,
    pub max_y: i32,
    pub robots: Vec<RobotPlan>,
}

impl Mission {
    /// Parses a mission.
    ///
    /// The first non-blank line is the grid. Each robot is a position line optionally
    /// followed by its instruction line. Blank lines are skipped. An instruction line containing
    /// digits is rejected as a malformed robot line.
    ///
    /// ```text
    /// 5 3
    /// 1 1 E
    /// RFRFRFRF
    ///
    /// 3 2 N
    /// FRRFLLFFRRFLL
    /// ```
    pub fn parse(contents: &str) -> Result<Mission> {
        let mut lines = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .peekable();

        let grid_line = lines
            .next()
            .ok_or_else(|| SimulationError::InvalidMission("missing grid line".to_string()))?;
        let (max_x, max_y) = parse_grid(grid_line)?;

        let mut robots = Vec::new();
        while let Some(line) = lines.next() {
            let (x, y, orientation) = parse_robot(line)?;

            // A robot without instructions is directly followed by the next robot
            let instructions = match lines.next_if(|next| !ROBOT.is_match(next)) {
                Some(next) if next.chars().any(|value| value.is_ascii_digit()) => {
                    return Err(SimulationError::InvalidMission(format!(
                        "expected instructions or a robot, found {:?}",
                        next
                    )));
                }
                Some(next) => normalize_instructions(next),
                None => String::new(),
            };

            robots.push(RobotPlan {
                x,
                y,
                orientation,
                instructions,
            });
        }

        Ok(Mission {
            max_x,
            max_y,
            robots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_parsing_a_grid_commas_and_spaces_are_accepted() {
        assert_eq!(parse_grid("5,3").unwrap(), (5, 3));
        assert_eq!(parse_grid(" 5 3 ").unwrap(), (5, 3));
        assert_eq!(parse_grid("5, 3").unwrap(), (5, 3));
    }

    #[test]
    fn when_parsing_a_malformed_grid_an_error_is_returned() {
        assert!(matches!(
            parse_grid("5;3"),
            Err(SimulationError::InvalidGridInput(_))
        ));
        assert!(matches!(
            parse_grid("5.5,3"),
            Err(SimulationError::InvalidGridInput(_))
        ));
        assert!(matches!(
            parse_grid("99999999999,3"),
            Err(SimulationError::InvalidGridInput(_))
        ));
    }

    #[test]
    fn when_parsing_a_robot_the_orientation_is_case_insensitive() {
        assert_eq!(
            parse_robot("1,1,e").unwrap(),
            (1, 1, Orientation::East)
        );
        assert_eq!(
            parse_robot("3 2 N").unwrap(),
            (3, 2, Orientation::North)
        );
    }

    #[test]
    fn when_parsing_a_robot_with_an_unknown_orientation_an_error_is_returned() {
        let err = parse_robot("1,1,Q").unwrap_err();
        assert!(matches!(err, SimulationError::InvalidOrientation(ref token) if token == "Q"));
        assert!(err.is_invalid_position());

        let err = parse_robot("1,1,North").unwrap_err();
        assert!(matches!(err, SimulationError::InvalidOrientation(_)));
    }

    #[test]
    fn when_parsing_a_malformed_robot_an_error_is_returned() {
        let err = parse_robot("1,E").unwrap_err();

        assert!(matches!(err, SimulationError::InvalidPositionInput(_)));
        assert!(err.is_invalid_position());
    }

    #[test]
    fn when_normalizing_instructions_they_are_upper_cased() {
        assert_eq!(normalize_instructions(" rfL \n"), "RFL");
    }

    #[test]
    fn when_parsing_a_mission_every_robot_is_read_in_order() {
        let mission = "\
            5 3
            1 1 E
            RFRFRFRF

            3 2 N
            FRRFLLFFRRFLL

            0 3 W
            LLFFFLFLFL";
        let mission = Mission::parse(mission).unwrap();

        assert_eq!(mission.max_x, 5);
        assert_eq!(mission.max_y, 3);
        assert_eq!(mission.robots.len(), 3);
        assert_eq!(
            mission.robots[1],
            RobotPlan {
                x: 3,
                y: 2,
                orientation: Orientation::North,
                instructions: "FRRFLLFFRRFLL".to_string(),
            }
        );
    }

    #[test]
    fn when_parsing_a_mission_a_robot_may_have_no_instructions() {
        let mission = "\
            5,3
            1,1,E
            2,2,s
            ff";
        let mission = Mission::parse(mission).unwrap();

        assert_eq!(mission.robots.len(), 2);
        assert_eq!(mission.robots[0].instructions, "");
        assert_eq!(mission.robots[1].orientation, Orientation::South);
        assert_eq!(mission.robots[1].instructions, "FF");
    }

    #[test]
    fn when_parsing_a_mission_with_a_malformed_robot_line_an_error_is_returned() {
        let err = Mission::parse("5 3\n1 1 E\n2 2").unwrap_err();
        assert!(
            matches!(err, SimulationError::InvalidMission(ref message) if message.contains("2 2"))
        );

        let err = Mission::parse("5 3\n1 1 E\nRF3F").unwrap_err();
        assert!(matches!(err, SimulationError::InvalidMission(_)));
    }

    #[test]
    fn when_parsing_an_empty_mission_an_error_is_returned() {
        assert!(matches!(
            Mission::parse("\n  \n"),
            Err(SimulationError::InvalidMission(_))
        ));
    }
}
