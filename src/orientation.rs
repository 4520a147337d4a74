use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Represents the direction a robot is facing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// Parses a single orientation letter, ignoring case.
    pub fn from_char(value: char) -> Option<Orientation> {
        match value.to_ascii_uppercase() {
            'N' => Some(Orientation::North),
            'E' => Some(Orientation::East),
            'S' => Some(Orientation::South),
            'W' => Some(Orientation::West),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }

    /// The orientation after a 90 degree counter-clockwise turn.
    pub fn left(&self) -> Orientation {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// The orientation after a 90 degree clockwise turn.
    pub fn right(&self) -> Orientation {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// The `(dx, dy)` of a single forward step. North is towards increasing `y`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        match rng.gen_range(0..4) {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }
}

/// A single robot command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Instruction {
    Left,
    Right,
    Forward,
}

impl Instruction {
    /// Only upper-case `L`, `R` and `F` are commands; anything else is skipped by the robot.
    pub fn from_char(value: char) -> Option<Instruction> {
        match value {
            'L' => Some(Instruction::Left),
            'R' => Some(Instruction::Right),
            'F' => Some(Instruction::Forward),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Forward => 'F',
        }
    }
}

impl Distribution<Instruction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Instruction {
        match rng.gen_range(0..3) {
            0 => Instruction::Left,
            1 => Instruction::Right,
            _ => Instruction::Forward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    #[test]
    fn when_turning_right_the_orientation_cycles_clockwise() {
        assert_eq!(Orientation::North.right(), Orientation::East);
        assert_eq!(Orientation::East.right(), Orientation::South);
        assert_eq!(Orientation::South.right(), Orientation::West);
        assert_eq!(Orientation::West.right(), Orientation::North);
    }

    #[test]
    fn when_turning_left_the_orientation_cycles_counter_clockwise() {
        assert_eq!(Orientation::North.left(), Orientation::West);
        assert_eq!(Orientation::West.left(), Orientation::South);
        assert_eq!(Orientation::South.left(), Orientation::East);
        assert_eq!(Orientation::East.left(), Orientation::North);
    }

    #[test]
    fn when_turning_left_then_right_the_orientation_is_unchanged() {
        for orientation in ALL {
            assert_eq!(orientation.left().right(), orientation);
            assert_eq!(orientation.right().left(), orientation);
        }
    }

    #[test]
    fn when_turning_four_times_in_the_same_direction_the_orientation_is_unchanged() {
        for orientation in ALL {
            assert_eq!(orientation.left().left().left().left(), orientation);
            assert_eq!(orientation.right().right().right().right(), orientation);
        }
    }

    #[test]
    fn when_parsing_orientation_letters_case_is_ignored() {
        assert_eq!(Orientation::from_char('n'), Some(Orientation::North));
        assert_eq!(Orientation::from_char('E'), Some(Orientation::East));
        assert_eq!(Orientation::from_char('s'), Some(Orientation::South));
        assert_eq!(Orientation::from_char('W'), Some(Orientation::West));
        assert_eq!(Orientation::from_char('X'), None);
    }

    #[test]
    fn when_stepping_forward_north_increases_y_and_east_increases_x() {
        assert_eq!(Orientation::North.delta(), (0, 1));
        assert_eq!(Orientation::South.delta(), (0, -1));
        assert_eq!(Orientation::East.delta(), (1, 0));
        assert_eq!(Orientation::West.delta(), (-1, 0));
    }

    #[test]
    fn when_parsing_instructions_unknown_characters_are_none() {
        assert_eq!(Instruction::from_char('L'), Some(Instruction::Left));
        assert_eq!(Instruction::from_char('R'), Some(Instruction::Right));
        assert_eq!(Instruction::from_char('F'), Some(Instruction::Forward));
        assert_eq!(Instruction::from_char('f'), None);
        assert_eq!(Instruction::from_char('X'), None);
    }

    #[test]
    fn when_sampling_orientations_every_variant_is_produced() {
        let mut rng = StdRng::seed_from_u64(0);
        let sampled: Vec<Orientation> = (0..200).map(|_| rng.gen()).collect();

        for orientation in ALL {
            assert!(sampled.contains(&orientation));
        }
    }
}
