use serde::Serialize;
use std::collections::HashSet;

/// The bounds of the surface robots move on.
/// Valid coordinates are `0..=max_x` by `0..=max_y`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Grid {
    max_x: i32,
    max_y: i32,
}

impl Grid {
    /// Creates a grid, returning `None` when either dimension is negative.
    pub fn new(max_x: i32, max_y: i32) -> Option<Grid> {
        if max_x < 0 || max_y < 0 {
            return None;
        }

        Some(Grid { max_x, max_y })
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..=self.max_x).contains(&x) && (0..=self.max_y).contains(&y)
    }
}

/// The coordinates where robots were lost.
/// A scent only ever gets added; the whole set is replaced when a new grid is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scents {
    cells: HashSet<(i32, i32)>,
}

impl Scents {
    pub fn new() -> Scents {
        Scents::default()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    /// Records a scent. Returns `false` if the cell already had one.
    pub fn insert(&mut self, x: i32, y: i32) -> bool {
        self.cells.insert((x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All scented cells, sorted by `x` then `y`.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let mut cells: Vec<(i32, i32)> = self.cells.iter().copied().collect();
        cells.sort();
        cells
    }
}
