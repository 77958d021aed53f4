//! Grid-local coordinates, facing orientations and the pure geometry between them

use std::fmt;

/// Zero-based grid-local cell position
///
/// Components are signed so that stepping off the edge of a grid yields a
/// representable value; the grid is responsible for rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Facing direction of a domino
///
/// The same value tags which way a domino faces when looking for collisions
/// and is the exact direction it slides during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Towards decreasing `y`
    Up,
    /// Towards increasing `x`
    Right,
    /// Towards increasing `y`
    Down,
    /// Towards decreasing `x`
    Left,
}

impl Orientation {
    /// All four orientations in clockwise order starting from `Up`
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The orientation pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Whether a domino with this facing lies horizontally
    ///
    /// Facing is perpendicular to the long axis: horizontal dominoes face up
    /// or down.
    pub const fn is_horizontal_facing(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Whether collisions are resolved from this side during a zap scan
    pub const fn is_outward(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    /// Unit step `(dx, dy)` in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// The coordinate one step away in the given direction
///
/// No bounds checking is performed.
pub const fn shift(coordinate: Coordinate, orientation: Orientation) -> Coordinate {
    let (dx, dy) = orientation.delta();
    Coordinate::new(coordinate.x + dx, coordinate.y + dy)
}

/// Recenter a coordinate for a grid that grew by one ring on every side
pub const fn translate(coordinate: Coordinate) -> Coordinate {
    Coordinate::new(coordinate.x + 1, coordinate.y + 1)
}

/// Cells of a horizontal domino anchored at its left cell
pub const fn horizontal_pair(coordinate: Coordinate) -> [Coordinate; 2] {
    [coordinate, shift(coordinate, Orientation::Right)]
}

/// Cells of a vertical domino anchored at its upper cell
pub const fn vertical_pair(coordinate: Coordinate) -> [Coordinate; 2] {
    [coordinate, shift(coordinate, Orientation::Down)]
}
