//! Vehicles and the geometry of a single piece.
//!
//! A `Vehicle` is an immutable value: identity, top-left cell, length class and
//! orientation. Sliding a vehicle produces a new `Vehicle`; nothing here mutates
//! an existing one.
use std::fmt;
use thiserror::Error;

/// Width and height of the (square) board.
pub const GRID_SIZE: usize = 6;

/// Id of the distinguished vehicle that has to reach the exit.
pub const GOAL_ID: char = 'X';

/// Ids of two-cell vehicles (cars). The goal vehicle is a car.
pub const CAR_IDS: [char; 12] = ['X', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K'];

/// Ids of three-cell vehicles (trucks).
pub const TRUCK_IDS: [char; 4] = ['O', 'P', 'Q', 'R'];

/// Reasons a vehicle can be rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidVehicle {
    #[error("invalid vehicle id '{0}'")]
    UnknownId(char),

    #[error("vehicle '{id}': x {x} is outside 0..={max}", max = GRID_SIZE - 1)]
    XOutOfRange { id: char, x: usize },

    #[error("vehicle '{id}': y {y} is outside 0..={max}", max = GRID_SIZE - 1)]
    YOutOfRange { id: char, y: usize },

    #[error("invalid orientation '{0}', expected 'H' or 'V'")]
    UnknownOrientation(char),

    #[error("vehicle '{id}' of length {length} at x {x} exceeds the board horizontally")]
    ExceedsHorizontally { id: char, x: usize, length: usize },

    #[error("vehicle '{id}' of length {length} at y {y} exceeds the board vertically")]
    ExceedsVertically { id: char, y: usize, length: usize },
}

/// The axis a vehicle lies on, and therefore the only axis it may slide along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The two directions a vehicle with this orientation can slide, in the
    /// order move generation tries them (backwards first, then forwards).
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }

    /// Map-file character for this orientation (`H` or `V`).
    pub fn to_char(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = InvalidVehicle;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'H' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            other => Err(InvalidVehicle::UnknownOrientation(other)),
        }
    }
}

/// A one-cell slide direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Orientation a vehicle must have to slide this way.
    pub fn axis(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }

    /// Single-letter label used in step lists (`L`, `R`, `U`, `D`).
    pub fn to_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Returns the length class for an id, or `None` if the id is not recognized.
pub fn length_for_id(id: char) -> Option<usize> {
    if CAR_IDS.contains(&id) {
        Some(2)
    } else if TRUCK_IDS.contains(&id) {
        Some(3)
    } else {
        None
    }
}

/// One piece on the board.
///
/// Equality and hashing cover every field; the length is derived from the id
/// and the orientation never changes once a vehicle is created, so in practice
/// two vehicles with the same id compare by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vehicle {
    id: char,
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
}

impl Vehicle {
    /// Creates a validated vehicle with its top-left cell at `(x, y)`.
    ///
    /// # Errors
    /// Returns the first violated constraint: unknown id, a coordinate outside
    /// `0..GRID_SIZE`, or a length that pushes the last cell off the board.
    ///
    /// # Examples
    /// ```
    /// use rush_hour_solver::vehicle::{Orientation, Vehicle};
    ///
    /// let truck = Vehicle::new('O', 0, 3, Orientation::Vertical).unwrap();
    /// assert_eq!(truck.length(), 3);
    /// assert!(Vehicle::new('O', 0, 4, Orientation::Vertical).is_err());
    /// ```
    pub fn new(id: char, x: usize, y: usize, orientation: Orientation) -> Result<Self, InvalidVehicle> {
        let length = length_for_id(id).ok_or(InvalidVehicle::UnknownId(id))?;
        if x >= GRID_SIZE {
            return Err(InvalidVehicle::XOutOfRange { id, x });
        }
        if y >= GRID_SIZE {
            return Err(InvalidVehicle::YOutOfRange { id, y });
        }
        match orientation {
            Orientation::Horizontal if x + length > GRID_SIZE => {
                Err(InvalidVehicle::ExceedsHorizontally { id, x, length })
            }
            Orientation::Vertical if y + length > GRID_SIZE => {
                Err(InvalidVehicle::ExceedsVertically { id, y, length })
            }
            _ => Ok(Vehicle {
                id,
                x,
                y,
                length,
                orientation,
            }),
        }
    }

    pub fn id(&self) -> char {
        self.id
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_goal(&self) -> bool {
        self.id == GOAL_ID
    }

    /// Iterates over the `(x, y)` cells this vehicle covers, front edge last.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.x + i, self.y),
            Orientation::Vertical => (self.x, self.y + i),
        })
    }

    /// The cell this vehicle would newly occupy after sliding one step in
    /// `direction`, or `None` if that cell is off the board or the direction is
    /// not along the vehicle's axis.
    pub fn entered_cell(&self, direction: Direction) -> Option<(usize, usize)> {
        if direction.axis() != self.orientation {
            return None;
        }
        match direction {
            Direction::Left => self.x.checked_sub(1).map(|x| (x, self.y)),
            Direction::Up => self.y.checked_sub(1).map(|y| (self.x, y)),
            Direction::Right => {
                let front = self.x + self.length;
                (front < GRID_SIZE).then_some((front, self.y))
            }
            Direction::Down => {
                let front = self.y + self.length;
                (front < GRID_SIZE).then_some((self.x, front))
            }
        }
    }

    /// Returns this vehicle shifted by one cell in `direction`.
    ///
    /// Returns `None` when the slide would leave the board or is across the
    /// vehicle's axis. Occupancy by other vehicles is not checked here.
    pub fn slid(&self, direction: Direction) -> Option<Vehicle> {
        self.entered_cell(direction)?;
        let (x, y) = match direction {
            Direction::Left => (self.x - 1, self.y),
            Direction::Right => (self.x + 1, self.y),
            Direction::Up => (self.x, self.y - 1),
            Direction::Down => (self.x, self.y + 1),
        };
        Some(Vehicle { x, y, ..*self })
    }
}

impl fmt::Display for Vehicle {
    /// Formats the vehicle in map-file notation, e.g. `X02H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.id, self.x, self.y, self.orientation.to_char())
    }
}
