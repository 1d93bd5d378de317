//! Board states and move generation.
//!
//! This module defines:
//! - `Board`: an immutable snapshot of every vehicle on the grid, with its
//!   occupancy grid and canonical `StateKey` computed once at construction.
//! - `Move`: a one-cell slide of one vehicle, used both for enumeration and for
//!   labelling the steps of a solution.
//! - Successor generation: every legal one-cell slide of every vehicle, paired
//!   with its step cost (the moved vehicle's length).
use crate::vehicle::{Direction, InvalidVehicle, Orientation, Vehicle, GOAL_ID, GRID_SIZE};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Cell-by-cell view of a board, indexed `[y][x]`. `None` marks an empty cell.
pub type Occupancy = [[Option<char>; GRID_SIZE]; GRID_SIZE];

/// Board-level invariants that `Board::new` enforces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    InvalidVehicle(#[from] InvalidVehicle),

    #[error("vehicle id '{0}' appears more than once")]
    DuplicateId(char),

    #[error("vehicles '{first}' and '{second}' overlap at ({x}, {y})")]
    Overlap {
        first: char,
        second: char,
        x: usize,
        y: usize,
    },

    #[error("no goal vehicle '{id}' on the board", id = GOAL_ID)]
    MissingGoalVehicle,

    #[error("goal vehicle '{id}' must be horizontal", id = GOAL_ID)]
    VerticalGoalVehicle,
}

/// Canonical structural identity of a board: the `(id, x, y, orientation)`
/// tuple of every vehicle, sorted by id.
///
/// Used as the key of visited-state stores. Equal keys mean equal vehicle sets,
/// so a hash collision is always settled by comparing the full key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(Vec<(char, usize, usize, Orientation)>);

impl StateKey {
    fn from_sorted(vehicles: &[Vehicle]) -> Self {
        StateKey(
            vehicles
                .iter()
                .map(|v| (v.id(), v.x(), v.y(), v.orientation()))
                .collect(),
        )
    }
}

/// A one-cell slide of a single vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub vehicle: char,
    pub direction: Direction,
}

impl fmt::Display for Move {
    /// Formats the move as vehicle id followed by direction letter, e.g. `XR`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.vehicle, self.direction)
    }
}

/// One immutable configuration of all vehicles on the grid.
///
/// Vehicles are kept sorted by id, which fixes the order of successor
/// generation. Equality and hashing go through the `StateKey`.
#[derive(Clone, Debug)]
pub struct Board {
    vehicles: Vec<Vehicle>,
    grid: Occupancy,
    key: StateKey,
    goal_index: usize,
}

impl Board {
    /// Builds a board from already-validated vehicles.
    ///
    /// # Errors
    /// * `BoardError::DuplicateId` if two vehicles share an id.
    /// * `BoardError::Overlap` if two vehicles cover the same cell.
    /// * `BoardError::MissingGoalVehicle` / `BoardError::VerticalGoalVehicle` if the
    ///   distinguished vehicle is absent or not horizontal.
    ///
    /// # Examples
    /// ```
    /// use rush_hour_solver::engine::Board;
    /// use rush_hour_solver::vehicle::{Orientation, Vehicle};
    ///
    /// let board = Board::new(vec![
    ///     Vehicle::new('X', 0, 2, Orientation::Horizontal).unwrap(),
    ///     Vehicle::new('A', 3, 1, Orientation::Vertical).unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(board.occupancy()[2][3], Some('A'));
    /// assert!(!board.is_goal());
    /// ```
    pub fn new(vehicles: impl IntoIterator<Item = Vehicle>) -> Result<Self, BoardError> {
        let mut vehicles: Vec<Vehicle> = vehicles.into_iter().collect();
        vehicles.sort_by_key(|v| v.id());
        if let Some(pair) = vehicles.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(BoardError::DuplicateId(pair[0].id()));
        }

        let mut grid: Occupancy = [[None; GRID_SIZE]; GRID_SIZE];
        for v in &vehicles {
            for (x, y) in v.cells() {
                if let Some(first) = grid[y][x] {
                    return Err(BoardError::Overlap {
                        first,
                        second: v.id(),
                        x,
                        y,
                    });
                }
                grid[y][x] = Some(v.id());
            }
        }

        let goal_index = vehicles
            .iter()
            .position(Vehicle::is_goal)
            .ok_or(BoardError::MissingGoalVehicle)?;
        if vehicles[goal_index].orientation() != Orientation::Horizontal {
            return Err(BoardError::VerticalGoalVehicle);
        }

        let key = StateKey::from_sorted(&vehicles);
        Ok(Board {
            vehicles,
            grid,
            key,
            goal_index,
        })
    }

    /// Builds a successor from a copy of `self.vehicles` with one entry
    /// replaced. The caller has already checked the entered cell is free.
    fn with_replaced(&self, index: usize, moved: Vehicle) -> Self {
        let mut vehicles = self.vehicles.clone();
        let old = vehicles[index];
        vehicles[index] = moved;

        let mut grid = self.grid;
        for (x, y) in old.cells() {
            grid[y][x] = None;
        }
        for (x, y) in moved.cells() {
            grid[y][x] = Some(moved.id());
        }

        let key = StateKey::from_sorted(&vehicles);
        Board {
            vehicles,
            grid,
            key,
            goal_index: self.goal_index,
        }
    }

    /// Vehicles on the board, sorted by id.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Looks up a vehicle by id.
    pub fn vehicle(&self, id: char) -> Option<&Vehicle> {
        self.vehicles
            .binary_search_by_key(&id, |v| v.id())
            .ok()
            .map(|i| &self.vehicles[i])
    }

    pub fn goal_vehicle(&self) -> &Vehicle {
        &self.vehicles[self.goal_index]
    }

    /// The 6×6 grid of occupant ids, indexed `[y][x]`.
    pub fn occupancy(&self) -> &Occupancy {
        &self.grid
    }

    /// Occupant of cell `(x, y)`, or `None` if the cell is empty.
    ///
    /// # Panics
    /// Panics if `x` or `y` is outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.grid[y][x]
    }

    pub fn key(&self) -> &StateKey {
        &self.key
    }

    /// True iff the goal vehicle's rightmost cell is in the last column.
    pub fn is_goal(&self) -> bool {
        let goal = self.goal_vehicle();
        goal.orientation() == Orientation::Horizontal && goal.x() + goal.length() == GRID_SIZE
    }

    /// Checks whether the vehicle at `index` can slide one cell in `direction`
    /// and returns the resulting board.
    fn slide(&self, index: usize, direction: Direction) -> Option<Board> {
        let vehicle = &self.vehicles[index];
        let (x, y) = vehicle.entered_cell(direction)?;
        if self.grid[y][x].is_some() {
            return None;
        }
        let moved = vehicle.slid(direction)?;
        Some(self.with_replaced(index, moved))
    }

    /// Enumerates the legal moves of this board.
    ///
    /// Vehicles are visited in id order and, per vehicle, the backwards
    /// direction (left/up) comes before the forwards one (right/down). The same
    /// order is used by `successors`.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.vehicles.iter().flat_map(move |v| {
            v.orientation()
                .directions()
                .into_iter()
                .filter(move |&d| {
                    v.entered_cell(d)
                        .is_some_and(|(x, y)| self.grid[y][x].is_none())
                })
                .map(move |direction| Move {
                    vehicle: v.id(),
                    direction,
                })
        })
    }

    /// Applies `mv` if it is legal on this board.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let index = self
            .vehicles
            .binary_search_by_key(&mv.vehicle, |v| v.id())
            .ok()?;
        self.slide(index, mv.direction)
    }

    /// Lazily produces every successor board with its step cost.
    ///
    /// A successor differs from `self` in exactly one vehicle, shifted by one
    /// cell along its own axis into a cell that was empty. The step cost is the
    /// length of the vehicle that moved.
    ///
    /// # Examples
    /// ```
    /// use rush_hour_solver::utils::board_from_str_array;
    ///
    /// let board = board_from_str_array(&["......", "......", "XX...."]).unwrap();
    /// let successors: Vec<_> = board.successors().collect();
    /// assert_eq!(successors.len(), 1);
    /// assert_eq!(successors[0].1, 2);
    /// ```
    pub fn successors(&self) -> impl Iterator<Item = (Board, u32)> + '_ {
        self.vehicles.iter().enumerate().flat_map(move |(index, v)| {
            let cost = v.length() as u32;
            v.orientation()
                .directions()
                .into_iter()
                .filter_map(move |d| self.slide(index, d))
                .map(move |next| (next, cost))
        })
    }

    /// Recovers the move that turns `self` into `next`.
    ///
    /// Returns `None` unless exactly one vehicle differs, by exactly one cell
    /// along its own axis.
    pub fn diff(&self, next: &Board) -> Option<Move> {
        if self.vehicles.len() != next.vehicles.len() {
            return None;
        }
        let mut changed = self
            .vehicles
            .iter()
            .zip(&next.vehicles)
            .filter(|(a, b)| a != b);
        let (before, after) = changed.next()?;
        if changed.next().is_some()
            || before.id() != after.id()
            || before.orientation() != after.orientation()
        {
            return None;
        }
        before
            .orientation()
            .directions()
            .into_iter()
            .find(|&d| before.slid(d).as_ref() == Some(after))
            .map(|direction| Move {
                vehicle: before.id(),
                direction,
            })
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Board {
    /// Renders the grid one row per line, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.iter().enumerate() {
            let line: String = row.iter().map(|c| c.unwrap_or('.')).collect();
            if y + 1 < GRID_SIZE {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
