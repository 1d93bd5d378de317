use crate::engine::{Board, BoardError};
use crate::vehicle::{InvalidVehicle, Orientation, Vehicle, GRID_SIZE};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors produced while turning text into a `Board`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected four characters <id><x><y><orientation>, found {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: {source}")]
    InvalidVehicleLine {
        line: usize,
        #[source]
        source: InvalidVehicle,
    },

    #[error("invalid number of rows, expected at most {max}, found {0}", max = GRID_SIZE)]
    TooManyRows(usize),

    #[error("row {row} is too long, expected at most {max} characters, found {len}", max = GRID_SIZE)]
    RowTooLong { row: usize, len: usize },

    #[error("vehicle '{0}' does not cover a straight run of cells")]
    NotARun(char),

    #[error(transparent)]
    InvalidVehicle(#[from] InvalidVehicle),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a board in map-file notation.
///
/// Each non-blank line describes one vehicle as four characters: id, x, y and
/// orientation (`H` or `V`), e.g. `X02H` for the goal car at the left edge of
/// row 2. Surrounding whitespace is ignored.
///
/// # Errors
/// A `ParseError` naming the offending line, or the board invariant that fails
/// once all vehicles are read.
///
/// # Examples
/// ```
/// use rush_hour_solver::utils::board_from_map_str;
///
/// let board = board_from_map_str("X02H\nA21V\n").unwrap();
/// assert_eq!(board.vehicles().len(), 2);
/// assert!(board_from_map_str("X02").is_err());
/// ```
pub fn board_from_map_str(text: &str) -> Result<Board, ParseError> {
    let mut vehicles = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        vehicles.push(parse_vehicle_line(i + 1, line)?);
    }
    Ok(Board::new(vehicles)?)
}

/// Reads and parses a map file, see `board_from_map_str`.
pub fn board_from_map_file(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    let content = fs::read_to_string(path)?;
    board_from_map_str(&content)
}

fn parse_vehicle_line(line: usize, text: &str) -> Result<Vehicle, ParseError> {
    let malformed = || ParseError::MalformedLine {
        line,
        text: text.to_string(),
    };
    let chars: Vec<char> = text.chars().collect();
    let &[id, x, y, orientation] = chars.as_slice() else {
        return Err(malformed());
    };
    let x = x.to_digit(10).ok_or_else(malformed)? as usize;
    let y = y.to_digit(10).ok_or_else(malformed)? as usize;
    Orientation::try_from(orientation)
        .and_then(|o| Vehicle::new(id, x, y, o))
        .map_err(|source| ParseError::InvalidVehicleLine { line, source })
}

/// Parses an array of row strings into a `Board`.
///
/// Each string is one row, starting from row 0; `.` (or a space) is an empty
/// cell and any other character is a cell of the vehicle with that id. Missing
/// rows and short rows are treated as empty. A vehicle's orientation is taken
/// from the direction its cells run, and its cells must form exactly the run
/// its id's length class implies.
///
/// # Examples
/// ```
/// use rush_hour_solver::utils::board_from_str_array;
/// use rush_hour_solver::vehicle::Orientation;
///
/// let board = board_from_str_array(&[
///     "...A..",
///     "...A..",
///     ".XX...",
/// ])
/// .unwrap();
/// assert_eq!(board.vehicle('A').unwrap().orientation(), Orientation::Vertical);
/// assert_eq!(board.cell(2, 2), Some('X'));
///
/// assert!(board_from_str_array(&["XX?..."]).is_err());
/// ```
pub fn board_from_str_array(rows: &[&str]) -> Result<Board, ParseError> {
    if rows.len() > GRID_SIZE {
        return Err(ParseError::TooManyRows(rows.len()));
    }

    // id -> covered cells, in row-major order
    let mut cells: BTreeMap<char, Vec<(usize, usize)>> = BTreeMap::new();
    for (y, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len > GRID_SIZE {
            return Err(ParseError::RowTooLong { row: y, len });
        }
        for (x, c) in row.chars().enumerate() {
            if c != '.' && c != ' ' {
                cells.entry(c).or_default().push((x, y));
            }
        }
    }

    let mut vehicles = Vec::with_capacity(cells.len());
    for (id, run) in cells {
        let (x, y) = run[0];
        let horizontal = run.iter().all(|&(_, cy)| cy == y);
        let vertical = run.iter().all(|&(cx, _)| cx == x);
        let orientation = match (horizontal, vertical) {
            // A lone cell has no direction; the run check below rejects it.
            (true, _) => Orientation::Horizontal,
            (false, true) => Orientation::Vertical,
            (false, false) => return Err(ParseError::NotARun(id)),
        };
        let vehicle = Vehicle::new(id, x, y, orientation)?;
        if !vehicle.cells().eq(run.iter().copied()) {
            return Err(ParseError::NotARun(id));
        }
        vehicles.push(vehicle);
    }
    Ok(Board::new(vehicles)?)
}
