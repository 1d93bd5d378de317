use crate::engine::Board;
use crate::vehicle::GRID_SIZE;

/// Counts the vehicles standing between the goal vehicle and the exit.
///
/// Looks at every cell on the goal vehicle's row from just past its front edge
/// up to and including the last column, and counts each distinct occupant
/// once. A solved board scores 0.
///
/// Each blocker is charged 1 no matter how long it is or how far it has to
/// travel to clear the row. Under the length-weighted step cost every move
/// costs at least 2, so the estimate stays below the true remaining cost, but
/// it is a loose bound: it ignores the goal vehicle's own moves and any
/// vehicles that must be shuffled to make room for a blocker.
///
/// # Arguments
/// * `board`: The board to estimate.
///
/// # Returns
/// Number of distinct blocking vehicles as `u32`.
///
/// # Examples
/// ```
/// use rush_hour_solver::heuristics::blocking_vehicles;
/// use rush_hour_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&[
///     "......",
///     "...A.O",
///     "XX.A.O",
///     ".....O",
/// ])
/// .unwrap();
/// assert_eq!(blocking_vehicles(&board), 2);
/// ```
pub fn blocking_vehicles(board: &Board) -> u32 {
    let goal = board.goal_vehicle();
    let row = goal.y();
    let mut last_seen = None;
    let mut count = 0;
    for x in goal.x() + goal.length()..GRID_SIZE {
        if let Some(id) = board.cell(x, row) {
            // Cells of one horizontal blocker are contiguous.
            if last_seen != Some(id) {
                count += 1;
                last_seen = Some(id);
            }
        }
    }
    count
}

/// Heuristic that always answers 0. With it, A* degenerates to uniform-cost
/// search ordered by `g`.
pub fn zero(_board: &Board) -> u32 {
    0
}
