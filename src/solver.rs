//! State-space search over `Board`s.
//!
//! Four strategies share one contract:
//! - the goal test runs when a state is taken off the frontier, not when it is
//!   pushed;
//! - a state is expanded at most once per search, the first time it is taken
//!   off the frontier (depth-limited DFS relaxes this, see `dfs`);
//! - every frontier entry carries its own path from the initial board, so a
//!   solution is read straight off the entry that reached the goal.
//!
//! Boards are immutable and shared between the frontier, the paths and the
//! results through `Rc`.
use crate::engine::{Board, Move, StateKey};
use crate::heuristics;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, trace};

/// Default bound on path length (counted in states, so 24 moves) for BFS.
pub const DEFAULT_MAX_DEPTH: usize = 25;

/// The available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Breadth-first, minimal move count.
    Bfs,
    /// Depth-first, no optimality guarantee.
    Dfs,
    /// Uniform-cost, minimal total vehicle-length cost.
    Ucs,
    /// A* with the blocking-vehicles heuristic, cheapest solution only.
    Astar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Ucs => "UCS",
            Strategy::Astar => "A*",
        })
    }
}

/// One path from the initial board to a goal board, both inclusive.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Every state along the path. Consecutive states differ by one one-cell move.
    pub path: Vec<Rc<Board>>,
    /// Sum of the lengths of the vehicles moved along the path.
    pub cost: u32,
}

impl Solution {
    /// Number of moves in this solution (one less than the number of states).
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The moves that take each state to the next, e.g. `AU`, `XR`.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].diff(&pair[1]))
            .collect()
    }

    /// The goal board this solution ends on.
    pub fn final_board(&self) -> Option<&Board> {
        self.path.last().map(|b| b.as_ref())
    }
}

/// What one search invocation found.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub strategy: Strategy,
    /// Keys of every state that was expanded or goal-tested.
    pub visited: HashSet<StateKey>,
    /// Solutions in the order they were found. Empty when none exists within
    /// the bound.
    pub solutions: Vec<Solution>,
    /// Frontier entries taken off the frontier, keyed by path length.
    pub depth_states: BTreeMap<usize, usize>,
    /// Successor states produced by move generation.
    pub generated: usize,
}

impl SearchResult {
    fn new(strategy: Strategy) -> Self {
        SearchResult {
            strategy,
            visited: HashSet::new(),
            solutions: Vec::new(),
            depth_states: BTreeMap::new(),
            generated: 0,
        }
    }

    /// The first solution found.
    pub fn first(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// The solution with the lowest cost; the earliest one wins ties.
    pub fn cheapest(&self) -> Option<&Solution> {
        self.solutions.iter().min_by_key(|s| s.cost)
    }

    fn record_depth(&mut self, depth: usize) {
        *self.depth_states.entry(depth).or_insert(0) += 1;
    }

    fn push_solution(&mut self, node: Node) {
        debug!(
            strategy = %self.strategy,
            steps = node.path.len() - 1,
            cost = node.cost,
            "solution found"
        );
        self.solutions.push(node.into_solution());
    }

    fn finish(self) -> Self {
        info!(
            strategy = %self.strategy,
            visited = self.visited.len(),
            generated = self.generated,
            solutions = self.solutions.len(),
            first_cost = ?self.first().map(|s| s.cost),
            "search finished"
        );
        self
    }
}

/// A frontier entry: a board, the path that reached it and that path's cost.
#[derive(Clone, Debug)]
struct Node {
    board: Rc<Board>,
    path: Vec<Rc<Board>>,
    cost: u32,
}

impl Node {
    fn root(initial: &Board) -> Self {
        let board = Rc::new(initial.clone());
        Node {
            path: vec![Rc::clone(&board)],
            board,
            cost: 0,
        }
    }

    /// Path length in states.
    fn depth(&self) -> usize {
        self.path.len()
    }

    fn child(&self, board: Board, step_cost: u32) -> Self {
        let board = Rc::new(board);
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(Rc::clone(&board));
        Node {
            board,
            path,
            cost: self.cost + step_cost,
        }
    }

    fn into_solution(self) -> Solution {
        Solution {
            path: self.path,
            cost: self.cost,
        }
    }
}

/// Breadth-first search bounded by `max_depth` states per path.
///
/// Every goal state found at the depth of the first solution is returned, so
/// all solutions share the minimal move count. Search stops as soon as the
/// frontier moves past that depth. Successors are not generated for states
/// whose path already holds `max_depth` states.
///
/// # Examples
/// ```
/// use rush_hour_solver::solver::{bfs, DEFAULT_MAX_DEPTH};
/// use rush_hour_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["......", "...A..", "XX.A.."]).unwrap();
/// let result = bfs(&board, DEFAULT_MAX_DEPTH);
/// let first = result.first().unwrap();
/// let labels: Vec<String> = first.moves().iter().map(|m| m.to_string()).collect();
/// assert_eq!(labels, ["AU", "XR", "XR", "XR", "XR"]);
/// assert_eq!(first.cost, 10);
/// ```
pub fn bfs(initial: &Board, max_depth: usize) -> SearchResult {
    info!(strategy = %Strategy::Bfs, max_depth, "search started");
    let mut result = SearchResult::new(Strategy::Bfs);
    let mut queue = VecDeque::new();
    queue.push_back(Node::root(initial));
    let mut solution_depth: Option<usize> = None;

    while let Some(node) = queue.pop_front() {
        let depth = node.depth();
        if solution_depth.is_some_and(|d| depth > d) {
            break;
        }
        result.record_depth(depth);
        if !result.visited.insert(node.board.key().clone()) {
            continue;
        }
        if node.board.is_goal() {
            solution_depth = Some(depth);
            result.push_solution(node);
            continue;
        }
        if depth >= max_depth {
            continue;
        }
        trace!(depth, frontier = queue.len(), "expanding");
        for (next, step_cost) in node.board.successors() {
            result.generated += 1;
            if !result.visited.contains(next.key()) {
                queue.push_back(node.child(next, step_cost));
            }
        }
    }
    result.finish()
}

/// Depth-first search.
///
/// With `max_depth` of `None` every state is expanded at most once and every
/// reachable goal state is reported, with whatever path reached it first.
///
/// With `Some(limit)`, paths are cut at `limit` states and the search remembers
/// the shallowest depth each state was reached at. A state reached again at a
/// strictly shallower depth is expanded again, so a goal first found through
/// a long detour has its path replaced by the shorter one.
///
/// Successors are pushed in reverse so they are popped in generation order.
pub fn dfs(initial: &Board, max_depth: Option<usize>) -> SearchResult {
    info!(strategy = %Strategy::Dfs, ?max_depth, "search started");
    match max_depth {
        None => dfs_exhaustive(initial),
        Some(limit) => dfs_limited(initial, limit),
    }
}

fn dfs_exhaustive(initial: &Board) -> SearchResult {
    let mut result = SearchResult::new(Strategy::Dfs);
    let mut stack = vec![Node::root(initial)];

    while let Some(node) = stack.pop() {
        result.record_depth(node.depth());
        if !result.visited.insert(node.board.key().clone()) {
            continue;
        }
        if node.board.is_goal() {
            result.push_solution(node);
            continue;
        }
        trace!(depth = node.depth(), frontier = stack.len(), "expanding");
        let mut children = Vec::new();
        for (next, step_cost) in node.board.successors() {
            result.generated += 1;
            if !result.visited.contains(next.key()) {
                children.push(node.child(next, step_cost));
            }
        }
        stack.extend(children.into_iter().rev());
    }
    result.finish()
}

fn dfs_limited(initial: &Board, limit: usize) -> SearchResult {
    let mut result = SearchResult::new(Strategy::Dfs);
    let mut shallowest: HashMap<StateKey, usize> = HashMap::new();
    // goal key -> index into result.solutions
    let mut goal_slots: HashMap<StateKey, usize> = HashMap::new();
    let mut stack = vec![Node::root(initial)];

    while let Some(node) = stack.pop() {
        let depth = node.depth();
        result.record_depth(depth);
        let key = node.board.key().clone();
        if shallowest.get(&key).is_some_and(|&seen| seen <= depth) {
            continue;
        }
        shallowest.insert(key.clone(), depth);

        if node.board.is_goal() {
            let known = goal_slots.get(&key).copied();
            match known {
                Some(slot) => {
                    debug!(depth, cost = node.cost, "shorter path to known goal");
                    result.solutions[slot] = node.into_solution();
                }
                None => {
                    goal_slots.insert(key, result.solutions.len());
                    result.push_solution(node);
                }
            }
            continue;
        }
        if depth >= limit {
            continue;
        }
        trace!(depth, frontier = stack.len(), "expanding");
        let mut children = Vec::new();
        for (next, step_cost) in node.board.successors() {
            result.generated += 1;
            let admit = shallowest
                .get(next.key())
                .map_or(true, |&seen| depth + 1 < seen);
            if admit {
                children.push(node.child(next, step_cost));
            }
        }
        stack.extend(children.into_iter().rev());
    }
    result.visited = shallowest.into_keys().collect();
    result.finish()
}

/// Priority-queue entry ordered so that `BinaryHeap` pops the lowest `f`, then
/// the lowest `g`, then the earliest insertion.
#[derive(Debug)]
struct Prioritized {
    f: u32,
    seq: u64,
    node: Node,
}

impl Prioritized {
    fn rank(&self) -> (u32, u32, u64) {
        (self.f, self.node.cost, self.seq)
    }
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for Prioritized {}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

fn best_first(
    strategy: Strategy,
    initial: &Board,
    max_depth: Option<usize>,
    heuristic: impl Fn(&Board) -> u32,
    stop_at_first: bool,
) -> SearchResult {
    let mut result = SearchResult::new(strategy);
    let mut heap = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(Prioritized {
        f: heuristic(initial),
        seq,
        node: Node::root(initial),
    });

    while let Some(Prioritized { node, .. }) = heap.pop() {
        let depth = node.depth();
        result.record_depth(depth);
        if !result.visited.insert(node.board.key().clone()) {
            continue;
        }
        if node.board.is_goal() {
            result.push_solution(node);
            if stop_at_first {
                break;
            }
            continue;
        }
        if max_depth.is_some_and(|limit| depth >= limit) {
            continue;
        }
        trace!(depth, cost = node.cost, frontier = heap.len(), "expanding");
        for (next, step_cost) in node.board.successors() {
            result.generated += 1;
            if result.visited.contains(next.key()) {
                continue;
            }
            seq += 1;
            let h = heuristic(&next);
            let child = node.child(next, step_cost);
            heap.push(Prioritized {
                f: child.cost + h,
                seq,
                node: child,
            });
        }
    }
    result.finish()
}

/// Uniform-cost search on accumulated vehicle-length cost.
///
/// The frontier is drained rather than stopping at the first goal: every goal
/// state taken off the frontier is reported, in non-decreasing cost order, and
/// each one's cost is minimal for that goal state. Ties are broken by insertion
/// order, which follows successor order.
pub fn ucs(initial: &Board, max_depth: Option<usize>) -> SearchResult {
    info!(strategy = %Strategy::Ucs, ?max_depth, "search started");
    best_first(Strategy::Ucs, initial, max_depth, heuristics::zero, false)
}

/// A* search with `heuristics::blocking_vehicles`.
///
/// Stops at the first goal taken off the frontier and returns it as the only
/// solution.
///
/// # Examples
/// ```
/// use rush_hour_solver::solver::{astar, ucs};
/// use rush_hour_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["......", "...A..", "XX.A.."]).unwrap();
/// let result = astar(&board, None);
/// assert_eq!(result.solutions.len(), 1);
/// assert_eq!(result.solutions[0].cost, ucs(&board, None).first().unwrap().cost);
/// ```
pub fn astar(initial: &Board, max_depth: Option<usize>) -> SearchResult {
    astar_with_heuristic(initial, max_depth, heuristics::blocking_vehicles)
}

/// A* search with a caller-supplied heuristic, ties broken by lower `g` then
/// insertion order.
///
/// The returned solution is cost-optimal when `heuristic` never overestimates
/// the remaining cost and never drops by more than a step's cost across one
/// move.
pub fn astar_with_heuristic(
    initial: &Board,
    max_depth: Option<usize>,
    heuristic: impl Fn(&Board) -> u32,
) -> SearchResult {
    info!(strategy = %Strategy::Astar, ?max_depth, "search started");
    best_first(Strategy::Astar, initial, max_depth, heuristic, true)
}

/// Runs `strategy` on `initial`.
///
/// BFS falls back to `DEFAULT_MAX_DEPTH` when `max_depth` is `None`; the other
/// strategies run unbounded.
pub fn solve(strategy: Strategy, initial: &Board, max_depth: Option<usize>) -> SearchResult {
    match strategy {
        Strategy::Bfs => bfs(initial, max_depth.unwrap_or(DEFAULT_MAX_DEPTH)),
        Strategy::Dfs => dfs(initial, max_depth),
        Strategy::Ucs => ucs(initial, max_depth),
        Strategy::Astar => astar(initial, max_depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;
    use crate::vehicle::Direction;

    const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::Dfs, Strategy::Ucs, Strategy::Astar];

    fn one_blocker() -> Board {
        board_from_str_array(&["......", "...A..", "XX.A.."]).unwrap()
    }

    /// Two equally short ways out: A up twice, or C left then A down.
    fn two_ways_out() -> Board {
        board_from_str_array(&["......", "......", "XX.A..", "...A..", "..CC.."]).unwrap()
    }

    fn classic() -> Board {
        board_from_str_array(&[
            "AA...O",
            "P..Q.O",
            "PXXQ.O",
            "P..Q..",
            "B...CC",
            "B.RRR.",
        ])
        .unwrap()
    }

    fn labels(solution: &Solution) -> Vec<String> {
        solution.moves().iter().map(|m| m.to_string()).collect()
    }

    fn assert_well_formed(solution: &Solution) {
        let first = &solution.path[0];
        assert!(solution.final_board().unwrap().is_goal());
        let mut cost = 0;
        for pair in solution.path.windows(2) {
            let mv = pair[0].diff(&pair[1]).expect("adjacent states differ by one move");
            let vehicle = pair[0].vehicle(mv.vehicle).unwrap();
            assert_eq!(mv.direction.axis(), vehicle.orientation());
            cost += vehicle.length() as u32;
        }
        assert_eq!(cost, solution.cost, "cost is the sum of moved lengths");
        assert_eq!(solution.moves().len(), solution.steps());
        assert_eq!(first.vehicles().len(), solution.final_board().unwrap().vehicles().len());
    }

    #[test]
    fn test_bfs_one_blocker() {
        let board = one_blocker();
        let result = bfs(&board, DEFAULT_MAX_DEPTH);
        assert_eq!(result.solutions.len(), 1);
        let solution = &result.solutions[0];
        assert_eq!(solution.path.len(), 6);
        assert_eq!(solution.steps(), 5);
        assert_eq!(labels(solution), ["AU", "XR", "XR", "XR", "XR"]);
        assert_eq!(solution.cost, 10);
        assert_eq!(*solution.path[0], board);
        assert_eq!(result.visited.len(), 16);
        assert_eq!(result.generated, 42);
        assert_well_formed(solution);
    }

    #[test]
    fn test_bfs_keeps_equal_length_solutions() {
        let result = bfs(&two_ways_out(), DEFAULT_MAX_DEPTH);
        assert_eq!(result.solutions.len(), 2);
        assert_eq!(labels(&result.solutions[0]), ["AU", "AU", "XR", "XR", "XR", "XR"]);
        assert_eq!(labels(&result.solutions[1]), ["CL", "AD", "XR", "XR", "XR", "XR"]);
        for s in &result.solutions {
            assert_eq!(s.steps(), 6);
            assert_eq!(s.cost, 12);
            assert_well_formed(s);
        }
        assert_ne!(
            result.solutions[0].final_board(),
            result.solutions[1].final_board(),
            "each goal state is reported once"
        );
        assert_eq!(result.visited.len(), 62);
    }

    #[test]
    fn test_bfs_depth_bound() {
        let board = two_ways_out();
        let cut = bfs(&board, 6);
        assert!(cut.solutions.is_empty(), "6 moves do not fit in 6 states");
        assert_eq!(cut.visited.len(), 51);
        assert!(cut.depth_states.keys().all(|&d| d <= 6));

        let exact = bfs(&board, 7);
        assert_eq!(exact.solutions.len(), 2);
    }

    #[test]
    fn test_bfs_depth_states() {
        let result = bfs(&one_blocker(), DEFAULT_MAX_DEPTH);
        assert_eq!(result.depth_states.get(&1), Some(&1));
        // From the start: A up, A down, X right.
        assert_eq!(result.depth_states.get(&2), Some(&3));
        let total: usize = result.depth_states.values().sum();
        assert!(total >= result.visited.len());
    }

    #[test]
    fn test_bfs_classic_layout() {
        let result = bfs(&classic(), DEFAULT_MAX_DEPTH);
        assert_eq!(result.solutions.len(), 1);
        let solution = &result.solutions[0];
        assert_eq!(solution.steps(), 16);
        assert_eq!(solution.cost, 40);
        assert_well_formed(solution);
        assert_eq!(result.visited.len(), 1072);
    }

    #[test]
    fn test_ucs_drains_all_goals_in_cost_order() {
        let result = ucs(&one_blocker(), None);
        let costs: Vec<u32> = result.solutions.iter().map(|s| s.cost).collect();
        assert_eq!(costs, [10, 12, 14]);
        assert_eq!(labels(result.first().unwrap()), ["AU", "XR", "XR", "XR", "XR"]);
        assert_eq!(result.visited.len(), 19);
        for s in &result.solutions {
            assert_well_formed(s);
        }
    }

    #[test]
    fn test_ucs_first_is_cheapest() {
        for board in [one_blocker(), two_ways_out(), classic()] {
            let result = ucs(&board, None);
            let first = result.first().unwrap();
            assert!(result.solutions.iter().all(|s| first.cost <= s.cost));
            assert_eq!(result.cheapest().unwrap().cost, first.cost);
            assert!(result.solutions.windows(2).all(|w| w[0].cost <= w[1].cost));
        }
        assert_eq!(ucs(&classic(), None).first().unwrap().cost, 40);
    }

    #[test]
    fn test_astar_returns_only_the_cheapest() {
        for board in [one_blocker(), two_ways_out(), classic()] {
            let astar_result = astar(&board, None);
            let ucs_result = ucs(&board, None);
            assert_eq!(astar_result.solutions.len(), 1);
            let solution = &astar_result.solutions[0];
            assert_well_formed(solution);
            assert_eq!(solution.cost, ucs_result.first().unwrap().cost);
            assert!(astar_result.visited.len() <= ucs_result.visited.len());
        }
        assert_eq!(astar(&one_blocker(), None).visited.len(), 14);
    }

    #[test]
    fn test_astar_with_zero_heuristic_matches_ucs_cost() {
        let board = two_ways_out();
        let result = astar_with_heuristic(&board, None, heuristics::zero);
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.solutions[0].cost, 12);
        assert_eq!(labels(&result.solutions[0]), ["AU", "AU", "XR", "XR", "XR", "XR"]);
    }

    #[test]
    fn test_dfs_exhaustive_finds_every_goal_state() {
        let result = dfs(&one_blocker(), None);
        assert_eq!(result.solutions.len(), 3);
        assert_eq!(result.visited.len(), 19);
        for s in &result.solutions {
            assert_well_formed(s);
        }
        // The first branch tried is A up, then X right, then back down.
        assert_eq!(result.first().unwrap().moves()[0].to_string(), "AU");
        assert!(result.first().unwrap().steps() > 5, "DFS is not move-optimal here");
    }

    #[test]
    fn test_dfs_limited_prefers_shallower_paths() {
        let board = one_blocker();
        let result = dfs(&board, Some(8));
        assert_eq!(result.solutions.len(), 3);
        assert!(result.solutions.iter().all(|s| s.path.len() <= 8));
        assert_eq!(result.solutions.iter().map(|s| s.steps()).min(), Some(5));
        assert_eq!(labels(&result.solutions[0]), ["AU", "XR", "XR", "XR", "XR"]);
        assert_eq!(result.visited.len(), 19);
        for s in &result.solutions {
            assert_well_formed(s);
        }
    }

    #[test]
    fn test_dfs_limited_respects_bound() {
        let result = dfs(&one_blocker(), Some(5));
        assert!(result.solutions.is_empty(), "5 moves need 6 states");
        assert!(result.depth_states.keys().all(|&d| d <= 5));
    }

    #[test]
    fn test_goal_at_exit_for_every_strategy() {
        let board = board_from_str_array(&["......", "...A..", "...AXX"]).unwrap();
        assert!(board.is_goal());
        for strategy in ALL {
            let result = solve(strategy, &board, None);
            assert_eq!(result.solutions.len(), 1, "{}", strategy);
            let solution = &result.solutions[0];
            assert_eq!(solution.path.len(), 1);
            assert_eq!(solution.cost, 0);
            assert!(solution.moves().is_empty());
            assert_eq!(result.visited.len(), 1, "{}", strategy);
        }
    }

    #[test]
    fn test_boxed_in_for_every_strategy() {
        let board = board_from_str_array(&[
            "AABBCC",
            "DDEEFF",
            "XXGGHH",
            "IIJJKK",
            "OOOPPP",
            "QQQRRR",
        ])
        .unwrap();
        for strategy in ALL {
            let result = solve(strategy, &board, None);
            assert!(result.solutions.is_empty(), "{}", strategy);
            assert_eq!(result.visited.len(), 1, "{}", strategy);
            assert_eq!(result.generated, 0);
        }
    }

    #[test]
    fn test_unsolvable_board_explores_everything() {
        // B sits on X's row and can never leave it.
        let board = board_from_str_array(&["......", "......", "XX..BB"]).unwrap();
        for strategy in ALL {
            let result = solve(strategy, &board, None);
            assert!(result.solutions.is_empty(), "{}", strategy);
            assert_eq!(result.visited.len(), 6, "{}", strategy);
        }
    }

    #[test]
    fn test_searches_are_deterministic() {
        let board = two_ways_out();
        for strategy in ALL {
            let a = solve(strategy, &board, Some(9));
            let b = solve(strategy, &board, Some(9));
            assert_eq!(a.visited, b.visited, "{}", strategy);
            assert_eq!(a.generated, b.generated);
            assert_eq!(a.depth_states, b.depth_states);
            let paths = |r: &SearchResult| -> Vec<Vec<Board>> {
                r.solutions
                    .iter()
                    .map(|s| s.path.iter().map(|b| (**b).clone()).collect())
                    .collect()
            };
            assert_eq!(paths(&a), paths(&b), "{}", strategy);
        }
    }

    #[test]
    fn test_solve_dispatch() {
        let board = one_blocker();
        assert_eq!(solve(Strategy::Bfs, &board, None).strategy, Strategy::Bfs);
        assert_eq!(solve(Strategy::Astar, &board, None).strategy, Strategy::Astar);
        assert_eq!(Strategy::Astar.to_string(), "A*");
        // BFS with no bound uses the default, which is ample here.
        assert_eq!(solve(Strategy::Bfs, &board, None).solutions.len(), 1);
    }

    #[test]
    fn test_solution_moves_replay() {
        let board = classic();
        let result = astar(&board, None);
        let solution = result.first().unwrap();
        let mut replay = board.clone();
        for mv in solution.moves() {
            replay = replay.apply(mv).expect("every step is legal");
        }
        assert!(replay.is_goal());
        assert_eq!(Some(&replay), solution.final_board());
        assert_eq!(solution.moves().last().unwrap().direction, Direction::Right);
    }
}
