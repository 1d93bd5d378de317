//! # Rush Hour Solver Library
//!
//! This library models the Rush Hour sliding-block puzzle on a 6x6 grid and
//! searches its state space for ways to drive the goal car `X` out of the
//! right-hand exit.
//!
//! It is used by the `rush_hour` binary, which loads a map file, runs one of
//! the search strategies and prints the resulting moves.
//!
//! ## Modules
//! - `vehicle`: `Vehicle`, `Orientation`, `Direction` and the id-to-length
//!   table, with validation at construction.
//! - `engine`: `Board` (an immutable board state with its occupancy grid and
//!   canonical key), legal-move enumeration and successor generation.
//! - `solver`: breadth-first, depth-first, uniform-cost and A* search, all
//!   returning a `SearchResult`.
//! - `heuristics`: the blocking-vehicles estimate used by A*.
//! - `utils`: parsing boards from map files and from row pictures.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
pub mod vehicle;
