//! A crate for manipulating and solving the 3x3 Rubik's cube with an A* search over cubie states.
//!
//! ```rust
//! use astar_cube::{scramble, solve, solved_state};
//!
//! let (cube, moves) = scramble(4, 42);
//! let solution = solve(&cube).unwrap();
//! assert!(solution.len() <= moves.len());
//! assert_eq!(cube.apply_moves(&solution), solved_state());
//! ```

#[macro_use]
extern crate lazy_static;

/// Module containing functions for scrambling the cube.
pub mod scramble;

pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;
pub mod cubie;
pub mod facelet;
pub mod heuristic;
pub mod moves;
pub mod solver;

pub use crate::cubie::CubieCube;
pub use crate::error::Error;
pub use crate::moves::Move;
pub use crate::scramble::scramble;
pub use crate::solver::solve;

/// The solved cube, the goal of every search.
pub fn solved_state() -> CubieCube {
    CubieCube::default()
}
