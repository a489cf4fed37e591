//! Fixed-step explicit integration of ODE models.
//!
//! A run has three parts:
//!
//! - a [`TimeGrid`] of evenly spaced points, built and validated up front,
//! - a stepping scheme ([`euler::step`] or [`rk4::step`]) selected by
//!   [`fixed_step::Method`],
//! - the driving loop [`fixed_step::solve`], which advances the state from one
//!   grid point to the next and records every state.
//!
//! # Example
//!
//! ```ignore
//! use epistep_solvers::transient::{TimeGrid, fixed_step};
//!
//! let grid = TimeGrid::new(0.0, 10.0, 0.1)?;
//! let solution = fixed_step::solve_unobserved(&model, initial, &grid, fixed_step::Method::RungeKutta4)?;
//!
//! for (t, state) in grid.iter().zip(&solution.states) {
//!     println!("t={t}: {state:?}");
//! }
//! ```

pub mod euler;
pub mod fixed_step;
pub mod rk4;

mod grid;

pub use grid::{RangeError, TimeGrid};
