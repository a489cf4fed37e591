//! Numerical solvers for the epistep workspace.
//!
//! - [`transient`] — fixed-step explicit integration of [`OdeModel`]s over a
//!   [`TimeGrid`](transient::TimeGrid)
//!
//! [`OdeModel`]: epistep_core::OdeModel

pub mod transient;
