//! Core traits and types for the epistep workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`StepIntegrable`] — a state that advances by `derivative * delta`
//! - [`Finite`] — a state that can report whether every component is finite
//! - [`OdeModel`] — a derivative function bundled with its parameters
//! - [`Observer`] — receives solver events and optionally returns control actions

mod finite;
mod model;
mod observer;
mod step;

pub use finite::Finite;
pub use model::OdeModel;
pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
