//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across solvers.
//!
//! # Example
//!
//! ```rust
//! use epistep_core::Observer;
//! use epistep_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops a run once it passes a wall time.
//! struct StopAfter {
//!     time: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() > self.time).then(A::stop_early)
//!     }
//! }
//! ```

use epistep_solvers::transient::fixed_step;

/// An event that carries the time of the state it reports.
pub trait HasTime {
    /// Returns the event's time.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<S> HasTime for fixed_step::Event<'_, S> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl CanStopEarly for fixed_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
