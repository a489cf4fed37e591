//! Fixed-step driver for ODE models.
//!
//! Advances a model across every point of a [`TimeGrid`] with the stepping
//! scheme chosen by [`Method`]:
//!
//! ```text
//! state_0     = initial
//! state_{n+1} = method.step(model, state_n, t_n, dt)
//! ```
//!
//! Each step depends on the previous one, so the loop is strictly
//! sequential. The state buffer is allocated once at the grid length.
//!
//! # Example
//!
//! ```ignore
//! use epistep_solvers::transient::{TimeGrid, fixed_step::{self, Method}};
//!
//! let grid = TimeGrid::new(0.0, 50.0, 0.1)?;
//! let solution = fixed_step::solve_unobserved(&model, initial, &grid, Method::Euler)?;
//!
//! assert_eq!(solution.states.len(), grid.len());
//! ```

mod action;
mod error;
mod event;
mod method;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use method::{Method, ParseMethodError};
pub use solution::{Solution, Status};

use epistep_core::{Finite, OdeModel, Observer};
use log::{debug, trace};

use crate::transient::TimeGrid;

/// Integrates `model` from `initial` across every point of `grid`.
///
/// # Algorithm
///
/// 1. Check the initial state and record it as step 0.
/// 2. For each following grid point:
///    - Advance the previous state from the previous grid time by `grid.dt()`
///      using `method`.
///    - Fail if any component of the new state is non-finite.
///    - Record the new state.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with every recorded state.
///
/// # Observer
///
/// The observer receives an [`Event`] for step 0 and after each integration
/// step, and may return [`Action::StopEarly`] to terminate early.
///
/// # Errors
///
/// Returns [`Error::Model`] if the model fails to produce a derivative, or
/// [`Error::NonFiniteState`] at the first step whose state contains NaN or an
/// infinity. No partial solution is returned on error.
pub fn solve<M, Obs>(
    model: &M,
    initial: M::State,
    grid: &TimeGrid,
    method: Method,
    mut observer: Obs,
) -> Result<Solution<M::State>, Error>
where
    M: OdeModel,
    M::State: Finite,
    Obs: for<'a> Observer<Event<'a, M::State>, Action>,
{
    let dt = grid.dt();
    let steps = grid.len() - 1;

    debug!(
        "starting {method} run: {} points from t = {} to t = {} (dt = {dt}, {} evaluations per step)",
        grid.len(),
        grid.start(),
        grid.end(),
        method.stages()
    );

    if !initial.is_finite() {
        return Err(Error::NonFiniteState {
            step: 0,
            time: grid.start(),
        });
    }

    let mut states = Vec::with_capacity(grid.len());
    states.push(initial);

    let event = Event {
        step: 0,
        time: grid.start(),
        state: &states[0],
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!("observer stopped the run before the first step");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            states,
            steps: 0,
        });
    }

    for step in 1..=steps {
        let time = grid[step - 1];
        let next = method
            .step(model, &states[step - 1], time, dt)
            .map_err(|err| Error::model(step, time, err))?;

        if !next.is_finite() {
            return Err(Error::NonFiniteState {
                step,
                time: grid[step],
            });
        }

        trace!("step {step} reached t = {}", grid[step]);
        states.push(next);

        let event = Event {
            step,
            time: grid[step],
            state: &states[step],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("observer stopped the run at step {step}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                states,
                steps: step,
            });
        }
    }

    debug!("{method} run complete after {steps} steps");

    Ok(Solution {
        status: Status::Complete,
        states,
        steps,
    })
}

/// Integrates `model` across `grid` without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model fails or a non-finite state appears.
pub fn solve_unobserved<M>(
    model: &M,
    initial: M::State,
    grid: &TimeGrid,
    method: Method,
) -> Result<Solution<M::State>, Error>
where
    M: OdeModel,
    M::State: Finite,
{
    solve(model, initial, grid, method, ())
}
