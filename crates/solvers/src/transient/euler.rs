//! Explicit (forward) Euler stepping.
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n, t_n) * dt
//! ```
//!
//! First-order accurate: the local error is O(dt²) and the global error
//! O(dt). The scheme is only conditionally stable, so a step that is large
//! relative to the fastest rate in the model oscillates or diverges. That
//! behavior is left visible rather than damped.

use epistep_core::{OdeModel, StepIntegrable};

/// Advances `state` from `time` by one forward Euler step of size `dt`.
///
/// # Errors
///
/// Returns the model's error if the derivative cannot be evaluated.
pub fn step<M: OdeModel>(
    model: &M,
    state: &M::State,
    time: f64,
    dt: f64,
) -> Result<M::State, M::Error> {
    let derivative = model.derivative(state, time)?;
    Ok(state.step(&derivative, dt))
}
