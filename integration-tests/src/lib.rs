//! Shared fixtures for the cross-crate tests.

use epistep_models::seihrd::{CompartmentState, ModelParameters, Trajectory, integrate};
use epistep_solvers::transient::fixed_step::Method;

/// The reference outbreak: 99 susceptible, 1 infectious, `beta = 0.3`.
#[must_use]
pub fn outbreak() -> (CompartmentState, ModelParameters) {
    (
        CompartmentState::initial(99.0, 1.0),
        ModelParameters::from_initial(0.3, 0.05, 99.0, 1.0),
    )
}

/// Runs the reference outbreak from `t = 0` to `tf`.
///
/// # Panics
///
/// Panics if the run fails, which only happens for an invalid `dt`.
#[must_use]
pub fn run_outbreak(tf: f64, dt: f64, method: Method) -> Trajectory {
    let (initial, params) = outbreak();
    let (_, trajectory) =
        integrate(initial, 0.0, tf, dt, method, &params).expect("reference outbreak should run");
    trajectory
}

/// Largest absolute difference between two states over all compartments.
#[must_use]
pub fn max_abs_diff(a: &CompartmentState, b: &CompartmentState) -> f64 {
    a.values()
        .iter()
        .zip(b.values())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
