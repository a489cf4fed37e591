use epistep_solvers::transient::{TimeGrid, fixed_step};
use log::{debug, warn};

use super::{
    CompartmentState, DomainError, ModelParameters, SeihrdModel, SimulationError, Trajectory,
};

/// Integrates the SEIHRD model from `initial` over `[t0, tf]` with step `dt`.
///
/// Returns the time grid and the state at each of its points. The grid and
/// trajectory always have the same length, and the first state is `initial`
/// unchanged.
///
/// Negative populations produced by large steps are kept as computed; the
/// first one is logged at `warn` level.
///
/// # Errors
///
/// - [`SimulationError::InvalidRange`] if `dt <= 0`, `tf < t0`, or a bound is
///   non-finite.
/// - [`SimulationError::Domain`] if the population is zero, or if a step
///   produces a non-finite value (with that step's index and time).
///
/// Range and population checks happen before any step is taken.
pub fn integrate(
    initial: CompartmentState,
    t0: f64,
    tf: f64,
    dt: f64,
    method: fixed_step::Method,
    params: &ModelParameters,
) -> Result<(TimeGrid, Trajectory), SimulationError> {
    let grid = TimeGrid::new(t0, tf, dt)?;

    if params.population == 0.0 {
        return Err(DomainError::ZeroPopulation.into());
    }

    let model = SeihrdModel::new(*params);
    let solution = fixed_step::solve_unobserved(&model, initial, &grid, method)?;
    let trajectory = Trajectory::new(solution.states);

    if let Some((step, compartment)) = trajectory.first_negative() {
        warn!(
            "{compartment} went negative at step {step} (t = {}); dt = {dt} may be too large for {method}",
            grid[step]
        );
    }

    debug!(
        "population drift over run: {}",
        trajectory.population_drift(params.population)
    );

    Ok((grid, trajectory))
}

/// A complete, validated set of run inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub t0: f64,
    pub tf: f64,
    pub dt: f64,
    pub beta: f64,
    pub gamma: f64,
    pub s0: f64,
    pub i0: f64,
    pub method: fixed_step::Method,
}

/// Output of a [`Scenario`] run.
#[derive(Debug, Clone)]
pub struct Run {
    pub params: ModelParameters,
    pub grid: TimeGrid,
    pub trajectory: Trajectory,
}

impl Scenario {
    /// Parameters derived from this scenario, with `N = s0 + i0`.
    #[must_use]
    pub fn params(&self) -> ModelParameters {
        ModelParameters::from_initial(self.beta, self.gamma, self.s0, self.i0)
    }

    /// Outbreak start state `[s0, 0, i0, 0, 0, 0]`.
    #[must_use]
    pub fn initial_state(&self) -> CompartmentState {
        CompartmentState::initial(self.s0, self.i0)
    }

    /// Runs the scenario.
    ///
    /// # Errors
    ///
    /// See [`integrate`].
    pub fn run(&self) -> Result<Run, SimulationError> {
        let params = self.params();
        let (grid, trajectory) = integrate(
            self.initial_state(),
            self.t0,
            self.tf,
            self.dt,
            self.method,
            &params,
        )?;

        Ok(Run {
            params,
            grid,
            trajectory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use epistep_solvers::transient::{RangeError, fixed_step::Method};

    use crate::seihrd::Compartment;

    fn scenario(method: Method) -> Scenario {
        Scenario {
            t0: 0.0,
            tf: 10.0,
            dt: 1.0,
            beta: 0.3,
            gamma: 0.05,
            s0: 99.0,
            i0: 1.0,
            method,
        }
    }

    #[test]
    fn grid_and_trajectory_have_equal_length() {
        for method in Method::ALL {
            let run = scenario(method).run().unwrap();

            assert_eq!(run.grid.len(), 11);
            assert_eq!(run.trajectory.len(), run.grid.len());
            assert_eq!(run.trajectory[0].values(), [99.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn first_euler_step_matches_hand_calculation() {
        let run = scenario(Method::Euler).run().unwrap();
        let first = run.trajectory[1];

        assert_relative_eq!(
            first[Compartment::Susceptible],
            99.0 - 0.297,
            epsilon = 1e-12
        );
        assert_relative_eq!(first[Compartment::Exposed], 0.297, epsilon = 1e-12);
        assert_relative_eq!(first[Compartment::Infectious], 0.9, epsilon = 1e-12);
        assert_relative_eq!(first[Compartment::Hospitalized], 0.0);
        assert_relative_eq!(first[Compartment::Recovered], 0.1, epsilon = 1e-12);
        assert_relative_eq!(first[Compartment::Dead], 0.03, epsilon = 1e-12);
    }

    #[test]
    fn population_is_derived_from_initial_groups() {
        let run = scenario(Method::Euler).run().unwrap();
        assert_relative_eq!(run.params.population, 100.0);
    }

    #[test]
    fn range_is_checked_before_population() {
        let bad = Scenario {
            dt: 0.0,
            s0: 0.0,
            i0: 0.0,
            ..scenario(Method::Euler)
        };

        assert!(matches!(
            bad.run(),
            Err(SimulationError::InvalidRange(RangeError::NonPositiveStep { .. }))
        ));
    }

    #[test]
    fn empty_population_fails() {
        let empty = Scenario {
            s0: 0.0,
            i0: 0.0,
            ..scenario(Method::RungeKutta4)
        };

        assert!(matches!(
            empty.run(),
            Err(SimulationError::Domain(DomainError::ZeroPopulation))
        ));
    }

    #[test]
    fn overflow_reports_step_and_time() {
        // A huge beta makes the transmission term overflow within a few steps.
        let wild = Scenario {
            beta: 1e200,
            ..scenario(Method::Euler)
        };

        match wild.run() {
            Err(SimulationError::Domain(DomainError::NonFinite { step, time })) => {
                assert!(step >= 1);
                assert_relative_eq!(time, f64::from(u32::try_from(step).unwrap()));
            }
            other => panic!("expected a non-finite domain error, got {other:?}"),
        }
    }
}
