//! Classic fixed-step fourth-order Runge–Kutta stepping.
//!
//! ```text
//! k1 = f(x, t)
//! k2 = f(x + dt/2 * k1, t + dt/2)
//! k3 = f(x + dt/2 * k2, t + dt/2)
//! k4 = f(x + dt * k3, t + dt)
//! x_new = x + dt * (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! Fourth-order accurate: the local error is O(dt⁵) and the global error
//! O(dt⁴). Stable over a much wider range of step sizes than forward Euler,
//! but still explicit, with no error control.

use epistep_core::{OdeModel, StepIntegrable};

/// Advances `state` from `time` by one RK4 step of size `dt`.
///
/// The weighted average of the four stages is applied as four consecutive
/// linear steps (`dt/6`, `dt/3`, `dt/3`, `dt/6`), which only requires the
/// state to implement [`StepIntegrable`].
///
/// # Errors
///
/// Returns the model's error if any of the four stage derivatives cannot be
/// evaluated.
pub fn step<M: OdeModel>(
    model: &M,
    state: &M::State,
    time: f64,
    dt: f64,
) -> Result<M::State, M::Error> {
    let half = 0.5 * dt;
    let mid_time = time + half;

    let k1 = model.derivative(state, time)?;
    let k2 = model.derivative(&state.step(&k1, half), mid_time)?;
    let k3 = model.derivative(&state.step(&k2, half), mid_time)?;
    let k4 = model.derivative(&state.step(&k3, dt), time + dt)?;

    let sixth = dt / 6.0;
    let third = dt / 3.0;

    Ok(state
        .step(&k1, sixth)
        .step(&k2, third)
        .step(&k3, third)
        .step(&k4, sixth))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// y' = -y
    struct Decay;

    impl OdeModel for Decay {
        type State = f64;
        type Error = Infallible;

        fn derivative(&self, state: &f64, _time: f64) -> Result<f64, Infallible> {
            Ok(-state)
        }
    }

    /// y' = t²
    struct Quadratic;

    impl OdeModel for Quadratic {
        type State = f64;
        type Error = Infallible;

        fn derivative(&self, _state: &f64, time: f64) -> Result<f64, Infallible> {
            Ok(time * time)
        }
    }

    /// Harmonic oscillator: x' = v, v' = -x.
    struct Oscillator;

    impl OdeModel for Oscillator {
        type State = [f64; 2];
        type Error = Infallible;

        fn derivative(&self, state: &[f64; 2], _time: f64) -> Result<[f64; 2], Infallible> {
            Ok([state[1], -state[0]])
        }
    }

    #[test]
    fn linear_decay_matches_fourth_order_taylor_polynomial() {
        // For y' = -y one RK4 step reproduces exp(-h) through the h⁴ term.
        let h = 0.2_f64;
        let next = step(&Decay, &1.0, 0.0, h).unwrap();
        let taylor = 1.0 - h + h.powi(2) / 2.0 - h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(next, taylor, epsilon = 1e-14);
    }

    #[test]
    fn integrates_cubic_in_time_exactly() {
        // ∫₁³ t² dt = 26/3, and Simpson's rule is exact for this integrand.
        let next = step(&Quadratic, &0.0, 1.0, 2.0).unwrap();
        assert_relative_eq!(next, 26.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn oscillator_quarter_period_is_accurate() {
        let steps = 100;
        let dt = std::f64::consts::FRAC_PI_2 / f64::from(steps);

        let mut state = [1.0, 0.0];
        for n in 0..steps {
            state = step(&Oscillator, &state, f64::from(n) * dt, dt).unwrap();
        }

        // x(π/2) = cos(π/2) = 0, v(π/2) = -sin(π/2) = -1
        assert_relative_eq!(state[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(state[1], -1.0, epsilon = 1e-9);
    }
}
