/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables generic ODE solvers to work with the type by
/// stepping it via `derivative * delta`, where the derivative is with respect
/// to `Delta`. While typically used for time integration, `Delta` can represent
/// any independent variable.
///
/// Multi-stage schemes such as RK4 call [`step`](StepIntegrable::step) with
/// fractional deltas and with weighted combinations of derivatives, so the
/// implementation must be a plain linear update with no side effects.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: &f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: &[f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + derivative[i] * delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[derive(Debug, PartialEq)]
    struct Position(f64);
    struct Velocity(f64);

    impl StepIntegrable<f64> for Position {
        type Derivative = Velocity;

        fn step(&self, derivative: &Velocity, delta: f64) -> Self {
            Position(self.0 + derivative.0 * delta)
        }
    }

    #[test]
    fn step_newtype_state() {
        let pos = Position(0.0);
        let vel = Velocity(2.0);

        let next = pos.step(&vel, 0.5);

        assert_eq!(next, Position(1.0));
    }

    #[test]
    fn step_scalar() {
        let next = 3.0_f64.step(&-1.5, 2.0);
        assert_relative_eq!(next, 0.0);
    }

    #[test]
    fn step_array_state() {
        let state = [1.0, 2.0, 3.0];
        let deriv = [0.1, 0.2, 0.3];

        let next = state.step(&deriv, 10.0);

        assert_relative_eq!(next[0], 2.0);
        assert_relative_eq!(next[1], 4.0);
        assert_relative_eq!(next[2], 6.0);
    }

    #[test]
    fn zero_delta_leaves_state_unchanged() {
        let state = [5.0, -1.0];
        assert_eq!(state.step(&[100.0, 100.0], 0.0), state);
    }
}
