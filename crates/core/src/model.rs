use crate::{DerivativeOf, StepIntegrable};

/// A system of ordinary differential equations in time.
///
/// The implementor owns whatever parameters the right-hand side needs, so a
/// solver only has to pass the current state and time. Models are expected
/// to be pure: the same state and time always yield the same derivative.
pub trait OdeModel {
    type State: StepIntegrable<f64>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the time derivative of `state` at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative is undefined for the given
    /// state or parameters.
    fn derivative(
        &self,
        state: &Self::State,
        time: f64,
    ) -> Result<DerivativeOf<Self::State, f64>, Self::Error>;
}
