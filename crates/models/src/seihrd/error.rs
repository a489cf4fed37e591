use epistep_solvers::transient::{RangeError, fixed_step};
use thiserror::Error;

/// The model or its trajectory left the domain where the equations are defined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("total population is zero, so the transmission term is undefined")]
    ZeroPopulation,

    #[error("non-finite population at step {step} (t = {time})")]
    NonFinite { step: usize, time: f64 },
}

/// Errors returned by [`integrate`](super::integrate).
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid time range")]
    InvalidRange(#[from] RangeError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A boxed model error that is not a [`DomainError`].
    ///
    /// [`integrate`](super::integrate) always runs [`SeihrdModel`](super::SeihrdModel),
    /// whose errors are unwrapped into [`SimulationError::Domain`], so it never
    /// returns this variant. It keeps the conversion from [`fixed_step::Error`]
    /// total for callers driving the solver with other models.
    #[error("solver failed")]
    Solver(#[source] fixed_step::Error),
}

impl From<fixed_step::Error> for SimulationError {
    fn from(err: fixed_step::Error) -> Self {
        match err {
            fixed_step::Error::NonFiniteState { step, time } => {
                Self::Domain(DomainError::NonFinite { step, time })
            }
            fixed_step::Error::Model { step, time, source } => {
                match source.downcast::<DomainError>() {
                    Ok(domain) => Self::Domain(*domain),
                    Err(source) => Self::Solver(fixed_step::Error::Model { step, time, source }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_state_becomes_domain_error() {
        let err = SimulationError::from(fixed_step::Error::NonFiniteState {
            step: 7,
            time: 0.7,
        });

        assert!(matches!(
            err,
            SimulationError::Domain(DomainError::NonFinite { step: 7, .. })
        ));
    }

    #[test]
    fn boxed_domain_error_is_unwrapped() {
        let err = SimulationError::from(fixed_step::Error::Model {
            step: 1,
            time: 0.0,
            source: Box::new(DomainError::ZeroPopulation),
        });

        assert!(matches!(
            err,
            SimulationError::Domain(DomainError::ZeroPopulation)
        ));
    }

    #[test]
    fn foreign_model_error_is_kept_as_solver_error() {
        let source = std::io::Error::other("boom");
        let err = SimulationError::from(fixed_step::Error::Model {
            step: 2,
            time: 1.0,
            source: Box::new(source),
        });

        assert!(matches!(
            err,
            SimulationError::Solver(fixed_step::Error::Model { step: 2, .. })
        ));
    }
}
