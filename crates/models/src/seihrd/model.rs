use epistep_core::OdeModel;

use super::{CompartmentState, DomainError, ModelParameters, Rates};

/// Fixed transition rates, per day.
pub mod rates {
    /// Outflow rate from Exposed.
    pub const EXPOSED_EXIT: f64 = 0.1;
    /// Flow rate from Exposed into Infectious.
    pub const SYMPTOM_ONSET: f64 = 0.7;
    /// Flow rate from Exposed into Hospitalized.
    pub const HOSPITALIZATION: f64 = 0.03;
    /// Outflow rate from Infectious.
    pub const INFECTIOUS_EXIT: f64 = 0.1;
    /// Flow rate from Infectious into Recovered.
    pub const RECOVERY: f64 = 0.1;
    /// Flow rate from Infectious into Dead.
    pub const DEATH: f64 = 0.03;
    /// Outflow rate from Hospitalized.
    pub const HOSPITAL_EXIT: f64 = 0.1;
    /// Flow rate from Hospitalized into Recovered.
    pub const HOSPITAL_RECOVERY: f64 = 0.07;
}

/// Computes the SEIHRD derivative at `state`.
///
/// The model is autonomous, so `_time` only completes the ODE signature.
///
/// # Errors
///
/// Returns [`DomainError::ZeroPopulation`] if `params.population` is zero.
pub fn derivative(
    state: &CompartmentState,
    _time: f64,
    params: &ModelParameters,
) -> Result<Rates, DomainError> {
    if params.population == 0.0 {
        return Err(DomainError::ZeroPopulation);
    }

    let [s, e, i, h, _r, _d] = state.values();
    let infection = params.beta * s * i / params.population;

    Ok(Rates::from([
        -infection,
        infection - rates::EXPOSED_EXIT * e,
        rates::SYMPTOM_ONSET * e - rates::INFECTIOUS_EXIT * i,
        rates::HOSPITALIZATION * e - rates::HOSPITAL_EXIT * h,
        rates::RECOVERY * i + rates::HOSPITAL_RECOVERY * h,
        rates::DEATH * i,
    ]))
}

/// The SEIHRD right-hand side bound to one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeihrdModel {
    params: ModelParameters,
}

impl SeihrdModel {
    #[must_use]
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }
}

impl OdeModel for SeihrdModel {
    type State = CompartmentState;
    type Error = DomainError;

    fn derivative(&self, state: &CompartmentState, time: f64) -> Result<Rates, DomainError> {
        derivative(state, time, &self.params)
    }
}
