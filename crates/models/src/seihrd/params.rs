/// Rate parameters fixed for the duration of a run.
///
/// `gamma` is carried along with the run but the derivative uses the fixed
/// transition rates in [`rates`](super::rates) instead, so changing it does
/// not change a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Infection rate (contacts per day times transmission probability).
    pub beta: f64,
    /// Recovery rate as entered; not used by the derivative.
    pub gamma: f64,
    /// Total population `N` in the mass-action term.
    pub population: f64,
}

impl ModelParameters {
    /// Creates parameters with `N = s0 + i0`.
    #[must_use]
    pub fn from_initial(beta: f64, gamma: f64, s0: f64, i0: f64) -> Self {
        Self {
            beta,
            gamma,
            population: s0 + i0,
        }
    }
}
