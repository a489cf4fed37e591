//! Six-compartment SEIHRD epidemic model.
//!
//! Transmission couples Susceptible and Infectious through the mass-action
//! term `beta * S * I / N`. Every other transition is linear with a fixed rate:
//!
//! ```text
//! dS = -beta * S * I / N
//! dE =  beta * S * I / N - 0.1 * E
//! dI =  0.7 * E - 0.1 * I
//! dH =  0.03 * E - 0.1 * H
//! dR =  0.1 * I + 0.07 * H
//! dD =  0.03 * I
//! ```
//!
//! The flows into I and H do not balance the outflow from E, nor do the flows
//! into R and D balance the outflows from I and H, so the total population is
//! not conserved even by the exact solution. [`Trajectory::population_drift`]
//! reports how far a run moved from its starting total.
//!
//! # Example
//!
//! ```ignore
//! use epistep_models::seihrd::{CompartmentState, ModelParameters, integrate};
//! use epistep_solvers::transient::fixed_step::Method;
//!
//! let params = ModelParameters::from_initial(0.3, 0.05, 99.0, 1.0);
//! let initial = CompartmentState::initial(99.0, 1.0);
//! let (grid, trajectory) = integrate(initial, 0.0, 160.0, 0.1, Method::RungeKutta4, &params)?;
//! ```

mod compartment;
mod error;
mod model;
mod params;
mod simulate;
mod state;
mod trajectory;

pub use compartment::Compartment;
pub use error::{DomainError, SimulationError};
pub use model::{SeihrdModel, derivative, rates};
pub use params::ModelParameters;
pub use simulate::{Run, Scenario, integrate};
pub use state::{CompartmentState, Rates};
pub use trajectory::Trajectory;
