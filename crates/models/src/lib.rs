//! Compartmental epidemic models for the epistep workspace.
//!
//! - [`seihrd`] — six-compartment model (Susceptible, Exposed, Infectious,
//!   Hospitalized, Recovered, Dead) with mass-action transmission, and the
//!   [`integrate`](seihrd::integrate) entry point that runs it over a time grid

pub mod seihrd;
