use std::ops::Index;

use epistep_core::{Finite, StepIntegrable};

use super::Compartment;

/// Population of each compartment at one instant.
///
/// Values are ordered as [`Compartment::ALL`]. They are ordinary reals: large
/// steps can drive a compartment negative, and nothing here clamps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompartmentState([f64; Compartment::COUNT]);

/// Time derivative of a [`CompartmentState`], in people per day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates([f64; Compartment::COUNT]);

impl CompartmentState {
    /// Creates a state from per-compartment populations.
    #[must_use]
    pub fn new(
        susceptible: f64,
        exposed: f64,
        infectious: f64,
        hospitalized: f64,
        recovered: f64,
        dead: f64,
    ) -> Self {
        Self([
            susceptible,
            exposed,
            infectious,
            hospitalized,
            recovered,
            dead,
        ])
    }

    /// Creates the outbreak start state `[s0, 0, i0, 0, 0, 0]`.
    #[must_use]
    pub fn initial(susceptible: f64, infectious: f64) -> Self {
        Self::new(susceptible, 0.0, infectious, 0.0, 0.0, 0.0)
    }

    /// Returns the values in compartment order.
    #[must_use]
    pub fn values(&self) -> [f64; Compartment::COUNT] {
        self.0
    }

    /// Returns the population of one compartment.
    #[must_use]
    pub fn get(&self, compartment: Compartment) -> f64 {
        self.0[compartment.index()]
    }

    /// Sum over all compartments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns the first compartment holding a negative value, if any.
    #[must_use]
    pub fn first_negative(&self) -> Option<Compartment> {
        Compartment::ALL.into_iter().find(|&c| self.get(c) < 0.0)
    }
}

impl From<[f64; Compartment::COUNT]> for CompartmentState {
    fn from(values: [f64; Compartment::COUNT]) -> Self {
        Self(values)
    }
}

impl AsRef<[f64; Compartment::COUNT]> for CompartmentState {
    fn as_ref(&self) -> &[f64; Compartment::COUNT] {
        &self.0
    }
}

impl Index<Compartment> for CompartmentState {
    type Output = f64;

    fn index(&self, compartment: Compartment) -> &f64 {
        &self.0[compartment.index()]
    }
}

impl StepIntegrable<f64> for CompartmentState {
    type Derivative = Rates;

    fn step(&self, derivative: &Rates, delta: f64) -> Self {
        Self(self.0.step(&derivative.0, delta))
    }
}

impl Finite for CompartmentState {
    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Rates {
    /// Returns the rates in compartment order.
    #[must_use]
    pub fn values(&self) -> [f64; Compartment::COUNT] {
        self.0
    }

    /// Net rate of change of the total population.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl From<[f64; Compartment::COUNT]> for Rates {
    fn from(values: [f64; Compartment::COUNT]) -> Self {
        Self(values)
    }
}

impl Index<Compartment> for Rates {
    type Output = f64;

    fn index(&self, compartment: Compartment) -> &f64 {
        &self.0[compartment.index()]
    }
}
