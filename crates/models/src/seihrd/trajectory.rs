use std::ops::Index;

use super::{Compartment, CompartmentState};

/// The state at every grid point of a run, starting with the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<CompartmentState>,
}

impl Trajectory {
    /// Wraps the states produced by a solver.
    #[must_use]
    pub fn new(states: Vec<CompartmentState>) -> Self {
        Self { states }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn states(&self) -> &[CompartmentState] {
        &self.states
    }

    /// Returns the final state.
    #[must_use]
    pub fn last(&self) -> Option<&CompartmentState> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompartmentState> {
        self.states.iter()
    }

    /// Values of one compartment over the whole run.
    #[must_use]
    pub fn series(&self, compartment: Compartment) -> Vec<f64> {
        self.states.iter().map(|state| state[compartment]).collect()
    }

    /// Every compartment's series, in [`Compartment::ALL`] order.
    #[must_use]
    pub fn all_series(&self) -> [(Compartment, Vec<f64>); Compartment::COUNT] {
        Compartment::ALL.map(|compartment| (compartment, self.series(compartment)))
    }

    /// Total population at each grid point.
    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.states.iter().map(CompartmentState::total).collect()
    }

    /// Largest absolute difference between any point's total and `population`.
    ///
    /// This is a diagnostic only; nothing in a run enforces conservation.
    #[must_use]
    pub fn population_drift(&self, population: f64) -> f64 {
        self.states
            .iter()
            .map(|state| (state.total() - population).abs())
            .fold(0.0, f64::max)
    }

    /// Index and compartment of the first negative value in the run.
    #[must_use]
    pub fn first_negative(&self) -> Option<(usize, Compartment)> {
        self.states
            .iter()
            .enumerate()
            .find_map(|(n, state)| state.first_negative().map(|c| (n, c)))
    }
}

impl Index<usize> for Trajectory {
    type Output = CompartmentState;

    fn index(&self, index: usize) -> &CompartmentState {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a CompartmentState;
    type IntoIter = std::slice::Iter<'a, CompartmentState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
