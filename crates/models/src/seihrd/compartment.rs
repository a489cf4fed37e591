use std::fmt;

/// A named subpopulation of the SEIHRD model.
///
/// The discriminant is the compartment's position in a
/// [`CompartmentState`](super::CompartmentState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compartment {
    Susceptible = 0,
    Exposed = 1,
    Infectious = 2,
    Hospitalized = 3,
    Recovered = 4,
    Dead = 5,
}

impl Compartment {
    /// Number of compartments.
    pub const COUNT: usize = 6;

    /// All compartments in state order.
    pub const ALL: [Compartment; Self::COUNT] = [
        Compartment::Susceptible,
        Compartment::Exposed,
        Compartment::Infectious,
        Compartment::Hospitalized,
        Compartment::Recovered,
        Compartment::Dead,
    ];

    /// Position of this compartment in a state vector.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Series name used in charts and exported tables.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Compartment::Susceptible => "Susceptible",
            Compartment::Exposed => "Exposed",
            Compartment::Infectious => "Infectious",
            Compartment::Hospitalized => "Hospitalized",
            Compartment::Recovered => "Recovered",
            Compartment::Dead => "Dead",
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
