use std::{fmt, str::FromStr};

use epistep_core::OdeModel;
use thiserror::Error;

use crate::transient::{euler, rk4};

/// The stepping scheme used to advance the state between grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Explicit forward Euler, first order.
    Euler,

    /// Classic fixed-step Runge–Kutta, fourth order.
    RungeKutta4,
}

impl Method {
    /// Every supported method, in menu order.
    pub const ALL: [Method; 2] = [Method::Euler, Method::RungeKutta4];

    /// Advances `state` from `time` by one step of size `dt`.
    ///
    /// # Errors
    ///
    /// Returns the model's error if a derivative cannot be evaluated.
    pub fn step<M: OdeModel>(
        self,
        model: &M,
        state: &M::State,
        time: f64,
        dt: f64,
    ) -> Result<M::State, M::Error> {
        match self {
            Method::Euler => euler::step(model, state, time, dt),
            Method::RungeKutta4 => rk4::step(model, state, time, dt),
        }
    }

    /// Order of the global error, `p` in O(dtᵖ).
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::RungeKutta4 => 4,
        }
    }

    /// Model derivative evaluations per step.
    #[must_use]
    pub fn stages(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::RungeKutta4 => 4,
        }
    }

    /// Returns the display label, `"Euler"` or `"Runge-Kutta"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Euler => "Euler",
            Method::RungeKutta4 => "Runge-Kutta",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a method label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration method {0:?}, expected \"Euler\" or \"Runge-Kutta\"")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Parses a method label, ignoring case and surrounding whitespace.
    ///
    /// Accepts `Euler`, `Runge-Kutta`, `Runge-Kutta-4`, `RungeKutta4`, and `RK4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "euler" => Ok(Method::Euler),
            "rungekutta" | "rungekutta4" | "rk4" => Ok(Method::RungeKutta4),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_labels() {
        assert_eq!("Euler".parse(), Ok(Method::Euler));
        assert_eq!("Runge-Kutta".parse(), Ok(Method::RungeKutta4));
    }

    #[test]
    fn parsing_ignores_case_and_separators() {
        assert_eq!(" euler ".parse(), Ok(Method::Euler));
        assert_eq!("RK4".parse(), Ok(Method::RungeKutta4));
        assert_eq!("runge_kutta_4".parse(), Ok(Method::RungeKutta4));
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(
            "Heun".parse::<Method>(),
            Err(ParseMethodError("Heun".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }
}
