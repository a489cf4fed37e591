/// A value whose components can be checked for NaN or infinity.
///
/// Solvers use this to stop at the first step that produces a non-finite
/// state instead of carrying NaNs through the rest of a run.
pub trait Finite {
    /// Returns `true` if every component is finite.
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<const N: usize> Finite for [f64; N] {
    fn is_finite(&self) -> bool {
        self.iter().all(|x| f64::is_finite(*x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_report_any_bad_component() {
        let good: [f64; 3] = [0.0, 1.0, -2.5];
        let nan: [f64; 3] = [0.0, f64::NAN, 1.0];
        let inf: [f64; 1] = [f64::NEG_INFINITY];

        assert!(Finite::is_finite(&good));
        assert!(!Finite::is_finite(&nan));
        assert!(!Finite::is_finite(&inf));
    }

    #[test]
    fn empty_array_is_finite() {
        let empty: [f64; 0] = [];
        assert!(Finite::is_finite(&empty));
    }
}
