use std::ops::Index;

use thiserror::Error;

/// Errors returned when a time range cannot produce a grid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("step size must be greater than zero, got {dt}")]
    NonPositiveStep { dt: f64 },

    #[error("final time {tf} is before initial time {t0}")]
    Reversed { t0: f64, tf: f64 },

    #[error("time range contains a non-finite value: t0={t0}, tf={tf}, dt={dt}")]
    NonFinite { t0: f64, tf: f64, dt: f64 },

    #[error("time range needs {count} points, more than the limit of {}", TimeGrid::MAX_POINTS)]
    TooManyPoints { count: f64 },
}

/// Evenly spaced time points `t_n = t0 + n * dt`.
///
/// The grid starts at `t0` and reaches at least `tf`. Its length is
/// `ceil((tf + dt - t0) / dt)`, the same count `numpy.arange(t0, tf + dt, dt)`
/// produces, including the floating-point cases where that count picks up
/// one point beyond `tf`.
///
/// A grid always holds at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    dt: f64,
    points: Vec<f64>,
}

impl TimeGrid {
    /// Largest number of points a grid may hold.
    pub const MAX_POINTS: usize = 10_000_000;

    /// Builds the grid from `t0` to `tf` with step `dt`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if any bound is non-finite, if `dt <= 0`, if
    /// `tf < t0`, or if the range would need more than [`Self::MAX_POINTS`]
    /// points.
    pub fn new(t0: f64, tf: f64, dt: f64) -> Result<Self, RangeError> {
        if !(t0.is_finite() && tf.is_finite() && dt.is_finite()) {
            return Err(RangeError::NonFinite { t0, tf, dt });
        }
        if dt <= 0.0 {
            return Err(RangeError::NonPositiveStep { dt });
        }
        if tf < t0 {
            return Err(RangeError::Reversed { t0, tf });
        }

        let len = Self::point_count(t0, tf, dt)?;

        #[allow(clippy::cast_precision_loss)]
        let points = (0..len).map(|n| t0 + n as f64 * dt).collect();

        Ok(Self { dt, points })
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn point_count(t0: f64, tf: f64, dt: f64) -> Result<usize, RangeError> {
        let count = ((tf + dt - t0) / dt).ceil();

        if count > Self::MAX_POINTS as f64 {
            return Err(RangeError::TooManyPoints { count });
        }

        // `tf + dt` can round back to `tf` when dt is tiny next to tf.
        Ok((count as usize).max(1))
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the first point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Returns the last point, which is at or past the requested final time.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a grid holds at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

impl Index<usize> for TimeGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.points[index]
    }
}
