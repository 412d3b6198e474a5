use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidInterval {
    #[error("a range may not start below zero, got {min_km}")]
    NegativeMin { min_km: f64 },

    #[error("the upper bound {max_km} must be greater than the lower bound {min_km}")]
    EmptyRange { min_km: f64, max_km: f64 },

    #[error("range bounds must be finite, got {value}")]
    NonFiniteBound { value: f64 },
}

/// A distance range in kilometers, half-open: a point belongs to the range
/// when `min_km <= point < max_km`. `max_km = None` leaves the range open
/// upwards. The convention applies identically to overlap checks and
/// lookups, so adjacent tiers like `[0,100)` and `[100,200)` coexist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min_km: f64,
    max_km: Option<f64>,
}

impl Interval {
    pub fn new(min_km: f64, max_km: Option<f64>) -> Result<Self, InvalidInterval> {
        if !min_km.is_finite() {
            return Err(InvalidInterval::NonFiniteBound { value: min_km });
        }
        if min_km < 0.0 {
            return Err(InvalidInterval::NegativeMin { min_km });
        }
        if let Some(max_km) = max_km {
            if !max_km.is_finite() {
                return Err(InvalidInterval::NonFiniteBound { value: max_km });
            }
            if max_km <= min_km {
                return Err(InvalidInterval::EmptyRange { min_km, max_km });
            }
        }
        Ok(Interval { min_km, max_km })
    }

    pub fn bounded(min_km: f64, max_km: f64) -> Result<Self, InvalidInterval> {
        Interval::new(min_km, Some(max_km))
    }

    pub fn open_ended(min_km: f64) -> Result<Self, InvalidInterval> {
        Interval::new(min_km, None)
    }

    pub fn min_km(&self) -> f64 {
        self.min_km
    }

    pub fn max_km(&self) -> Option<f64> {
        self.max_km
    }

    pub fn is_open_ended(&self) -> bool {
        self.max_km.is_none()
    }

    pub fn contains(&self, point_km: f64) -> bool {
        point_km >= self.min_km
            && match self.max_km {
                Some(max_km) => point_km < max_km,
                None => true,
            }
    }

    /// Two ranges overlap unless one ends at or before the other begins. An
    /// open-ended range only stays clear of ranges entirely below it.
    pub fn overlaps(&self, other: &Interval) -> bool {
        let self_below = matches!(self.max_km, Some(max_km) if max_km <= other.min_km);
        let other_below = matches!(other.max_km, Some(max_km) if max_km <= self.min_km);
        !(self_below || other_below)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.max_km {
            Some(max_km) => write!(f, "{}..{}", self.min_km, max_km),
            None => write!(f, "{}..", self.min_km),
        }
    }
}
