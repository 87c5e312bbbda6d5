use crate::core::types::Number;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Represents a interval of values. There may/not be a `start` and/or `end` bound.
/// Both bounds are inclusive.
///
/// # Requirements
/// It is a logic error for `start > end`. This requirement is not enforced.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (min, max) = value.into_inner();
        Self {
            start: Some(min),
            end: Some(max),
        }
    }
}

impl Interval<Number> {
    /// Everything in front of a ray's origin: `0..`
    pub const FORWARD: Self = Self {
        start: Some(0.0),
        end: None,
    };
}

impl<T: PartialOrd> Interval<T> {
    /// Checks if the given range `min..=max` overlaps with the bounds (`self`)
    pub fn range_overlaps(&self, min: &T, max: &T) -> bool {
        let low = match &self.start {
            Some(start) if start > min => start,
            _ => min,
        };
        let high = match &self.end {
            Some(end) if end < max => end,
            _ => max,
        };
        low <= high
    }

    pub fn contains(&self, item: &T) -> bool {
        match self {
            Self {
                start: Some(start),
                end: Some(end),
            } => start <= item && item <= end,
            Self {
                start: Some(start),
                end: None,
            } => start <= item,
            Self {
                start: None,
                end: Some(end),
            } => item <= end,
            Self { start: None, end: None } => true,
        }
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        write!(f, "..=")?;
        if let Some(end) = &self.end {
            write!(f, "{end}")?
        }
        Ok(())
    }
}
