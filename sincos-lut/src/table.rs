//! Parameters of the degree sweep and the samples it produces.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use thiserror::Error;

use crate::fixed::Fxp16;

/// Errors from constructing [`TableParams`].
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum TableError {
    /// The step has to move the degree counter toward `end`, otherwise the sweep never ends.
    #[error("Degree step must be positive, got {0}")]
    NonPositiveStep(i32),
}

/// Describes one lookup table: a circle of `radius` swept from `start` degrees (inclusive) to
/// `end` degrees (exclusive) in increments of `step`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TableParams {
    /// Scale of the unit circle, in whole Q8.8 units.
    pub radius: f64,
    /// First degree in the table.
    pub start: i32,
    /// One past the last degree that may appear in the table.
    pub end: i32,
    /// Degrees between consecutive samples.
    pub step: i32,
}

impl TableParams {
    /// Radius of the stock table.
    pub const DEFAULT_RADIUS: f64 = 16.0;
    /// First degree of the stock table.
    pub const DEFAULT_START: i32 = 0;
    /// End degree of the stock table.
    pub const DEFAULT_END: i32 = 180;
    /// Step of the stock table.
    pub const DEFAULT_STEP: i32 = 1;

    /// Create a new set of parameters, checking that the sweep terminates.
    pub fn new(radius: f64, start: i32, end: i32, step: i32) -> Result<Self, TableError> {
        if step <= 0 {
            return Err(TableError::NonPositiveStep(step));
        }
        Ok(Self {
            radius,
            start,
            end,
            step,
        })
    }

    /// Iterate over the samples of this table in degree order.
    pub fn samples(&self) -> Samples {
        Samples {
            radius: self.radius,
            next: if self.step > 0 { Some(self.start) } else { None },
            end: self.end,
            step: self.step,
        }
    }

    /// Number of samples [`samples`][Self::samples] yields.
    pub fn len(&self) -> usize {
        if self.step <= 0 || self.start >= self.end {
            return 0;
        }
        let span = self.end as i64 - self.start as i64;
        let step = self.step as i64;
        ((span + step - 1) / step) as usize
    }

    /// True if the sweep yields no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
            step: Self::DEFAULT_STEP,
        }
    }
}

/// One row of the table: the point on the circle for a single degree.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sample {
    /// The degree this sample was computed for.
    pub degree: i32,
    /// `radius * cos(rad + π)`.
    pub x: Fxp16,
    /// `radius * -sin(rad)`.
    pub y: Fxp16,
}

impl Sample {
    /// Compute the sample for `degree` on a circle of the given `radius`.
    ///
    /// The angle is rotated by half a turn for `x` and negated for `y`, so degree 0 lands on
    /// `(-radius, 0)` and degree 90 on `(0, -radius)`.
    pub fn at(radius: f64, degree: i32) -> Self {
        let rad = degree as f64 * PI / 180.0;
        let x = radius * (rad + PI).cos();
        let y = radius * -rad.sin();
        Self {
            degree,
            x: Fxp16::from_real(x),
            y: Fxp16::from_real(y),
        }
    }
}

/// Iterator over the [`Sample`]s of a [`TableParams`].
#[derive(Debug, Clone)]
pub struct Samples {
    radius: f64,
    /// Next degree to compute, or `None` once the sweep is finished.
    next: Option<i32>,
    end: i32,
    step: i32,
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let degree = self.next.filter(|&d| d < self.end)?;
        // Stop instead of wrapping if the counter would run off the end of i32.
        self.next = degree.checked_add(self.step);
        Some(Sample::at(self.radius, degree))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(start) => TableParams {
                radius: self.radius,
                start,
                end: self.end,
                step: self.step,
            }
            .len(),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples {}

impl FusedIterator for Samples {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn default_is_the_stock_table() {
        let params = TableParams::default();
        assert_eq!(params.radius, 16.0);
        assert_eq!(params.start, 0);
        assert_eq!(params.end, 180);
        assert_eq!(params.step, 1);
        assert_eq!(params, TableParams::new(16.0, 0, 180, 1).unwrap());
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            TableParams::new(16.0, 0, 180, 0),
            Err(TableError::NonPositiveStep(0))
        );
        assert_eq!(
            TableParams::new(16.0, 0, 180, -3),
            Err(TableError::NonPositiveStep(-3))
        );
    }

    #[test]
    fn non_positive_step_built_directly_is_empty() {
        let params = TableParams {
            step: 0,
            ..Default::default()
        };
        assert!(params.is_empty());
        assert_eq!(params.samples().count(), 0);
    }

    #[test]
    fn degree_zero() {
        let s = Sample::at(16.0, 0);
        assert_eq!(s.x.raw(), (-4096i32) as u32);
        assert_eq!(s.x.to_string(), "0xf000");
        assert_eq!(s.y.to_string(), "0x0000");
    }

    #[test]
    fn degree_ninety() {
        let s = Sample::at(16.0, 90);
        assert_eq!(s.x.to_string(), "0x0000");
        assert_eq!(s.y.to_string(), "0xf000");
    }

    #[test]
    fn degree_forty_five() {
        // 16 * cos(45°) * 256 = 2896.309..., both coordinates are negative.
        let s = Sample::at(16.0, 45);
        assert_eq!(s.x.raw(), (-2896i32) as u32);
        assert_eq!(s.y.raw(), (-2896i32) as u32);
        assert_eq!(s.x.to_string(), "0xf4b0");
    }

    #[test]
    fn counts() {
        assert_eq!(TableParams::default().len(), 180);
        assert_eq!(TableParams::default().samples().count(), 180);

        let by_two = TableParams::new(16.0, 0, 180, 2).unwrap();
        assert_eq!(by_two.len(), 90);
        assert_eq!(by_two.samples().count(), 90);

        let uneven = TableParams::new(16.0, 0, 10, 3).unwrap();
        let degrees: Vec<_> = uneven.samples().map(|s| s.degree).collect();
        assert_eq!(degrees, [0, 3, 6, 9]);
        assert_eq!(uneven.len(), 4);

        let empty = TableParams::new(16.0, 10, 10, 1).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.samples().next(), None);

        let backwards = TableParams::new(16.0, 10, 0, 1).unwrap();
        assert!(backwards.is_empty());
        assert_eq!(backwards.samples().next(), None);
    }

    #[test]
    fn negative_degrees() {
        let params = TableParams::new(16.0, -90, 0, 90).unwrap();
        let samples: Vec<_> = params.samples().collect();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].degree, -90);
        assert_eq!(samples[0].x.to_string(), "0x0000");
        assert_eq!(samples[0].y.to_string(), "0x1000");
    }

    #[test]
    fn stops_at_i32_overflow() {
        let params = TableParams::new(1.0, i32::MAX - 2, i32::MAX, 5).unwrap();
        let degrees: Vec<_> = params.samples().map(|s| s.degree).collect();
        assert_eq!(degrees, [i32::MAX - 2]);

        let params = TableParams::new(1.0, i32::MIN, i32::MAX, i32::MAX).unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.samples().count(), 3);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut samples = TableParams::default().samples();
        assert_eq!(samples.len(), 180);
        samples.next();
        samples.next();
        assert_eq!(samples.len(), 178);
        samples.by_ref().for_each(drop);
        assert_eq!(samples.len(), 0);
        assert_eq!(samples.next(), None);
    }

    #[test]
    fn matches_formula_for_random_sweeps() {
        let mut rng = Pcg64::seed_from_u64(0x5eed_1ab1e);
        for _ in 0..200 {
            let radius: f64 = rng.gen_range(0.0..100.0);
            let degree: i32 = rng.gen_range(-720..720);

            let rad = degree as f64 * PI / 180.0;
            let x_i = (radius * (rad + PI).cos() * 256.0).trunc() as i32;
            let y_i = (radius * -rad.sin() * 256.0).trunc() as i32;

            let s = Sample::at(radius, degree);
            assert_eq!(s.x.low_bits(), x_i as u16, "x at {} deg r={}", degree, radius);
            assert_eq!(s.y.low_bits(), y_i as u16, "y at {} deg r={}", degree, radius);
        }
    }
}
