use std::ops::RangeInclusive;

use itertools::Itertools;
use tracing::debug;

use crate::error::SpectrumError;
use crate::numerics::{self, SpectralInterpolator};

#[derive(Clone, PartialEq, Debug)]
/// A curve sampled at increasing x, ready to hand to a plot.
pub struct SampledCurve {
    xs: Vec<f64>,
    ys: Vec<f64>,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// Axis scales as `(start, end)`; a flipped axis has `start > end`.
pub struct AxisRanges {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl SampledCurve {
    /// The y range spans the samples themselves.
    pub(super) fn from_samples(
        xs: Vec<f64>,
        ys: Vec<f64>,
        x_range: (f64, f64),
    ) -> Result<Self, SpectrumError> {
        debug_assert_eq!(xs.len(), ys.len());
        let y_range = ys
            .iter()
            .copied()
            .minmax()
            .into_option()
            .ok_or(SpectrumError::Empty)?;
        Ok(Self {
            xs,
            ys,
            x_range,
            y_range,
        })
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn x_range(&self) -> RangeInclusive<f64> {
        self.x_range.0..=self.x_range.1
    }

    #[must_use]
    pub fn y_range(&self) -> RangeInclusive<f64> {
        self.y_range.0..=self.y_range.1
    }

    #[must_use]
    pub fn axis_ranges(&self, x_right_left: bool, y_top_down: bool) -> AxisRanges {
        let flip = |(lo, hi): (f64, f64), flipped: bool| {
            if flipped {
                (hi, lo)
            } else {
                (lo, hi)
            }
        };
        AxisRanges {
            x: flip(self.x_range, x_right_left),
            y: flip(self.y_range, y_top_down),
        }
    }
}

/// Sample `interpolator` with `steps` intervals between its outermost control points, then
/// keep going for another tenth so the tail of the last peak is drawn.
///
/// # Errors
/// [`SpectrumError::ZeroSteps`], or [`SpectrumError::Empty`] if there are no control points.
#[allow(clippy::cast_precision_loss)]
pub fn sample(
    interpolator: &SpectralInterpolator,
    steps: usize,
) -> Result<SampledCurve, SpectrumError> {
    if steps == 0 {
        return Err(SpectrumError::ZeroSteps);
    }
    let bounds = interpolator.bounds().ok_or(SpectrumError::Empty)?;

    let extension = numerics::tail_extension(steps);
    let dx = (bounds.x_max - bounds.x_min) / steps as f64;
    let xs = (0..steps + extension)
        .map(|i| bounds.x_min + i as f64 * dx)
        .collect_vec();
    let ys = xs.iter().map(|&x| interpolator.eval(x)).collect_vec();
    let x_range = (bounds.x_min, bounds.x_max + dx * extension as f64);

    debug!(
        control_points = interpolator.len(),
        steps,
        extension,
        x_min = x_range.0,
        x_max = x_range.1,
        "sampled spectrum"
    );
    SampledCurve::from_samples(xs, ys, x_range)
}
