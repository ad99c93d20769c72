use itertools::Itertools;

use super::sampling::SampledCurve;
use crate::error::SpectrumError;

/// Lay out modes as a stick spectrum: each mode becomes a vertical segment from the baseline up
/// to its intensity, drawn as the polyline `(x, 0) → (x, y) → (x, 0)`.
///
/// The y range always includes the baseline.
///
/// # Errors
/// [`SpectrumError::UnequalLength`] or [`SpectrumError::Empty`].
pub fn sticks(frequencies: &[f64], intensities: &[f64]) -> Result<SampledCurve, SpectrumError> {
    if frequencies.len() != intensities.len() {
        return Err(SpectrumError::UnequalLength {
            x_len: frequencies.len(),
            peak_len: intensities.len(),
        });
    }
    let x_range = frequencies
        .iter()
        .copied()
        .minmax()
        .into_option()
        .ok_or(SpectrumError::Empty)?;

    let (xs, ys) = frequencies
        .iter()
        .zip(intensities)
        .flat_map(|(&x, &y)| [(x, 0.0), (x, y), (x, 0.0)])
        .unzip();
    SampledCurve::from_samples(xs, ys, x_range)
}
