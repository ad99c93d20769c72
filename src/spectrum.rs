pub mod sampling;
pub mod sticks;
pub mod vibration;

use tracing::{debug, trace};

pub use sampling::{sample, AxisRanges, SampledCurve};
pub use sticks::sticks;
pub use vibration::{RadiationKind, Vibration, Vibrations};

use crate::config::SpectrumConfig;
use crate::error::SpectrumError;
use crate::numerics::SpectralInterpolator;

/// Broaden the selected intensity column of `vibrations` into a continuous curve.
///
/// # Errors
/// [`SpectrumError::Empty`] if there are no modes.
pub fn render(
    vibrations: &Vibrations,
    config: &SpectrumConfig,
) -> Result<SampledCurve, SpectrumError> {
    if vibrations.is_empty() {
        return Err(SpectrumError::Empty);
    }
    let (frequencies, intensities) = vibrations.columns(config.radiation());

    let mut interpolator =
        SpectralInterpolator::with_width(config.width())?.with_kind(config.kind());
    trace!(
        width = ?config.width(),
        kind = config.kind().name(),
        radiation = config.radiation().name(),
        "shaping basis functions"
    );
    interpolator.set_data(&frequencies, &intensities)?;
    sample(&interpolator, config.steps())
}

/// Draw the selected intensity column of `vibrations` as unbroadened sticks.
///
/// # Errors
/// [`SpectrumError::Empty`] if there are no modes.
pub fn render_sticks(
    vibrations: &Vibrations,
    radiation: RadiationKind,
) -> Result<SampledCurve, SpectrumError> {
    let (frequencies, intensities) = vibrations.columns(radiation);
    let curve = sticks(&frequencies, &intensities)?;
    debug!(
        modes = vibrations.len(),
        radiation = radiation.name(),
        x_min = *curve.x_range().start(),
        x_max = *curve.x_range().end(),
        y_min = *curve.y_range().start(),
        y_max = *curve.y_range().end(),
        "laid out stick spectrum"
    );
    Ok(curve)
}
