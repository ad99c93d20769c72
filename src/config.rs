//! Knobs for turning a list of modes into a plotted spectrum.
//!
//! [`SpectrumConfig`] is built from [`SpectrumConfig::default`] and refined with the consuming
//! `with_*` setters; the ones that take a width or a sample count validate their argument, so a
//! config that exists is always renderable.

use crate::error::{DomainError, SpectrumError};
use crate::numerics::{BasisKind, Width};
use crate::spectrum::{AxisRanges, RadiationKind, SampledCurve};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SpectrumConfig {
    steps: usize,
    width: Width,
    kind: BasisKind,
    radiation: RadiationKind,
    x_right_left: bool,
    y_top_down: bool,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            steps: Self::DEFAULT_STEPS,
            width: Width::HalfWidth(Self::DEFAULT_HALF_WIDTH),
            kind: BasisKind::default(),
            radiation: RadiationKind::default(),
            x_right_left: false,
            y_top_down: false,
        }
    }
}

impl SpectrumConfig {
    /// Intervals between the lowest and highest frequency.
    pub const DEFAULT_STEPS: usize = 600;
    /// Half-width at half-height, in cm⁻¹.
    pub const DEFAULT_HALF_WIDTH: f64 = 20.0;

    /// # Errors
    /// [`SpectrumError::ZeroSteps`] if `steps` is zero.
    pub fn with_steps(mut self, steps: usize) -> Result<Self, SpectrumError> {
        if steps == 0 {
            return Err(SpectrumError::ZeroSteps);
        }
        self.steps = steps;
        Ok(self)
    }

    /// # Errors
    /// If `width` is zero or not finite.
    pub fn with_width(mut self, width: Width) -> Result<Self, DomainError> {
        self.width = width.validate()?;
        Ok(self)
    }

    /// # Errors
    /// [`DomainError::ZeroHalfWidth`] if `half_width` is zero.
    pub fn with_half_width(self, half_width: f64) -> Result<Self, DomainError> {
        self.with_width(Width::HalfWidth(half_width))
    }

    /// # Errors
    /// [`DomainError::ZeroRatio`] if `ratio` is zero.
    pub fn with_height_width_ratio(self, ratio: f64) -> Result<Self, DomainError> {
        self.with_width(Width::HeightRatio(ratio))
    }

    #[must_use]
    pub fn with_kind(mut self, kind: BasisKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_radiation(mut self, radiation: RadiationKind) -> Self {
        self.radiation = radiation;
        self
    }

    #[must_use]
    /// Draw frequencies decreasing from left to right, as IR spectra conventionally are.
    pub fn with_x_right_left(mut self, x_right_left: bool) -> Self {
        self.x_right_left = x_right_left;
        self
    }

    #[must_use]
    /// Draw intensities growing downwards, as in a transmittance plot.
    pub fn with_y_top_down(mut self, y_top_down: bool) -> Self {
        self.y_top_down = y_top_down;
        self
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    #[must_use]
    pub fn kind(&self) -> BasisKind {
        self.kind
    }

    #[must_use]
    pub fn radiation(&self) -> RadiationKind {
        self.radiation
    }

    #[must_use]
    pub fn axis_ranges(&self, curve: &SampledCurve) -> AxisRanges {
        curve.axis_ranges(self.x_right_left, self.y_top_down)
    }
}

#[cfg(test)]
mod tests {
    use super::SpectrumConfig;
    use crate::error::{DomainError, SpectrumError};
    use crate::numerics::{BasisKind, Width};
    use crate::spectrum::RadiationKind;

    #[test]
    fn defaults() {
        let config = SpectrumConfig::default();
        assert_eq!(config.steps(), 600);
        assert_eq!(config.width(), Width::HalfWidth(20.0));
        assert_eq!(config.kind(), BasisKind::Lorentzian);
        assert_eq!(config.radiation(), RadiationKind::Infrared);
    }

    #[test]
    fn builder_setters() -> Result<(), SpectrumError> {
        let config = SpectrumConfig::default()
            .with_steps(1200)?
            .with_height_width_ratio(4.0)?
            .with_kind(BasisKind::Gaussian)
            .with_radiation(RadiationKind::Raman);
        assert_eq!(config.steps(), 1200);
        assert_eq!(config.width(), Width::HeightRatio(4.0));
        assert_eq!(config.kind(), BasisKind::Gaussian);
        assert_eq!(config.radiation(), RadiationKind::Raman);
        Ok(())
    }

    #[test]
    fn invalid_values_are_rejected() {
        let config = SpectrumConfig::default();
        assert_eq!(config.with_steps(0), Err(SpectrumError::ZeroSteps));
        assert_eq!(config.with_half_width(0.0), Err(DomainError::ZeroHalfWidth));
        assert_eq!(config.with_height_width_ratio(0.0), Err(DomainError::ZeroRatio));
        assert_eq!(
            config.with_height_width_ratio(f64::INFINITY),
            Err(DomainError::NonFinite {
                got: f64::INFINITY
            })
        );
        assert!(matches!(
            config.with_half_width(f64::NAN),
            Err(DomainError::NonFinite { .. })
        ));
    }
}
