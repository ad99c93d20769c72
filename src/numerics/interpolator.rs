use std::ops::RangeInclusive;

use super::basis_function::BasisFunction;
use super::profile::BasisKind;
use crate::error::{DomainError, SpectrumError};

#[derive(Clone, Copy, PartialEq, Debug)]
/// The shape parameter shared by all basis functions of a [`SpectralInterpolator`].
pub enum Width {
    /// Every function gets the same `|peak / hw|`; taller peaks are proportionally wider.
    HeightRatio(f64),
    /// Every function gets the same half-width at half-height.
    HalfWidth(f64),
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// Running extrema of the control points added to an interpolator.
///
/// The peak extrema describe the _inputs_; the summed curve may well exceed or undercut them.
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub peak_min: f64,
    pub peak_max: f64,
}

#[derive(Clone, PartialEq, Debug)]
/// 1D interpolator using one basis function per control point, all sharing one [`Width`].
///
/// The interpolant is the plain sum of the basis functions.
pub struct SpectralInterpolator {
    functions: Vec<BasisFunction>,
    width: Width,
    kind: BasisKind,
    bounds: Bounds,
}

impl Width {
    /// Reject widths that no basis function could take. A finite ratio may still be too extreme
    /// for a particular peak; that is caught when it is applied.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        match self {
            Self::HeightRatio(r) if r == 0.0 => Err(DomainError::ZeroRatio),
            Self::HeightRatio(v) | Self::HalfWidth(v) if !v.is_finite() => {
                Err(DomainError::NonFinite { got: v })
            }
            Self::HeightRatio(_) => Ok(self),
            Self::HalfWidth(hw) => BasisFunction::default().set_half_width(hw).map(|()| self),
        }
    }

    fn apply(self, function: &mut BasisFunction) -> Result<(), DomainError> {
        match self {
            Self::HeightRatio(r) => function.set_height_half_width_ratio(r),
            Self::HalfWidth(hw) => function.set_half_width(hw),
        }
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::HeightRatio(SpectralInterpolator::DEFAULT_HEIGHT_WIDTH_RATIO)
    }
}

impl Bounds {
    /// Sentinel that any control point replaces on both sides.
    pub const EMPTY: Bounds = Bounds {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        peak_min: f64::INFINITY,
        peak_max: f64::NEG_INFINITY,
    };

    fn include(&mut self, center: f64, peak: f64) {
        self.x_min = self.x_min.min(center);
        self.x_max = self.x_max.max(center);
        self.peak_min = self.peak_min.min(peak);
        self.peak_max = self.peak_max.max(peak);
    }

    #[must_use]
    pub fn x_range(&self) -> RangeInclusive<f64> {
        self.x_min..=self.x_max
    }

    #[must_use]
    pub fn peak_range(&self) -> RangeInclusive<f64> {
        self.peak_min..=self.peak_max
    }
}

impl Default for SpectralInterpolator {
    fn default() -> Self {
        Self {
            functions: vec![],
            width: Width::default(),
            kind: BasisKind::default(),
            bounds: Bounds::EMPTY,
        }
    }
}

impl SpectralInterpolator {
    pub const DEFAULT_HEIGHT_WIDTH_RATIO: f64 = 10.0;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// If `width` is zero or not finite.
    pub fn with_width(width: Width) -> Result<Self, DomainError> {
        Ok(Self {
            width: width.validate()?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_kind(mut self, kind: BasisKind) -> Self {
        self.set_basis_kind(kind);
        self
    }

    /// Add a control point, shaped by the current width and kind.
    ///
    /// A height ratio too extreme for this particular peak leaves it at unit half-width.
    pub fn add(&mut self, center: f64, peak: f64) {
        self.bounds.include(center, peak);
        let mut function = BasisFunction::new(center, peak).with_kind(self.kind);
        let _ = self.width.apply(&mut function);
        self.functions.push(function);
    }

    pub fn clear(&mut self) {
        self.functions.clear();
        self.bounds = Bounds::EMPTY;
    }

    /// Replace all control points with the pairs `(xs[i], peaks[i])`, in order.
    ///
    /// # Errors
    /// [`SpectrumError::UnequalLength`] if the slices differ in length, in which case the
    /// existing control points are kept.
    pub fn set_data(&mut self, xs: &[f64], peaks: &[f64]) -> Result<(), SpectrumError> {
        if xs.len() != peaks.len() {
            return Err(SpectrumError::UnequalLength {
                x_len: xs.len(),
                peak_len: peaks.len(),
            });
        }
        self.clear();
        self.extend(xs.iter().copied().zip(peaks.iter().copied()));
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    /// Set the shared width and reshape every existing basis function with it.
    ///
    /// # Errors
    /// If `width` is zero or not finite, or cannot shape one of the existing peaks; nothing is
    /// changed.
    pub fn set_width(&mut self, width: Width) -> Result<(), DomainError> {
        let width = width.validate()?;
        let mut functions = self.functions.clone();
        for function in &mut functions {
            width.apply(function)?;
        }
        self.width = width;
        self.functions = functions;
        Ok(())
    }

    #[must_use]
    /// The shared `|peak / hw|`, or `None` if the interpolator is in absolute half-width mode.
    pub fn height_width_ratio(&self) -> Option<f64> {
        match self.width {
            Width::HeightRatio(r) => Some(r),
            Width::HalfWidth(_) => None,
        }
    }

    /// # Errors
    /// [`DomainError::ZeroRatio`] if `ratio` is zero.
    pub fn set_height_width_ratio(&mut self, ratio: f64) -> Result<(), DomainError> {
        self.set_width(Width::HeightRatio(ratio))
    }

    /// # Errors
    /// [`DomainError::ZeroHalfWidth`] if `half_width` is zero.
    pub fn set_half_width(&mut self, half_width: f64) -> Result<(), DomainError> {
        self.set_width(Width::HalfWidth(half_width))
    }

    #[must_use]
    pub fn kind(&self) -> BasisKind {
        self.kind
    }

    /// Switch the line shape of every basis function. Control points and widths are kept.
    pub fn set_basis_kind(&mut self, kind: BasisKind) {
        self.kind = kind;
        for function in &mut self.functions {
            function.set_kind(kind);
        }
    }

    /// Iterate over the basis functions in the order their control points were added.
    pub fn basis_functions(&self) -> impl Iterator<Item = &BasisFunction> {
        self.functions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.basis_functions().map(|f| f.eval(x)).sum()
    }

    #[must_use]
    /// Give an _estimate_ of the max value of the sum, by evaluating the sum at the centers of
    /// the components.
    pub fn estimate_max(&self) -> f64 {
        self.basis_functions()
            .map(|f| self.eval(f.center()))
            .reduce(f64::max)
            .unwrap_or(0.)
    }

    #[must_use]
    /// Snapshot of the running extrema, or `None` before the first control point.
    pub fn bounds(&self) -> Option<Bounds> {
        (!self.is_empty()).then_some(self.bounds)
    }

    #[must_use]
    /// `+∞` when empty.
    pub fn min_x(&self) -> f64 {
        self.bounds.x_min
    }

    #[must_use]
    /// `-∞` when empty.
    pub fn max_x(&self) -> f64 {
        self.bounds.x_max
    }

    #[must_use]
    /// `+∞` when empty.
    pub fn min_peak(&self) -> f64 {
        self.bounds.peak_min
    }

    #[must_use]
    /// Largest _input_ peak, not the maximum of the summed curve; `-∞` when empty.
    pub fn max_peak(&self) -> f64 {
        self.bounds.peak_max
    }
}

impl Extend<(f64, f64)> for SpectralInterpolator {
    fn extend<T: IntoIterator<Item = (f64, f64)>>(&mut self, iter: T) {
        for (center, peak) in iter {
            self.add(center, peak);
        }
    }
}

impl FromIterator<(f64, f64)> for SpectralInterpolator {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        let mut interpolator = Self::new();
        interpolator.extend(iter);
        interpolator
    }
}
