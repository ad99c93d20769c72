use super::profile::BasisKind;
use crate::error::DomainError;

#[derive(Clone, Copy, PartialEq, Debug)]
/// A symmetric, single-peaked function anchored at one control point.
///
/// The width is stored in two equivalent forms, the half-width at half-height `hw` and the
/// shape constant `c = 1 / hw²`; every setter keeps the pair consistent.
pub struct BasisFunction {
    center: f64,
    peak: f64,
    half_width: f64,
    shape_constant: f64,
    kind: BasisKind,
}

impl Default for BasisFunction {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl BasisFunction {
    #[must_use]
    /// A function of unit half-width.
    pub fn new(center: f64, peak: f64) -> Self {
        Self {
            center,
            peak,
            half_width: 1.0,
            shape_constant: 1.0,
            kind: BasisKind::default(),
        }
    }

    /// # Errors
    /// As [`BasisFunction::set_half_width`].
    pub fn with_half_width(center: f64, peak: f64, half_width: f64) -> Result<Self, DomainError> {
        let mut function = Self::new(center, peak);
        function.set_half_width(half_width)?;
        Ok(function)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: BasisKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn set_center(&mut self, center: f64) {
        self.center = center;
    }

    #[must_use]
    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn set_peak(&mut self, peak: f64) {
        self.peak = peak;
    }

    #[must_use]
    pub fn kind(&self) -> BasisKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: BasisKind) {
        self.kind = kind;
    }

    #[must_use]
    /// Offset from the center at which the function falls to half of its peak.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// # Errors
    /// [`DomainError::ZeroHalfWidth`] if `half_width` is zero, [`DomainError::OutOfRange`] if it
    /// is not finite or its square over- or underflows. The function is left unchanged.
    pub fn set_half_width(&mut self, half_width: f64) -> Result<(), DomainError> {
        if half_width == 0.0 {
            return Err(DomainError::ZeroHalfWidth);
        }
        self.assign_width(half_width, (half_width * half_width).recip())
    }

    #[must_use]
    /// Multiplier of the squared offset from the center.
    pub fn shape_constant(&self) -> f64 {
        self.shape_constant
    }

    /// # Errors
    /// [`DomainError::ZeroShapeConstant`], [`DomainError::NegativeShapeConstant`] or
    /// [`DomainError::OutOfRange`]; the function is left unchanged.
    pub fn set_shape_constant(&mut self, shape_constant: f64) -> Result<(), DomainError> {
        if shape_constant == 0.0 {
            return Err(DomainError::ZeroShapeConstant);
        }
        if shape_constant < 0.0 {
            return Err(DomainError::NegativeShapeConstant {
                got: shape_constant,
            });
        }
        self.assign_width(shape_constant.sqrt().recip(), shape_constant)
    }

    #[must_use]
    /// `|peak / hw|`, or `None` for a zero peak.
    pub fn height_half_width_ratio(&self) -> Option<f64> {
        (self.peak != 0.0).then(|| (self.peak / self.half_width).abs())
    }

    /// Reshape so that `|peak / hw| = ratio`.
    ///
    /// A zero peak has no meaningful ratio, so this is a no-op in that case.
    ///
    /// # Errors
    /// [`DomainError::ZeroRatio`] if `ratio` is zero and the peak is not,
    /// [`DomainError::OutOfRange`] if the resulting width is not representable for this peak.
    /// The function is left unchanged.
    pub fn set_height_half_width_ratio(&mut self, ratio: f64) -> Result<(), DomainError> {
        if self.peak == 0.0 {
            return Ok(());
        }
        if ratio == 0.0 {
            return Err(DomainError::ZeroRatio);
        }
        let k = ratio / self.peak;
        self.assign_width(k.recip().abs(), k * k)
    }

    /// Store a new width pair only if both halves are finite and nonzero.
    fn assign_width(&mut self, half_width: f64, shape_constant: f64) -> Result<(), DomainError> {
        let usable = |v: f64| v.is_finite() && v != 0.0;
        if !(usable(half_width) && usable(shape_constant)) {
            return Err(DomainError::OutOfRange {
                half_width,
                shape_constant,
            });
        }
        self.half_width = half_width;
        self.shape_constant = shape_constant;
        Ok(())
    }

    #[must_use]
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.peak * self.kind.unit(self.shape_constant, x - self.center)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::BasisFunction;
    use crate::error::DomainError;
    use crate::numerics::profile::BasisKind;

    const WIDTHS: [f64; 5] = [-3.0, 0.5, 1.0, 7.25, 20.0];

    #[test]
    fn default_shape() {
        let f = BasisFunction::new(10.0, 2.0);
        assert_eq!(f.half_width(), 1.0);
        assert_eq!(f.shape_constant(), 1.0);
        assert_eq!(f.kind(), BasisKind::Lorentzian);
    }

    #[test]
    fn peak_at_center() {
        for kind in BasisKind::ALL {
            for hw in WIDTHS {
                let f = BasisFunction::with_half_width(1650.0, 42.0, hw)
                    .unwrap()
                    .with_kind(kind);
                assert_eq!(f.eval(1650.0), 42.0);
            }
        }
    }

    #[test]
    fn half_height_at_half_width() {
        for kind in BasisKind::ALL {
            for hw in WIDTHS {
                let f = BasisFunction::with_half_width(-5.0, 8.0, hw)
                    .unwrap()
                    .with_kind(kind);
                assert_relative_eq!(f.eval(-5.0 + hw), 4.0, max_relative = 1e-12);
                assert_relative_eq!(f.eval(-5.0 - hw), 4.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn zero_widths_are_rejected() {
        assert_eq!(
            BasisFunction::with_half_width(0.0, 1.0, 0.0),
            Err(DomainError::ZeroHalfWidth)
        );

        let mut f = BasisFunction::with_half_width(3.0, 5.0, 2.0).unwrap();
        let before = f;
        assert_eq!(f.set_half_width(0.0), Err(DomainError::ZeroHalfWidth));
        assert_eq!(f.set_shape_constant(0.0), Err(DomainError::ZeroShapeConstant));
        assert_eq!(
            f.set_shape_constant(-1.0),
            Err(DomainError::NegativeShapeConstant { got: -1.0 })
        );
        assert_eq!(f.set_height_half_width_ratio(0.0), Err(DomainError::ZeroRatio));
        assert_eq!(f, before);
    }

    #[test]
    fn widths_that_degenerate_are_rejected() {
        let out_of_range = |r: Result<(), DomainError>| {
            matches!(r, Err(DomainError::OutOfRange { .. }))
        };

        let mut f = BasisFunction::with_half_width(3.0, 5.0, 2.0).unwrap();
        let before = f;
        for hw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e-200, 1e200] {
            assert!(out_of_range(f.set_half_width(hw)), "half-width {hw}");
            assert_eq!(f, before);
        }
        for c in [f64::NAN, f64::INFINITY] {
            assert!(out_of_range(f.set_shape_constant(c)), "shape constant {c}");
            assert_eq!(f, before);
        }
        for ratio in [f64::NAN, f64::INFINITY] {
            assert!(out_of_range(f.set_height_half_width_ratio(ratio)), "ratio {ratio}");
            assert_eq!(f, before);
        }

        // `k * k` underflows to zero and `1 / k` overflows.
        let mut huge = BasisFunction::new(0.0, 1e200);
        let before = huge;
        assert!(out_of_range(huge.set_height_half_width_ratio(1e-200)));
        assert_eq!(huge, before);
        assert_eq!(huge.shape_constant(), 1.0);
        assert!(huge.eval(0.5).is_finite());
        assert!(matches!(
            BasisFunction::with_half_width(0.0, 1.0, f64::NAN),
            Err(DomainError::OutOfRange { .. })
        ));
    }

    #[test]
    fn ratio_on_zero_peak_is_a_no_op() {
        let mut f = BasisFunction::with_half_width(3.0, 0.0, 2.0).unwrap();
        let before = f;
        assert_eq!(f.set_height_half_width_ratio(10.0), Ok(()));
        assert_eq!(f.set_height_half_width_ratio(0.0), Ok(()));
        assert_eq!(f, before);
        assert_eq!(f.height_half_width_ratio(), None);
    }

    #[test]
    fn ratio_reshapes_width() {
        let mut f = BasisFunction::new(0.0, -5.0);
        f.set_height_half_width_ratio(10.0).unwrap();
        assert_abs_diff_eq!(f.half_width(), 0.5);
        assert_abs_diff_eq!(f.shape_constant(), 4.0);
        assert_abs_diff_eq!(f.height_half_width_ratio().unwrap(), 10.0);

        let snapshot = f;
        f.set_height_half_width_ratio(10.0).unwrap();
        assert_eq!(f, snapshot);
    }

    #[test]
    fn width_setters_round_trip() {
        let mut f = BasisFunction::new(0.0, 1.0);
        f.set_half_width(2.5).unwrap();
        assert_eq!(f.half_width(), 2.5);
        assert_abs_diff_eq!(f.shape_constant(), 0.16, epsilon = 1e-15);

        f.set_shape_constant(0.01).unwrap();
        assert_eq!(f.shape_constant(), 0.01);
        assert_abs_diff_eq!(f.half_width(), 10.0, epsilon = 1e-12);

        for (i, hw) in WIDTHS.into_iter().enumerate() {
            if i % 2 == 0 {
                f.set_half_width(hw).unwrap();
            } else {
                f.set_shape_constant((hw * hw).recip()).unwrap();
            }
            assert_relative_eq!(
                f.shape_constant(),
                (f.half_width() * f.half_width()).recip(),
                max_relative = 1e-12
            );
        }
    }
}
