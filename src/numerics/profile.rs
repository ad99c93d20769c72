use std::f64::consts::LN_2;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// Line shape shared by every basis function of an interpolator.
///
/// Both shapes are parameterized by the same shape constant `c = 1 / hw²`, so that either one
/// falls to half of its peak at `hw` away from the center.
pub enum BasisKind {
    #[default]
    Lorentzian,
    Gaussian,
}

impl BasisKind {
    pub const ALL: [BasisKind; 2] = [Self::Lorentzian, Self::Gaussian];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lorentzian => "Lorentzian",
            Self::Gaussian => "Gaussian",
        }
    }

    #[must_use]
    #[inline]
    /// Value of a unit-height profile `offset` from its center.
    pub fn unit(self, shape_constant: f64, offset: f64) -> f64 {
        match self {
            Self::Lorentzian => lorentzian(shape_constant, offset),
            Self::Gaussian => gaussian(shape_constant, offset),
        }
    }
}

#[must_use]
#[inline]
/// `1 / (1 + c·offset²)`.
pub fn lorentzian(shape_constant: f64, offset: f64) -> f64 {
    (1.0 + shape_constant * offset * offset).recip()
}

#[must_use]
#[inline]
/// `exp(-ln 2 · c·offset²)`. The `ln 2` factor puts the half-height at the same offset as the
/// Lorentzian with equal `c`.
pub fn gaussian(shape_constant: f64, offset: f64) -> f64 {
    (-LN_2 * shape_constant * offset * offset).exp()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::BasisKind;

    #[test]
    fn unit_height_at_center() {
        for kind in BasisKind::ALL {
            assert_abs_diff_eq!(kind.unit(0.25, 0.0), 1.0);
        }
    }

    #[test]
    fn half_height_at_half_width() {
        for kind in BasisKind::ALL {
            for hw in [0.5_f64, 1.0, 20.0] {
                let c = (hw * hw).recip();
                assert_abs_diff_eq!(kind.unit(c, hw), 0.5, epsilon = 1e-12);
                assert_abs_diff_eq!(kind.unit(c, -hw), 0.5, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn gaussian_tails_fall_off_faster() {
        let (l, g) = (BasisKind::Lorentzian, BasisKind::Gaussian);
        assert!(g.unit(1.0, 4.0) < l.unit(1.0, 4.0));
        assert!(g.unit(1.0, 0.5) > l.unit(1.0, 0.5));
    }
}
