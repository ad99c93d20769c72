use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Debug, Error)]
/// A width parameter that would put a zero (or otherwise invalid) divisor into a basis function.
pub enum DomainError {
    #[error("half-width at half-height is zero")]
    ZeroHalfWidth,

    #[error("shape constant is zero")]
    ZeroShapeConstant,

    #[error("shape constant {got} is negative")]
    NegativeShapeConstant { got: f64 },

    #[error("height to half-width ratio is zero")]
    ZeroRatio,

    #[error("width parameter {got} is not finite")]
    NonFinite { got: f64 },

    #[error("half-width {half_width} and shape constant {shape_constant} are out of range")]
    OutOfRange { half_width: f64, shape_constant: f64 },
}

#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum SpectrumError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("unequal length: {x_len} centers, {peak_len} peaks")]
    UnequalLength { x_len: usize, peak_len: usize },

    #[error("no control points to sample")]
    Empty,

    #[error("sample count must be positive")]
    ZeroSteps,
}
