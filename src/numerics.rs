pub mod basis_function;
pub mod interpolator;
pub mod profile;

pub use basis_function::BasisFunction;
pub use interpolator::{Bounds, SpectralInterpolator, Width};
pub use profile::BasisKind;

#[must_use]
/// Number of samples drawn past the last control point, `ceil(steps / 10)`, so that the tail of
/// the last peak stays visible.
pub fn tail_extension(steps: usize) -> usize {
    steps.div_ceil(10)
}
