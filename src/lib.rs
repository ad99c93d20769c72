#![warn(clippy::pedantic)]
#![allow(
    clippy::len_without_is_empty,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::float_cmp
)]

//! Broadening of vibrational spectra.
//!
//! Each mode `(frequency, intensity)` anchors a Lorentzian or Gaussian basis function; the
//! spectrum is their sum, sampled over the frequency range for plotting.

pub mod config;
pub mod error;
pub mod numerics;
pub mod spectrum;

pub use config::SpectrumConfig;
pub use error::{DomainError, SpectrumError};
pub use numerics::{BasisFunction, BasisKind, Bounds, SpectralInterpolator, Width};
pub use spectrum::{
    render, render_sticks, AxisRanges, RadiationKind, SampledCurve, Vibration, Vibrations,
};
