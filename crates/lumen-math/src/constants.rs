//! Numeric constants and thresholds.
//!
//! Angle constants come in two forms: `f64` values for direct use, and
//! generic functions ([`pi`], [`half_pi`], [`tau`]) that produce them in any
//! [`Real`] type.

use crate::scalar::Real;

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// π / 2.
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// 2π.
pub const TAU: f64 = std::f64::consts::TAU;

/// Cosine above which slerp falls back to normalised linear interpolation.
pub const SLERP_THRESHOLD: f64 = 0.995;

/// Cosine below which two directions count as opposite in look-at.
pub const LOOK_AT_THRESHOLD: f64 = 0.9998;

/// Relative luminance weights for linear RGB, `[r, g, b]`.
pub const LUMINANCE_COEFFICIENTS: [f64; 3] = [0.212655, 0.715158, 0.072187];

/// Lowest color temperature accepted by `Color::from_temperature`, in Kelvin.
pub const MIN_TEMPERATURE: u32 = 1_000;

/// Highest color temperature accepted by `Color::from_temperature`, in Kelvin.
pub const MAX_TEMPERATURE: u32 = 40_000;

/// π in `T`.
#[inline]
pub fn pi<T: Real>() -> T {
    T::from_f64_lossy(PI)
}

/// π / 2 in `T`.
#[inline]
pub fn half_pi<T: Real>() -> T {
    T::from_f64_lossy(HALF_PI)
}

/// 2π in `T`.
#[inline]
pub fn tau<T: Real>() -> T {
    T::from_f64_lossy(TAU)
}
