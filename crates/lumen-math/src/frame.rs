//! Local frames and random directions around a normal.
//!
//! Helpers used when shading: build an orthonormal basis around a surface
//! normal, and pick random directions on the hemisphere or inside a cone
//! around it.
//!
//! # Randomness
//!
//! The sampling functions never own a random engine. They take any
//! `FnMut() -> T` and call it for each number they need, so the caller picks
//! the generator and its seed:
//!
//! ```rust
//! use lumen_math::{frame, Vec3};
//!
//! let mut state = 0.25f64;
//! let rng = || { state = (state * 3.7).fract(); state * 2.0 - 1.0 };
//!
//! let normal = Vec3::new(0.0, 0.0, 1.0);
//! let d = frame::get_random_direction_on_hemisphere(normal, rng);
//! assert!(lumen_math::dot(d, normal) >= 0.0);
//! ```

use crate::constants::{half_pi, tau};
use crate::scalar::Real;
use crate::space::InnerSpace;
use crate::vector::Vec3;
use tracing::trace;

/// Unit vector perpendicular to `normal`.
///
/// Tries `(n.z, n.z, -n.x - n.y)` first and falls back to
/// `(-n.y - n.z, n.x, n.x)` when that candidate is zero.
///
/// # Panics
///
/// Panics if `normal` is zero.
pub fn get_tangent<T: Real>(normal: Vec3<T>) -> Vec3<T> {
    let candidate = Vec3::new(normal.z(), normal.z(), -normal.x() - normal.y());
    if candidate.magnitude_squared() != T::zero() {
        return candidate.normalize();
    }

    trace!(?normal, "frame::get_tangent fallback candidate");
    Vec3::new(-normal.y() - normal.z(), normal.x(), normal.x()).normalize()
}

/// Orthonormal basis `(i, j, k)` with `j` along `normal`.
///
/// `j = normalize(normal)`, `k = get_tangent(j)`, `i = j x k`.
pub fn get_basis_vectors<T: Real>(normal: Vec3<T>) -> (Vec3<T>, Vec3<T>, Vec3<T>) {
    let j = normal.normalize();
    let k = get_tangent(j);
    let i = j.cross(k);
    (i, j, k)
}

/// Random unit direction with non-negative dot product against `normal`.
///
/// Draws three numbers from `rng`, expected in `[-1, 1]`, normalises them and
/// flips the result into the hemisphere of `normal`.
pub fn get_random_direction_on_hemisphere<T: Real>(
    normal: Vec3<T>,
    mut rng: impl FnMut() -> T,
) -> Vec3<T> {
    let direction = Vec3::new(rng(), rng(), rng()).normalize();
    if direction.dot(normal) < T::zero() {
        return -direction;
    }
    direction
}

/// Random unit direction within `half_angle` radians of `normal`.
///
/// Returns `normal` unchanged when `half_angle` is zero. Otherwise the angle
/// is clamped to `[0, π/2]`, the polar angle is `rng() * half_angle` and the
/// azimuth is `rng() * 2π`, with `rng` expected in `[0, 1]`.
pub fn get_random_direction_on_cone_angle<T: Real>(
    normal: Vec3<T>,
    half_angle: T,
    mut rng: impl FnMut() -> T,
) -> Vec3<T> {
    if half_angle == T::zero() {
        return normal;
    }

    let half_angle = half_angle.max(T::zero()).min(half_pi());
    let theta = rng() * half_angle;
    let phi = rng() * tau();

    let (i, j, k) = get_basis_vectors(normal);
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    (i * (sin_theta * sin_phi) + j * cos_theta + k * (cos_phi * sin_theta)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{dot, magnitude};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_orthonormal(i: Vec3<f64>, j: Vec3<f64>, k: Vec3<f64>) {
        for v in [i, j, k] {
            assert_relative_eq!(magnitude(v), 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(dot(i, j), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dot(j, k), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dot(i, k), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tangent_is_perpendicular() {
        for n in [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, -2.0, 0.5),
        ] {
            let t = get_tangent(n);
            assert_relative_eq!(magnitude(t), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(dot(t, n), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tangent_fallback() {
        // first candidate is (0, 0, 0) for this normal
        let n = Vec3::new(1.0, -1.0, 0.0);
        let t = get_tangent(n);
        let s = 1.0 / 3.0f64.sqrt();
        assert_relative_eq!(t.x(), s);
        assert_relative_eq!(t.y(), s);
        assert_relative_eq!(t.z(), s);
    }

    #[test]
    fn test_basis_vectors() {
        let (i, j, k) = get_basis_vectors(Vec3::new(0.0, 3.0, 0.0));
        assert_orthonormal(i, j, k);
        assert_eq!(j, Vec3::new(0.0, 1.0, 0.0));

        let (i, j, k) = get_basis_vectors(Vec3::new(0.3, -2.0, 4.5));
        assert_orthonormal(i, j, k);
    }

    #[test]
    fn test_hemisphere_samples() {
        let mut rng = StdRng::seed_from_u64(42);
        let normal = Vec3::new(0.2, 0.9, -0.4).normalize();

        for _ in 0..256 {
            let d = get_random_direction_on_hemisphere(normal, || rng.gen_range(-1.0..=1.0));
            assert_relative_eq!(magnitude(d), 1.0, epsilon = 1e-12);
            assert!(dot(d, normal) >= 0.0);
        }
    }

    #[test]
    fn test_cone_samples() {
        let mut rng = StdRng::seed_from_u64(7);
        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let half_angle = 0.3f64;

        for _ in 0..256 {
            let d = get_random_direction_on_cone_angle(normal, half_angle, || rng.r#gen::<f64>());
            assert_relative_eq!(magnitude(d), 1.0, epsilon = 1e-12);
            assert!(dot(d, normal) >= half_angle.cos() - 1e-12);
        }
    }

    #[test]
    fn test_cone_zero_angle_returns_normal() {
        let normal = Vec3::new(0.0, 2.0, 0.0);
        let d = get_random_direction_on_cone_angle(normal, 0.0, || unreachable!());
        assert_eq!(d, normal);
    }

    #[test]
    fn test_cone_angle_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let normal = Vec3::new(0.0, 0.0, 1.0);

        for _ in 0..64 {
            let d = get_random_direction_on_cone_angle(normal, 10.0, || rng.r#gen::<f64>());
            assert!(dot(d, normal) >= -1e-12);
        }
    }
}
