//! RGB colors over any scalar type.
//!
//! [`Color`] is a [`Tuple`] of three channels tagged [`ColorTag`]. Channel
//! ranges depend on the scalar:
//!
//! - floating point: `[0, 1]`
//! - integers: `[0, T::MAX]`
//!
//! # Conversion
//!
//! [`Color::convert`] moves a color between scalar types:
//!
//! | From     | To       | Rule                                              |
//! |----------|----------|---------------------------------------------------|
//! | integral | integral | wider target: integer ratio `To::MAX / From::MAX` |
//! |          |          | otherwise: `f64` ratio, truncated                 |
//! | floating | floating | direct cast                                       |
//! | floating | integral | clamp to `[0, 1]`, times `To::MAX`, truncated     |
//! | integral | floating | divide by `From::MAX`                             |
//!
//! Scaling between floating and integral channels happens in `f64`.
//! Negative source channels are clamped to zero first, so integer channels
//! never wrap.
//!
//! # Usage
//!
//! ```rust
//! use lumen_math::Color;
//!
//! let c = Color::<u8>::from_hex(0x808000);
//! assert_eq!(c, Color::new(128, 128, 0));
//!
//! let f: Color<f32> = c.convert();
//! assert_eq!(f.b(), 0.0);
//! ```

use crate::constants::{LUMINANCE_COEFFICIENTS, MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::kind::{ColorTag, Vec3Tag};
use crate::scalar::{Real, Scalar};
use crate::tuple::Tuple;
use crate::vector::{Vec2, Vec3};
use tracing::debug;

/// RGB color.
pub type Color<T> = Tuple<T, 3, ColorTag>;

impl<T> Color<T> {
    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self::from_array([r, g, b])
    }
}

impl<T: Copy> Color<T> {
    /// Red channel.
    #[inline]
    pub fn r(&self) -> T {
        self[0]
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> T {
        self[1]
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> T {
        self[2]
    }

    /// Mutable red channel.
    #[inline]
    pub fn r_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    /// Mutable green channel.
    #[inline]
    pub fn g_mut(&mut self) -> &mut T {
        &mut self[1]
    }

    /// Mutable blue channel.
    #[inline]
    pub fn b_mut(&mut self) -> &mut T {
        &mut self[2]
    }

    /// Gray: all channels set to `value`.
    #[inline]
    pub fn gray(value: T) -> Self {
        Self::from_array([value; 3])
    }
}

impl<T: Scalar> Color<T> {
    /// Color from the absolute values of a vector's components.
    #[inline]
    pub fn from_vector(v: Vec3<T>) -> Self {
        v.abs().retag()
    }

    /// Color from the absolute values of a 2D vector, with blue set to zero.
    #[inline]
    pub fn from_vec2(v: Vec2<T>) -> Self {
        Self::new(v.x().absolute(), v.y().absolute(), T::zero())
    }

    /// Average of the three channels.
    ///
    /// Integer channels are summed in `i128`, so narrow types cannot
    /// overflow.
    #[inline]
    pub fn brightness(&self) -> T {
        if T::IS_FLOAT {
            return self.sum() / T::from_f64_lossy(3.0);
        }
        let sum: i128 = self.iter().map(|&c| c.as_i128()).sum();
        T::from_i128_lossy(sum / 3)
    }

    /// Converts to another channel type, see the [module docs](self).
    pub fn convert<To: Scalar>(self) -> Color<To> {
        match (T::IS_FLOAT, To::IS_FLOAT) {
            (true, true) => self.map(|c| To::from_f64_lossy(c.as_f64())),
            // scaled in f64, integer maxima overflow f16
            (true, false) => {
                let max = To::MAX.as_f64();
                self.map(|c| To::from_f64_lossy(clamp_unit(c).as_f64() * max))
            }
            (false, true) => {
                let max = T::MAX.as_f64();
                self.map(|c| To::from_f64_lossy(clamp_non_negative(c).as_f64() / max))
            }
            (false, false) => {
                let from_max = T::MAX.as_i128();
                let to_max = To::MAX.as_i128();
                if to_max >= from_max {
                    let ratio = to_max / from_max;
                    self.map(|c| To::from_i128_lossy(clamp_non_negative(c).as_i128() * ratio))
                } else {
                    let ratio = to_max as f64 / from_max as f64;
                    self.map(|c| To::from_f64_lossy(clamp_non_negative(c).as_f64() * ratio))
                }
            }
        }
    }

    /// Complementary color: `1 - c` for floats, `MAX - c` for integers.
    ///
    /// Channels are clamped to the valid range first, so the result is
    /// always a valid color.
    #[inline]
    pub fn invert(self) -> Self {
        if T::IS_FLOAT {
            self.map(|c| T::one() - clamp_unit(c))
        } else {
            self.map(|c| T::MAX - clamp_non_negative(c))
        }
    }

    /// Color from 8-bit channels.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::<u8>::new(r, g, b).convert()
    }

    /// Color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::from_rgb(r, g, b)
    }

    /// Approximate color of a black body at `kelvin`.
    ///
    /// Uses Tanner Helland's fit. Input is clamped to `[1000, 40000]` K and
    /// the result is computed at 8 bits per channel before conversion.
    pub fn from_temperature(kelvin: u32) -> Self {
        let clamped = kelvin.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
        if clamped != kelvin {
            debug!(kelvin, clamped, "Color temperature out of range, clamping");
        }

        let t = f64::from(clamped) / 100.0;

        let red = if t <= 66.0 {
            255.0
        } else {
            329.698727446 * (t - 60.0).powf(-0.1332047592)
        };

        let green = if t <= 66.0 {
            99.4708025861 * t.ln() - 161.1195681661
        } else {
            288.1221695283 * (t - 60.0).powf(-0.0755148492)
        };

        let blue = if t >= 66.0 {
            255.0
        } else if t <= 19.0 {
            0.0
        } else {
            138.5177312231 * (t - 10.0).ln() - 305.0447927307
        };

        Color::<u8>::new(to_channel(red), to_channel(green), to_channel(blue)).convert()
    }
}

impl<T: Real> Color<T> {
    /// Relative luminance of linear RGB.
    #[inline]
    pub fn luminance(&self) -> T {
        self.iter()
            .zip(LUMINANCE_COEFFICIENTS)
            .fold(T::zero(), |acc, (&c, w)| acc + c * T::from_f64_lossy(w))
    }
}

/// Average of the three channels of `c`.
#[inline]
pub fn brightness<T: Scalar>(c: &Color<T>) -> T {
    c.brightness()
}

/// Relative luminance of `c`.
#[inline]
pub fn luminance<T: Real>(c: &Color<T>) -> T {
    c.luminance()
}

#[inline]
fn clamp_non_negative<T: Scalar>(c: T) -> T {
    if c < T::zero() { T::zero() } else { c }
}

#[inline]
fn clamp_unit<T: Scalar>(c: T) -> T {
    if c < T::zero() {
        T::zero()
    } else if c > T::one() {
        T::one()
    } else {
        c
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

impl<T: Scalar> From<Vec3<T>> for Color<T> {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        Self::from_vector(v)
    }
}

impl<T: Scalar> From<Vec2<T>> for Color<T> {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        Self::from_vec2(v)
    }
}

impl<T: Scalar> From<Color<T>> for Vec3<T> {
    #[inline]
    fn from(c: Color<T>) -> Self {
        c.retag::<Vec3Tag>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use half::f16;

    macro_rules! for_color_types {
        ($name:ident, |$t:ident| $body:block) => {
            #[test]
            fn $name() {
                fn check<$t: Scalar>() $body
                check::<u8>();
                check::<u64>();
                check::<f16>();
                check::<f32>();
                check::<f64>();
            }
        };
    }

    fn lit<T: Scalar>(v: u8) -> T {
        T::from_i128_lossy(v as i128)
    }

    for_color_types!(test_color_create, |T| {
        let c = Color::<T>::new(lit(1), lit(0), lit(124));
        assert_eq!(c.r(), lit(1));
        assert_eq!(c.g(), lit(0));
        assert_eq!(c.b(), lit(124));

        let c2 = Color::<T>::from_partial(&[lit(1), lit(2)]);
        assert_eq!(c2.into_array(), [lit(1), lit(2), lit(0)]);

        let c3 = Color::<T>::gray(lit(1));
        assert_eq!(c3.into_array(), [lit(1); 3]);
    });

    for_color_types!(test_color_add_sub, |T| {
        let c = Color::<T>::new(lit(1), lit(1), lit(1)) + Color::new(lit(0), lit(1), lit(5));
        assert_eq!(c.into_array(), [lit(1), lit(2), lit(6)]);

        let mut d = Color::<T>::gray(lit(128));
        d -= Color::new(lit(64), lit(128), lit(5));
        assert_eq!(d.into_array(), [lit(64), lit(0), lit(123)]);
    });

    for_color_types!(test_color_mul_div, |T| {
        let c = Color::<T>::gray(lit(12));
        assert_eq!((c * Color::new(lit(5), lit(0), lit(2))).into_array(), [lit(60), lit(0), lit(24)]);
        assert_eq!((c * lit::<T>(2)).into_array(), [lit(24); 3]);

        let mut d = Color::<T>::new(lit(12), lit(246), lit(18));
        d /= lit::<T>(2);
        assert_eq!(d.into_array(), [lit(6), lit(123), lit(9)]);
    });

    for_color_types!(test_color_brightness, |T| {
        assert_eq!(brightness(&Color::<T>::new(lit(3), lit(4), lit(5))), lit(4));
    });

    for_color_types!(test_color_from_rgb, |T| {
        let max = if T::IS_FLOAT { T::one() } else { T::MAX };
        let half = if T::IS_FLOAT {
            T::from_f64_lossy(128.0 / 255.0)
        } else {
            T::from_i128_lossy(128 * (T::MAX.as_i128() / 255))
        };

        assert_eq!(Color::<T>::from_rgb(0, 0, 0), Color::zero());
        assert_eq!(Color::<T>::from_rgb(255, 255, 255), Color::gray(max));
        assert_eq!(Color::<T>::from_rgb(255, 0, 0), Color::new(max, T::zero(), T::zero()));
        assert_eq!(Color::<T>::from_rgb(0, 255, 0), Color::new(T::zero(), max, T::zero()));
        assert_eq!(Color::<T>::from_rgb(0, 0, 255), Color::new(T::zero(), T::zero(), max));

        let dark_yellow = Color::<T>::from_hex(0x808000);
        assert!(dark_yellow.r().equivalent(half));
        assert_eq!(dark_yellow.r(), dark_yellow.g());
        assert_eq!(dark_yellow.b(), T::zero());
        assert_eq!(Color::<T>::from_hex(0xFF0000), Color::<T>::from_rgb(255, 0, 0));
    });

    #[test]
    fn test_color_from_hex_u8() {
        assert_eq!(Color::<u8>::from_hex(0x808000), Color::new(128, 128, 0));
        assert_eq!(Color::<u8>::from_hex(0x12345678), Color::new(0x34, 0x56, 0x78));
    }

    #[test]
    fn test_color_conversion_chain() {
        let c = Color::<i32>::new(536_870_911, 2_147_483_647, 0);

        let c_u8: Color<u8> = c.convert();
        assert_eq!(c_u8, Color::new(63, 255, 0));

        let c_i64: Color<i64> = c_u8.convert();
        assert_eq!(c_i64, Color::new(2_278_715_444_399_415_168, 9_223_372_036_854_775_680, 0));

        let c_f32: Color<f32> = c_u8.convert();
        assert_eq!(c_f32, Color::new(63.0 / 255.0, 1.0, 0.0));

        let c_f64: Color<f64> = c_f32.convert();
        assert_relative_eq!(c_f64.r(), 63.0 / 255.0, epsilon = 1e-7);
        assert_eq!(c_f64.g(), 1.0);
        assert_eq!(c_f64.b(), 0.0);

        let c_u16: Color<u16> = c_f64.convert();
        assert_eq!(c_u16, Color::new(16191, 65535, 0));
    }

    #[test]
    fn test_color_conversion_clamps() {
        let c = Color::<f32>::new(-0.5, 1.5, 0.5);
        assert_eq!(c.convert::<u8>(), Color::new(0, 255, 127));

        let c = Color::<i16>::new(-100, 32767, 0);
        assert_eq!(c.convert::<u8>(), Color::new(0, 255, 0));
        assert_eq!(c.convert::<f32>(), Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_color_conversion_half() {
        let c = Color::<f16>::from_array([0.0, 0.5, 1.0].map(f16::from_f32));
        assert_eq!(c.convert::<u16>(), Color::new(0, 32767, 65535));
        assert_eq!(c.convert::<u8>(), Color::new(0, 127, 255));

        let c = Color::<f16>::from_array([0.25, 0.5, 1.0].map(f16::from_f32));
        assert_eq!(
            c.convert::<u32>(),
            Color::new(1_073_741_823, 2_147_483_647, u32::MAX)
        );

        let back: Color<f16> = Color::<u16>::new(0, 32768, 65535).convert();
        assert_eq!(back, Color::from_array([0.0, 0.5, 1.0].map(f16::from_f32)));

        let wide: Color<f32> = c.convert();
        assert_eq!(wide, Color::new(0.25, 0.5, 1.0));
        assert_eq!(wide.convert::<f16>(), c);
    }

    #[test]
    fn test_color_conversion_narrowing() {
        let c = Color::<f64>::new(0.1, 0.5, 1.0);
        assert_eq!(c.convert::<f32>(), Color::new(0.1f32, 0.5, 1.0));

        let c = Color::<i64>::new(i64::MAX, 4_611_686_018_427_387_903, -5);
        assert_eq!(c.convert::<i16>(), Color::new(32767, 16383, 0));

        let c = Color::<u64>::new(u64::MAX, 0, u64::MAX / 2);
        assert_eq!(c.convert::<u32>(), Color::new(u32::MAX, 0, u32::MAX / 2));
    }

    #[test]
    fn test_color_conversion_identity() {
        let c = Color::<u64>::new(u64::MAX, 12_345_678_901_234_567, 0);
        assert_eq!(c.convert::<u64>(), c);
    }

    #[test]
    fn test_color_round_trip_8bit() {
        for v in 0..=255u8 {
            let f: Color<f32> = Color::<u8>::gray(v).convert();
            let back: Color<u8> = f.convert();
            let diff = (back.r() as i16 - v as i16).abs();
            assert!(diff <= 1, "channel {v} came back as {}", back.r());
        }
        let white: Color<f64> = Color::<u8>::gray(255).convert();
        assert_eq!(white.convert::<u8>(), Color::gray(255));
        assert_eq!(Color::<f64>::zero().convert::<u8>(), Color::zero());
    }

    #[test]
    fn test_color_from_temperature() {
        let cases: [(u32, [u8; 3]); 9] = [
            (0, [255, 67, 0]),
            (1500, [255, 108, 0]),
            (2500, [255, 159, 70]),
            (5000, [255, 228, 205]),
            (6600, [255, 255, 255]),
            (10_000, [201, 218, 255]),
            (15_000, [181, 205, 255]),
            (40_000, [151, 185, 255]),
            (60_000, [151, 185, 255]),
        ];

        for (kelvin, rgb) in cases {
            let expected = Color::<u8>::from_array(rgb);
            assert_eq!(Color::<u8>::from_temperature(kelvin), expected, "{kelvin} K");
            assert_eq!(
                Color::<f32>::from_temperature(kelvin),
                expected.convert::<f32>(),
                "{kelvin} K"
            );
        }
    }

    #[test]
    fn test_color_luminance() {
        assert_relative_eq!(luminance(&Color::<f64>::gray(1.0)), 1.0, epsilon = 1e-9);
        assert_relative_eq!(Color::<f32>::new(1.0, 0.0, 0.0).luminance(), 0.212655);
        assert_eq!(Color::<f64>::zero().luminance(), 0.0);
    }

    #[test]
    fn test_color_invert() {
        assert_eq!(Color::<u8>::new(0, 55, 255).invert(), Color::new(255, 200, 0));
        assert_eq!(Color::<i16>::new(-4, 0, 32767).invert(), Color::new(32767, 32767, 0));
        assert_eq!(Color::<f32>::new(0.25, 1.5, -1.0).invert(), Color::new(0.75, 0.0, 1.0));
    }

    for_color_types!(test_color_invert_twice, |T| {
        let max = if T::IS_FLOAT { T::one() } else { T::MAX };
        assert_eq!(Color::<T>::zero().invert(), Color::gray(max));
        assert_eq!(Color::<T>::gray(max).invert(), Color::zero());
    });

    #[test]
    fn test_color_from_vectors() {
        assert_eq!(Color::from(Vec3::new(-1, 2, -3)), Color::new(1, 2, 3));
        assert_eq!(Color::from(Vec3::new(i8::MIN, 0, 1)), Color::new(i8::MAX, 0, 1));
        assert_eq!(Color::from(Vec2::new(-1.5f32, 2.0)), Color::new(1.5, 2.0, 0.0));
        assert_eq!(Vec3::from(Color::new(1u8, 2, 3)), Vec3::new(1, 2, 3));
    }

    #[test]
    fn test_color_comparison() {
        let c = Color::new(1, 12, 5);
        assert_eq!(c, Color::new(1, 12, 5));
        assert_ne!(c, Color::new(0, 5, 42));
        assert!(c.greater_equal(&Color::new(1, 2, 3)).all());
    }
}
