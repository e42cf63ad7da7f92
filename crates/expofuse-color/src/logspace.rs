//! Log blend-space encoding.
//!
//! Compresses the value range before pyramid arithmetic so that very bright
//! samples do not dominate the blend, with an exact inverse afterwards. The
//! curve is continuous at 0 (both branches meet at 1) and strictly
//! increasing, so encode/decode form an exact bijection on all of f32.
//!
//! # Range
//!
//! - `encode`: x >= 0 maps to [1, inf); x < 0 maps to (0, 1)
//! - `decode`: exact inverse

/// Encodes a linear value into log blend space.
///
/// # Formula
///
/// ```text
/// if x >= 0:
///     y = 1 + ln(1 + x)
/// else:
///     y = 1 / (1 - x)
/// ```
///
/// # Example
///
/// ```rust
/// use expofuse_color::logspace::encode;
///
/// assert_eq!(encode(0.0), 1.0);
/// assert!((encode(1.0) - (1.0 + 2.0f32.ln())).abs() < 1e-6);
/// ```
#[inline]
pub fn encode(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 + x.ln_1p()
    } else {
        1.0 / (1.0 - x)
    }
}

/// Decodes a log blend-space value back to linear.
///
/// Exact inverse of [`encode`].
///
/// # Formula
///
/// ```text
/// if y >= 1:
///     x = e^(y - 1) - 1
/// else:
///     x = 1 - 1/y
/// ```
#[inline]
pub fn decode(y: f32) -> f32 {
    if y >= 1.0 {
        (y - 1.0).exp_m1()
    } else {
        1.0 - 1.0 / y
    }
}

/// Applies [`encode`] to an RGB triplet.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies [`decode`] to an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in -50..=200 {
            let x = i as f32 / 50.0; // [-1, 4]
            let back = decode(encode(x));
            assert!((x - back).abs() < 1e-5, "x={}, back={}", x, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0.0), 1.0);
        assert_eq!(decode(1.0), 0.0);
    }

    #[test]
    fn test_continuity_at_zero() {
        let below = encode(-1e-6);
        let above = encode(1e-6);
        assert!((below - above).abs() < 1e-5);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = encode(-2.0);
        for i in -99..=100 {
            let y = encode(i as f32 / 50.0);
            assert!(y > prev);
            prev = y;
        }
    }
}
