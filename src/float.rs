//! Operations on raw IEEE-754 single-precision bit patterns.
//!
//! Everything in this module takes and returns `u32` values holding the
//! 32-bit encoding (1 sign bit, 8 exponent bits biased by 127, 23 mantissa
//! bits). No native float arithmetic is involved; results are assembled field
//! by field. NaN inputs (exponent all ones, mantissa nonzero) are returned
//! unchanged by the operations that could otherwise alter them.

/// Mask for the sign bit of a single-precision encoding.
pub const SIGN_MASK: u32 = 0x8000_0000;

/// Mask for the 8-bit exponent field of a single-precision encoding.
pub const EXP_MASK: u32 = 0x7f80_0000;

/// Mask for the 23-bit mantissa field of a single-precision encoding.
pub const MAN_MASK: u32 = 0x007f_ffff;

/// Test whether `f` encodes a NaN.
///
/// With the sign bit cleared, anything strictly above the infinity pattern
/// has exponent all ones and a nonzero mantissa.
///
/// # Examples
///
/// ```rust
/// assert!(twiddle::float::is_nan(f32::NAN.to_bits()));
/// assert!(!twiddle::float::is_nan(f32::INFINITY.to_bits()));
/// assert!(!twiddle::float::is_nan(1.0f32.to_bits()));
/// ```
#[inline]
pub fn is_nan(f: u32) -> bool {
    (f & !SIGN_MASK) > EXP_MASK
}

/// The bit-level equivalent of `-f`.
///
/// Flips the sign bit. NaN is returned unchanged.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::float::negate(0x0000_0000), 0x8000_0000);
/// assert_eq!(twiddle::float::negate(1.0f32.to_bits()), (-1.0f32).to_bits());
///
/// let nan = f32::NAN.to_bits();
/// assert_eq!(twiddle::float::negate(nan), nan);
/// ```
#[inline]
pub fn negate(f: u32) -> u32 {
    if is_nan(f) {
        return f;
    }

    f ^ SIGN_MASK
}

/// The bit-level equivalent of `x as f32`: the nearest single-precision
/// encoding of a two's-complement integer.
///
/// The magnitude is normalized so its leading 1 sits at bit 31, which fixes
/// the exponent; the next 23 bits become the mantissa and the remaining 8 are
/// rounded to nearest, ties to even. A rounding carry out of the mantissa is
/// left to propagate into the exponent, which is exactly what the encoding
/// calls for when the mantissa overflows.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::float::from_int(0), 0x0000_0000);
/// assert_eq!(twiddle::float::from_int(1), 0x3f80_0000);
/// assert_eq!(twiddle::float::from_int(-1), 0xbf80_0000);
/// assert_eq!(twiddle::float::from_int(i32::MIN), (i32::MIN as f32).to_bits());
///
/// // 2^24 + 1 is a tie on the discarded bits and rounds to the even
/// // mantissa, back down to 2^24.
/// assert_eq!(twiddle::float::from_int(0x0100_0001), ((1i32 << 24) as f32).to_bits());
/// ```
#[inline]
pub fn from_int(x: i32) -> u32 {
    if x == 0 {
        return 0;
    }

    let sign = (x as u32) & SIGN_MASK;
    // i32::MIN has no positive counterpart but its magnitude survives the
    // cast to unsigned.
    let mag = x.unsigned_abs();

    let zeros = mag.leading_zeros();
    let normalized = mag << zeros;
    let exp = 158 - zeros; // 127 + (31 - zeros)

    let mut frac = (normalized & !SIGN_MASK) >> 8;

    // Round up when the first discarded bit is set and either a lower bit is
    // set (above the halfway point) or the retained LSB is odd (tie).
    if normalized & 0x80 != 0 && (normalized & 0x7f != 0 || frac & 1 != 0) {
        frac += 1;
    }

    sign | ((exp << 23) + frac)
}

/// The bit-level equivalent of `2.0 * f`.
///
/// NaN and infinity (exponent all ones) pass through unchanged. A denormal
/// doubles by shifting its mantissa left one place; a carry into bit 23
/// promotes it to the smallest normal. A normal doubles by incrementing its
/// exponent, and overflows to exactly infinity when the exponent reaches all
/// ones.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::float::double(1.0f32.to_bits()), 2.0f32.to_bits());
///
/// let nan = f32::NAN.to_bits();
/// assert_eq!(twiddle::float::double(nan), nan);
///
/// // The largest finite value overflows to infinity, mantissa cleared.
/// assert_eq!(twiddle::float::double(f32::MAX.to_bits()), f32::INFINITY.to_bits());
/// ```
#[inline]
pub fn double(f: u32) -> u32 {
    let sign = f & SIGN_MASK;
    let exp = (f & EXP_MASK) >> 23;
    let frac = f & MAN_MASK;

    if exp == 0xff {
        return f;
    }

    if exp == 0 {
        // Denormal: the shifted mantissa may carry into the exponent field,
        // which is the correct promotion to normal.
        return sign | (frac << 1);
    }

    let exp = exp + 1;

    if exp == 0xff {
        return sign | EXP_MASK;
    }

    sign | (exp << 23) | frac
}
