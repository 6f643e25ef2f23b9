//! Bit tricks over 32-bit two's-complement words.
//!
//! Each function derives its result from bit identities rather than leaning on
//! the corresponding native operator, which is the point of the crate: the
//! derivation documents *why* the bit pattern comes out the way it does.
//! Shift counts are caller-enforced preconditions and are not checked.

/// Bitwise AND derived through De Morgan's law, `!(!x | !y)`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::bit_and(6, 5), 4);
/// assert_eq!(twiddle::word::bit_and(-1, 0x1234), 0x1234);
/// ```
#[inline]
pub fn bit_and(x: i32, y: i32) -> i32 {
    !(!x | !y)
}

/// Extract byte `n` from `x`, where byte 0 is the least significant.
///
/// `n` must be in `0..=3`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::extract_byte(0x12345678, 1), 0x56);
/// assert_eq!(twiddle::word::extract_byte(0x12345678, 3), 0x12);
/// ```
#[inline]
pub fn extract_byte(x: i32, n: u32) -> i32 {
    (x >> (n << 3)) & 0xff
}

/// Shift `x` right by `n`, filling with zeros regardless of sign.
///
/// `n` must be in `0..=31`. The native `>>` on `i32` is an arithmetic shift;
/// the zero fill comes from shifting in the unsigned domain.
///
/// # Examples
///
/// ```rust
/// let x = 0x87654321u32 as i32;
/// assert_eq!(twiddle::word::logical_shift(x, 4), 0x08765432);
/// assert_eq!(twiddle::word::logical_shift(-1, 31), 1);
/// ```
#[inline]
pub fn logical_shift(x: i32, n: u32) -> i32 {
    ((x as u32) >> n) as i32
}

/// Count the number of set bits in `x`.
///
/// Uses the parallel (SWAR) reduction: fold each pair of bits into a 2-bit
/// count, each nibble into a 4-bit count, then sum the byte counts with a
/// single multiply.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::count_bits(5), 2);
/// assert_eq!(twiddle::word::count_bits(7), 3);
/// assert_eq!(twiddle::word::count_bits(0), 0);
/// assert_eq!(twiddle::word::count_bits(-1), 32);
/// ```
#[inline]
pub fn count_bits(x: i32) -> i32 {
    let x = x as u32;
    let x = x - ((x >> 1) & 0x5555_5555);
    let x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    let x = (x + (x >> 4)) & 0x0f0f_0f0f;
    // Sums the four byte counts into the top byte.
    (x.wrapping_mul(0x0101_0101) >> 24) as i32
}

/// Logical negation: 1 if `x == 0`, otherwise 0.
///
/// `x | -x` has its sign bit set exactly when `x` is nonzero, since zero is
/// the only word equal to its own negation.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::logical_not(3), 0);
/// assert_eq!(twiddle::word::logical_not(0), 1);
/// ```
#[inline]
pub fn logical_not(x: i32) -> i32 {
    ((x | x.wrapping_neg()) >> 31) + 1
}

/// The most negative 32-bit two's-complement value.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::min_int(), 0x80000000u32 as i32);
/// ```
#[inline]
pub fn min_int() -> i32 {
    i32::MIN
}

/// 1 if `x` is representable as an `n`-bit two's-complement integer,
/// otherwise 0.
///
/// `n` must be in `1..=32`. A value fits in `n` bits exactly when truncating
/// to `n` bits and sign-extending back reproduces it.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::fits_bits(5, 3), 0);
/// assert_eq!(twiddle::word::fits_bits(-4, 3), 1);
/// ```
#[inline]
pub fn fits_bits(x: i32, n: u32) -> i32 {
    let shift = 32 - n;
    ((x << shift) >> shift == x) as i32
}

/// Compute `x / 2^n`, rounded toward zero.
///
/// `n` must be in `0..=30`. An arithmetic shift alone rounds toward negative
/// infinity; adding `2^n - 1` first, only when `x` is negative, restores
/// truncation. The sign mask `x >> 31` selects the bias without a branch.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::div_pow2(15, 1), 7);
/// assert_eq!(twiddle::word::div_pow2(-33, 4), -2);
/// ```
#[inline]
pub fn div_pow2(x: i32, n: u32) -> i32 {
    let bias = (x >> 31) & ((1 << n) - 1);
    (x + bias) >> n
}

/// Two's-complement negation, `!x + 1`.
///
/// Wraps at the boundary: `negate(i32::MIN)` is `i32::MIN`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::negate(1), -1);
/// assert_eq!(twiddle::word::negate(-5), 5);
/// ```
#[inline]
pub fn negate(x: i32) -> i32 {
    (!x).wrapping_add(1)
}

/// 1 if `x > 0`, otherwise 0.
///
/// Combines the sign-bit test with the nonzero test from [logical_not], since
/// a clear sign bit alone does not rule out zero.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::is_positive(5), 1);
/// assert_eq!(twiddle::word::is_positive(0), 0);
/// assert_eq!(twiddle::word::is_positive(-1), 0);
/// ```
#[inline]
pub fn is_positive(x: i32) -> i32 {
    let non_negative = !(x >> 31);
    let nonzero = (x | x.wrapping_neg()) >> 31;
    non_negative & nonzero & 1
}

/// 1 if `x <= y`, otherwise 0.
///
/// When the signs differ the answer is decided by the signs alone, so the
/// subtraction `y - x` is only consulted for same-sign operands, where it
/// cannot overflow.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::is_less_or_equal(4, 5), 1);
/// assert_eq!(twiddle::word::is_less_or_equal(5, 4), 0);
/// assert_eq!(twiddle::word::is_less_or_equal(i32::MIN, i32::MAX), 1);
/// ```
#[inline]
pub fn is_less_or_equal(x: i32, y: i32) -> i32 {
    let x_sign = (x >> 31) & 1;
    let y_sign = (y >> 31) & 1;
    let same_sign = (x_sign ^ y_sign) ^ 1;
    let diff_negative = (y.wrapping_sub(x) >> 31) & 1;
    (x_sign & (y_sign ^ 1)) | (same_sign & (diff_negative ^ 1))
}

/// Floor of the base-2 logarithm of `x`, which must be positive.
///
/// Binary-searches the highest set bit: each probe asks whether anything is
/// set above a power-of-two position, accumulating the answer one bit of the
/// result at a time. Five probes cover all 32 positions.
///
/// # Examples
///
/// ```rust
/// assert_eq!(twiddle::word::floor_log2(16), 4);
/// assert_eq!(twiddle::word::floor_log2(1), 0);
/// assert_eq!(twiddle::word::floor_log2(i32::MAX), 30);
/// ```
#[inline]
pub fn floor_log2(x: i32) -> i32 {
    let mut log = (((x >> 16) != 0) as i32) << 4;
    log += (((x >> (log + 8)) != 0) as i32) << 3;
    log += (((x >> (log + 4)) != 0) as i32) << 2;
    log += (((x >> (log + 2)) != 0) as i32) << 1;
    log += ((x >> (log + 1)) != 0) as i32;
    log
}
