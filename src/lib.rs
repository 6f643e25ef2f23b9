//! [![Documentation](https://docs.rs/twiddle/badge.svg)](https://docs.rs/twiddle)
//! [![Crates](https://img.shields.io/crates/v/twiddle.svg)](https://crates.io/crates/twiddle)
//! [![Actions Status](https://github.com/udoprog/twiddle/workflows/Rust/badge.svg)](https://github.com/udoprog/twiddle/actions)
//!
//! Bit-level primitives over 32-bit words and IEEE-754 single-precision bit
//! patterns.
//!
//! Every function in this crate is pure and total over its documented domain:
//! it reads its arguments, uses local temporaries, and returns a value. There
//! is no state, no I/O, and nothing to synchronize, so everything here is safe
//! to call from any number of threads.
//!
//! The [word] module operates on `i32` values as two's-complement words.
//!
//! ```rust
//! assert_eq!(twiddle::word::bit_and(6, 5), 4);
//! assert_eq!(twiddle::word::extract_byte(0x12345678, 1), 0x56);
//! assert_eq!(twiddle::word::count_bits(7), 3);
//! ```
//!
//! The [float] module operates on `u32` values as raw IEEE-754
//! single-precision encodings, never on a native float.
//!
//! ```rust
//! assert_eq!(twiddle::float::from_int(1), 1.0f32.to_bits());
//! assert_eq!(twiddle::float::double(2.0f32.to_bits()), 4.0f32.to_bits());
//! ```
//!
//! Preconditions such as shift counts being in range are caller-enforced
//! invariants. Behavior outside the documented domain is unspecified.
//!
//! [word]: https://docs.rs/twiddle/0/twiddle/word/index.html
//! [float]: https://docs.rs/twiddle/0/twiddle/float/index.html

#![deny(missing_docs)]

pub mod float;
pub mod word;
