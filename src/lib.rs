//! Bit-reproducible `exp2` and `round` for f64, plus z-base-32 key encoding.
//!
//! General-purpose math libraries do not promise the same bit pattern for
//! `2^x` across compilers, standard libraries and CPUs. When the result
//! feeds a consensus calculation that many independent nodes must agree on,
//! that matters. This crate pins one answer everywhere: a `round` with
//! ties away from zero built from plain IEEE-754 arithmetic, an `exp2`
//! built on range reduction, a literal 257-entry table and a truncated
//! tanh series, and a small z-base-32 encoder for fixed-length public keys.
//!
//! All operations are pure and free of shared mutable state; the lookup
//! table is a compile-time constant, so there is no initialization step and
//! every function is safe to call from any number of threads.

pub mod core;
pub use self::core::*;
