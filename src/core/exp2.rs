use crate::core::exp2_table::EXP_TABLE;
use crate::core::round::round;

/// Best possible approximation of log(2)/256 as an f64.
const LOG2_BY_256: f64 = 0.00270760617406228636491106297444600221904;

// Leading coefficients of the power series for tanh(z), to 36 significant
// digits. With |z| <= log(2)/1024 < 0.0007 the z^7 term contributes less
// than 0.0007^6 < 2^-60 relative, below f64 epsilon, so the series stops
// at z^5.
const TANH_COEFF_1: f64 = 1.0;
const TANH_COEFF_3: f64 = -0.333333333333333333333333333333333333334;
const TANH_COEFF_5: f64 = 0.133333333333333333333333333333333333334;

/// x above this overflows 2^x to infinity (DBL_MAX_EXP).
const OVERFLOW_EXP: f64 = 1024.0;

/// x below this underflows 2^x to zero (DBL_MIN_EXP - 1 - DBL_MANT_DIG).
const UNDERFLOW_EXP: f64 = -1075.0;

/// Compute 2^x, bit-identically across platforms.
///
/// A libm `exp2` may differ in the last ULPs between standard libraries and
/// architectures; this implementation fixes one answer everywhere by using
/// only basic IEEE-754 arithmetic, [`round`], and a literal lookup table.
///
/// The input is decomposed as `x = n + m/256 + y/log(2)` with integer `n`,
/// integer `m` in [-128, 128] and `|y| <= log(2)/512 + epsilon`, so that
///
/// ```text
/// exp2(x) = 2^n * exp(m * log(2)/256) * exp(y)
/// ```
///
/// The middle factor is a table lookup; the last is recovered from a
/// truncated tanh series via `exp(2z) = (1 + tanh z) / (1 - tanh z)` with
/// `z = y/2`.
///
/// Out-of-range inputs saturate: above 1024 the result is `+inf`, below
/// -1075 it is `0.0`. NaN is not special-cased; passing NaN is outside
/// this function's contract.
pub fn exp2(x: f64) -> f64 {
    if x > OVERFLOW_EXP {
        // exp2(x) > 2^DBL_MAX_EXP, overflows.
        return f64::INFINITY;
    }

    if x < UNDERFLOW_EXP {
        // exp2(x) < 2^(DBL_MIN_EXP - 1 - DBL_MANT_DIG), underflows.
        return 0.0;
    }

    let nm = round(x * 256.0); // = 256 * n + m
    let z = (x * 256.0 - nm) * (LOG2_BY_256 * 0.5);

    let z2 = z * z;
    let tanh_z = ((TANH_COEFF_5 * z2 + TANH_COEFF_3) * z2 + TANH_COEFF_1) * z;

    let exp_y = (1.0 + tanh_z) / (1.0 - tanh_z);

    let n = round(nm * (1.0 / 256.0)) as i32;
    let m = nm as i32 - 256 * n; // in [-128, 128]

    // 2^n scaling by repeated exact doubling/halving; n is bounded by the
    // range guards above, so both loops terminate quickly.
    let mut ret = EXP_TABLE[(128 + m) as usize] * exp_y;
    if n >= 0 {
        for _ in 0..n {
            ret *= 2.0;
        }
    } else {
        for _ in 0..-n {
            ret *= 0.5;
        }
    }
    ret
}
