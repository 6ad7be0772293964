/// 2^(MANTISSA_DIGITS - 1): above this magnitude every f64 is an integer.
const TWO_MANT_DIG: f64 = (1u64 << (f64::MANTISSA_DIGITS - 1)) as f64;

/// Round to the nearest integer, breaking ties away from zero.
///
/// `round(0.5) == 1.0`, `round(-0.5) == -1.0`, `round(-0.4) == -0.0` (the
/// sign of zero is preserved). Never calls into libm, so the result is the
/// same bit pattern on every conforming IEEE-754 target.
///
/// Snapping works by adding and subtracting 2^52: the format's own rounding
/// drops the fractional bits, and a single correction step afterwards pins
/// the tie direction. The C ancestor of this routine forced every
/// intermediate through a `volatile` store to defeat x87 80-bit registers;
/// Rust guarantees `f64` arithmetic is strict IEEE-754 binary64 on all
/// supported targets, so no equivalent is needed here. Porting to a target
/// with wider-than-double intermediates would reintroduce that concern.
pub fn round(x: f64) -> f64 {
    let mut y = x;
    let mut z = y;

    if z > 0.0 {
        // Avoid rounding error for x = 0.5 - 2^-54.
        if z < 0.5 {
            z = 0.0;
        } else if z < TWO_MANT_DIG {
            z += 0.5;
            y = z;
            // Snap to an integer (nearest, up or down, does not matter yet).
            z += TWO_MANT_DIG;
            z -= TWO_MANT_DIG;
            // Enforce rounding down.
            if z > y {
                z -= 1.0;
            }
        }
        // z >= 2^52: already integral.
    } else if z < 0.0 {
        if z > -0.5 {
            z = -0.0;
        } else if z > -TWO_MANT_DIG {
            z -= 0.5;
            y = z;
            z -= TWO_MANT_DIG;
            z += TWO_MANT_DIG;
            // Enforce rounding up.
            if z < y {
                z += 1.0;
            }
        }
    }

    z
}
