/// Multiplying a positive normal double by this moves it one step up.
const ULP_UP: f64 = 1.0 + f64::EPSILON;
/// Multiplying a positive normal double by this moves it one step down.
const ULP_DOWN: f64 = 1.0 - 0.5 * f64::EPSILON;
/// Below this magnitude the representable doubles are evenly spaced
/// and stepping is plain addition of the smallest subnormal.
const SUBNORMAL_LIMIT: f64 = 2.0 * f64::MIN_POSITIVE;
/// The smallest positive subnormal double, 2^-1074.
const SMALLEST_STEP: f64 = 5e-324;

/// The next representable double strictly above `x`.
///
/// Equivalent to `nextafter(x, +inf)`: the result is strictly greater than
/// `x` and at most one representable step away for finite non-subnormal
/// inputs. `-inf` maps to the most negative finite double.
pub fn next_up(x: f64) -> f64 {
    if x > 0.0 {
        if x < SUBNORMAL_LIMIT {
            x + SMALLEST_STEP
        } else {
            x * ULP_UP
        }
    } else if x < 0.0 {
        if x > -SUBNORMAL_LIMIT {
            x + SMALLEST_STEP
        } else if x == f64::NEG_INFINITY {
            f64::MIN
        } else {
            x * ULP_DOWN
        }
    } else {
        SMALLEST_STEP
    }
}

/// The next representable double strictly below `x`.
///
/// Equivalent to `nextafter(x, -inf)`. `+inf` maps to the largest finite
/// double.
pub fn next_down(x: f64) -> f64 {
    if x > 0.0 {
        if x < SUBNORMAL_LIMIT {
            x - SMALLEST_STEP
        } else if x == f64::INFINITY {
            f64::MAX
        } else {
            x * ULP_DOWN
        }
    } else if x < 0.0 {
        if x > -SUBNORMAL_LIMIT {
            x - SMALLEST_STEP
        } else {
            x * ULP_UP
        }
    } else {
        -SMALLEST_STEP
    }
}
