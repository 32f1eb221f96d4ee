use num::{BigRational, ToPrimitive, Zero};
use std::cmp::Ordering;

use crate::float::{next_down, next_up};

/// A point with exact rational coordinates.
///
/// These are only ever constructed as the exact intersection of two input
/// segments, so their values always lie inside the convex hull of the
/// (finite) input coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatPoint {
    pub x: BigRational,
    pub y: BigRational,
}

impl RatPoint {
    /// Round both coordinates to the nearest double.
    pub fn to_float(&self) -> [f64; 2] {
        [to_nearest_f64(&self.x), to_nearest_f64(&self.y)]
    }
}

impl PartialOrd for RatPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RatPoint {
    /// Lexicographic order: by x, then by y.
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }
}

/// Exact rational value of a double. Callers must have validated the input
/// as finite.
pub fn rat(value: f64) -> BigRational {
    BigRational::from_float(value).expect("coordinates are validated finite")
}

/// Exact rational image of a float point.
pub fn rat_point(p: [f64; 2]) -> RatPoint {
    RatPoint {
        x: rat(p[0]),
        y: rat(p[1]),
    }
}

fn to_nearest_f64(r: &BigRational) -> f64 {
    r.to_f64().expect("rational points stay within double range")
}

/// Conservative double bracket of an exact rational: `lo <= r <= hi`, with
/// `hi` equal to `lo` or the very next representable double above it.
pub fn bound(r: &BigRational) -> (f64, f64) {
    let f = to_nearest_f64(r);
    match rat(f).cmp(r) {
        Ordering::Less => (f, next_up(f)),
        Ordering::Greater => (next_down(f), f),
        Ordering::Equal => (f, f),
    }
}

/// The unique intersection point of the lines through `(a, b)` and `(c, d)`,
/// or `None` when the determinant vanishes (parallel, collinear, or a
/// degenerate segment).
pub fn intersect(a: &RatPoint, b: &RatPoint, c: &RatPoint, d: &RatPoint) -> Option<RatPoint> {
    let ux = &b.x - &a.x;
    let uy = &b.y - &a.y;
    let vx = &d.x - &c.x;
    let vy = &d.y - &c.y;

    let det = &ux * &vy - &uy * &vx;
    if det.is_zero() {
        return None;
    }

    let wx = &c.x - &a.x;
    let wy = &c.y - &a.y;
    let t = (&wx * &vy - &wy * &vx) / &det;

    Some(RatPoint {
        x: &a.x + &t * &ux,
        y: &a.y + &t * &uy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rp(x: f64, y: f64) -> RatPoint {
        rat_point([x, y])
    }

    #[test]
    fn test_bound_is_tight_for_representable_values() {
        for v in [0.0, 1.0, -2.5, 0.1, 1e300, -5e-324] {
            let (lo, hi) = bound(&rat(v));
            assert_eq!(lo, v);
            assert_eq!(hi, v);
        }
    }

    #[test]
    fn test_bound_brackets_one_third() {
        let third = rat(1.0) / rat(3.0);
        let (lo, hi) = bound(&third);
        assert!(rat(lo) <= third);
        assert!(third <= rat(hi));
        assert_eq!(hi, next_up(lo));
    }

    #[test]
    fn test_bound_brackets_negative_values() {
        let v = rat(-1.0) / rat(7.0);
        let (lo, hi) = bound(&v);
        assert!(rat(lo) <= v);
        assert!(v <= rat(hi));
        assert!(hi == lo || hi == next_up(lo));
    }

    #[test]
    fn test_intersect_diagonals() {
        let p = intersect(&rp(-1.0, -1.0), &rp(1.0, 1.0), &rp(-1.0, 1.0), &rp(1.0, -1.0))
            .expect("diagonals cross");
        assert_eq!(p.to_float(), [0.0, 0.0]);
    }

    #[test]
    fn test_intersect_off_grid() {
        // y = x meets y = 1 - 2x at x = 1/3, which is not representable
        let p = intersect(&rp(0.0, 0.0), &rp(1.0, 1.0), &rp(0.0, 1.0), &rp(1.0, -1.0))
            .expect("lines cross");
        assert_eq!(p.x, rat(1.0) / rat(3.0));
        assert_eq!(p.y, rat(1.0) / rat(3.0));
    }

    #[test]
    fn test_intersect_parallel_is_none() {
        assert!(intersect(&rp(0.0, 0.0), &rp(1.0, 0.0), &rp(0.0, 1.0), &rp(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_intersect_collinear_is_none() {
        assert!(intersect(&rp(0.0, 0.0), &rp(2.0, 0.0), &rp(1.0, 0.0), &rp(3.0, 0.0)).is_none());
    }

    #[test]
    fn test_intersect_degenerate_is_none() {
        assert!(intersect(&rp(0.0, 0.0), &rp(0.0, 0.0), &rp(-1.0, 1.0), &rp(1.0, -1.0)).is_none());
    }

    #[test]
    fn test_lex_order() {
        assert!(rp(0.0, 5.0) < rp(1.0, 0.0));
        assert!(rp(1.0, 0.0) < rp(1.0, 1.0));
        assert_eq!(rp(2.0, 3.0).cmp(&rp(2.0, 3.0)), std::cmp::Ordering::Equal);
    }
}
