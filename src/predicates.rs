use robust::{orient2d, Coord};

fn orient(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    orient2d(
        Coord { x: a[0], y: a[1] },
        Coord { x: b[0], y: b[1] },
        Coord { x: c[0], y: c[1] },
    )
}

/// Inclusive bounding-box containment of `p` in the box spanned by `a`, `b`.
fn in_box(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> bool {
    p[0] >= a[0].min(b[0])
        && p[0] <= a[0].max(b[0])
        && p[1] >= a[1].min(b[1])
        && p[1] <= a[1].max(b[1])
}

/// Whether the closed segments `(a, b)` and `(c, d)` share at least one
/// point.
///
/// Exact in sign for any double input: the orientation tests go through
/// adaptive-precision arithmetic, and the collinear branches reduce to
/// coordinate comparisons. Degenerate segments (equal endpoints) act as
/// points, so `segments_intersect(a, b, p, p)` is the point-on-segment
/// test.
pub fn segments_intersect(a: [f64; 2], b: [f64; 2], c: [f64; 2], d: [f64; 2]) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);

    // Proper crossing: each segment separates the other's endpoints.
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    // Collinear contacts: an endpoint lies on the other closed segment.
    (d1 == 0.0 && in_box(c, d, a))
        || (d2 == 0.0 && in_box(c, d, b))
        || (d3 == 0.0 && in_box(a, b, c))
        || (d4 == 0.0 && in_box(a, b, d))
}
