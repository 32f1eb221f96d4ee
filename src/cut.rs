use crate::edge::EdgeRec;
use crate::rational::{self, RatPoint};

/// A cut point registered on an edge. `point` addresses the float table
/// when below its length, and the rational point table (offset by the float
/// table length) otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Junction {
    pub edge: usize,
    pub point: usize,
}

/// Exact coordinates of a junction point, coercing float points to
/// rationals on the fly.
fn exact_point(points: &[[f64; 2]], rat_points: &[RatPoint], index: usize) -> RatPoint {
    if index < points.len() {
        rational::rat_point(points[index])
    } else {
        rat_points[index - points.len()].clone()
    }
}

fn lex_less(a: [f64; 2], b: [f64; 2]) -> bool {
    a[0] < b[0] || (a[0] == b[0] && a[1] < b[1])
}

/// Cut every edge at its registered junctions.
///
/// Crossings are first converted to junctions by constructing the exact
/// rational intersection point, shared by both edges. The junction list is
/// then sorted by owning edge and exact position, and each cut edge is
/// rewritten into a chain of sub-edges, carrying its color along.
///
/// Returns the rational point table; the rewritten edges reference it
/// through indices past the float table.
pub fn cut_edges(
    points: &[[f64; 2]],
    edges: &mut Vec<EdgeRec>,
    crossings: &[(usize, usize)],
    junctions: &mut Vec<Junction>,
) -> Vec<RatPoint> {
    let num_float = points.len();
    let mut rat_points: Vec<RatPoint> = Vec::with_capacity(crossings.len());

    for &(e, f) in crossings {
        let (ea, eb) = (edges[e].s, edges[e].t);
        let (fa, fb) = (edges[f].s, edges[f].t);
        let hit = rational::intersect(
            &rational::rat_point(points[ea]),
            &rational::rat_point(points[eb]),
            &rational::rat_point(points[fa]),
            &rational::rat_point(points[fb]),
        );
        // No unique point means the segments are parallel; a collinear
        // overlap is resolved through the endpoint-on-edge path instead.
        let Some(pt) = hit else { continue };

        let index = num_float + rat_points.len();
        rat_points.push(pt);
        junctions.push(Junction { edge: e, point: index });
        junctions.push(Junction { edge: f, point: index });
    }

    junctions
        .sort_by_cached_key(|j| (j.edge, exact_point(points, &rat_points, j.point)));

    // Walk the sorted list backwards, one edge group at a time. The group's
    // edge is oriented from its lexicographically larger endpoint toward the
    // smaller, so the reverse scan meets the cut points in chain order.
    let mut i = junctions.len();
    while i > 0 {
        i -= 1;
        let e = junctions[i].edge;
        let EdgeRec { mut s, mut t, color } = edges[e];

        if lex_less(points[s], points[t]) {
            std::mem::swap(&mut s, &mut t);
        }

        let mut last = junctions[i].point;
        edges[e] = EdgeRec::new(s, last, color);

        while i > 0 && junctions[i - 1].edge == e {
            i -= 1;
            let next = junctions[i].point;
            edges.push(EdgeRec::new(last, next, color));
            last = next;
        }

        edges.push(EdgeRec::new(last, t, color));
    }

    rat_points
}
