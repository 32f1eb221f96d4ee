use crate::edge::EdgeRec;
use crate::rtree::Rect;

/// Bounding box of every edge, spanned by its two endpoints.
pub fn edge_bounds(points: &[[f64; 2]], edges: &[EdgeRec]) -> Vec<Rect> {
    edges
        .iter()
        .map(|edge| {
            let a = points[edge.s];
            let b = points[edge.t];
            Rect {
                min: [a[0].min(b[0]), a[1].min(b[1])],
                max: [a[0].max(b[0]), a[1].max(b[1])],
            }
        })
        .collect()
}

/// Degenerate one-point box for every vertex.
pub fn point_bounds(points: &[[f64; 2]]) -> Vec<Rect> {
    points.iter().map(|&p| Rect { min: p, max: p }).collect()
}
