use crate::bounds::{edge_bounds, point_bounds};
use crate::cut::{cut_edges, Junction};
use crate::dedup::{dedup_edges, dedup_points};
use crate::edge::EdgeRec;
use crate::error::SnapRoundError;
use crate::predicates::segments_intersect;
use crate::rtree::{BoxSet, Rect};

const ROUND_LIMIT_FACTOR: usize = 8;
const ROUND_LIMIT_SLACK: usize = 16;

/// Pairs of edges whose closed segments meet away from any shared endpoint
/// index, reported as `(i, j)` with `i < j`.
fn find_crossings(points: &[[f64; 2]], edges: &[EdgeRec], edge_boxes: &BoxSet) -> Vec<(usize, usize)> {
    let mut crossings = Vec::new();
    edge_boxes.for_each_self_pair(|i, j| {
        let a = edges[i];
        let b = edges[j];
        if a.s == b.s || a.s == b.t || a.t == b.s || a.t == b.t {
            return;
        }
        if segments_intersect(points[a.s], points[a.t], points[b.s], points[b.t]) {
            crossings.push((i, j));
        }
    });
    crossings
}

/// Vertices sitting on an edge they are not an endpoint of, found by
/// probing the edge boxes with every vertex's degenerate box.
fn find_t_junctions(
    points: &[[f64; 2]],
    edges: &[EdgeRec],
    edge_boxes: &BoxSet,
    vertex_boxes: &[Rect],
) -> Vec<Junction> {
    let mut junctions = Vec::new();
    edge_boxes.for_each_cross_pair(vertex_boxes, |e, v| {
        let edge = edges[e];
        if edge.s == v || edge.t == v {
            return;
        }
        let p = points[v];
        if segments_intersect(points[edge.s], points[edge.t], p, p) {
            junctions.push(Junction { edge: e, point: v });
        }
    });
    junctions
}

struct PassOutcome {
    /// Another geometry pass is required: points were relabeled, or a
    /// crossing or T-junction was found.
    again: bool,
    /// Anything at all changed, including a pure edge-list cleanup.
    changed: bool,
}

/// One snap-rounding pass: find crossings and T-junctions, cut, merge
/// rounded points, dedup edges.
fn snap_round(points: &mut Vec<[f64; 2]>, edges: &mut Vec<EdgeRec>) -> PassOutcome {
    let edge_boxes = BoxSet::build(&edge_bounds(points, edges));
    let crossings = find_crossings(points, edges, &edge_boxes);

    let mut vertex_boxes = point_bounds(points);
    let mut junctions = find_t_junctions(points, edges, &edge_boxes, &vertex_boxes);

    let found = !crossings.is_empty() || !junctions.is_empty();

    let rat_points = cut_edges(points, edges, &crossings, &mut junctions);

    let labels = dedup_points(points, &rat_points, &mut vertex_boxes);

    // Edge dedup must run even when no points merged: cutting alone can
    // manufacture duplicate or zero-length edges.
    let edges_changed = dedup_edges(edges, labels.as_deref());

    let again = labels.is_some() || found;
    PassOutcome {
        again,
        changed: again || edges_changed,
    }
}

fn validate(
    points: &[[f64; 2]],
    edges: &[(usize, usize)],
    num_colors: Option<usize>,
) -> Result<(), SnapRoundError> {
    if let Some(num_colors) = num_colors {
        if num_colors != edges.len() {
            return Err(SnapRoundError::ColorLengthMismatch {
                edges: edges.len(),
                colors: num_colors,
            });
        }
    }
    for (i, p) in points.iter().enumerate() {
        if !(p[0].is_finite() && p[1].is_finite()) {
            return Err(SnapRoundError::NonFiniteCoordinate { point: i });
        }
    }
    for (i, &(s, t)) in edges.iter().enumerate() {
        for index in [s, t] {
            if index >= points.len() {
                return Err(SnapRoundError::EdgeIndexOutOfRange {
                    edge: i,
                    index,
                    num_points: points.len(),
                });
            }
        }
        if s == t {
            return Err(SnapRoundError::DegenerateEdge { edge: i, index: s });
        }
    }
    Ok(())
}

/// Repair a planar straight-line graph in place.
///
/// Snap-rounds the graph until no edge crosses another, no vertex lies in
/// an edge interior, no two vertices round to the same double pair, and the
/// edge list is canonical: endpoints ascending within each edge, edges
/// lexicographically sorted and free of duplicates. New vertices are
/// appended for intersection points; points and edges may both grow and
/// shrink.
///
/// When `colors` is given it must run parallel to `edges`, and comes back
/// parallel to the rewritten edge list, with duplicates collapsed only when
/// their colors also match.
///
/// Returns whether anything was modified. Input errors are reported before
/// any mutation.
pub fn clean_pslg(
    points: &mut Vec<[f64; 2]>,
    edges: &mut Vec<(usize, usize)>,
    mut colors: Option<&mut Vec<i32>>,
) -> Result<bool, SnapRoundError> {
    validate(points, edges, colors.as_ref().map(|c| c.len()))?;

    let mut recs: Vec<EdgeRec> = match colors.as_deref() {
        Some(colors) => edges
            .iter()
            .zip(colors.iter())
            .map(|(&(s, t), &c)| EdgeRec::new(s, t, Some(c)))
            .collect(),
        None => edges
            .iter()
            .map(|&(s, t)| EdgeRec::new(s, t, None))
            .collect(),
    };

    // Each pass either strictly reduces the number of defects or detects
    // convergence, so this cap only trips on inputs that defeat the
    // fixed-point argument.
    let round_limit = ROUND_LIMIT_FACTOR * (edges.len() + points.len()) + ROUND_LIMIT_SLACK;
    let mut modified = false;
    let mut rounds = 0;
    loop {
        let pass = snap_round(points, &mut recs);
        modified |= pass.changed;
        if !pass.again {
            break;
        }
        rounds += 1;
        if rounds >= round_limit {
            return Err(SnapRoundError::IterationLimitExceeded { rounds });
        }
    }

    if modified {
        edges.clear();
        edges.extend(recs.iter().map(|rec| (rec.s, rec.t)));
        if let Some(colors) = colors.as_deref_mut() {
            colors.clear();
            colors.extend(recs.iter().filter_map(|rec| rec.color));
        }
    }
    Ok(modified)
}
