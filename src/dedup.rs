use crate::edge::EdgeRec;
use crate::rational::{self, RatPoint};
use crate::rtree::{BoxSet, Rect};

/// Disjoint sets over a fixed universe of point indices.
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while x != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. The smaller root index wins,
    /// so every class is represented by its earliest member.
    pub fn link(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi] = lo;
    }
}

/// Merge points whose conservative rounded boxes overlap.
///
/// The float table is first extended with the rounded image of every
/// rational point, each carrying a directed-rounded box; `bounds` arrives
/// holding the degenerate boxes of the existing float points and is
/// extended to match. Overlapping boxes are linked, every class keeps its
/// smallest-indexed member, and the table is compacted in place.
///
/// Returns `None` when nothing merged, otherwise the relabeling from old
/// indices to compacted ones.
pub fn dedup_points(
    points: &mut Vec<[f64; 2]>,
    rat_points: &[RatPoint],
    bounds: &mut Vec<Rect>,
) -> Option<Vec<usize>> {
    for rp in rat_points {
        let (x_lo, x_hi) = rational::bound(&rp.x);
        let (y_lo, y_hi) = rational::bound(&rp.y);
        bounds.push(Rect {
            min: [x_lo, y_lo],
            max: [x_hi, y_hi],
        });
        points.push(rp.to_float());
    }
    let n = points.len();

    let mut sets = UnionFind::new(n);
    BoxSet::build(bounds).for_each_self_pair(|i, j| sets.link(i, j));

    // Compact: roots keep their slot order, everything else is dropped.
    const UNSET: usize = usize::MAX;
    let mut labels = vec![UNSET; n];
    let mut ptr = 0;
    let mut merged = false;
    for i in 0..n {
        if sets.find(i) == i {
            labels[i] = ptr;
            points[ptr] = points[i];
            ptr += 1;
        } else {
            merged = true;
        }
    }
    points.truncate(ptr);

    if !merged {
        return None;
    }

    for i in 0..n {
        if labels[i] == UNSET {
            labels[i] = labels[sets.find(i)];
        }
    }
    Some(labels)
}

/// Canonicalize and deduplicate the edge list.
///
/// Applies the point relabeling when present, orders each edge's endpoints
/// ascending, drops edges collapsed to a single point, sorts
/// lexicographically with the color as the final tie-break, and removes
/// exact duplicates. Returns whether the list changed.
pub fn dedup_edges(edges: &mut Vec<EdgeRec>, labels: Option<&[usize]>) -> bool {
    if edges.is_empty() {
        return false;
    }
    let before = edges.clone();

    for edge in edges.iter_mut() {
        if let Some(labels) = labels {
            edge.s = labels[edge.s];
            edge.t = labels[edge.t];
        }
        if edge.s > edge.t {
            std::mem::swap(&mut edge.s, &mut edge.t);
        }
    }

    edges.retain(|edge| edge.s != edge.t);
    edges.sort_unstable_by_key(|edge| (edge.s, edge.t, edge.color));
    edges.dedup();

    *edges != before
}
