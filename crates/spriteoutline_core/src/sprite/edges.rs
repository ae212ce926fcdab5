use std::collections::HashMap;

use crate::sprite::Triangle;

/// Undirected edge between two vertex indices, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub u16, pub u16);

impl Edge {
	/// Build the orientation-insensitive edge between `a` and `b`.
	pub fn new(a: u16, b: u16) -> Self {
		if a <= b { Self(a, b) } else { Self(b, a) }
	}

	fn other(self, vertex: u16) -> u16 {
		if self.0 == vertex { self.1 } else { self.0 }
	}
}

/// Ordered walk over boundary edges, as vertex indices.
///
/// A closed walk does not repeat its first vertex at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPolyline {
	/// Vertex indices in walk order.
	pub indices: Vec<u16>,
	/// The walk returned to its start vertex.
	pub closed: bool,
}

/// Collect edges used by exactly one triangle, in first-appearance order.
///
/// Edges shared by two or more triangles are interior (or non-manifold) and
/// dropped. Zero-length edges from degenerate triangles are ignored.
pub fn boundary_edges(triangles: &[Triangle]) -> Vec<Edge> {
	let mut counts: HashMap<Edge, u32> = HashMap::new();
	let mut order = Vec::new();

	for triangle in triangles {
		for (a, b) in triangle.edges() {
			if a == b {
				continue;
			}
			let count = counts.entry(Edge::new(a, b)).or_insert(0);
			if *count == 0 {
				order.push(Edge::new(a, b));
			}
			*count += 1;
		}
	}

	order.retain(|edge| counts.get(edge) == Some(&1));
	order
}

/// Stitch boundary edges into maximal polylines.
///
/// Walks start from the first unconsumed edge and follow the first unconsumed
/// neighbour at each endpoint; every edge is consumed exactly once.
pub fn stitch_boundary(edges: &[Edge]) -> Vec<IndexPolyline> {
	let mut adjacency: HashMap<u16, Vec<usize>> = HashMap::new();
	for (idx, edge) in edges.iter().enumerate() {
		adjacency.entry(edge.0).or_default().push(idx);
		adjacency.entry(edge.1).or_default().push(idx);
	}

	let mut used = vec![false; edges.len()];
	let mut out = Vec::new();

	for (idx, edge) in edges.iter().enumerate() {
		if used[idx] {
			continue;
		}
		used[idx] = true;

		let start = edge.0;
		let mut indices = vec![start, edge.1];
		let closed = extend_walk(edges, &adjacency, &mut used, Some(start), &mut indices);

		if !closed {
			let mut back = vec![start];
			extend_walk(edges, &adjacency, &mut used, None, &mut back);
			if back.len() > 1 {
				back.reverse();
				back.pop();
				back.append(&mut indices);
				indices = back;
			}
		}

		out.push(IndexPolyline { indices, closed });
	}

	out
}

/// Extend `walk` from its last vertex until it reaches `close_on` or runs out of edges.
///
/// Returns whether the walk closed; the closing vertex is not pushed again.
fn extend_walk(edges: &[Edge], adjacency: &HashMap<u16, Vec<usize>>, used: &mut [bool], close_on: Option<u16>, walk: &mut Vec<u16>) -> bool {
	let Some(mut current) = walk.last().copied() else {
		return false;
	};

	loop {
		let next = adjacency
			.get(&current)
			.and_then(|candidates| candidates.iter().copied().find(|candidate| !used[*candidate]));
		let Some(next) = next else {
			return false;
		};

		used[next] = true;
		current = edges[next].other(current);
		if Some(current) == close_on {
			return true;
		}
		walk.push(current);
	}
}
