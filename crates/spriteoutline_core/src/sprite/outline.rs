use glam::Vec2;
use tracing::{debug, warn};

use crate::sprite::{
	ErrorClass, GeometrySource, Rectf, Result, SpriteError, SpriteRenderRecord, SubMesh, Version, VertexStream, boundary_edges, decode_submesh_triangles,
	stitch_boundary,
};

/// Ordered 2D silhouette points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
	/// Points in walk order.
	pub points: Vec<Vec2>,
	/// Last point connects back to the first.
	pub closed: bool,
}

impl Outline {
	/// Number of points.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Return whether the outline has no points.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Axis-aligned bounds as `(min, max)`.
	pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
		let first = *self.points.first()?;
		Some(self.points.iter().fold((first, first), |(min, max), point| (min.min(*point), max.max(*point))))
	}
}

/// What to do when a submesh references bytes or vertices outside its buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutOfRangePolicy {
	/// Fail the whole outline.
	#[default]
	Abort,
	/// Drop the offending submesh and keep going.
	SkipSubMesh,
}

/// Outline generation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineOptions {
	/// Handling of out-of-range submeshes.
	pub on_out_of_range: OutOfRangePolicy,
}

/// Generate outlines with default options.
pub fn generate_outline(record: &SpriteRenderRecord, version: Version) -> Result<Vec<Outline>> {
	generate_outline_with(record, version, &OutlineOptions::default())
}

/// Generate the outlines of `record`, decoded earlier with `version`.
///
/// Legacy geometry projects every vertex into a single outline. Submesh
/// geometry yields the stitched boundary of each submesh, in submesh order.
/// No winding direction is guaranteed.
pub fn generate_outline_with(record: &SpriteRenderRecord, version: Version, options: &OutlineOptions) -> Result<Vec<Outline>> {
	match &record.geometry {
		GeometrySource::LegacyVertices { vertices, .. } => {
			debug!(%version, vertices = vertices.len(), "projecting legacy sprite vertices");
			Ok(vec![Outline {
				points: vertices.iter().map(|vertex| vertex.pos.truncate()).collect(),
				closed: false,
			}])
		}
		GeometrySource::ModernSubmeshes {
			submeshes,
			index_buffer,
			vertex_data,
		} => {
			let mut out = Vec::new();
			for (idx, submesh) in submeshes.iter().enumerate() {
				match submesh_outlines(submesh, index_buffer, vertex_data) {
					Ok(outlines) => {
						debug!(%version, submesh = idx, outlines = outlines.len(), "stitched submesh boundary");
						out.extend(outlines);
					}
					Err(err) if err.class() == ErrorClass::OutOfRange && options.on_out_of_range == OutOfRangePolicy::SkipSubMesh => {
						warn!(%version, submesh = idx, error = %err, "skipping out-of-range submesh");
					}
					Err(err) => return Err(err),
				}
			}
			Ok(out)
		}
	}
}

fn submesh_outlines(submesh: &SubMesh, index_buffer: &[u8], vertex_data: &VertexStream) -> Result<Vec<Outline>> {
	let triangles = decode_submesh_triangles(submesh, index_buffer)?;
	let edges = boundary_edges(&triangles);

	let mut out = Vec::new();
	for line in stitch_boundary(&edges) {
		let mut points = Vec::with_capacity(line.indices.len());
		for index in line.indices {
			let vertex = u32::from(index).checked_add(submesh.base_vertex).ok_or(SpriteError::VertexOutOfRange {
				index: u32::from(index),
				count: vertex_data.vertex_count,
			})?;
			points.push(vertex_data.position(vertex)?.truncate());
		}
		out.push(Outline { points, closed: line.closed });
	}
	Ok(out)
}

/// Union bounds of `outlines` as a rect, or `None` when every outline is empty.
pub fn outline_bounds(outlines: &[Outline]) -> Option<Rectf> {
	let (min, max) = outlines
		.iter()
		.filter_map(Outline::bounds)
		.reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))?;

	Some(Rectf {
		x: min.x,
		y: min.y,
		width: max.x - min.x,
		height: max.y - min.y,
	})
}

#[cfg(test)]
mod tests;
