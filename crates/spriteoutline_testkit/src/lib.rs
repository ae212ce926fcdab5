//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to `<target>/spriteoutline-fixtures/<name>` and return the path.
pub fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("spriteoutline-fixtures");
	std::fs::create_dir_all(&dir).expect("fixture dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("fixture is writable");
	path
}

/// Parse command stdout as JSON.
pub fn parse_json(stdout: &[u8]) -> serde_json::Value {
	serde_json::from_slice(stdout).expect("stdout should be valid json")
}

/// Little-endian byte writer mirroring the record wire format.
#[derive(Debug, Default, Clone)]
pub struct RecordWriter {
	buf: Vec<u8>,
}

impl RecordWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current length in bytes.
	pub fn pos(&self) -> usize {
		self.buf.len()
	}

	/// Consume the writer.
	pub fn finish(self) -> Vec<u8> {
		self.buf
	}

	/// Append raw bytes.
	pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
		self.buf.extend_from_slice(bytes);
		self
	}

	/// Append a `u16`.
	pub fn u16(&mut self, value: u16) -> &mut Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append a `u32`.
	pub fn u32(&mut self, value: u32) -> &mut Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append an `i32`.
	pub fn i32(&mut self, value: i32) -> &mut Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append an `i64`.
	pub fn i64(&mut self, value: i64) -> &mut Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append an `f32`.
	pub fn f32(&mut self, value: f32) -> &mut Self {
		self.raw(&value.to_le_bytes())
	}

	/// Append consecutive `f32` lanes.
	pub fn floats(&mut self, lanes: &[f32]) -> &mut Self {
		for lane in lanes {
			self.f32(*lane);
		}
		self
	}

	/// Append an array length prefix.
	pub fn count(&mut self, count: usize) -> &mut Self {
		self.i32(i32::try_from(count).expect("fixture array fits i32"))
	}

	/// Append a weak reference.
	pub fn pptr(&mut self, file_id: i32, path_id: i64) -> &mut Self {
		self.i32(file_id).i64(path_id)
	}

	/// Append a length-prefixed byte array.
	pub fn byte_array(&mut self, bytes: &[u8]) -> &mut Self {
		self.count(bytes.len()).raw(bytes)
	}

	/// Pad with zeros to the next 4-byte boundary.
	pub fn align4(&mut self) -> &mut Self {
		while self.buf.len() % 4 != 0 {
			self.buf.push(0);
		}
		self
	}
}

/// Version-dependent field presence, filled in by the caller from its predicate table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordLayout {
	/// Alpha-texture reference present.
	pub alpha_texture: bool,
	/// Legacy explicit vertices instead of submeshes.
	pub legacy_vertices: bool,
	/// Submesh descriptors carry `base_vertex`.
	pub submesh_base_vertex: bool,
	/// Bind-pose array present.
	pub bind_pose: bool,
	/// Source-skin array present.
	pub source_skin: bool,
	/// Atlas rect offset present.
	pub atlas_rect_offset: bool,
	/// UV transform present.
	pub uv_transform: bool,
	/// Downscale multiplier present.
	pub downscale_multiplier: bool,
}

/// One submesh range of a fixture, in index units.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSubMesh {
	/// Byte offset into the index buffer.
	pub first_byte: u32,
	/// Number of indices.
	pub index_count: u32,
}

/// Geometry of a fixture record.
#[derive(Debug, Clone)]
pub enum FixtureGeometry {
	/// Explicit vertices and indices.
	Legacy {
		/// Vertex positions.
		vertices: Vec<[f32; 3]>,
		/// Index list.
		indices: Vec<u16>,
	},
	/// Submeshes over a shared index buffer and packed vertex stream.
	Submeshes {
		/// Submesh ranges.
		ranges: Vec<FixtureSubMesh>,
		/// Raw index buffer bytes.
		index_buffer: Vec<u8>,
		/// Vertex positions written with stride 12 and offset 0.
		positions: Vec<[f32; 3]>,
	},
}

impl FixtureGeometry {
	/// Build submesh geometry with one range per triangle group, packed back to back.
	pub fn submeshes(positions: Vec<[f32; 3]>, groups: &[&[[u16; 3]]]) -> Self {
		let mut ranges = Vec::new();
		let mut index_buffer = Vec::new();
		for group in groups {
			let first_byte = u32::try_from(index_buffer.len()).expect("index buffer fits u32");
			for triangle in *group {
				for index in triangle {
					index_buffer.extend_from_slice(&index.to_le_bytes());
				}
			}
			ranges.push(FixtureSubMesh {
				first_byte,
				index_count: u32::try_from(group.len() * 3).expect("index count fits u32"),
			});
		}
		Self::Submeshes {
			ranges,
			index_buffer,
			positions,
		}
	}
}

/// A sprite render record described by value, encodable for any layout.
#[derive(Debug, Clone)]
pub struct SpriteFixture {
	/// Texture `(file_id, path_id)`.
	pub texture: (i32, i64),
	/// Alpha texture `(file_id, path_id)`.
	pub alpha_texture: (i32, i64),
	/// Geometry payload.
	pub geometry: FixtureGeometry,
	/// Bind-pose matrices.
	pub bind_pose: Vec<[f32; 16]>,
	/// Source skin `(weights, bone indices)`.
	pub source_skin: Vec<([f32; 4], [i32; 4])>,
	/// Texture rect `x, y, width, height`.
	pub texture_rect: [f32; 4],
	/// Texture rect offset.
	pub texture_rect_offset: [f32; 2],
	/// Atlas rect offset.
	pub atlas_rect_offset: [f32; 2],
	/// Settings bitfield.
	pub settings: u32,
	/// UV transform.
	pub uv_transform: [f32; 4],
	/// Downscale multiplier.
	pub downscale_multiplier: f32,
}

impl SpriteFixture {
	/// Fixture with recognisable scalar fields around `geometry`.
	pub fn with_geometry(geometry: FixtureGeometry) -> Self {
		Self {
			texture: (0, 101),
			alpha_texture: (1, 202),
			geometry,
			bind_pose: vec![identity()],
			source_skin: vec![([1.0, 0.0, 0.0, 0.0], [0, 0, 0, 0])],
			texture_rect: [4.0, 8.0, 32.0, 16.0],
			texture_rect_offset: [0.5, 0.25],
			atlas_rect_offset: [2.0, 3.0],
			settings: 0b100_0001,
			uv_transform: [100.0, 0.5, 100.0, 0.5],
			downscale_multiplier: 1.0,
		}
	}

	/// Encode this fixture for `layout`, returning the bytes and the offset right after the geometry alignment.
	pub fn encode(&self, layout: &RecordLayout) -> (Vec<u8>, usize) {
		let mut out = RecordWriter::new();
		out.pptr(self.texture.0, self.texture.1);
		if layout.alpha_texture {
			out.pptr(self.alpha_texture.0, self.alpha_texture.1);
		}

		if layout.legacy_vertices {
			let FixtureGeometry::Legacy { vertices, indices } = &self.geometry else {
				panic!("legacy layout needs legacy geometry");
			};
			out.count(vertices.len());
			for vertex in vertices {
				out.floats(vertex);
			}
			out.count(indices.len());
			for index in indices {
				out.u16(*index);
			}
		} else {
			let FixtureGeometry::Submeshes {
				ranges,
				index_buffer,
				positions,
			} = &self.geometry
			else {
				panic!("submesh layout needs submesh geometry");
			};
			out.count(ranges.len());
			for range in ranges {
				out.u32(range.first_byte).u32(range.index_count).i32(0);
				if layout.submesh_base_vertex {
					out.u32(0);
				}
				let vertex_count = u32::try_from(positions.len()).expect("vertex count fits u32");
				out.u32(0).u32(vertex_count).floats(&[0.0; 6]);
			}
			out.byte_array(index_buffer);

			out.u32(u32::try_from(positions.len()).expect("vertex count fits u32")).u32(12).u32(0);
			out.count(positions.len() * 12);
			for position in positions {
				out.floats(position);
			}
		}
		out.align4();
		let aligned_at = out.pos();

		if layout.bind_pose {
			out.count(self.bind_pose.len());
			for matrix in &self.bind_pose {
				out.floats(matrix);
			}
		}
		if layout.source_skin {
			out.count(self.source_skin.len());
			for (weights, bones) in &self.source_skin {
				out.floats(weights);
				for bone in bones {
					out.i32(*bone);
				}
			}
		}

		out.floats(&self.texture_rect).floats(&self.texture_rect_offset);
		if layout.atlas_rect_offset {
			out.floats(&self.atlas_rect_offset);
		}
		out.u32(self.settings);
		if layout.uv_transform {
			out.floats(&self.uv_transform);
		}
		if layout.downscale_multiplier {
			out.f32(self.downscale_multiplier);
		}

		(out.finish(), aligned_at)
	}
}

/// Column-major identity matrix lanes.
pub fn identity() -> [f32; 16] {
	let mut lanes = [0.0; 16];
	for idx in 0..4 {
		lanes[idx * 5] = 1.0;
	}
	lanes
}
