use glam::{Mat4, Vec2, Vec3, Vec4};
use tracing::debug;

use crate::sprite::submesh::decode_submesh_triangles;
use crate::sprite::{Cursor, PackedVertexDecoder, Predicate, Result, Triangle, Version, VertexStream, VertexStreamDecoder};

/// Runtime limits for record decoding.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
	/// Maximum declared length accepted for any array.
	pub max_array_elems: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_array_elems: 1 << 24 }
	}
}

/// Serialized weak object reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PPtr {
	/// Index into the owning file's external-file table (`0` for the same file).
	pub file_id: i32,
	/// Object identifier within that file.
	pub path_id: i64,
}

impl PPtr {
	const SIZE: usize = 12;

	/// Return whether this reference points at nothing.
	pub fn is_null(self) -> bool {
		self.file_id == 0 && self.path_id == 0
	}

	fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			file_id: cursor.read_i32()?,
			path_id: cursor.read_i64()?,
		})
	}
}

/// One vertex of the legacy explicit-vertex geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteVertex {
	/// Object-space position.
	pub pos: Vec3,
}

impl SpriteVertex {
	const SIZE: usize = 12;
}

/// Descriptor of a contiguous triangle range in the shared index buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubMesh {
	/// Byte offset of the first index.
	pub first_byte: u32,
	/// Number of 16-bit indices in the range.
	pub index_count: u32,
	/// Primitive topology tag.
	pub topology: i32,
	/// Offset added to indices by the renderer (zero before 2017.3).
	pub base_vertex: u32,
	/// First vertex referenced by the range.
	pub first_vertex: u32,
	/// Number of vertices referenced by the range.
	pub vertex_count: u32,
	/// Local bounds center.
	pub aabb_center: Vec3,
	/// Local bounds half extent.
	pub aabb_extent: Vec3,
}

impl SubMesh {
	fn size(version: Version) -> usize {
		if Predicate::ReadSubMeshBaseVertex.holds(version) { 48 } else { 44 }
	}

	fn read(cursor: &mut Cursor<'_>, version: Version) -> Result<Self> {
		let first_byte = cursor.read_u32()?;
		let index_count = cursor.read_u32()?;
		let topology = cursor.read_i32()?;
		let base_vertex = if Predicate::ReadSubMeshBaseVertex.holds(version) {
			cursor.read_u32()?
		} else {
			0
		};

		Ok(Self {
			first_byte,
			index_count,
			topology,
			base_vertex,
			first_vertex: cursor.read_u32()?,
			vertex_count: cursor.read_u32()?,
			aabb_center: cursor.read_vec3()?,
			aabb_extent: cursor.read_vec3()?,
		})
	}
}

/// Four-influence skin weights for one vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoneWeights4 {
	/// Influence weights.
	pub weight: [f32; 4],
	/// Bone indices matching `weight`.
	pub bone_index: [i32; 4],
}

impl BoneWeights4 {
	const SIZE: usize = 32;

	fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let mut out = Self::default();
		for weight in &mut out.weight {
			*weight = cursor.read_f32()?;
		}
		for bone in &mut out.bone_index {
			*bone = cursor.read_i32()?;
		}
		Ok(out)
	}
}

/// Axis-aligned rectangle in texture pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectf {
	/// Left edge.
	pub x: f32,
	/// Bottom edge.
	pub y: f32,
	/// Horizontal size.
	pub width: f32,
	/// Vertical size.
	pub height: f32,
}

impl Rectf {
	fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			x: cursor.read_f32()?,
			y: cursor.read_f32()?,
			width: cursor.read_f32()?,
			height: cursor.read_f32()?,
		})
	}
}

/// Packed sprite settings bitfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteSettings(pub u32);

impl SpriteSettings {
	/// Sprite lives in an atlas.
	pub fn packed(self) -> bool {
		self.0 & 1 != 0
	}

	/// Atlas packing uses the full rectangle instead of the tight mesh.
	pub fn rectangle_packing(self) -> bool {
		(self.0 >> 1) & 1 != 0
	}

	/// Atlas rotation/flip code (4 bits).
	pub fn packing_rotation(self) -> u8 {
		((self.0 >> 2) & 0xF) as u8
	}

	/// Geometry follows the alpha silhouette instead of the full rect.
	pub fn tight_mesh(self) -> bool {
		(self.0 >> 6) & 1 != 0
	}
}

/// Geometry storage, decided once from the record version.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometrySource {
	/// Explicit vertex positions plus a 16-bit index list.
	LegacyVertices {
		/// Vertex positions.
		vertices: Vec<SpriteVertex>,
		/// Triangle-list indices into `vertices`.
		indices: Vec<u16>,
	},
	/// Submesh ranges over a shared raw index buffer and vertex stream.
	ModernSubmeshes {
		/// Submesh descriptors.
		submeshes: Vec<SubMesh>,
		/// Raw little-endian 16-bit index bytes.
		index_buffer: Vec<u8>,
		/// Vertex payload decoded by the external stream decoder.
		vertex_data: VertexStream,
	},
}

/// Decoded sprite render-data record.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRenderRecord {
	/// Main texture reference.
	pub texture: PPtr,
	/// Alpha texture reference (null before 5.2).
	pub alpha_texture: PPtr,
	/// Render geometry.
	pub geometry: GeometrySource,
	/// Skin-to-bone matrices (empty before 2018.1).
	pub bind_pose: Vec<Mat4>,
	/// Per-vertex source skin (only present in 2018.1).
	pub source_skin: Vec<BoneWeights4>,
	/// Sprite rect inside the texture.
	pub texture_rect: Rectf,
	/// Offset of `texture_rect` relative to the original sprite rect.
	pub texture_rect_offset: Vec2,
	/// Offset inside the atlas (zero when absent).
	pub atlas_rect_offset: Vec2,
	/// Settings bitfield.
	pub settings: SpriteSettings,
	/// UV transform (zero when absent).
	pub uv_transform: Vec4,
	/// Downscale multiplier (zero when absent).
	pub downscale_multiplier: f32,
}

impl SpriteRenderRecord {
	/// Return every triangle of the geometry, submeshes concatenated in order.
	///
	/// Trailing legacy indices that do not form a whole triangle are ignored.
	pub fn triangles(&self) -> Result<Vec<Triangle>> {
		match &self.geometry {
			GeometrySource::LegacyVertices { indices, .. } => Ok(indices.chunks_exact(3).map(|tri| Triangle::new(tri[0], tri[1], tri[2])).collect()),
			GeometrySource::ModernSubmeshes { submeshes, index_buffer, .. } => {
				let mut out = Vec::new();
				for submesh in submeshes {
					out.extend(decode_submesh_triangles(submesh, index_buffer)?);
				}
				Ok(out)
			}
		}
	}
}

/// Decode one record with the packed vertex-stream decoder and default limits.
pub fn decode_record(cursor: &mut Cursor<'_>, version: Version) -> Result<SpriteRenderRecord> {
	decode_record_with(cursor, version, &PackedVertexDecoder, &DecodeOptions::default())
}

/// Decode one record, delegating the submesh vertex stream to `vertex_decoder`.
pub fn decode_record_with<D: VertexStreamDecoder + ?Sized>(
	cursor: &mut Cursor<'_>,
	version: Version,
	vertex_decoder: &D,
	options: &DecodeOptions,
) -> Result<SpriteRenderRecord> {
	let max = options.max_array_elems;

	let texture = PPtr::read(cursor)?;
	let alpha_texture = if Predicate::ReadAlphaTexture.holds(version) {
		PPtr::read(cursor)?
	} else {
		PPtr::default()
	};

	let geometry = if Predicate::ReadLegacyVertices.holds(version) {
		let vertices = cursor.read_vec(SpriteVertex::SIZE, max, |cursor| Ok(SpriteVertex { pos: cursor.read_vec3()? }))?;
		let indices = cursor.read_vec(2, max, Cursor::read_u16)?;
		debug!(%version, vertices = vertices.len(), indices = indices.len(), "decoded legacy sprite geometry");
		GeometrySource::LegacyVertices { vertices, indices }
	} else {
		let submeshes = cursor.read_vec(SubMesh::size(version), max, |cursor| SubMesh::read(cursor, version))?;
		let index_buffer = cursor.read_byte_vec(max)?;
		let vertex_data = vertex_decoder.decode(cursor, version, options)?;
		debug!(
			%version,
			submeshes = submeshes.len(),
			index_bytes = index_buffer.len(),
			vertices = vertex_data.vertex_count,
			"decoded submesh sprite geometry"
		);
		GeometrySource::ModernSubmeshes {
			submeshes,
			index_buffer,
			vertex_data,
		}
	};
	cursor.align4()?;

	let bind_pose = if Predicate::ReadBindPose.holds(version) {
		cursor.read_vec(64, max, read_matrix)?
	} else {
		Vec::new()
	};
	let source_skin = if Predicate::ReadSourceSkin.holds(version) {
		cursor.read_vec(BoneWeights4::SIZE, max, BoneWeights4::read)?
	} else {
		Vec::new()
	};

	let texture_rect = Rectf::read(cursor)?;
	let texture_rect_offset = cursor.read_vec2()?;
	let atlas_rect_offset = if Predicate::ReadAtlasRectOffset.holds(version) {
		cursor.read_vec2()?
	} else {
		Vec2::ZERO
	};

	let settings = SpriteSettings(cursor.read_u32()?);
	let uv_transform = if Predicate::ReadUvTransform.holds(version) {
		cursor.read_vec4()?
	} else {
		Vec4::ZERO
	};
	let downscale_multiplier = if Predicate::ReadDownscaleMultiplier.holds(version) {
		cursor.read_f32()?
	} else {
		0.0
	};

	Ok(SpriteRenderRecord {
		texture,
		alpha_texture,
		geometry,
		bind_pose,
		source_skin,
		texture_rect,
		texture_rect_offset,
		atlas_rect_offset,
		settings,
		uv_transform,
		downscale_multiplier,
	})
}

fn read_matrix(cursor: &mut Cursor<'_>) -> Result<Mat4> {
	let mut cols = [0.0_f32; 16];
	for lane in &mut cols {
		*lane = cursor.read_f32()?;
	}
	Ok(Mat4::from_cols_array(&cols))
}
