use glam::Vec3;

use crate::sprite::{Cursor, DecodeOptions, Result, SpriteError, Version};

/// Decoded vertex payload of a submesh-based record.
///
/// The record treats this as an opaque handle; outline reconstruction only
/// asks it for positions by vertex index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexStream {
	/// Number of vertices in `data`.
	pub vertex_count: u32,
	/// Byte distance between consecutive vertices.
	pub stride: u32,
	/// Byte offset of the three-lane `f32` position within one vertex.
	pub position_offset: u32,
	/// Interleaved vertex bytes.
	pub data: Vec<u8>,
}

impl VertexStream {
	const POSITION_SIZE: usize = 12;

	/// Bytes required by the declared count, stride, and position offset.
	pub fn required_len(&self) -> usize {
		if self.vertex_count == 0 {
			return 0;
		}
		let last = (self.vertex_count as usize - 1).saturating_mul(self.stride as usize);
		last.saturating_add(self.position_offset as usize).saturating_add(Self::POSITION_SIZE)
	}

	/// Return the position of vertex `index`.
	pub fn position(&self, index: u32) -> Result<Vec3> {
		if index >= self.vertex_count {
			return Err(SpriteError::VertexOutOfRange {
				index,
				count: self.vertex_count,
			});
		}

		let too_short = || SpriteError::VertexStreamTooShort {
			need: self.required_len(),
			have: self.data.len(),
		};
		let start = (index as usize)
			.checked_mul(self.stride as usize)
			.and_then(|offset| offset.checked_add(self.position_offset as usize))
			.ok_or_else(too_short)?;
		let end = start.checked_add(Self::POSITION_SIZE).ok_or_else(too_short)?;
		let bytes = self.data.get(start..end).ok_or_else(too_short)?;
		Cursor::new(bytes).read_vec3()
	}
}

/// External collaborator that decodes the vertex stream following a submesh index buffer.
pub trait VertexStreamDecoder {
	/// Decode one vertex stream and leave `cursor` positioned right after it.
	fn decode(&self, cursor: &mut Cursor<'_>, version: Version, options: &DecodeOptions) -> Result<VertexStream>;
}

/// Decoder for the packed layout: `vertex_count u32`, `stride u32`, `position_offset u32`, `data u8[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedVertexDecoder;

impl VertexStreamDecoder for PackedVertexDecoder {
	fn decode(&self, cursor: &mut Cursor<'_>, _version: Version, options: &DecodeOptions) -> Result<VertexStream> {
		let stream = VertexStream {
			vertex_count: cursor.read_u32()?,
			stride: cursor.read_u32()?,
			position_offset: cursor.read_u32()?,
			data: cursor.read_byte_vec(options.max_array_elems)?,
		};

		let need = stream.required_len();
		if stream.data.len() < need {
			return Err(SpriteError::VertexStreamTooShort {
				need,
				have: stream.data.len(),
			});
		}
		Ok(stream)
	}
}
