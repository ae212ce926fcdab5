use crate::sprite::{Cursor, Result, SpriteError, SubMesh};

/// One triangle as three vertex indices.
///
/// Indices are stored as signed 16-bit values and reinterpreted as unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [u16; 3]);

impl Triangle {
	/// Build a triangle from three vertex indices.
	pub const fn new(a: u16, b: u16, c: u16) -> Self {
		Self([a, b, c])
	}

	/// Edges `(a,b)`, `(b,c)`, `(c,a)` in winding order.
	pub fn edges(self) -> [(u16, u16); 3] {
		let [a, b, c] = self.0;
		[(a, b), (b, c), (c, a)]
	}
}

/// Decode the triangles of `submesh` from the shared `index_buffer`.
///
/// `index_count / 3` triangles are read; a trailing partial triangle is dropped.
/// The range `first_byte..first_byte + 6 * triangles` must lie inside the buffer,
/// so an empty submesh may sit at most at `index_buffer.len()`.
pub fn decode_submesh_triangles(submesh: &SubMesh, index_buffer: &[u8]) -> Result<Vec<Triangle>> {
	let triangle_count = (submesh.index_count / 3) as usize;
	let first_byte = submesh.first_byte as usize;

	let out_of_range = |need: usize| SpriteError::SubMeshOutOfRange {
		first_byte: submesh.first_byte,
		need,
		len: index_buffer.len(),
	};
	let need = triangle_count.checked_mul(6).ok_or_else(|| out_of_range(usize::MAX))?;
	let end = first_byte.checked_add(need).ok_or_else(|| out_of_range(need))?;
	let range = index_buffer.get(first_byte..end).ok_or_else(|| out_of_range(need))?;
	if triangle_count == 0 {
		return Ok(Vec::new());
	}

	let mut cursor = Cursor::new(range);
	let mut out = Vec::with_capacity(triangle_count);
	for _ in 0..triangle_count {
		let a = cursor.read_i16()? as u16;
		let b = cursor.read_i16()? as u16;
		let c = cursor.read_i16()? as u16;
		out.push(Triangle::new(a, b, c));
	}
	Ok(out)
}

#[cfg(test)]
mod tests;
