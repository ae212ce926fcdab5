use glam::{Vec2, Vec3, Vec4};

use crate::sprite::{Result, SpriteError};

/// Simple bounded little-endian cursor over an immutable byte slice.
///
/// The cursor only moves forward; every read either consumes exactly the
/// requested bytes or fails without advancing.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(SpriteError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Advance by `n` bytes without interpreting them.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	/// Read a little-endian `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read two consecutive `f32` lanes.
	pub fn read_vec2(&mut self) -> Result<Vec2> {
		Ok(Vec2::new(self.read_f32()?, self.read_f32()?))
	}

	/// Read three consecutive `f32` lanes.
	pub fn read_vec3(&mut self) -> Result<Vec3> {
		Ok(Vec3::new(self.read_f32()?, self.read_f32()?, self.read_f32()?))
	}

	/// Read four consecutive `f32` lanes.
	pub fn read_vec4(&mut self) -> Result<Vec4> {
		Ok(Vec4::new(self.read_f32()?, self.read_f32()?, self.read_f32()?, self.read_f32()?))
	}

	/// Read an `i32` array length prefix and validate it against the remaining bytes.
	///
	/// `elem_size` is the minimum encoded size of one element; a count that
	/// could not possibly fit is rejected before any element is read.
	pub fn read_len(&mut self, elem_size: usize, max_elems: usize) -> Result<usize> {
		let at = self.pos;
		let raw = self.read_i32()?;
		let count = usize::try_from(raw).map_err(|_| SpriteError::NegativeArrayLength { at, count: raw })?;

		let fits = count.checked_mul(elem_size).is_some_and(|size| size <= self.remaining());
		if count > max_elems || !fits {
			return Err(SpriteError::ArrayTooLong {
				at: self.pos,
				count,
				elem_size,
				rem: self.remaining(),
			});
		}
		Ok(count)
	}

	/// Read a length-prefixed array, decoding each element with `read`.
	pub fn read_vec<T>(&mut self, elem_size: usize, max_elems: usize, mut read: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
		let count = self.read_len(elem_size, max_elems)?;
		let mut out = Vec::with_capacity(count);
		for _ in 0..count {
			out.push(read(self)?);
		}
		Ok(out)
	}

	/// Read a length-prefixed byte array.
	pub fn read_byte_vec(&mut self, max_elems: usize) -> Result<Vec<u8>> {
		let count = self.read_len(1, max_elems)?;
		Ok(self.read_exact(count)?.to_vec())
	}

	/// Advance to the next 4-byte aligned position.
	pub fn align4(&mut self) -> Result<()> {
		let aligned = (self.pos + 3) & !3;
		let skip = aligned.saturating_sub(self.pos);
		self.skip(skip)
	}
}
