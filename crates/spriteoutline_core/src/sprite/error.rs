use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SpriteError>;

/// Coarse error classification used by hosts to pick a recovery policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
	/// Record bytes could not be decoded; no partial record exists.
	Decode,
	/// Geometry referenced bytes or vertices outside their buffers.
	OutOfRange,
	/// Caller-supplied input (such as a version string) was malformed.
	Input,
}

/// Errors produced while decoding sprite render records and building outlines.
#[derive(Debug, Error)]
pub enum SpriteError {
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Array length prefix was negative.
	#[error("negative array length {count} at offset {at}")]
	NegativeArrayLength {
		/// Offset of the length prefix.
		at: usize,
		/// Parsed signed length.
		count: i32,
	},
	/// Declared array length cannot fit in the remaining bytes or exceeds the configured cap.
	#[error("array of {count} x {elem_size} bytes at offset {at} exceeds remaining {rem}")]
	ArrayTooLong {
		/// Offset of the first element.
		at: usize,
		/// Declared element count.
		count: usize,
		/// Minimum encoded size of one element.
		elem_size: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Submesh triangle range runs past the end of the shared index buffer.
	#[error("submesh range out of bounds: first_byte={first_byte}, need={need}, index buffer={len}")]
	SubMeshOutOfRange {
		/// Submesh start offset in the index buffer.
		first_byte: u32,
		/// Bytes required by the submesh triangles.
		need: usize,
		/// Index buffer length.
		len: usize,
	},
	/// Triangle referenced a vertex that the geometry does not contain.
	#[error("vertex index {index} out of range (vertex count {count})")]
	VertexOutOfRange {
		/// Referenced vertex index.
		index: u32,
		/// Vertices available.
		count: u32,
	},
	/// Vertex stream payload is too small for its declared vertex layout.
	#[error("vertex stream too short: need={need}, have={have}")]
	VertexStreamTooShort {
		/// Bytes required by the declared count, stride, and position offset.
		need: usize,
		/// Payload bytes present.
		have: usize,
	},
	/// Version string did not match `major.minor.build<type><number>`.
	#[error("invalid version string: {text}")]
	InvalidVersion {
		/// Original user-provided text.
		text: String,
	},
}

impl SpriteError {
	/// Classify this error into decode, out-of-range, or input failures.
	pub fn class(&self) -> ErrorClass {
		match self {
			Self::UnexpectedEof { .. } | Self::NegativeArrayLength { .. } | Self::ArrayTooLong { .. } | Self::VertexStreamTooShort { .. } => ErrorClass::Decode,
			Self::SubMeshOutOfRange { .. } | Self::VertexOutOfRange { .. } => ErrorClass::OutOfRange,
			Self::InvalidVersion { .. } => ErrorClass::Input,
		}
	}
}
