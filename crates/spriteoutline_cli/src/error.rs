use spriteoutline::sprite::SpriteError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Record decoding or outline failure.
	#[error(transparent)]
	Sprite(#[from] SpriteError),
	/// JSON rendering failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Requested start offset lies past the end of the input.
	#[error("offset {offset} past end of input ({len} bytes)")]
	OffsetOutOfRange {
		/// Requested offset.
		offset: usize,
		/// Input length after decompression.
		len: usize,
	},
	/// Record offsets must keep the 4-byte alignment of the input.
	#[error("offset {offset} is not 4-byte aligned")]
	UnalignedOffset {
		/// Requested offset.
		offset: usize,
	},
	/// Input held no record bytes after decompression.
	#[error("{compression} input is empty")]
	EmptyInput {
		/// Detected compression label.
		compression: &'static str,
	},
}
