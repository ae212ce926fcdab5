use std::fs;
use std::io::Read;
use std::path::PathBuf;

use spriteoutline::sprite::{Cursor, SpriteRenderRecord, Version, decode_record};

use crate::error::{CliError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;
/// zstd frame magic used by compressed record dumps.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Arguments shared by every command that decodes a record file.
#[derive(clap::Args)]
pub struct RecordArgs {
	/// Record dump, raw or zstd-compressed.
	pub path: PathBuf,
	/// Engine version the record was serialized with, e.g. `2018.1.0f2`.
	#[arg(long = "unity-version")]
	pub version: String,
	/// Byte offset of the record inside the (decompressed) input.
	///
	/// Record fields are aligned relative to the start of the input, so the
	/// offset must be a multiple of 4.
	#[arg(long, default_value_t = 0)]
	pub offset: usize,
}

/// A decoded record plus where it sat in its input.
pub struct LoadedRecord {
	/// Detected input compression.
	pub compression: Compression,
	/// Version used for decoding.
	pub version: Version,
	/// Decoded record.
	pub record: SpriteRenderRecord,
	/// Bytes consumed by the record.
	pub consumed: usize,
	/// Bytes left after the record.
	pub trailing: usize,
}

/// Read, decompress, and decode the record described by `args`.
pub fn load_record(args: &RecordArgs) -> Result<LoadedRecord> {
	let version = Version::parse(&args.version)?;
	if args.offset % 4 != 0 {
		return Err(CliError::UnalignedOffset { offset: args.offset });
	}
	let (compression, bytes) = decode_bytes(fs::read(&args.path)?)?;

	let body = bytes.get(args.offset..).ok_or(CliError::OffsetOutOfRange {
		offset: args.offset,
		len: bytes.len(),
	})?;
	let mut cursor = Cursor::new(body);
	let record = decode_record(&mut cursor, version)?;

	Ok(LoadedRecord {
		compression,
		version,
		record,
		consumed: cursor.pos(),
		trailing: cursor.remaining(),
	})
}

/// Detect and decode compression, returning `(mode, record_bytes)`.
///
/// A dump that decodes to zero bytes holds no record and is rejected.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	let (compression, bytes) = if raw.starts_with(&ZSTD_MAGIC) {
		(Compression::Zstd, decode_zstd(&raw)?)
	} else {
		(Compression::None, raw)
	};

	if bytes.is_empty() {
		return Err(CliError::EmptyInput {
			compression: compression.as_str(),
		});
	}
	Ok((compression, bytes))
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	decoder.take(MAX_DECOMPRESSED_BYTES as u64 + 1).read_to_end(&mut out)?;
	if out.len() > MAX_DECOMPRESSED_BYTES {
		return Err(CliError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes};
	use crate::error::CliError;

	#[test]
	fn raw_bytes_pass_through() {
		let (mode, out) = decode_bytes(vec![1, 2, 3]).expect("raw input");
		assert_eq!(mode, Compression::None);
		assert_eq!(out, vec![1, 2, 3]);
	}

	#[test]
	fn zstd_frames_are_decompressed() {
		let payload = vec![7_u8; 300];
		let packed = zstd::encode_all(payload.as_slice(), 3).expect("zstd encodes");
		let (mode, out) = decode_bytes(packed).expect("zstd input");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(out, payload);
	}

	#[test]
	fn empty_inputs_are_rejected() {
		let err = decode_bytes(Vec::new()).expect_err("no bytes");
		assert!(matches!(err, CliError::EmptyInput { compression: "none" }));

		let packed = zstd::encode_all(&[0_u8; 0][..], 3).expect("zstd encodes");
		let err = decode_bytes(packed).expect_err("empty frame");
		assert!(matches!(err, CliError::EmptyInput { compression: "zstd" }));
	}
}
