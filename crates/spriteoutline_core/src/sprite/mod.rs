mod bytes;
mod deps;
mod edges;
mod error;
mod outline;
mod predicate;
mod record;
mod submesh;
mod version;
mod vertex;

/// Bounded little-endian cursor used by every decoder in this crate.
pub use bytes::Cursor;
/// Texture dependency emission.
pub use deps::{ALPHA_TEXTURE_FIELD, DependencyRef, TEXTURE_FIELD, fetch_dependencies};
/// Boundary-edge extraction and polyline stitching over vertex indices.
pub use edges::{Edge, IndexPolyline, boundary_edges, stitch_boundary};
/// Error and result aliases.
pub use error::{ErrorClass, Result, SpriteError};
/// Outline reconstruction entry points and options.
pub use outline::{Outline, OutlineOptions, OutOfRangePolicy, generate_outline, generate_outline_with, outline_bounds};
/// Version-gated field presence rules.
pub use predicate::Predicate;
/// Decoded record model and decoder entry points.
pub use record::{
	BoneWeights4, DecodeOptions, GeometrySource, PPtr, Rectf, SpriteRenderRecord, SpriteSettings, SpriteVertex, SubMesh, decode_record, decode_record_with,
};
/// Submesh triangle extraction from a shared index buffer.
pub use submesh::{Triangle, decode_submesh_triangles};
/// Engine version ordering.
pub use version::{ReleaseType, Version};
/// External vertex-stream seam and the packed default decoder.
pub use vertex::{PackedVertexDecoder, VertexStream, VertexStreamDecoder};
