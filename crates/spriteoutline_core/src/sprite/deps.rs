use crate::sprite::{PPtr, SpriteRenderRecord};

/// Owner field tag of the main texture reference.
pub const TEXTURE_FIELD: &str = "Texture";
/// Owner field tag of the alpha texture reference.
pub const ALPHA_TEXTURE_FIELD: &str = "AlphaTexture";

/// Unresolved reference emitted for the host's dependency walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencyRef {
	/// Referenced asset; may be null.
	pub asset: PPtr,
	/// Record field holding the reference.
	pub field: &'static str,
}

/// List the texture references of `record` as `(Texture, AlphaTexture)`.
///
/// Both entries are always emitted, even when the version never stored an
/// alpha texture; consumers expect a fixed-arity list and must accept null
/// references.
pub fn fetch_dependencies(record: &SpriteRenderRecord) -> Vec<DependencyRef> {
	vec![
		DependencyRef {
			asset: record.texture,
			field: TEXTURE_FIELD,
		},
		DependencyRef {
			asset: record.alpha_texture,
			field: ALPHA_TEXTURE_FIELD,
		},
	]
}
