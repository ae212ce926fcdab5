use crate::sprite::{ReleaseType, Version};

/// Named version rules gating optional or variant record fields.
///
/// Every rule is a pure function of the version; new engine layouts are
/// added here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
	/// Alpha-texture reference follows the texture reference.
	ReadAlphaTexture,
	/// Geometry is stored as explicit vertex and index arrays.
	ReadLegacyVertices,
	/// Submesh descriptors carry a base-vertex offset.
	ReadSubMeshBaseVertex,
	/// Bind-pose matrices follow the geometry.
	ReadBindPose,
	/// Source-skin bone weights follow the bind poses.
	ReadSourceSkin,
	/// Atlas rect offset follows the texture rect offset.
	ReadAtlasRectOffset,
	/// UV transform vector follows the settings bitfield.
	ReadUvTransform,
	/// Downscale multiplier closes the record.
	ReadDownscaleMultiplier,
}

impl Predicate {
	/// Every predicate in record field order.
	pub const ALL: [Self; 8] = [
		Self::ReadAlphaTexture,
		Self::ReadLegacyVertices,
		Self::ReadSubMeshBaseVertex,
		Self::ReadBindPose,
		Self::ReadSourceSkin,
		Self::ReadAtlasRectOffset,
		Self::ReadUvTransform,
		Self::ReadDownscaleMultiplier,
	];

	/// Stable rule name.
	pub fn name(self) -> &'static str {
		match self {
			Self::ReadAlphaTexture => "ReadAlphaTexture",
			Self::ReadLegacyVertices => "ReadLegacyVertices",
			Self::ReadSubMeshBaseVertex => "ReadSubMeshBaseVertex",
			Self::ReadBindPose => "ReadBindPose",
			Self::ReadSourceSkin => "ReadSourceSkin",
			Self::ReadAtlasRectOffset => "ReadAtlasRectOffset",
			Self::ReadUvTransform => "ReadUVTransform",
			Self::ReadDownscaleMultiplier => "ReadDownscaleMultiplier",
		}
	}

	/// Evaluate the rule for `version`.
	pub fn holds(self, version: Version) -> bool {
		match self {
			Self::ReadAlphaTexture => version >= Version::base(5, 2, 0),
			Self::ReadLegacyVertices => version < Version::base(5, 6, 0),
			Self::ReadSubMeshBaseVertex => version >= Version::base(2017, 3, 0),
			Self::ReadBindPose => version >= Version::base(2018, 1, 0),
			Self::ReadSourceSkin => version.is_series(2018, 1),
			Self::ReadAtlasRectOffset => {
				(version >= Version::new(5, 4, 5, ReleaseType::Patch, 1) && version < Version::base(5, 5, 0))
					|| version == Version::new(5, 5, 0, ReleaseType::Patch, 3)
					|| version >= Version::new(5, 5, 2, ReleaseType::Patch, 0)
			}
			Self::ReadUvTransform => version >= Version::base(4, 5, 0),
			Self::ReadDownscaleMultiplier => version >= Version::base(2017, 1, 0),
		}
	}
}

#[cfg(test)]
mod tests;
