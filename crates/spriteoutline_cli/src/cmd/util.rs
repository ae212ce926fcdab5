use spriteoutline::sprite::{GeometrySource, PPtr, Rectf};

use crate::error::Result;

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Render a weak reference as `file_id:path_id`, or `null`.
pub(crate) fn pptr_label(ptr: PPtr) -> String {
	if ptr.is_null() {
		"null".to_owned()
	} else {
		format!("{}:{}", ptr.file_id, ptr.path_id)
	}
}

/// Stable label of a geometry variant.
pub(crate) fn geometry_label(geometry: &GeometrySource) -> &'static str {
	match geometry {
		GeometrySource::LegacyVertices { .. } => "legacy_vertices",
		GeometrySource::ModernSubmeshes { .. } => "submeshes",
	}
}

/// JSON form of a weak reference.
#[derive(serde::Serialize)]
pub(crate) struct PPtrJson {
	pub file_id: i32,
	pub path_id: i64,
	pub is_null: bool,
}

impl From<PPtr> for PPtrJson {
	fn from(ptr: PPtr) -> Self {
		Self {
			file_id: ptr.file_id,
			path_id: ptr.path_id,
			is_null: ptr.is_null(),
		}
	}
}

/// JSON form of a rect.
#[derive(serde::Serialize)]
pub(crate) struct RectJson {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl From<Rectf> for RectJson {
	fn from(rect: Rectf) -> Self {
		Self {
			x: rect.x,
			y: rect.y,
			width: rect.width,
			height: rect.height,
		}
	}
}
