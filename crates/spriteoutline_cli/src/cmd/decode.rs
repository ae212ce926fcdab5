use spriteoutline::sprite::{ErrorClass, GeometrySource};

use crate::cmd::input::{RecordArgs, load_record};
use crate::cmd::util::{PPtrJson, RectJson, emit_json, geometry_label, pptr_label};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub record: RecordArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode one record and print its fields.
pub fn run(args: Args) -> Result<()> {
	let loaded = load_record(&args.record)?;
	let record = &loaded.record;

	let (vertex_count, index_count, submesh_count) = match &record.geometry {
		GeometrySource::LegacyVertices { vertices, indices } => (vertices.len(), indices.len(), 0),
		GeometrySource::ModernSubmeshes {
			submeshes,
			index_buffer,
			vertex_data,
		} => (vertex_data.vertex_count as usize, index_buffer.len() / 2, submeshes.len()),
	};

	if args.json {
		let triangle_count = match record.triangles() {
			Ok(triangles) => Some(triangles.len()),
			Err(err) if err.class() == ErrorClass::OutOfRange => None,
			Err(err) => return Err(err.into()),
		};
		let payload = DecodeJson {
			path: args.record.path.display().to_string(),
			version: loaded.version.to_string(),
			compression: loaded.compression.as_str(),
			consumed: loaded.consumed,
			trailing: loaded.trailing,
			texture: record.texture.into(),
			alpha_texture: record.alpha_texture.into(),
			geometry: geometry_label(&record.geometry),
			vertex_count,
			index_count,
			submesh_count,
			triangle_count,
			bind_pose_count: record.bind_pose.len(),
			source_skin_count: record.source_skin.len(),
			texture_rect: record.texture_rect.into(),
			texture_rect_offset: record.texture_rect_offset.to_array(),
			atlas_rect_offset: record.atlas_rect_offset.to_array(),
			settings: SettingsJson {
				raw: record.settings.0,
				packed: record.settings.packed(),
				rectangle_packing: record.settings.rectangle_packing(),
				packing_rotation: record.settings.packing_rotation(),
				tight_mesh: record.settings.tight_mesh(),
			},
			uv_transform: record.uv_transform.to_array(),
			downscale_multiplier: record.downscale_multiplier,
		};
		return emit_json(&payload);
	}

	println!("path: {}", args.record.path.display());
	println!("version: {}", loaded.version);
	println!("compression: {}", loaded.compression.as_str());
	println!("consumed: {}", loaded.consumed);
	println!("trailing: {}", loaded.trailing);
	println!("texture: {}", pptr_label(record.texture));
	println!("alpha_texture: {}", pptr_label(record.alpha_texture));
	println!("geometry: {}", geometry_label(&record.geometry));
	println!("vertices: {vertex_count}");
	println!("indices: {index_count}");
	println!("submeshes: {submesh_count}");
	println!("bind_poses: {}", record.bind_pose.len());
	println!("source_skin: {}", record.source_skin.len());
	let rect = record.texture_rect;
	println!("texture_rect: {} {} {} {}", rect.x, rect.y, rect.width, rect.height);
	println!("texture_rect_offset: {}", record.texture_rect_offset);
	println!("atlas_rect_offset: {}", record.atlas_rect_offset);
	println!("settings: 0x{:08x}", record.settings.0);
	println!("uv_transform: {}", record.uv_transform);
	println!("downscale_multiplier: {}", record.downscale_multiplier);

	Ok(())
}

#[derive(serde::Serialize)]
struct SettingsJson {
	raw: u32,
	packed: bool,
	rectangle_packing: bool,
	packing_rotation: u8,
	tight_mesh: bool,
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	version: String,
	compression: &'static str,
	consumed: usize,
	trailing: usize,
	texture: PPtrJson,
	alpha_texture: PPtrJson,
	geometry: &'static str,
	vertex_count: usize,
	index_count: usize,
	submesh_count: usize,
	/// `None` when a submesh range lies outside the index buffer.
	triangle_count: Option<usize>,
	bind_pose_count: usize,
	source_skin_count: usize,
	texture_rect: RectJson,
	texture_rect_offset: [f32; 2],
	atlas_rect_offset: [f32; 2],
	settings: SettingsJson,
	uv_transform: [f32; 4],
	downscale_multiplier: f32,
}
