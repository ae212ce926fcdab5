use glam::{Vec2, Vec3, Vec4};

use crate::sprite::{
	GeometrySource, OutOfRangePolicy, Outline, OutlineOptions, PPtr, Rectf, SpriteError, SpriteRenderRecord, SpriteSettings, SpriteVertex, SubMesh, Version,
	VertexStream, generate_outline, generate_outline_with, outline_bounds,
};

fn record(geometry: GeometrySource) -> SpriteRenderRecord {
	SpriteRenderRecord {
		texture: PPtr::default(),
		alpha_texture: PPtr::default(),
		geometry,
		bind_pose: Vec::new(),
		source_skin: Vec::new(),
		texture_rect: Rectf::default(),
		texture_rect_offset: Vec2::ZERO,
		atlas_rect_offset: Vec2::ZERO,
		settings: SpriteSettings::default(),
		uv_transform: Vec4::ZERO,
		downscale_multiplier: 0.0,
	}
}

fn stream(positions: &[[f32; 3]]) -> VertexStream {
	VertexStream {
		vertex_count: positions.len() as u32,
		stride: 12,
		position_offset: 0,
		data: positions.iter().flatten().flat_map(|lane| lane.to_le_bytes()).collect(),
	}
}

fn modern(ranges: &[(u32, u32)], indices: &[u16], positions: &[[f32; 3]]) -> SpriteRenderRecord {
	record(GeometrySource::ModernSubmeshes {
		submeshes: ranges
			.iter()
			.map(|(first_byte, index_count)| SubMesh {
				first_byte: *first_byte,
				index_count: *index_count,
				..SubMesh::default()
			})
			.collect(),
		index_buffer: indices.iter().flat_map(|index| index.to_le_bytes()).collect(),
		vertex_data: stream(positions),
	})
}

fn modern_version() -> Version {
	Version::parse("2019.4.0f1").expect("version parses")
}

const QUAD: [[f32; 3]; 4] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];

#[test]
fn legacy_vertices_project_in_order() {
	let vertices = vec![
		SpriteVertex { pos: Vec3::new(3.0, 4.0, 9.0) },
		SpriteVertex { pos: Vec3::new(-1.0, 2.0, 0.0) },
		SpriteVertex { pos: Vec3::new(0.5, 0.5, -7.0) },
		SpriteVertex { pos: Vec3::new(3.0, 4.0, 1.0) },
	];
	let item = record(GeometrySource::LegacyVertices {
		vertices: vertices.clone(),
		indices: vec![0, 1, 2],
	});

	let outlines = generate_outline(&item, Version::parse("5.5.0f3").expect("version parses")).expect("legacy outline");
	assert_eq!(outlines.len(), 1);
	let expected: Vec<Vec2> = vertices.iter().map(|vertex| Vec2::new(vertex.pos.x, vertex.pos.y)).collect();
	assert_eq!(outlines[0].points, expected);
}

#[test]
fn single_triangle_gives_closed_three_point_outline() {
	let item = modern(&[(0, 3)], &[0, 1, 2], &QUAD[..3]);
	let outlines = generate_outline(&item, modern_version()).expect("outline");

	assert_eq!(outlines.len(), 1);
	assert!(outlines[0].closed);
	assert_eq!(outlines[0].points, vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);
}

#[test]
fn quad_gives_closed_four_point_outline() {
	let item = modern(&[(0, 6)], &[0, 1, 2, 1, 3, 2], &QUAD);
	let outlines = generate_outline(&item, modern_version()).expect("outline");

	assert_eq!(outlines.len(), 1);
	assert_eq!(
		outlines[0].points,
		vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)]
	);
}

#[test]
fn submesh_order_is_preserved_and_empty_submeshes_add_nothing() {
	let item = modern(&[(6, 3), (0, 0), (0, 3)], &[0, 1, 2, 1, 3, 2], &QUAD);
	let outlines = generate_outline(&item, modern_version()).expect("outline");

	assert_eq!(outlines.len(), 2);
	assert_eq!(outlines[0].points[0], Vec2::new(1.0, 0.0));
	assert_eq!(outlines[1].points[0], Vec2::new(0.0, 0.0));
}

#[test]
fn out_of_range_submesh_aborts_by_default() {
	let item = modern(&[(0, 3), (8, 3)], &[0, 1, 2, 1, 3, 2], &QUAD);
	let err = generate_outline(&item, modern_version()).expect_err("second range runs past 12 bytes");
	assert!(matches!(err, SpriteError::SubMeshOutOfRange { first_byte: 8, need: 6, len: 12 }));
}

#[test]
fn skip_policy_drops_only_the_bad_submesh() {
	let item = modern(&[(8, 3), (0, 3)], &[0, 1, 2, 1, 3, 2], &QUAD);
	let options = OutlineOptions {
		on_out_of_range: OutOfRangePolicy::SkipSubMesh,
	};
	let outlines = generate_outline_with(&item, modern_version(), &options).expect("bad submesh skipped");
	assert_eq!(outlines.len(), 1);
	assert_eq!(outlines[0].len(), 3);
}

#[test]
fn missing_vertex_is_out_of_range() {
	let item = modern(&[(0, 3)], &[0, 1, 7], &QUAD);
	let err = generate_outline(&item, modern_version()).expect_err("vertex 7 does not exist");
	assert!(matches!(err, SpriteError::VertexOutOfRange { index: 7, count: 4 }));

	let options = OutlineOptions {
		on_out_of_range: OutOfRangePolicy::SkipSubMesh,
	};
	let outlines = generate_outline_with(&item, modern_version(), &options).expect("skipped");
	assert!(outlines.is_empty());
}

#[test]
fn generation_does_not_mutate_and_is_repeatable() {
	let item = modern(&[(0, 6)], &[0, 1, 2, 1, 3, 2], &QUAD);
	let before = item.clone();
	let first = generate_outline(&item, modern_version()).expect("outline");
	let second = generate_outline(&item, modern_version()).expect("outline");
	assert_eq!(first, second);
	assert_eq!(item, before);
}

#[test]
fn bounds_cover_all_outlines() {
	let outlines = vec![
		Outline {
			points: vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, -1.0)],
			closed: false,
		},
		Outline::default(),
		Outline {
			points: vec![Vec2::new(-2.0, 0.5)],
			closed: false,
		},
	];
	let rect = outline_bounds(&outlines).expect("non-empty");
	assert_eq!(
		rect,
		Rectf {
			x: -2.0,
			y: -1.0,
			width: 5.0,
			height: 3.0
		}
	);
	assert!(outline_bounds(&[Outline::default()]).is_none());
}
