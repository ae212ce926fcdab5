use crate::sprite::{ErrorClass, SpriteError, SubMesh, Triangle, decode_submesh_triangles};

fn index_bytes(indices: &[i16]) -> Vec<u8> {
	indices.iter().flat_map(|index| index.to_le_bytes()).collect()
}

fn submesh(first_byte: u32, index_count: u32) -> SubMesh {
	SubMesh {
		first_byte,
		index_count,
		..SubMesh::default()
	}
}

#[test]
fn decodes_triples_from_offset() {
	let buffer = index_bytes(&[9, 9, 0, 1, 2, 2, 1, 3]);
	let triangles = decode_submesh_triangles(&submesh(4, 6), &buffer).expect("range fits");
	assert_eq!(triangles, vec![Triangle::new(0, 1, 2), Triangle::new(2, 1, 3)]);
}

#[test]
fn range_ending_at_buffer_end_is_accepted() {
	let buffer = index_bytes(&[0, 0, 0, 1, 2]);
	let triangles = decode_submesh_triangles(&submesh(4, 3), &buffer).expect("4 + 6 == 10");
	assert_eq!(triangles, vec![Triangle::new(0, 1, 2)]);
}

#[test]
fn range_one_past_buffer_end_is_out_of_range() {
	let mut buffer = index_bytes(&[0, 0, 0, 1, 2]);
	buffer.pop();
	let err = decode_submesh_triangles(&submesh(4, 3), &buffer).expect_err("4 + 6 == len + 1");
	assert!(matches!(
		err,
		SpriteError::SubMeshOutOfRange {
			first_byte: 4,
			need: 6,
			len: 9
		}
	));
	assert_eq!(err.class(), ErrorClass::OutOfRange);
}

#[test]
fn partial_trailing_triangle_is_truncated() {
	let buffer = index_bytes(&[0, 1, 2, 3, 4]);
	let triangles = decode_submesh_triangles(&submesh(0, 5), &buffer).expect("one whole triangle");
	assert_eq!(triangles.len(), 1);
}

#[test]
fn empty_submesh_at_buffer_end_yields_nothing() {
	let buffer = index_bytes(&[0, 1, 2]);
	let triangles = decode_submesh_triangles(&submesh(6, 2), &buffer).expect("first_byte == len");
	assert!(triangles.is_empty());
}

#[test]
fn empty_submesh_past_buffer_end_is_out_of_range() {
	let buffer = index_bytes(&[0, 1, 2]);
	let err = decode_submesh_triangles(&submesh(100, 0), &buffer).expect_err("offset past 6 bytes");
	assert!(matches!(
		err,
		SpriteError::SubMeshOutOfRange {
			first_byte: 100,
			need: 0,
			len: 6
		}
	));
}

#[test]
fn huge_index_count_is_out_of_range_not_a_panic() {
	let buffer = index_bytes(&[0, 1, 2]);
	let err = decode_submesh_triangles(&submesh(u32::MAX, u32::MAX), &buffer).expect_err("range cannot fit");
	assert_eq!(err.class(), ErrorClass::OutOfRange);
}

#[test]
fn negative_stored_indices_read_as_unsigned() {
	let buffer = index_bytes(&[-1, 0, 1]);
	let triangles = decode_submesh_triangles(&submesh(0, 3), &buffer).expect("range fits");
	assert_eq!(triangles[0], Triangle::new(u16::MAX, 0, 1));
}
