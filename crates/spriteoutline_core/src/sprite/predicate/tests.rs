use crate::sprite::{Predicate, ReleaseType, Version};

fn v(text: &str) -> Version {
	Version::parse(text).expect("test version parses")
}

#[test]
fn atlas_rect_offset_windows() {
	let rule = Predicate::ReadAtlasRectOffset;
	assert!(rule.holds(Version::new(5, 4, 5, ReleaseType::Patch, 1)));
	assert!(!rule.holds(Version::new(5, 5, 0, ReleaseType::Patch, 2)));
	assert!(rule.holds(Version::new(5, 5, 0, ReleaseType::Patch, 3)));
	assert!(rule.holds(Version::new(5, 5, 2, ReleaseType::Patch, 0)));

	assert!(!rule.holds(v("5.4.5p0")));
	assert!(rule.holds(v("5.4.6f1")));
	assert!(!rule.holds(v("5.5.0p4")));
	assert!(!rule.holds(v("5.5.1f1")));
	assert!(rule.holds(v("2018.1.0f2")));
}

#[test]
fn legacy_vertices_end_at_5_6() {
	let rule = Predicate::ReadLegacyVertices;
	assert!(rule.holds(v("4.3.0f1")));
	assert!(rule.holds(v("5.5.9p9")));
	assert!(!rule.holds(v("5.6.0a1")));
	assert!(!rule.holds(v("2019.4.0f1")));
}

#[test]
fn source_skin_is_exactly_2018_1() {
	let rule = Predicate::ReadSourceSkin;
	assert!(rule.holds(v("2018.1.0b3")));
	assert!(rule.holds(v("2018.1.9f2")));
	assert!(!rule.holds(v("2017.4.40f1")));
	assert!(!rule.holds(v("2018.2.0f1")));
}

#[test]
fn lower_bound_rules() {
	assert!(!Predicate::ReadAlphaTexture.holds(v("5.1.9f1")));
	assert!(Predicate::ReadAlphaTexture.holds(v("5.2.0a1")));

	assert!(!Predicate::ReadUvTransform.holds(v("4.3.4f1")));
	assert!(Predicate::ReadUvTransform.holds(v("4.5.0f6")));

	assert!(!Predicate::ReadDownscaleMultiplier.holds(v("5.6.7f1")));
	assert!(Predicate::ReadDownscaleMultiplier.holds(v("2017.1.0b1")));

	assert!(!Predicate::ReadBindPose.holds(v("2017.4.1f1")));
	assert!(Predicate::ReadBindPose.holds(v("2018.1.0a1")));
	assert!(Predicate::ReadBindPose.holds(v("2020.3.0f1")));

	assert!(!Predicate::ReadSubMeshBaseVertex.holds(v("2017.2.0f3")));
	assert!(Predicate::ReadSubMeshBaseVertex.holds(v("2017.3.0f1")));
}

#[test]
fn evaluation_is_stable_across_order() {
	let version = v("5.5.0p3");
	let forward: Vec<bool> = Predicate::ALL.iter().map(|rule| rule.holds(version)).collect();
	let backward: Vec<bool> = Predicate::ALL.iter().rev().map(|rule| rule.holds(version)).rev().collect();
	assert_eq!(forward, backward);

	for rule in Predicate::ALL {
		assert_eq!(rule.holds(version), rule.holds(version), "{}", rule.name());
	}
}

#[test]
fn names_are_unique() {
	let mut names: Vec<_> = Predicate::ALL.iter().map(|rule| rule.name()).collect();
	names.sort_unstable();
	names.dedup();
	assert_eq!(names.len(), Predicate::ALL.len());
}
