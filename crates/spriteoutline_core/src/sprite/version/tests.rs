use crate::sprite::{ReleaseType, SpriteError, Version};

#[test]
fn parses_final_and_patch_versions() {
	let version = Version::parse("2018.1.0f2").expect("final parses");
	assert_eq!(version, Version::new(2018, 1, 0, ReleaseType::Final, 2));

	let version: Version = "5.5.0p3".parse().expect("patch parses");
	assert_eq!(version, Version::new(5, 5, 0, ReleaseType::Patch, 3));

	let version = Version::parse("5.6.0rc1").expect("rc parses");
	assert_eq!(version.release, ReleaseType::ReleaseCandidate);
	assert_eq!(version.type_number, 1);
}

#[test]
fn short_forms_default_to_final_zero() {
	assert_eq!(Version::parse("2017.1").expect("series"), Version::new(2017, 1, 0, ReleaseType::Final, 0));
	assert_eq!(Version::parse("4.5.2").expect("build"), Version::new(4, 5, 2, ReleaseType::Final, 0));
}

#[test]
fn rejects_malformed_strings() {
	for text in ["", "5", "5.x.0", "5.5.0q1", "5.5.0p", "5.5..0f1"] {
		let err = Version::parse(text).expect_err("malformed version should fail");
		assert!(matches!(err, SpriteError::InvalidVersion { .. }), "{text}");
	}
}

#[test]
fn display_round_trips() {
	let version = Version::new(5, 4, 5, ReleaseType::Patch, 1);
	assert_eq!(version.to_string(), "5.4.5p1");
	assert_eq!(Version::parse(&version.to_string()).expect("reparses"), version);
}

#[test]
fn ordering_stops_at_first_difference() {
	let older = Version::new(5, 4, 9, ReleaseType::Final, 9);
	let newer = Version::new(5, 5, 0, ReleaseType::Alpha, 0);
	assert!(older < newer);

	assert!(Version::new(2017, 4, 0, ReleaseType::Final, 1) < Version::new(2018, 1, 0, ReleaseType::Alpha, 1));
	assert!(Version::new(5, 5, 0, ReleaseType::Patch, 2) < Version::new(5, 5, 0, ReleaseType::Patch, 3));
}

#[test]
fn release_rank_order() {
	let ranks = [
		ReleaseType::Alpha,
		ReleaseType::Beta,
		ReleaseType::ReleaseCandidate,
		ReleaseType::Patch,
		ReleaseType::Final,
	];
	for pair in ranks.windows(2) {
		assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
		let low = Version::new(5, 5, 2, pair[0], 9);
		let high = Version::new(5, 5, 2, pair[1], 0);
		assert!(low < high);
	}
}

#[test]
fn base_is_lowest_of_its_series() {
	let base = Version::base(5, 6, 0);
	assert!(base <= Version::new(5, 6, 0, ReleaseType::Alpha, 0));
	assert!(base < Version::new(5, 6, 0, ReleaseType::Beta, 1));
	assert!(Version::new(5, 5, 9, ReleaseType::Final, 99) < base);
	assert!(Version::parse("2018.1.3f1").expect("parses").is_series(2018, 1));
}
