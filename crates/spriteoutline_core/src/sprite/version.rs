use std::fmt;
use std::str::FromStr;

use crate::sprite::{Result, SpriteError};

/// Engine release channel, ordered by rank.
///
/// Variant order is the comparison rank: `Alpha < Beta < ReleaseCandidate < Patch < Final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseType {
	/// `a` builds.
	Alpha,
	/// `b` builds.
	Beta,
	/// `rc` builds.
	ReleaseCandidate,
	/// `p` builds.
	Patch,
	/// `f` builds.
	Final,
}

impl ReleaseType {
	/// Version-string tag for this channel.
	pub fn tag(self) -> &'static str {
		match self {
			Self::Alpha => "a",
			Self::Beta => "b",
			Self::ReleaseCandidate => "rc",
			Self::Patch => "p",
			Self::Final => "f",
		}
	}

	fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"a" => Some(Self::Alpha),
			"b" => Some(Self::Beta),
			"rc" => Some(Self::ReleaseCandidate),
			"p" => Some(Self::Patch),
			"f" => Some(Self::Final),
			_ => None,
		}
	}
}

/// Engine version `(major, minor, build, release type, type number)`.
///
/// Ordering is lexicographic over the tuple in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
	/// Major version (`5`, `2018`, ...).
	pub major: u16,
	/// Minor version.
	pub minor: u16,
	/// Build number.
	pub build: u16,
	/// Release channel.
	pub release: ReleaseType,
	/// Channel build number (`3` in `5.5.0p3`).
	pub type_number: u16,
}

impl Version {
	/// Build a fully specified version.
	pub const fn new(major: u16, minor: u16, build: u16, release: ReleaseType, type_number: u16) -> Self {
		Self {
			major,
			minor,
			build,
			release,
			type_number,
		}
	}

	/// Lowest version of the `major.minor.build` series (`a0`).
	///
	/// Comparing against a base treats every channel of that build as part of it.
	pub const fn base(major: u16, minor: u16, build: u16) -> Self {
		Self::new(major, minor, build, ReleaseType::Alpha, 0)
	}

	/// Return whether this version belongs to the `major.minor` series.
	pub const fn is_series(self, major: u16, minor: u16) -> bool {
		self.major == major && self.minor == minor
	}

	/// Parse `major.minor[.build[<tag><number>]]`, e.g. `2018.1.0f2` or `5.5.0p3`.
	///
	/// Missing components default to build `0` and `f0`.
	pub fn parse(text: &str) -> Result<Self> {
		let invalid = || SpriteError::InvalidVersion { text: text.to_owned() };

		let mut parts = text.trim().splitn(3, '.');
		let major = parse_number(parts.next()).ok_or_else(invalid)?;
		let minor = parse_number(parts.next()).ok_or_else(invalid)?;

		let Some(tail) = parts.next() else {
			return Ok(Self::new(major, minor, 0, ReleaseType::Final, 0));
		};

		let digits_end = tail.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(tail.len());
		let build = parse_number(Some(&tail[..digits_end])).ok_or_else(invalid)?;
		let rest = &tail[digits_end..];
		if rest.is_empty() {
			return Ok(Self::new(major, minor, build, ReleaseType::Final, 0));
		}

		let tag_end = rest.find(|ch: char| ch.is_ascii_digit()).unwrap_or(rest.len());
		let release = ReleaseType::from_tag(&rest[..tag_end]).ok_or_else(invalid)?;
		let type_number = parse_number(Some(&rest[tag_end..])).ok_or_else(invalid)?;

		Ok(Self::new(major, minor, build, release, type_number))
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}{}{}", self.major, self.minor, self.build, self.release.tag(), self.type_number)
	}
}

impl FromStr for Version {
	type Err = SpriteError;

	fn from_str(text: &str) -> Result<Self> {
		Self::parse(text)
	}
}

fn parse_number(part: Option<&str>) -> Option<u16> {
	let part = part?;
	if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	part.parse().ok()
}

#[cfg(test)]
mod tests;
