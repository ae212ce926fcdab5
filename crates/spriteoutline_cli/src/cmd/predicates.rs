use spriteoutline::sprite::{Predicate, Version};

use crate::cmd::util::emit_json;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Engine version, e.g. `5.5.0p3`.
	#[arg(long = "unity-version")]
	pub version: String,
	#[arg(long)]
	pub json: bool,
}

/// Print every field-presence rule for one version.
pub fn run(args: Args) -> Result<()> {
	let version = Version::parse(&args.version)?;

	if args.json {
		let payload = PredicatesJson {
			version: version.to_string(),
			predicates: Predicate::ALL
				.iter()
				.map(|rule| PredicateJson {
					name: rule.name(),
					holds: rule.holds(version),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("version: {version}");
	for rule in Predicate::ALL {
		println!("{}\t{}", rule.name(), rule.holds(version));
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct PredicateJson {
	name: &'static str,
	holds: bool,
}

#[derive(serde::Serialize)]
struct PredicatesJson {
	version: String,
	predicates: Vec<PredicateJson>,
}
