use spriteoutline::sprite::fetch_dependencies;

use crate::cmd::input::{RecordArgs, load_record};
use crate::cmd::util::{PPtrJson, emit_json, pptr_label};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub record: RecordArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode one record and list its unresolved texture references.
pub fn run(args: Args) -> Result<()> {
	let loaded = load_record(&args.record)?;
	let deps = fetch_dependencies(&loaded.record);

	if args.json {
		let payload = DepsJson {
			path: args.record.path.display().to_string(),
			version: loaded.version.to_string(),
			dependencies: deps
				.iter()
				.map(|dep| DepJson {
					field: dep.field,
					asset: dep.asset.into(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", args.record.path.display());
	println!("field\tasset");
	for dep in deps {
		println!("{}\t{}", dep.field, pptr_label(dep.asset));
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct DepJson {
	field: &'static str,
	asset: PPtrJson,
}

#[derive(serde::Serialize)]
struct DepsJson {
	path: String,
	version: String,
	dependencies: Vec<DepJson>,
}
