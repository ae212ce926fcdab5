use spriteoutline::sprite::{OutOfRangePolicy, OutlineOptions, generate_outline_with, outline_bounds};

use crate::cmd::input::{RecordArgs, load_record};
use crate::cmd::util::{RectJson, emit_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub record: RecordArgs,
	/// Drop submeshes whose ranges fall outside their buffers instead of failing.
	#[arg(long = "skip-out-of-range")]
	pub skip_out_of_range: bool,
	#[arg(long)]
	pub json: bool,
}

/// Decode one record and print its outlines.
pub fn run(args: Args) -> Result<()> {
	let loaded = load_record(&args.record)?;
	let options = OutlineOptions {
		on_out_of_range: if args.skip_out_of_range {
			OutOfRangePolicy::SkipSubMesh
		} else {
			OutOfRangePolicy::Abort
		},
	};
	let outlines = generate_outline_with(&loaded.record, loaded.version, &options)?;
	let bounds = outline_bounds(&outlines);

	if args.json {
		let payload = OutlinesJson {
			path: args.record.path.display().to_string(),
			version: loaded.version.to_string(),
			bounds: bounds.map(RectJson::from),
			outlines: outlines
				.iter()
				.map(|outline| OutlineJson {
					closed: outline.closed,
					points: outline.points.iter().map(|point| point.to_array()).collect(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", args.record.path.display());
	println!("version: {}", loaded.version);
	println!("outlines: {}", outlines.len());
	if let Some(rect) = bounds {
		println!("bounds: {} {} {} {}", rect.x, rect.y, rect.width, rect.height);
	}
	for (idx, outline) in outlines.iter().enumerate() {
		let kind = if outline.closed { "closed" } else { "open" };
		println!("[{idx}] {kind} {} points", outline.len());
		for point in &outline.points {
			println!("\t{}\t{}", point.x, point.y);
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct OutlineJson {
	closed: bool,
	points: Vec<[f32; 2]>,
}

#[derive(serde::Serialize)]
struct OutlinesJson {
	path: String,
	version: String,
	bounds: Option<RectJson>,
	outlines: Vec<OutlineJson>,
}
