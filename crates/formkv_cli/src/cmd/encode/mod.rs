use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use formkv::form::{Encoder, Kv, MapOrder, Result, json};
use tracing::debug;

use crate::cmd::util::{emit_json, read_input};

/// Mapping order flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MapOrderArg {
	/// Keep document order.
	Source,
	/// Sort mapping pairs by key.
	Sorted,
}

impl From<MapOrderArg> for MapOrder {
	fn from(value: MapOrderArg) -> Self {
		match value {
			MapOrderArg::Source => Self::Source,
			MapOrderArg::Sorted => Self::SortedByKey,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	/// JSON document path, or `-` for stdin.
	pub file: PathBuf,
	#[arg(long, default_value = Encoder::DEFAULT_TAG)]
	pub tag: String,
	#[arg(long, default_value = Encoder::DEFAULT_IGNORE_FLAG)]
	pub ignore: String,
	#[arg(long = "map-order", value_enum, default_value_t = MapOrderArg::Source)]
	pub map_order: MapOrderArg,
	#[arg(long)]
	pub json: bool,
	#[arg(long, conflicts_with = "json")]
	pub map: bool,
}

/// Encode a JSON document and print its form pairs.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		tag,
		ignore,
		map_order,
		json,
		map,
	} = args;

	let encoder = Encoder::new(&tag, &ignore)?.with_map_order(map_order.into());
	let text = read_input(&file)?;
	let document = json::parse(&text)?;
	debug!(path = %file.display(), "parsed input document");

	if map {
		return emit_json(&map_json(encoder.to_map(&document)?));
	}

	let kvs = encoder.encode(&document)?;
	if json {
		return emit_json(&pairs_json(&kvs));
	}

	for kv in &kvs {
		println!("{kv}");
	}
	Ok(())
}

fn pairs_json(kvs: &[Kv]) -> Vec<KvJson<'_>> {
	kvs.iter()
		.map(|kv| KvJson {
			key: kv.key(),
			value: kv.value(),
		})
		.collect()
}

/// Keys sorted for stable output.
fn map_json(map: HashMap<String, String>) -> BTreeMap<String, String> {
	map.into_iter().collect()
}

#[derive(serde::Serialize)]
struct KvJson<'a> {
	key: &'a str,
	value: &'a str,
}
