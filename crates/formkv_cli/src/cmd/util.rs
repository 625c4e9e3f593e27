use std::io::Read;
use std::path::Path;

use formkv::form::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub(crate) const LOG_ENV: &str = "FORMKV_LOG";

/// Install a stderr log subscriber filtered by `FORMKV_LOG` (default `warn`).
pub(crate) fn init_tracing() {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Read input text from a file path, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
	if path == Path::new("-") {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text)?;
		return Ok(text);
	}
	Ok(std::fs::read_to_string(path)?)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
