/// Key value that stops children from inheriting the parent key.
pub const SUPPRESS_MARKER: &str = "...";

/// Join a parent key and a child key into one key path.
///
/// A parent equal to [`SUPPRESS_MARKER`] contributes no prefix.
pub fn compose_key(parent: &str, child: &str) -> String {
	if parent == SUPPRESS_MARKER {
		return child.to_owned();
	}

	let mut out = String::with_capacity(parent.len() + 1 + child.len());
	out.push_str(parent);
	out.push('.');
	out.push_str(child);
	out
}

/// Key for the sequence element at zero-based `index`.
pub fn index_key(parent: &str, index: usize) -> String {
	compose_key(parent, &index.to_string())
}

#[cfg(test)]
mod tests;
