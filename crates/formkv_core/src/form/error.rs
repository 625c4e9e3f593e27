use thiserror::Error;

use crate::form::key::compose_key;
use crate::form::value::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors produced while configuring an encoder or flattening a value.
#[derive(Debug, Error)]
pub enum FormError {
	/// Encoder was configured with an empty tag name.
	#[error("missing tag name")]
	EmptyTagName,
	/// Encoder was configured with an empty ignore marker.
	#[error("missing ignore flag")]
	EmptyIgnoreFlag,
	/// Root value did not resolve to a struct after pointer unwrapping.
	#[error("invalid root: struct or non-nil pointer to struct is needed, got {kind}")]
	InvalidRoot {
		/// Kind the root resolved to.
		kind: Kind,
	},
	/// Value kind has no registered encoder.
	#[error("unsupported kind {kind}")]
	UnsupportedKind {
		/// Offending value kind.
		kind: Kind,
	},
	/// Failure raised below a key path.
	#[error("encode failed at {path:?}: {source}")]
	Nested {
		/// Key path the failing value would have been emitted under.
		path: String,
		/// Inner failure.
		#[source]
		source: Box<FormError>,
	},
	/// JSON object member name would be reinterpreted as key syntax.
	#[error("json member name {name:?} cannot be used as a field name")]
	InvalidMemberName {
		/// Offending member name.
		name: String,
	},
	/// JSON input could not be parsed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}

impl FormError {
	/// Attach `path` as the failure location, replacing any previous one.
	pub(crate) fn at(self, path: impl Into<String>) -> Self {
		let path = path.into();
		match self {
			Self::Nested { source, .. } => Self::Nested { path, source },
			other => Self::Nested {
				path,
				source: Box::new(other),
			},
		}
	}

	/// Prefix the failure location with a parent key.
	pub(crate) fn within(self, parent: &str) -> Self {
		match self {
			Self::Nested { path, source } => Self::Nested {
				path: compose_key(parent, &path),
				source,
			},
			other => other.at(parent),
		}
	}

	/// Key path of the failure, when raised inside a struct.
	pub fn path(&self) -> Option<&str> {
		match self {
			Self::Nested { path, .. } => Some(path),
			_ => None,
		}
	}

	/// Innermost error of a `Nested` chain.
	pub fn root_cause(&self) -> &FormError {
		let mut current = self;
		while let Self::Nested { source, .. } = current {
			current = &**source;
		}
		current
	}
}
