mod adapt;
mod dispatch;
mod encode;
mod encoder;
mod error;
pub mod json;
mod key;
mod kv;
mod macros;
mod scalar;
mod tag;
mod value;

/// Conversion traits from host types into the value model.
pub use adapt::{FormStruct, FormValue};
/// Encoder facade and mapping order policy.
pub use encoder::{Encoder, MapOrder};
/// Error and result aliases.
pub use error::{FormError, Result};
/// Key path composition helpers and the suppression marker.
pub use key::{SUPPRESS_MARKER, compose_key, index_key};
/// Flat output pair.
pub use kv::Kv;
/// Canonical scalar rendering.
pub use scalar::render_scalar;
/// Field tag resolution and parsed tag form.
pub use tag::{FieldTag, JOIN_MODIFIER, TagSpec, resolve_field_tag};
/// Value model consumed by the encoder.
pub use value::{Complex, Field, FieldMeta, Kind, MapValue, Scalar, SeqValue, StructValue, Value};
