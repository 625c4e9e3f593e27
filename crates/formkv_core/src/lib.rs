//! Public library API for flattening structured values into form key/value pairs.

/// Value model, tag handling, and the recursive form encoder.
pub mod form;
