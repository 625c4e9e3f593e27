/// JSON document encode command.
pub mod encode;
/// Shared CLI helpers.
pub(crate) mod util;
