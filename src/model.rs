//! Read-only models mirroring the ORCID v3.0 JSON schema.
//!
//! Every field is optional: the upstream omits sections depending on the
//! researcher's visibility settings, and a missing or `null` field decodes to
//! `None` instead of failing. Unknown fields are ignored.

pub mod common;
pub mod record;
pub mod works;

pub use common::*;
pub use record::*;
pub use works::*;

// self
use crate::_prelude::*;

/// Decodes `body` into `T`, reporting the JSON path of any mismatch.
pub fn decode<T>(body: &[u8]) -> Result<T>
where
	T: for<'de> Deserialize<'de>,
{
	let mut de = serde_json::Deserializer::from_slice(body);
	let value = serde_path_to_error::deserialize(&mut de)?;

	// Only whitespace may follow the document.
	de.end()?;

	Ok(value)
}
