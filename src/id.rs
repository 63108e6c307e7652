//! Canonical ORCID iD value type.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Host fragment that marks a profile URL as belonging to ORCID.
const ORCID_HOST: &str = "orcid.org";

/// A normalized ORCID iD in the canonical `0000-0000-0000-000X` form.
///
/// Construction accepts a bare iD or a profile URL such as
/// `https://orcid.org/0000-0002-1825-0097`; the wrapped string is always canonical.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrcidId(String);
impl OrcidId {
	/// Parses and validates `raw`, extracting the last path segment from ORCID URLs.
	pub fn new(raw: impl AsRef<str>) -> Result<Self> {
		let raw = raw.as_ref();
		let normalized = Self::normalize(raw.trim());

		if !Self::is_valid_format(&normalized) {
			return Err(Error::InvalidIdentifier { input: raw.to_owned() });
		}

		Ok(Self(normalized))
	}

	/// Returns the last non-empty path segment when `raw` is an ORCID URL, else `raw`.
	pub fn normalize(raw: &str) -> String {
		let Ok(url) = Url::parse(raw) else {
			return raw.to_owned();
		};

		if !url.host_str().is_some_and(|host| host.contains(ORCID_HOST)) {
			return raw.to_owned();
		}

		url.path_segments()
			.and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
			.unwrap_or(raw)
			.to_owned()
	}

	/// Checks the `NNNN-NNNN-NNNN-NNNC` layout where `C` is a digit or `X`.
	pub fn is_valid_format(value: &str) -> bool {
		let bytes = value.as_bytes();

		if bytes.len() != 19 {
			return false;
		}

		bytes.iter().enumerate().all(|(idx, byte)| match idx {
			4 | 9 | 14 => *byte == b'-',
			18 => byte.is_ascii_digit() || *byte == b'X',
			_ => byte.is_ascii_digit(),
		})
	}

	/// Canonical string value.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for OrcidId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for OrcidId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for OrcidId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<OrcidId> for String {
	fn from(value: OrcidId) -> Self {
		value.0
	}
}
impl TryFrom<String> for OrcidId {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl TryFrom<&str> for OrcidId {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for OrcidId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for OrcidId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "OrcidId({})", self.0)
	}
}
impl Display for OrcidId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
