//! OAuth scopes understood by ORCID.

// self
use crate::_prelude::*;

/// Error returned when a scope string is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown ORCID scope: {scope}.")]
pub struct UnknownScope {
	/// The offending scope string.
	pub scope: String,
}

/// OAuth scope requested during authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scope {
	/// `/authenticate`
	#[serde(rename = "/authenticate")]
	Authenticate,
	/// `/read-limited`
	#[serde(rename = "/read-limited")]
	ReadLimited,
	/// `/activities/update`
	#[serde(rename = "/activities/update")]
	ActivitiesUpdate,
	/// `/person/update`
	#[serde(rename = "/person/update")]
	PersonUpdate,
}
impl Scope {
	/// Every known scope.
	pub const ALL: [Scope; 4] =
		[Scope::Authenticate, Scope::ReadLimited, Scope::ActivitiesUpdate, Scope::PersonUpdate];

	/// Canonical slash-prefixed form.
	pub const fn as_str(self) -> &'static str {
		match self {
			Scope::Authenticate => "/authenticate",
			Scope::ReadLimited => "/read-limited",
			Scope::ActivitiesUpdate => "/activities/update",
			Scope::PersonUpdate => "/person/update",
		}
	}

	/// Joins `scopes` with single spaces, preserving the given order.
	pub fn join(scopes: &[Scope]) -> String {
		scopes.iter().map(|scope| scope.as_str()).collect::<Vec<_>>().join(" ")
	}
}
impl Display for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Scope {
	type Err = UnknownScope;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|scope| scope.as_str() == s)
			.ok_or_else(|| UnknownScope { scope: s.to_owned() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scopes_render_slash_prefixed() {
		assert_eq!(Scope::ReadLimited.to_string(), "/read-limited");
		assert_eq!(
			Scope::join(&[Scope::Authenticate, Scope::ReadLimited]),
			"/authenticate /read-limited"
		);
		assert_eq!(Scope::join(&[]), "");
	}

	#[test]
	fn scopes_parse_and_serialize_symmetrically() {
		for scope in Scope::ALL {
			assert_eq!(scope.as_str().parse::<Scope>(), Ok(scope));
			assert_eq!(
				serde_json::to_string(&scope).expect("Scope should serialize."),
				format!("\"{scope}\"")
			);
		}

		assert_eq!(
			"read-limited".parse::<Scope>(),
			Err(UnknownScope { scope: "read-limited".into() })
		);
	}
}
