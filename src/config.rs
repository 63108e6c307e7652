//! Deployment selection and per-client configuration.
//!
//! [`Environment`] pins the API and OAuth base URLs (production, sandbox, or a
//! caller-supplied pair) and [`ClientConfig`] bundles it with the outbound
//! `User-Agent`. Both are immutable once handed to a client.

pub mod endpoints;

pub use endpoints::*;

// self
use crate::_prelude::*;

/// Public API base for the production deployment.
pub const PRODUCTION_API_BASE: &str = "https://pub.orcid.org/v3.0/";
/// OAuth base for the production deployment.
pub const PRODUCTION_OAUTH_BASE: &str = "https://orcid.org/";
/// Public API base for the sandbox deployment.
pub const SANDBOX_API_BASE: &str = "https://pub.sandbox.orcid.org/v3.0/";
/// OAuth base for the sandbox deployment.
pub const SANDBOX_OAUTH_BASE: &str = "https://sandbox.orcid.org/";

/// User agent sent when the caller does not configure one.
pub const DEFAULT_USER_AGENT: &str = concat!("orcid-client/", env!("CARGO_PKG_VERSION"));

/// Pair of base URLs that identifies an ORCID deployment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
	/// Base URL for the public API, typically ending in `/v3.0/`.
	pub api_base: Url,
	/// Base URL for the OAuth endpoints.
	pub oauth_base: Url,
}
impl Environment {
	/// Production deployment (`pub.orcid.org` / `orcid.org`).
	pub fn production() -> Self {
		Self::from_static(PRODUCTION_API_BASE, PRODUCTION_OAUTH_BASE)
	}

	/// Sandbox deployment (`pub.sandbox.orcid.org` / `sandbox.orcid.org`).
	pub fn sandbox() -> Self {
		Self::from_static(SANDBOX_API_BASE, SANDBOX_OAUTH_BASE)
	}

	/// Caller-supplied deployment, e.g. a local mock server.
	pub fn custom(api_base: Url, oauth_base: Url) -> Self {
		Self { api_base, oauth_base }
	}

	/// Parses both bases, surfacing failures as [`Error::InvalidUrl`].
	pub fn parse(api_base: &str, oauth_base: &str) -> Result<Self> {
		Ok(Self::custom(Url::parse(api_base)?, Url::parse(oauth_base)?))
	}

	/// `true` when the bases match the sandbox deployment.
	pub fn is_sandbox(&self) -> bool {
		self.api_base.as_str() == SANDBOX_API_BASE && self.oauth_base.as_str() == SANDBOX_OAUTH_BASE
	}

	// Only called with the constants above; `builtin_base_constants_always_parse` pins them.
	fn from_static(api_base: &'static str, oauth_base: &'static str) -> Self {
		match Self::parse(api_base, oauth_base) {
			Ok(env) => env,
			Err(e) => unreachable!("built-in base URLs are valid: {e}"),
		}
	}
}
impl Default for Environment {
	fn default() -> Self {
		Self::production()
	}
}
impl FromStr for Environment {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"production" | "prod" => Ok(Self::production()),
			"sandbox" => Ok(Self::sandbox()),
			_ => Err(Error::InvalidUrl { source: None }),
		}
	}
}

/// Immutable bundle of deployment and outbound identification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Deployment the client talks to.
	#[serde(default)]
	pub environment: Environment,
	/// Value of the `User-Agent` header on every request.
	#[serde(default = "default_user_agent")]
	pub user_agent: String,
}
impl ClientConfig {
	/// Creates a configuration for `environment` with the default user agent.
	pub fn new(environment: Environment) -> Self {
		Self { environment, user_agent: default_user_agent() }
	}

	/// Overrides the user agent.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Overrides the environment.
	pub fn with_environment(mut self, environment: Environment) -> Self {
		self.environment = environment;

		self
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self::new(Environment::production())
	}
}

fn default_user_agent() -> String {
	DEFAULT_USER_AGENT.to_owned()
}
