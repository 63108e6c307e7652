//! Token endpoint payload and the redacting secret wrapper.

// crates.io
use oauth2::http::HeaderValue;
// self
use crate::_prelude::*;

/// Access or refresh token issued by ORCID.
///
/// Formatting prints `<redacted>`; only [`expose`](Self::expose) and
/// [`bearer_header`](Self::bearer_header) reveal the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw token; keep it out of logs.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// `Authorization: Bearer <token>` value for ORCID member endpoints.
	///
	/// The header is flagged sensitive so HTTP stacks skip it when logging.
	pub fn bearer_header(&self) -> Result<HeaderValue> {
		let mut value = HeaderValue::try_from(format!("Bearer {}", self.0))
			.map_err(|e| Error::Encoding { message: format!("token is not a header value: {e}") })?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("TokenSecret(<redacted>)")
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Successful response of `POST /oauth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
	/// Access token.
	pub access_token: TokenSecret,
	/// Token type, typically `bearer`.
	pub token_type: Option<String>,
	/// Refresh token, if issued.
	pub refresh_token: Option<TokenSecret>,
	/// Lifetime in seconds.
	pub expires_in: Option<i64>,
	/// Granted scopes, space-delimited.
	pub scope: Option<String>,
	/// Display name of the authorizing researcher.
	pub name: Option<String>,
	/// ORCID iD of the authorizing researcher.
	pub orcid: Option<String>,
}
impl OAuthToken {
	/// Lifetime as a [`Duration`], when the server reported one.
	pub fn expires_in_duration(&self) -> Option<Duration> {
		self.expires_in.map(Duration::seconds)
	}

	/// Granted scopes split on whitespace.
	pub fn scopes(&self) -> impl Iterator<Item = &str> {
		self.scope.as_deref().unwrap_or_default().split_whitespace()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bearer_header_is_sensitive_and_formatting_redacts() {
		let secret = TokenSecret::from("f5af9f51-07e6-4332-8f1a-c0c11c1e3728".to_owned());
		let header = secret.bearer_header().expect("UUID tokens are valid header values.");

		assert_eq!(header, "Bearer f5af9f51-07e6-4332-8f1a-c0c11c1e3728");
		assert!(header.is_sensitive());
		assert_eq!(format!("{secret:?} {secret}"), "TokenSecret(<redacted>) <redacted>");
		assert!(matches!(TokenSecret::new("a\nb").bearer_header(), Err(Error::Encoding { .. })));
	}

	#[test]
	fn secret_serializes_as_a_bare_string() {
		let secret: TokenSecret = serde_json::from_str("\"abc\"").expect("Bare string decodes.");

		assert_eq!(secret.expose(), "abc");
		assert_eq!(serde_json::to_string(&secret).expect("Secret serializes."), "\"abc\"");
	}

	#[test]
	fn token_payload_decodes_orcid_extras() {
		let token: OAuthToken = serde_json::from_str(
			r#"{"access_token":"f5af9f51-07e6-4332-8f1a-c0c11c1e3728","token_type":"bearer","refresh_token":"f725f747-3a65-49f6-a231-3e8944ce464d","expires_in":631138518,"scope":"/authenticate /read-limited","name":"Sofia Garcia","orcid":"0000-0001-2345-6789"}"#,
		)
		.expect("Token payload should decode.");

		assert_eq!(token.access_token.expose(), "f5af9f51-07e6-4332-8f1a-c0c11c1e3728");
		assert_eq!(token.expires_in_duration(), Some(Duration::seconds(631_138_518)));
		assert_eq!(token.scopes().collect::<Vec<_>>(), ["/authenticate", "/read-limited"]);
		assert_eq!(token.orcid.as_deref(), Some("0000-0001-2345-6789"));
		assert!(!format!("{token:?}").contains("f5af9f51"));
	}

	#[test]
	fn access_token_is_required() {
		assert!(serde_json::from_str::<OAuthToken>(r#"{"token_type":"bearer"}"#).is_err());

		let token: OAuthToken =
			serde_json::from_str(r#"{"access_token":"a"}"#).expect("Minimal payload decodes.");

		assert_eq!(token.scopes().count(), 0);
		assert_eq!(token.expires_in_duration(), None);
	}
}
