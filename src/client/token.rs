//! Authorization-code exchange against the token endpoint.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::OrcidClient,
	config::{FORM_URLENCODED, JSON},
	http::{HttpTransport, form},
	oauth::OAuthToken,
	obs::OperationKind,
};

const GRANT_TYPE: &str = "authorization_code";

impl<T> OrcidClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Exchanges an authorization `code` for an [`OAuthToken`].
	///
	/// `redirect_uri` must match the one used to build the authorize URL. The token
	/// is returned to the caller as-is; nothing is cached or refreshed.
	pub async fn exchange_code(
		&self,
		client_id: &str,
		client_secret: &str,
		code: &str,
		redirect_uri: &str,
	) -> Result<OAuthToken> {
		let url = self.environment().token_url()?;
		let body = form::encode([
			("client_id", client_id),
			("client_secret", client_secret),
			("grant_type", GRANT_TYPE),
			("code", code),
			("redirect_uri", redirect_uri),
		]);
		let request = self.build_request(Method::POST, &url, JSON, Some((FORM_URLENCODED, body)))?;

		self.execute(OperationKind::ExchangeCode, request).await
	}
}
