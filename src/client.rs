//! Typed ORCID client and the shared request pipeline.
//!
//! Each operation builds an [`HttpRequest`], hands it to the configured
//! [`HttpTransport`], rejects non-2xx answers as [`Error::Http`], and decodes the body
//! with path-aware diagnostics. No step retries; one attempt either yields a value or
//! a single terminal error.

mod read;
mod token;

// crates.io
use oauth2::http::{
	Method, Request,
	header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
};
// self
use crate::{
	_prelude::*,
	config::{ClientConfig, Environment},
	http::{self, HttpRequest, HttpTransport, TransportResponse},
	model,
	oauth::{self, AuthorizeParams},
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestOrcidClient = OrcidClient<ReqwestTransport>;

/// Async client for the public ORCID API.
///
/// The configuration is fixed at construction and the client holds no mutable
/// state, so one instance (or its clones) can serve concurrent operations.
pub struct OrcidClient<T>
where
	T: ?Sized + HttpTransport,
{
	config: ClientConfig,
	transport: Arc<T>,
}
impl<T> OrcidClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a client that executes requests through `transport`.
	pub fn with_transport(config: ClientConfig, transport: impl Into<Arc<T>>) -> Self {
		Self { config, transport: transport.into() }
	}

	/// Configuration supplied at construction.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Deployment the client talks to.
	pub fn environment(&self) -> &Environment {
		&self.config.environment
	}

	/// Underlying transport.
	pub fn transport(&self) -> &Arc<T> {
		&self.transport
	}

	/// Builds the authorize URL for the three-legged flow; performs no I/O.
	pub fn authorize_url(&self, params: &AuthorizeParams) -> Result<Url> {
		oauth::build_authorize_url(self.environment(), params)
	}

	/// Assembles a request carrying the common `User-Agent` and the given `Accept`.
	fn build_request(
		&self,
		method: Method,
		url: &Url,
		accept: &str,
		body: Option<(&str, Vec<u8>)>,
	) -> Result<HttpRequest> {
		let mut builder = Request::builder()
			.method(method)
			.uri(url.as_str())
			.header(USER_AGENT, self.config.user_agent.as_str())
			.header(ACCEPT, accept);
		let body = match body {
			Some((content_type, bytes)) => {
				builder = builder.header(CONTENT_TYPE, content_type);

				bytes
			},
			None => Vec::new(),
		};

		builder
			.body(body)
			.map_err(|e| Error::Encoding { message: format!("request could not be built: {e}") })
	}

	/// Runs `request` through the transport, validates the status, and decodes `R`.
	async fn execute<R>(&self, kind: OperationKind, request: HttpRequest) -> Result<R>
	where
		R: for<'de> Deserialize<'de>,
	{
		let span = OperationSpan::new(kind, request.uri());

		obs::record_operation_outcome(kind, OperationOutcome::Attempt);

		let result = span
			.instrument(async {
				let response = http::perform(self.transport.as_ref(), request).await?;

				span.record_status(response.status);

				model::decode(&ensure_success(response)?.body)
			})
			.await;

		if let Err(e) = &result {
			span.record_error(e);
		}

		obs::record_operation_outcome(kind, OperationOutcome::of(&result));

		result
	}
}
#[cfg(feature = "reqwest")]
impl OrcidClient<ReqwestTransport> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_transport(config, ReqwestTransport::default())
	}
}
#[cfg(feature = "reqwest")]
impl Default for OrcidClient<ReqwestTransport> {
	fn default() -> Self {
		Self::new(ClientConfig::default())
	}
}
impl<T> Clone for OrcidClient<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), transport: Arc::clone(&self.transport) }
	}
}
impl<T> Debug for OrcidClient<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OrcidClient").field("config", &self.config).finish()
	}
}

/// Passes `2xx` responses through and turns everything else into [`Error::Http`].
pub(crate) fn ensure_success(response: TransportResponse) -> Result<TransportResponse> {
	if response.is_success() {
		Ok(response)
	} else {
		Err(Error::Http { status: response.status, body: response.body_text() })
	}
}
