//! Transport primitives shared by every client operation.
//!
//! [`HttpTransport`] is the client's only dependency on an HTTP stack. It speaks the
//! `oauth2` crate's [`HttpRequest`]/[`HttpResponse`] vocabulary so any transport that
//! can execute an `http::Request<Vec<u8>>` plugs in. [`perform`] is the single place
//! where transport failures are folded into [`Error::Transport`]; everything past it
//! works on a plain [`TransportResponse`].

pub mod form;
pub mod stub;

pub use stub::*;

// crates.io
pub use oauth2::{HttpClientError, HttpRequest, HttpResponse, http};
use oauth2::http::HeaderMap;
// self
use crate::_prelude::*;

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of executing a single request.
///
/// Implementations must be `Send + Sync + 'static` so one transport can back many
/// clients, and the returned future must be `Send` so operations can hop executors.
/// Dropping the future cancels the exchange; implementations must not retain state
/// across calls that a cancelled request could leave inconsistent.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying stack.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request` and resolves to the raw response.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Raw response captured from a transport exchange.
#[derive(Clone, Debug)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers; lookups are case-insensitive.
	pub headers: HeaderMap,
	/// Undecoded response body.
	pub body: Vec<u8>,
}
impl TransportResponse {
	/// `true` for statuses in `200..=299`.
	pub fn is_success(&self) -> bool {
		(200..=299).contains(&self.status)
	}

	/// Body as UTF-8 text, or `None` when the bytes are not valid UTF-8.
	pub fn body_text(&self) -> Option<String> {
		std::str::from_utf8(&self.body).ok().map(str::to_owned)
	}

	/// Header value as a string, if present and printable.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	/// Rate-limit hints published by the upstream gateway, if any.
	pub fn rate_limit(&self) -> RateLimit {
		let read = |name: &str| self.header(name).and_then(|raw| raw.trim().parse::<u64>().ok());

		RateLimit {
			limit: read("x-rate-limit-limit"),
			remaining: read("x-rate-limit-remaining"),
			reset: read("x-rate-limit-reset"),
		}
	}
}

/// Optional `X-Rate-Limit-*` header values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimit {
	/// Requests allowed per window.
	pub limit: Option<u64>,
	/// Requests left in the current window.
	pub remaining: Option<u64>,
	/// Window reset hint as reported by the server.
	pub reset: Option<u64>,
}
impl RateLimit {
	/// `true` when none of the headers were present.
	pub fn is_empty(&self) -> bool {
		self.limit.is_none() && self.remaining.is_none() && self.reset.is_none()
	}
}

/// Executes `request` through `transport`, folding failures into [`Error::Transport`].
///
/// Statuses outside `100..=599` are not HTTP answers and are rejected the same way.
pub async fn perform<T>(transport: &T, request: HttpRequest) -> Result<TransportResponse>
where
	T: ?Sized + HttpTransport,
{
	let response = transport.execute(request).await.map_err(map_transport_error)?;
	let (parts, body) = response.into_parts();
	let status = parts.status.as_u16();

	if !(100..=599).contains(&status) {
		return Err(Error::transport("non-HTTP response"));
	}

	Ok(TransportResponse { status, headers: parts.headers, body })
}

/// Maps every [`HttpClientError`] variant into [`Error::Transport`].
pub fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => Error::transport_with(inner.to_string(), *inner),
		HttpClientError::Http(inner) =>
			Error::transport_with(format!("request could not be built: {inner}"), inner),
		HttpClientError::Io(inner) => Error::transport_with(format!("I/O failure: {inner}"), inner),
		HttpClientError::Other(message) => Error::transport(message),
		_ => Error::transport("unrecognized HTTP client failure"),
	}
}

/// Thin wrapper around [`ReqwestClient`] used as the default transport.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
