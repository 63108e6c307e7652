//! Deterministic in-memory transport for tests and offline demos.

// std
use std::collections::VecDeque;
// crates.io
use oauth2::http::{HeaderMap, Response, StatusCode};
// self
use crate::{
	_prelude::*,
	http::{HttpClientError, HttpRequest, HttpResponse, HttpTransport, TransportFuture},
};

/// Failures produced by [`StubTransport`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum StubError {
	/// A request arrived with no reply queued.
	#[error("Stub transport has no queued reply.")]
	Exhausted,
	/// A reply scripted via [`StubReply::failure`].
	#[error("{0}")]
	Scripted(String),
}

/// Canned answer returned by [`StubTransport`].
#[derive(Clone, Debug)]
pub enum StubReply {
	/// An HTTP response.
	Response {
		/// Status code; values above 599 exercise the non-HTTP path.
		status: u16,
		/// Header pairs, applied in order.
		headers: Vec<(String, String)>,
		/// Raw body.
		body: Vec<u8>,
	},
	/// A failure below the HTTP layer.
	Failure(String),
}
impl StubReply {
	/// Response with `status` and an empty body.
	pub fn status(status: u16) -> Self {
		Self::Response { status, headers: Vec::new(), body: Vec::new() }
	}

	/// Response with `status` and a JSON body.
	pub fn json(status: u16, body: impl Into<String>) -> Self {
		Self::status(status)
			.with_header("content-type", "application/json")
			.with_body(body.into().into_bytes())
	}

	/// Transport failure described by `message`.
	pub fn failure(message: impl Into<String>) -> Self {
		Self::Failure(message.into())
	}

	/// Adds a header; no-op on failures.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		if let Self::Response { headers, .. } = &mut self {
			headers.push((name.into(), value.into()));
		}

		self
	}

	/// Replaces the body; no-op on failures.
	pub fn with_body(mut self, bytes: impl Into<Vec<u8>>) -> Self {
		if let Self::Response { body, .. } = &mut self {
			*body = bytes.into();
		}

		self
	}
}

/// Snapshot of a request observed by [`StubTransport`].
#[derive(Clone, Debug)]
pub struct RecordedRequest {
	/// HTTP method.
	pub method: String,
	/// Absolute request URI.
	pub uri: String,
	/// Request headers.
	pub headers: HeaderMap,
	/// Request body.
	pub body: Vec<u8>,
}
impl RecordedRequest {
	/// Header value as a string, if present and printable.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	/// Body as UTF-8 text.
	pub fn body_text(&self) -> Option<&str> {
		std::str::from_utf8(&self.body).ok()
	}
}

/// Transport that replays queued [`StubReply`] values in FIFO order.
///
/// Clones share the same queue and request log, so a test can keep one handle
/// while the client owns another.
#[derive(Clone, Debug, Default)]
pub struct StubTransport {
	replies: Arc<Mutex<VecDeque<StubReply>>>,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}
impl StubTransport {
	/// Creates a transport preloaded with `replies`.
	pub fn with_replies(replies: impl IntoIterator<Item = StubReply>) -> Self {
		let transport = Self::default();

		transport.replies.lock().extend(replies);

		transport
	}

	/// Queues another reply.
	pub fn push(&self, reply: StubReply) {
		self.replies.lock().push_back(reply);
	}

	/// Requests observed so far, oldest first.
	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().clone()
	}

	/// Most recent request, if any.
	pub fn last_request(&self) -> Option<RecordedRequest> {
		self.requests.lock().last().cloned()
	}

	/// Number of replies still queued.
	pub fn pending(&self) -> usize {
		self.replies.lock().len()
	}
}
impl HttpTransport for StubTransport {
	type TransportError = StubError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let (parts, body) = request.into_parts();

		self.requests.lock().push(RecordedRequest {
			method: parts.method.to_string(),
			uri: parts.uri.to_string(),
			headers: parts.headers,
			body,
		});

		let reply = self.replies.lock().pop_front();

		Box::pin(async move {
			match reply {
				None => Err(HttpClientError::Reqwest(Box::new(StubError::Exhausted))),
				Some(StubReply::Failure(message)) =>
					Err(HttpClientError::Reqwest(Box::new(StubError::Scripted(message)))),
				Some(StubReply::Response { status, headers, body }) => {
					let status = StatusCode::from_u16(status)
						.map_err(|e| HttpClientError::Other(e.to_string()))?;
					let mut builder = Response::builder().status(status);

					for (name, value) in headers {
						builder = builder.header(name, value);
					}

					let response: HttpResponse = builder.body(body)?;

					Ok(response)
				},
			}
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::http::Request;

	#[tokio::test]
	async fn replies_are_served_in_order_and_requests_recorded() {
		let transport = StubTransport::with_replies([StubReply::status(204), StubReply::status(404)]);
		let request = |uri: &str| {
			Request::builder()
				.method("POST")
				.uri(uri)
				.header("user-agent", "stub-test")
				.body(b"a=1".to_vec())
				.expect("Request fixture should build.")
		};
		let first = transport.execute(request("https://a.test/1")).await.expect("First reply.");
		let second = transport.execute(request("https://a.test/2")).await.expect("Second reply.");

		assert_eq!(first.status().as_u16(), 204);
		assert_eq!(second.status().as_u16(), 404);
		assert_eq!(transport.pending(), 0);

		let recorded = transport.requests();

		assert_eq!(recorded.len(), 2);
		assert_eq!(recorded[0].method, "POST");
		assert_eq!(recorded[1].uri, "https://a.test/2");
		assert_eq!(recorded[1].header("User-Agent"), Some("stub-test"));
		assert_eq!(recorded[1].body_text(), Some("a=1"));
	}

	#[tokio::test]
	async fn empty_queue_fails_instead_of_hanging() {
		let transport = StubTransport::default();
		let request = Request::builder()
			.uri("https://a.test/")
			.body(Vec::new())
			.expect("Request fixture should build.");
		let err = transport.execute(request).await.expect_err("Queue is empty.");

		assert!(
			matches!(err, HttpClientError::Reqwest(ref inner) if **inner == StubError::Exhausted)
		);
	}
}
