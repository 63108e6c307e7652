//! Client-level error taxonomy shared by every operation.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Every failure is terminal; the client never retries on its own.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Input could not be normalized into a canonical ORCID iD.
	#[error("Invalid ORCID iD: {input:?}.")]
	InvalidIdentifier {
		/// Caller-supplied input, before trimming or URL extraction.
		input: String,
	},
	/// URL assembly failed.
	#[error("Unable to build a valid URL.")]
	InvalidUrl {
		/// Underlying parsing failure, when one exists.
		#[source]
		source: Option<url::ParseError>,
	},
	/// Failure below the HTTP layer (DNS, TCP, TLS, cancellation, non-HTTP reply).
	#[error("Transport error: {message}.")]
	Transport {
		/// Human-readable description of the failure.
		message: String,
		/// Transport-specific error, if any.
		#[source]
		source: Option<BoxError>,
	},
	/// Upstream answered with a status outside `200..=299`.
	#[error("Server responded with HTTP {status}.")]
	Http {
		/// HTTP status code.
		status: u16,
		/// Response body, when it is valid UTF-8.
		body: Option<String>,
	},
	/// Body is not JSON of the expected resource shape.
	#[error("Response body could not be decoded at {path}: {source}.")]
	Decoding {
		/// JSON path of the mismatch; `.` when the document itself is malformed.
		path: String,
		/// Underlying JSON failure, without the raw body.
		#[source]
		source: serde_json::Error,
	},
	/// Request could not be built (invalid header value or body).
	#[error("Request could not be encoded: {message}.")]
	Encoding {
		/// Description of the failure.
		message: String,
	},
}
impl Error {
	/// Taxonomy bucket of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
			Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
			Self::Transport { .. } => ErrorKind::Transport,
			Self::Http { .. } => ErrorKind::Http,
			Self::Decoding { .. } => ErrorKind::Decoding,
			Self::Encoding { .. } => ErrorKind::Encoding,
		}
	}

	/// Builds a [`Error::Transport`] from a bare description.
	pub fn transport(message: impl Into<String>) -> Self {
		Self::Transport { message: message.into(), source: None }
	}

	/// Builds a [`Error::Transport`] that keeps the underlying error as its source.
	pub fn transport_with(
		message: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Transport { message: message.into(), source: Some(Box::new(src)) }
	}

	/// HTTP status carried by an [`Error::Http`].
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Http { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Returns `true` for an HTTP 404 answer.
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}

/// Fieldless mirror of [`Error`] used for metric and span labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// [`Error::InvalidIdentifier`].
	InvalidIdentifier,
	/// [`Error::InvalidUrl`].
	InvalidUrl,
	/// [`Error::Transport`].
	Transport,
	/// [`Error::Http`].
	Http,
	/// [`Error::Decoding`].
	Decoding,
	/// [`Error::Encoding`].
	Encoding,
}
impl ErrorKind {
	/// Stable snake_case label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidIdentifier => "invalid_identifier",
			Self::InvalidUrl => "invalid_url",
			Self::Transport => "transport",
			Self::Http => "http",
			Self::Decoding => "decoding",
			Self::Encoding => "encoding",
		}
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

impl From<url::ParseError> for Error {
	fn from(e: url::ParseError) -> Self {
		Self::InvalidUrl { source: Some(e) }
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Decoding { path: e.path().to_string(), source: e.into_inner() }
	}
}
impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Self {
		Self::Decoding { path: ".".into(), source: e }
	}
}
