//! Optional observability for client operations.
//!
//! # Feature Flags
//!
//! - `tracing` wraps every operation in an `orcid_client.request` span carrying the
//!   `operation`, `method` and `url` fields, later filled with the answered `status` or the
//!   failing `error` kind.
//! - `metrics` increments `orcid_client_request_total`, labelled by `operation` and `outcome`;
//!   failures also carry the `error` kind.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, error::ErrorKind};

/// Client operations observed by the instrumentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// `GET /{orcid}/record`.
	FetchRecord,
	/// `GET /{orcid}/works`.
	FetchWorks,
	/// `POST /oauth/token` with an authorization code.
	ExchangeCode,
}
impl OperationKind {
	/// Label used for the `operation` field.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::FetchRecord => "fetch_record",
			Self::FetchWorks => "fetch_works",
			Self::ExchangeCode => "exchange_code",
		}
	}

	/// HTTP method the operation issues.
	pub const fn method(self) -> &'static str {
		match self {
			Self::FetchRecord | Self::FetchWorks => "GET",
			Self::ExchangeCode => "POST",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Stage of an operation reported to the metrics recorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// The operation started.
	Attempt,
	/// A decoded value reached the caller.
	Success,
	/// The operation ended with an error of this kind.
	Failure(ErrorKind),
}
impl OperationOutcome {
	/// Outcome of a finished operation.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Self::Success,
			Err(e) => Self::Failure(e.kind()),
		}
	}

	/// Label used for the `outcome` field.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Attempt => "attempt",
			Self::Success => "success",
			Self::Failure(_) => "failure",
		}
	}

	/// Error kind of a failure.
	pub const fn error_kind(self) -> Option<ErrorKind> {
		match self {
			Self::Failure(kind) => Some(kind),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcome_follows_the_error_taxonomy() {
		let ok: Result<()> = Ok(());
		let not_found: Result<()> = Err(Error::Http { status: 404, body: None });

		assert_eq!(OperationOutcome::of(&ok), OperationOutcome::Success);
		assert_eq!(OperationOutcome::of(&not_found), OperationOutcome::Failure(ErrorKind::Http));
		assert_eq!(OperationOutcome::of(&not_found).as_str(), "failure");
		assert_eq!(OperationOutcome::of(&not_found).error_kind(), Some(ErrorKind::Http));
		assert_eq!(OperationOutcome::Attempt.error_kind(), None);
	}

	#[test]
	fn methods_match_the_endpoints() {
		assert_eq!(OperationKind::FetchWorks.method(), "GET");
		assert_eq!(OperationKind::ExchangeCode.method(), "POST");
		assert_eq!(OperationKind::ExchangeCode.to_string(), "exchange_code");
	}
}
