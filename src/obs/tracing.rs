// crates.io
use oauth2::http::Uri;
// self
use crate::{_prelude::*, obs::OperationKind};

/// Resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// `orcid_client.request` span for one request/response exchange.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Opens a span for `kind` targeting `uri`; `status` and `error` start empty.
	pub fn new(kind: OperationKind, uri: &Uri) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"orcid_client.request",
				operation = kind.as_str(),
				method = kind.method(),
				url = %uri,
				status = tracing::field::Empty,
				error = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, uri);

			Self {}
		}
	}

	/// Fills the `status` field with the upstream answer.
	pub fn record_status(&self, status: u16) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("status", status);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = status;
		}
	}

	/// Fills the `error` field with the taxonomy kind and logs the failure.
	pub fn record_error(&self, error: &Error) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("error", error.kind().as_str());
			self.span.in_scope(|| tracing::debug!(%error, "ORCID request failed"));
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = error;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
