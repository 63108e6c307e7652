// self
use crate::obs::{OperationKind, OperationOutcome};

/// Counts `outcome` for `kind` on the global metrics recorder, when the feature is on.
pub fn record_operation_outcome(kind: OperationKind, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		let counter = match outcome.error_kind() {
			Some(error) => metrics::counter!(
				"orcid_client_request_total",
				"operation" => kind.as_str(),
				"outcome" => outcome.as_str(),
				"error" => error.as_str()
			),
			None => metrics::counter!(
				"orcid_client_request_total",
				"operation" => kind.as_str(),
				"outcome" => outcome.as_str()
			),
		};

		counter.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
