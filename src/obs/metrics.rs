// self
use crate::{endpoint::AuthMode, obs::RequestOutcome};

/// Records a pipeline outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(mode: AuthMode, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"authgate_request_total",
			"auth_mode" => mode.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (mode, outcome);
	}
}
