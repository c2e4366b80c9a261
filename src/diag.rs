//! Diagnostics sink contract; the pipeline's only side effect besides the HTTP call.

// self
use crate::_prelude::*;

/// External collaborator receiving one `(message, code)` pair per failure.
///
/// Every failure path reports exactly once at its point of detection before the typed
/// error propagates to the caller; nothing is silently swallowed.
pub trait DiagnosticsSink
where
	Self: Send + Sync,
{
	/// Records a human-readable message alongside a short machine code.
	fn record(&self, message: &str, code: &str);
}
impl<'a> dyn DiagnosticsSink + 'a {
	/// Records the failure and hands it back for propagation.
	pub fn reject(&self, err: Error) -> Error {
		self.record(&err.to_string(), err.code());

		err
	}
}

/// Sink that forwards diagnostics records as `tracing` warnings.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;
#[cfg(feature = "tracing")]
impl DiagnosticsSink for TracingDiagnostics {
	fn record(&self, message: &str, code: &str) {
		tracing::warn!(target: "authgate", code, "{message}");
	}
}
