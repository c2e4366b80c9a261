//! Failure taxonomy shared by the request pipeline, classifier, and token service.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical request failure exposed by the pipeline and by token-service contracts.
///
/// Every variant carries a stable machine code (see [`Error::code`]) so the diagnostics
/// sink receives one `(message, code)` pair per failure. Only [`Error::Unauthorized`]
/// triggers recovery; every other variant is terminal for the call that produced it.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The connectivity gate reported the network as unreachable.
	#[error("Network is unreachable.")]
	NoNetwork,
	/// The endpoint descriptor does not compose into a valid URL.
	#[error("Endpoint does not compose into a valid URL.")]
	InvalidUrl {
		/// Underlying URL parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The transport completed without producing any response object.
	#[error("Transport produced no response.")]
	NoResponse,
	/// A 2xx body could not be decoded into the requested payload type.
	#[error("Response body could not be decoded: {source}.")]
	Decode {
		/// Structured decode failure including the path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// The server rejected the request with 401.
	#[error("Request was rejected as unauthorized.")]
	Unauthorized,
	/// The server returned a structured error with a message only.
	#[error("{message}")]
	Custom {
		/// Server-supplied message.
		message: String,
	},
	/// The server returned a structured error envelope with a code and message.
	#[error("{message}")]
	CustomCode {
		/// Server-supplied error code.
		code: String,
		/// Server-supplied message.
		message: String,
	},
	/// The server returned a non-2xx, non-401 status without a recognizable envelope.
	#[error("Server returned an unexpected status code: {status}.")]
	UnexpectedStatus {
		/// Raw HTTP status code.
		status: u16,
	},
	/// The transport call itself failed (timeout, connection reset, TLS, ...).
	#[error("Transport failed unexpectedly.")]
	Unknown {
		/// Transport-specific failure, when one was surfaced.
		#[source]
		source: Option<BoxError>,
	},
}
impl Error {
	/// Returns the machine code reported to the diagnostics sink for this failure.
	///
	/// [`Error::CustomCode`] reports the server-supplied code verbatim.
	pub fn code(&self) -> &str {
		match self {
			Self::NoNetwork => "no_network",
			Self::InvalidUrl { .. } => "invalid_url",
			Self::NoResponse => "no_response",
			Self::Decode { .. } => "decode",
			Self::Unauthorized => "unauthorized",
			Self::Custom { .. } => "server_error",
			Self::CustomCode { code, .. } => code,
			Self::UnexpectedStatus { .. } => "unexpected_status",
			Self::Unknown { .. } => "unknown",
		}
	}

	/// Wraps a transport-specific failure.
	pub fn unknown(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Unknown { source: Some(Box::new(src)) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn codes_are_stable_labels() {
		assert_eq!(Error::NoNetwork.code(), "no_network");
		assert_eq!(Error::Unauthorized.code(), "unauthorized");
		assert_eq!(Error::UnexpectedStatus { status: 500 }.code(), "unexpected_status");
		assert_eq!(
			Error::CustomCode { code: "E42".into(), message: "nope".into() }.code(),
			"E42",
		);
	}

	#[test]
	fn envelope_errors_display_the_server_message() {
		let err = Error::CustomCode { code: "E1".into(), message: "bad".into() };

		assert_eq!(err.to_string(), "bad");
		assert_eq!(Error::Custom { message: "oops".into() }.to_string(), "oops");
	}
}
