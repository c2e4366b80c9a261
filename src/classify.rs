//! Response classification: raw status + body bytes into exactly one typed outcome.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, diag::DiagnosticsSink};

/// Structured error envelope carrying a code and message.
#[derive(Debug, Deserialize)]
struct CodedEnvelope {
	code: String,
	message: String,
}

/// Fallback error envelope carrying a message only.
#[derive(Debug, Deserialize)]
struct MessageEnvelope {
	message: String,
}

/// Classifies a response into the caller's payload type or a typed failure.
///
/// - 2xx: decode the body into `T`; decode failures report and surface as
///   [`Error::Decode`].
/// - 401: report and surface as [`Error::Unauthorized`]; the pipeline decides on
///   recovery using the endpoint's auth mode.
/// - anything else: probe the `{code, message}` envelope, then `{message}`, then fall
///   back to [`Error::UnexpectedStatus`].
///
/// Every failure path notifies the diagnostics sink exactly once before returning.
pub fn classify<T>(status: u16, body: &[u8], diagnostics: &dyn DiagnosticsSink) -> Result<T>
where
	T: DeserializeOwned,
{
	match status {
		200..=299 => {
			let mut de = serde_json::Deserializer::from_slice(body);

			serde_path_to_error::deserialize(&mut de)
				.map_err(|source| diagnostics.reject(Error::Decode { source }))
		},
		401 => Err(diagnostics.reject(Error::Unauthorized)),
		status => Err(diagnostics.reject(classify_envelope(status, body))),
	}
}

fn classify_envelope(status: u16, body: &[u8]) -> Error {
	if let Ok(envelope) = serde_json::from_slice::<CodedEnvelope>(body) {
		return Error::CustomCode { code: envelope.code, message: envelope.message };
	}
	if let Ok(envelope) = serde_json::from_slice::<MessageEnvelope>(body) {
		return Error::Custom { message: envelope.message };
	}

	Error::UnexpectedStatus { status }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Default)]
	struct Recorder(Mutex<Vec<(String, String)>>);
	impl Recorder {
		fn codes(&self) -> Vec<String> {
			self.0.lock().iter().map(|(_, code)| code.clone()).collect()
		}
	}
	impl DiagnosticsSink for Recorder {
		fn record(&self, message: &str, code: &str) {
			self.0.lock().push((message.into(), code.into()));
		}
	}

	#[derive(Debug, PartialEq, Deserialize)]
	struct Payload {
		x: i64,
	}

	#[test]
	fn success_decodes_the_requested_type() {
		let sink = Recorder::default();
		let payload: Payload =
			classify(200, b"{\"x\":1}", &sink).expect("Valid 2xx payload should decode.");

		assert_eq!(payload, Payload { x: 1 });
		assert!(sink.codes().is_empty());
	}

	#[test]
	fn malformed_body_reports_decode_each_time() {
		let sink = Recorder::default();

		for _ in 0..2 {
			let err = classify::<Payload>(200, b"{\"x\":", &sink)
				.expect_err("Malformed JSON should fail to decode.");

			assert!(matches!(err, Error::Decode { .. }));
		}

		assert_eq!(sink.codes(), ["decode", "decode"]);
	}

	#[test]
	fn missing_field_is_a_decode_failure() {
		let sink = Recorder::default();
		let err = classify::<Payload>(204, b"{}", &sink)
			.expect_err("Missing field should fail to decode.");

		assert!(matches!(err, Error::Decode { .. }));
	}

	#[test]
	fn unauthorized_surfaces_and_reports() {
		let sink = Recorder::default();
		let err =
			classify::<Payload>(401, b"", &sink).expect_err("401 should surface as unauthorized.");

		assert!(matches!(err, Error::Unauthorized));
		assert_eq!(sink.codes(), ["unauthorized"]);
	}

	#[test]
	fn coded_envelope_wins_over_the_message_shape() {
		let sink = Recorder::default();
		let err = classify::<Payload>(418, b"{\"code\":\"E1\",\"message\":\"bad\"}", &sink)
			.expect_err("Coded envelope should classify as a custom coded error.");

		assert!(matches!(err, Error::CustomCode { ref code, ref message } if code == "E1" && message == "bad"));
		assert_eq!(sink.codes(), ["E1"]);
	}

	#[test]
	fn message_only_envelope_classifies_as_custom() {
		let sink = Recorder::default();
		let err = classify::<Payload>(418, b"{\"message\":\"oops\"}", &sink)
			.expect_err("Message envelope should classify as a custom error.");

		assert!(matches!(err, Error::Custom { ref message } if message == "oops"));
		assert_eq!(sink.codes(), ["server_error"]);
	}

	#[test]
	fn unparseable_envelope_falls_back_to_unexpected_status() {
		let sink = Recorder::default();
		let err = classify::<Payload>(418, b"short and stout", &sink)
			.expect_err("Garbage body should classify as an unexpected status.");

		assert!(matches!(err, Error::UnexpectedStatus { status: 418 }));
		assert_eq!(sink.codes(), ["unexpected_status"]);
	}
}
