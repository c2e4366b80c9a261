//! Transport primitives for the request pipeline.
//!
//! The module exposes [`HttpTransport`] alongside [`TransportRequest`] and
//! [`RawResponse`] so downstream crates can integrate custom HTTP stacks. The trait is
//! the pipeline's only dependency on a transport: implementations execute one request,
//! hand back the raw status and body bytes, and report failures through
//! [`TransportFailure`] so the pipeline can classify them. Cancellation propagates by
//! dropping the returned future; implementations must not trap it into a failure value.

// self
use crate::{_prelude::*, endpoint::Method};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportFailure>> + 'a + Send>>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Transport-level request produced by the request builder.
#[derive(Clone, Debug)]
pub struct TransportRequest {
	/// HTTP method.
	pub method: Method,
	/// Fully composed URL including the encoded query.
	pub url: Url,
	/// Request headers, JSON content negotiation already applied.
	pub headers: BTreeMap<String, String>,
	/// Serialized JSON body, when the endpoint carries one.
	pub body: Option<Vec<u8>>,
}

/// Raw response handed to the classifier.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}

/// Failure raised by a transport implementation.
#[derive(Debug, ThisError)]
pub enum TransportFailure {
	/// The call completed without producing any response object.
	#[error("Transport produced no response object.")]
	NoResponse,
	/// The call itself failed (timeout, connection reset, TLS, ...).
	#[error("Transport call failed.")]
	Failed(#[source] BoxError),
}
impl TransportFailure {
	/// Wraps a transport-specific failure.
	pub fn failed(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Failed(Box::new(src))
	}
}
impl From<TransportFailure> for Error {
	fn from(failure: TransportFailure) -> Self {
		match failure {
			TransportFailure::NoResponse => Error::NoResponse,
			TransportFailure::Failed(source) => Error::Unknown { source: Some(source) },
		}
	}
}

/// Abstraction over HTTP stacks capable of executing pipeline requests.
///
/// Implementations must be `Send + Sync + 'static` so a [`Client`](crate::pipeline::Client)
/// can be shared across tasks behind `Arc<T>` without additional wrappers.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes one request and resolves with the raw status and body bytes.
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The pipeline sets no timeout of its own; callers relying on bounded latency must
/// configure it on the wrapped client.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	fn method(method: Method) -> reqwest::Method {
		match method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
			Method::Delete => reqwest::Method::DELETE,
			Method::Patch => reqwest::Method::PATCH,
			Method::Head => reqwest::Method::HEAD,
		}
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
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.request(Self::method(request.method), request.url.clone());

			for (name, value) in &request.headers {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportFailure::failed)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportFailure::failed)?.to_vec();

			Ok(RawResponse { status, body })
		})
	}
}
