//! Builder producing immutable [`Endpoint`] descriptors.

// self
use crate::{_prelude::*, endpoint::*};

/// Assembles an [`Endpoint`] field by field.
///
/// Defaults: `https` scheme, [`Method::Get`], no headers, no query, no body. The
/// body-allowed flag follows [`Method::carries_body`] unless overridden.
#[derive(Clone, Debug)]
pub struct EndpointBuilder {
	scheme: String,
	host: String,
	path: String,
	method: Method,
	headers: BTreeMap<String, String>,
	query: BTreeMap<String, QueryValue>,
	body: Option<serde_json::Map<String, Value>>,
	body_allowed: Option<bool>,
	auth_mode: AuthMode,
}
impl EndpointBuilder {
	/// Creates a builder targeting the provided host and path.
	pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			scheme: "https".into(),
			host: host.into(),
			path: path.into(),
			method: Method::default(),
			headers: BTreeMap::new(),
			query: BTreeMap::new(),
			body: None,
			body_allowed: None,
			auth_mode: AuthMode::default(),
		}
	}

	/// Overrides the URL scheme.
	pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = scheme.into();

		self
	}

	/// Sets the HTTP method.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;

		self
	}

	/// Adds one request header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}

	/// Adds one query parameter.
	pub fn query(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
		self.query.insert(name.into(), value.into());

		self
	}

	/// Adds one body field.
	pub fn body_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.body.get_or_insert_with(serde_json::Map::new).insert(name.into(), value.into());

		self
	}

	/// Replaces the whole body map.
	pub fn body(mut self, body: serde_json::Map<String, Value>) -> Self {
		self.body = Some(body);

		self
	}

	/// Overrides whether the body may travel on the wire.
	pub fn allow_body(mut self, allowed: bool) -> Self {
		self.body_allowed = Some(allowed);

		self
	}

	/// Sets the credential-refresh strategy for 401 responses.
	pub fn auth_mode(mut self, mode: AuthMode) -> Self {
		self.auth_mode = mode;

		self
	}

	/// Finalizes the descriptor.
	pub fn build(self) -> Endpoint {
		let body_allowed = self.body_allowed.unwrap_or_else(|| self.method.carries_body());

		Endpoint {
			scheme: self.scheme,
			host: self.host,
			path: self.path,
			method: self.method,
			headers: self.headers,
			query: self.query,
			body: self.body,
			body_allowed,
			auth_mode: self.auth_mode,
		}
	}
}
