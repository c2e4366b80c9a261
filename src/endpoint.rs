//! Endpoint descriptor data structures shared by the request builder and pipeline.
//!
//! An [`Endpoint`] is an immutable, declarative description of one HTTP call: where it
//! goes, what it carries, and which credential-refresh strategy applies when the server
//! answers 401. Descriptors are assembled through [`Endpoint::builder`] and never
//! mutated afterwards.

/// Builder API for assembling endpoint descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// HTTP methods supported by endpoint descriptors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	#[default]
	/// GET request.
	Get,
	/// POST request.
	Post,
	/// PUT request.
	Put,
	/// DELETE request.
	Delete,
	/// PATCH request.
	Patch,
	/// HEAD request.
	Head,
}
impl Method {
	/// Returns the wire representation of the method.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
			Method::Patch => "PATCH",
			Method::Head => "HEAD",
		}
	}

	/// Whether the method conventionally carries a request body.
	pub const fn carries_body(self) -> bool {
		matches!(self, Method::Post | Method::Put | Method::Patch)
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Credential-refresh strategy applied when an endpoint's request is rejected with 401.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
	#[default]
	/// No recovery; 401 surfaces directly.
	None,
	/// Refresh the application-level token, then retry.
	AppLevel,
	/// Refresh (or issue) the user-level token, then retry.
	UserLevel,
	/// Terminal; the session is torn down and no retry happens.
	RefreshToken,
}
impl AuthMode {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthMode::None => "none",
			AuthMode::AppLevel => "app_level",
			AuthMode::UserLevel => "user_level",
			AuthMode::RefreshToken => "refresh_token",
		}
	}
}
impl Display for AuthMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Value of one query parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
	/// Single scalar value.
	Single(String),
	/// List value; a non-empty list switches the builder into `categories[]` rendering.
	List(Vec<String>),
}
impl QueryValue {
	/// Returns the list items when the value is a non-empty list.
	pub fn as_non_empty_list(&self) -> Option<&[String]> {
		match self {
			QueryValue::List(items) if !items.is_empty() => Some(items),
			_ => None,
		}
	}

	/// Renders the scalar representation used for ordinary query pairs.
	pub fn render(&self) -> String {
		match self {
			QueryValue::Single(value) => value.clone(),
			QueryValue::List(items) => items.join(","),
		}
	}
}
impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		Self::Single(value.into())
	}
}
impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}
impl From<Vec<String>> for QueryValue {
	fn from(items: Vec<String>) -> Self {
		Self::List(items)
	}
}

/// Immutable descriptor of a single HTTP call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
	/// URL scheme, usually `https`.
	pub scheme: String,
	/// Target host.
	pub host: String,
	/// Absolute path, `/`-prefixed.
	pub path: String,
	/// HTTP method.
	pub method: Method,
	/// Request headers copied verbatim into the transport request (except the JSON
	/// content negotiation pair, which the builder always overrides).
	pub headers: BTreeMap<String, String>,
	/// Query parameters.
	pub query: BTreeMap<String, QueryValue>,
	/// Optional JSON body fields.
	pub body: Option<serde_json::Map<String, Value>>,
	/// Whether the method may carry the body on the wire; when false, body fields are
	/// promoted into query parameters instead.
	pub body_allowed: bool,
	/// Credential-refresh strategy for 401 responses.
	pub auth_mode: AuthMode,
}
impl Endpoint {
	/// Creates a new builder for the provided host and path.
	pub fn builder(host: impl Into<String>, path: impl Into<String>) -> EndpointBuilder {
		EndpointBuilder::new(host, path)
	}
}
