//! Pure request builder turning an [`Endpoint`] into a [`TransportRequest`].

// self
use crate::{
	_prelude::*,
	endpoint::{Endpoint, QueryValue},
	http::TransportRequest,
};

/// Query (and body) parameter name carrying the brand identifier.
pub const BRAND_PARAM: &str = "brandId";
/// Query parameter name used when a list-valued entry takes over the whole query.
pub const CATEGORY_LIST_PARAM: &str = "categories[]";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Builds the transport-level request for an endpoint descriptor.
///
/// Query assembly: a non-empty list value takes over the query, emitting one
/// [`CATEGORY_LIST_PARAM`] pair per element and dropping every other query entry.
/// Otherwise each entry renders as a single pair. When the endpoint's method does not
/// carry a body, body fields are promoted into query pairs. The brand-identifier pair
/// is appended last, exactly once, on every request. `Content-Type` and `Accept` are
/// always forced to the JSON media type, overriding caller-supplied values.
pub fn build(endpoint: &Endpoint, brand_id: &str) -> Result<TransportRequest> {
	let base = format!("{}://{}{}", endpoint.scheme, endpoint.host, endpoint.path);
	let mut url = Url::parse(&base).map_err(|source| Error::InvalidUrl { source })?;

	{
		let mut pairs = url.query_pairs_mut();
		let takeover = endpoint.query.values().find_map(QueryValue::as_non_empty_list);

		if let Some(items) = takeover {
			for item in items {
				pairs.append_pair(CATEGORY_LIST_PARAM, item);
			}
		} else {
			for (name, value) in &endpoint.query {
				pairs.append_pair(name, &value.render());
			}
		}
		if !endpoint.body_allowed
			&& let Some(body) = &endpoint.body
		{
			for (name, value) in body {
				pairs.append_pair(name, &render_value(value));
			}
		}

		pairs.append_pair(BRAND_PARAM, brand_id);
	}

	let headers = negotiated_headers(endpoint);
	let body = encode_body(endpoint, brand_id)?;

	Ok(TransportRequest { method: endpoint.method, url, headers, body })
}

fn negotiated_headers(endpoint: &Endpoint) -> BTreeMap<String, String> {
	let mut headers: BTreeMap<String, String> = endpoint
		.headers
		.iter()
		.filter(|(name, _)| {
			!name.eq_ignore_ascii_case("content-type") && !name.eq_ignore_ascii_case("accept")
		})
		.map(|(name, value)| (name.clone(), value.clone()))
		.collect();

	headers.insert("Content-Type".into(), JSON_MEDIA_TYPE.into());
	headers.insert("Accept".into(), JSON_MEDIA_TYPE.into());

	headers
}

fn encode_body(endpoint: &Endpoint, brand_id: &str) -> Result<Option<Vec<u8>>> {
	if !endpoint.body_allowed {
		return Ok(None);
	}

	let Some(body) = &endpoint.body else {
		return Ok(None);
	};
	let mut body = body.clone();

	body.insert(BRAND_PARAM.into(), Value::String(brand_id.into()));

	Ok(Some(serde_json::to_vec(&body).map_err(Error::unknown)?))
}

// JSON strings render bare; every other value keeps its JSON text.
fn render_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
