//! Token material and the token-service contract consumed by the retry orchestrator.

// self
use crate::_prelude::*;

/// Boxed future returned by [`TokenService`] operations.
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<IssuedToken>> + 'a + Send>>;

/// Redacted token secret wrapper keeping credential material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Token returned by a successful [`TokenService`] operation.
///
/// Matches the wire shape `{"token": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
	/// The freshly issued or refreshed credential.
	pub token: TokenSecret,
}
impl IssuedToken {
	/// Wraps a raw token string.
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: TokenSecret::new(token) }
	}
}

/// External collaborator that obtains or refreshes credentials.
///
/// Failures surface verbatim through the pipeline; the orchestrator never masks a
/// token-service error as a generic unauthorized failure.
pub trait TokenService
where
	Self: Send + Sync,
{
	/// Obtains a fresh application-level token.
	fn refresh_application_token(&self) -> TokenFuture<'_>;

	/// Refreshes the user-level token for the currently logged-in user.
	fn refresh_user_token(&self) -> TokenFuture<'_>;

	/// Issues a user-level token for the provided individual identifier.
	fn issue_user_token<'a>(&'a self, individual_id: &'a str) -> TokenFuture<'a>;
}
