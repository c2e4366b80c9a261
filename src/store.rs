//! Credential-store contract and built-in backends.
//!
//! The store is an opaque key-value collaborator holding the application-level and
//! user-level tokens plus the login state. The contract is synchronous: the pipeline
//! only suspends at the transport and token-service calls, so implementations must
//! answer from local state (a secure-storage cache, not a network hop).

pub mod memory;

pub use memory::MemoryCredentialStore;

// self
use crate::auth::TokenSecret;

/// Key-value credential store consulted and mutated by the retry orchestrator.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Returns the stored application-level token, if any.
	fn application_token(&self) -> Option<TokenSecret>;

	/// Replaces the application-level token.
	fn set_application_token(&self, token: TokenSecret);

	/// Returns the stored user-level token, if any.
	fn user_token(&self) -> Option<TokenSecret>;

	/// Replaces the user-level token.
	fn set_user_token(&self, token: TokenSecret);

	/// Whether a user session is currently active.
	fn is_logged_in(&self) -> bool;

	/// Returns the stored individual identifier used to issue guest user tokens.
	fn individual_id(&self) -> Option<String>;

	/// Ends the session: clears the user token and login flag, and drops the
	/// application token unless `retain_application_token` is set. The individual
	/// identifier survives so guest token issuance keeps working afterwards.
	fn logout(&self, retain_application_token: bool);
}
