//! Thread-safe in-memory [`CredentialStore`] implementation for local development and tests.

// self
use crate::{_prelude::*, auth::TokenSecret, store::CredentialStore};

#[derive(Debug, Default)]
struct CredentialState {
	application_token: Option<TokenSecret>,
	user_token: Option<TokenSecret>,
	logged_in: bool,
	individual_id: Option<String>,
}

/// Thread-safe credential store that keeps state in-process for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore(RwLock<CredentialState>);
impl MemoryCredentialStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds the individual identifier used for guest token issuance.
	pub fn set_individual_id(&self, individual_id: impl Into<String>) {
		self.0.write().individual_id = Some(individual_id.into());
	}

	/// Opens a user session with the provided identifier and user token.
	pub fn login(&self, individual_id: impl Into<String>, user_token: TokenSecret) {
		let mut state = self.0.write();

		state.individual_id = Some(individual_id.into());
		state.user_token = Some(user_token);
		state.logged_in = true;
	}
}
impl CredentialStore for MemoryCredentialStore {
	fn application_token(&self) -> Option<TokenSecret> {
		self.0.read().application_token.clone()
	}

	fn set_application_token(&self, token: TokenSecret) {
		self.0.write().application_token = Some(token);
	}

	fn user_token(&self) -> Option<TokenSecret> {
		self.0.read().user_token.clone()
	}

	fn set_user_token(&self, token: TokenSecret) {
		self.0.write().user_token = Some(token);
	}

	fn is_logged_in(&self) -> bool {
		self.0.read().logged_in
	}

	fn individual_id(&self) -> Option<String> {
		self.0.read().individual_id.clone()
	}

	fn logout(&self, retain_application_token: bool) {
		let mut state = self.0.write();

		state.user_token = None;
		state.logged_in = false;

		if !retain_application_token {
			state.application_token = None;
		}
	}
}
