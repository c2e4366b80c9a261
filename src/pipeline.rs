//! Request pipeline and retry orchestration.
//!
//! [`Client::send`] runs the full pipeline for one endpoint: connectivity gate →
//! request builder → transport → classifier. A 401 hands control to the orchestrator,
//! which drives the credential-refresh sequence keyed by the endpoint's
//! [`AuthMode`] and re-enters the pipeline. Re-entry is an explicit loop bounded by a
//! refresh cap rather than open recursion, so a server that keeps answering 401
//! terminates the call instead of looping unboundedly.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::TokenService,
	classify,
	diag::DiagnosticsSink,
	endpoint::{AuthMode, Endpoint},
	http::HttpTransport,
	net::ReachabilityGate,
	obs::{self, RequestOutcome, RequestSpan},
	request,
	session::{LOGOUT_EVENT, SessionObserver},
	store::CredentialStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestPipeline = Client<ReqwestTransport>;

/// Coordinates authenticated requests against injected collaborators.
///
/// The client owns the transport, credential store, token service, diagnostics sink,
/// session observer, and connectivity gate, so the pipeline is constructible and
/// testable without process-wide state. Concurrent [`send`](Self::send) calls are
/// independent; refresh sequences for the same auth mode are serialized through a
/// per-mode guard.
#[derive(Clone)]
pub struct Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<C>,
	/// Credential store consulted and mutated by the retry orchestrator.
	pub store: Arc<dyn CredentialStore>,
	/// Token service driving credential refreshes.
	pub tokens: Arc<dyn TokenService>,
	/// Sink receiving one `(message, code)` pair per failure.
	pub diagnostics: Arc<dyn DiagnosticsSink>,
	/// Observer notified when an expired refresh token tears the session down.
	pub session: Arc<dyn SessionObserver>,
	/// Reachability gate consulted before every dispatch.
	pub gate: ReachabilityGate,
	/// Brand identifier injected into every outgoing request.
	pub brand_id: String,
	max_refresh_attempts: u8,
	refresh_guards: Arc<Mutex<HashMap<AuthMode, Arc<AsyncMutex<()>>>>>,
}
impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	const DEFAULT_MAX_REFRESH_ATTEMPTS: u8 = 2;

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(
		transport: impl Into<Arc<C>>,
		store: Arc<dyn CredentialStore>,
		tokens: Arc<dyn TokenService>,
		diagnostics: Arc<dyn DiagnosticsSink>,
		session: Arc<dyn SessionObserver>,
		gate: ReachabilityGate,
		brand_id: impl Into<String>,
	) -> Self {
		Self {
			transport: transport.into(),
			store,
			tokens,
			diagnostics,
			session,
			gate,
			brand_id: brand_id.into(),
			max_refresh_attempts: Self::DEFAULT_MAX_REFRESH_ATTEMPTS,
			refresh_guards: Default::default(),
		}
	}

	/// Overrides the refresh cap (defaults to 2 refresh cycles per original call).
	pub fn with_max_refresh_attempts(mut self, attempts: u8) -> Self {
		self.max_refresh_attempts = attempts;

		self
	}

	/// Executes the endpoint and decodes a successful payload into `T`.
	///
	/// Failures surface as typed [`Error`](crate::error::Error) values after one
	/// diagnostics report per detection point; only unauthorized responses are
	/// recovered, per the endpoint's auth mode. Dropping the returned future cancels
	/// the in-flight transport call.
	pub async fn send<T>(&self, endpoint: &Endpoint) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let span = RequestSpan::new(endpoint.auth_mode, "send");

		obs::record_request_outcome(endpoint.auth_mode, RequestOutcome::Attempt);

		let result = span.instrument(self.run(endpoint)).await;

		match &result {
			Ok(_) => obs::record_request_outcome(endpoint.auth_mode, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(endpoint.auth_mode, RequestOutcome::Failure),
		}

		result
	}

	async fn run<T>(&self, endpoint: &Endpoint) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut refreshes = 0_u8;

		loop {
			if !self.gate.is_reachable() {
				return Err(self.sink().reject(Error::NoNetwork));
			}

			let request =
				request::build(endpoint, &self.brand_id).map_err(|err| self.sink().reject(err))?;
			let response = self
				.transport
				.execute(request)
				.await
				.map_err(|failure| self.sink().reject(failure.into()))?;

			match classify::classify::<T>(response.status, &response.body, self.sink()) {
				Ok(payload) => return Ok(payload),
				Err(Error::Unauthorized) => {
					if refreshes >= self.max_refresh_attempts {
						return Err(Error::Unauthorized);
					}

					refreshes += 1;

					self.recover(endpoint.auth_mode).await?;
				},
				Err(err) => return Err(err),
			}
		}
	}

	/// Drives the mode-specific refresh sequence after an unauthorized response.
	///
	/// A successful refresh stores the new credential(s) and returns `Ok(())` so the
	/// pipeline re-issues the original request once; any failure terminates the chain
	/// with that failure, reported verbatim.
	async fn recover(&self, mode: AuthMode) -> Result<()> {
		let guard = self.refresh_guard(mode);
		let _refresh = guard.lock().await;

		match mode {
			AuthMode::AppLevel => self.refresh_application_token().await,
			AuthMode::UserLevel =>
				if self.store.is_logged_in() {
					self.refresh_application_token().await?;
					self.refresh_user_token().await
				} else {
					self.issue_user_token().await
				},
			AuthMode::RefreshToken => {
				self.teardown_session();
				self.sink().record("Session expired; tearing down the session.", "session_expired");

				Err(Error::Unauthorized)
			},
			AuthMode::None => {
				self.sink().record("No recovery strategy for unauthorized response.", "no_recovery");

				Err(Error::Unauthorized)
			},
		}
	}

	async fn refresh_application_token(&self) -> Result<()> {
		let issued = self
			.tokens
			.refresh_application_token()
			.await
			.map_err(|err| self.sink().reject(err))?;

		self.store.set_application_token(issued.token);

		Ok(())
	}

	async fn refresh_user_token(&self) -> Result<()> {
		let issued =
			self.tokens.refresh_user_token().await.map_err(|err| self.sink().reject(err))?;

		self.store.set_user_token(issued.token);

		Ok(())
	}

	async fn issue_user_token(&self) -> Result<()> {
		let individual_id = self
			.store
			.individual_id()
			.ok_or_else(|| self.sink().reject(Error::Unauthorized))?;
		let issued = self
			.tokens
			.issue_user_token(&individual_id)
			.await
			.map_err(|err| self.sink().reject(err))?;

		self.store.set_user_token(issued.token);

		Ok(())
	}

	// Teardown order mirrors the session contract; the store logout retains the
	// application token so app-level calls keep working after the forced logout.
	fn teardown_session(&self) {
		self.session.reset_navigation();
		self.session.clear_web_content();
		self.store.logout(true);
		self.session.clear_profile();
		self.session.emit_logout_event(LOGOUT_EVENT);
		self.session.set_logout_pending();
	}

	fn refresh_guard(&self, mode: AuthMode) -> Arc<AsyncMutex<()>> {
		self.refresh_guards.lock().entry(mode).or_default().clone()
	}

	fn sink(&self) -> &dyn DiagnosticsSink {
		self.diagnostics.as_ref()
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Creates a client with a default reqwest-backed transport.
	pub fn new(
		store: Arc<dyn CredentialStore>,
		tokens: Arc<dyn TokenService>,
		diagnostics: Arc<dyn DiagnosticsSink>,
		session: Arc<dyn SessionObserver>,
		gate: ReachabilityGate,
		brand_id: impl Into<String>,
	) -> Self {
		Self::with_transport(
			ReqwestTransport::default(),
			store,
			tokens,
			diagnostics,
			session,
			gate,
			brand_id,
		)
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("brand_id", &self.brand_id)
			.field("max_refresh_attempts", &self.max_refresh_attempts)
			.field("reachable", &self.gate.is_reachable())
			.finish()
	}
}
