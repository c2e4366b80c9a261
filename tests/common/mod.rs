#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
use parking_lot::Mutex;
// self
use authgate::{
	auth::{TokenFuture, TokenService},
	diag::DiagnosticsSink,
	error::Error,
	http::ReqwestTransport,
	net::ReachabilityGate,
	pipeline::Client,
	session::SessionObserver,
	store::MemoryCredentialStore,
};

pub const BRAND: &str = "acme";

/// Sink double collecting every `(message, code)` record.
#[derive(Default)]
pub struct RecordingDiagnostics(Mutex<Vec<(String, String)>>);
impl RecordingDiagnostics {
	pub fn codes(&self) -> Vec<String> {
		self.0.lock().iter().map(|(_, code)| code.clone()).collect()
	}
}
impl DiagnosticsSink for RecordingDiagnostics {
	fn record(&self, message: &str, code: &str) {
		self.0.lock().push((message.into(), code.into()));
	}
}

/// Session double collecting teardown notifications in firing order.
#[derive(Default)]
pub struct RecordingSession(Mutex<Vec<String>>);
impl RecordingSession {
	pub fn events(&self) -> Vec<String> {
		self.0.lock().clone()
	}
}
impl SessionObserver for RecordingSession {
	fn reset_navigation(&self) {
		self.0.lock().push("reset_navigation".into());
	}

	fn clear_web_content(&self) {
		self.0.lock().push("clear_web_content".into());
	}

	fn clear_profile(&self) {
		self.0.lock().push("clear_profile".into());
	}

	fn emit_logout_event(&self, event: &str) {
		self.0.lock().push(format!("logout_event:{event}"));
	}

	fn set_logout_pending(&self) {
		self.0.lock().push("set_logout_pending".into());
	}
}

/// Token service double that denies every operation.
#[derive(Default)]
pub struct DeniedTokens;
impl TokenService for DeniedTokens {
	fn refresh_application_token(&self) -> TokenFuture<'_> {
		Box::pin(async { Err(Error::Unauthorized) })
	}

	fn refresh_user_token(&self) -> TokenFuture<'_> {
		Box::pin(async { Err(Error::Unauthorized) })
	}

	fn issue_user_token<'a>(&'a self, _: &'a str) -> TokenFuture<'a> {
		Box::pin(async { Err(Error::Unauthorized) })
	}
}

pub struct Harness {
	pub client: Client<ReqwestTransport>,
	pub store: Arc<MemoryCredentialStore>,
	pub diagnostics: Arc<RecordingDiagnostics>,
	pub session: Arc<RecordingSession>,
	pub gate: ReachabilityGate,
}

/// Builds a reqwest-backed client wired to recording doubles.
pub fn harness() -> Harness {
	let store = Arc::new(MemoryCredentialStore::new());
	let diagnostics = Arc::new(RecordingDiagnostics::default());
	let session = Arc::new(RecordingSession::default());
	let gate = ReachabilityGate::default();
	let client = Client::new(
		store.clone(),
		Arc::new(DeniedTokens),
		diagnostics.clone(),
		session.clone(),
		gate.clone(),
		BRAND,
	);

	Harness { client, store, diagnostics, session, gate }
}
