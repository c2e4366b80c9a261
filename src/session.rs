//! Session-lifecycle notifications emitted on the terminal refresh-token path.

/// Analytics event name emitted when an expired refresh token forces a logout.
pub const LOGOUT_EVENT: &str = "forced_logout";

/// External collaborator notified when an expired refresh token tears the session down.
///
/// The orchestrator fires every notification exactly once per refresh-token 401, in the
/// order declared here, with the credential-store logout in between (see
/// [`Client::send`](crate::pipeline::Client::send)). What each observer does with a
/// notification—navigation resets, cache eviction, analytics transport—is outside this
/// crate.
pub trait SessionObserver
where
	Self: Send + Sync,
{
	/// Resets navigation and selection state to a neutral entry point.
	fn reset_navigation(&self);

	/// Clears cached web content.
	fn clear_web_content(&self);

	/// Clears cached profile fields.
	fn clear_profile(&self);

	/// Emits a named logout analytics event ([`LOGOUT_EVENT`]).
	fn emit_logout_event(&self, event: &str);

	/// Signals that a forced logout occurred so outer layers can react.
	fn set_logout_pending(&self);
}
