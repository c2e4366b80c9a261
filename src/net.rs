//! Connectivity gate consulted by the request pipeline before every dispatch.

// std
use std::sync::atomic::{AtomicBool, Ordering};
// self
use crate::_prelude::*;

/// Cloneable reachability flag shared between a background path monitor and the pipeline.
///
/// The external monitor holds a clone and calls [`set_reachable`](Self::set_reachable)
/// whenever the transport path changes; the pipeline only reads. Loads and stores use
/// `SeqCst` so an update is visible to every task consulting the gate, with no torn
/// reads. An unreachable gate short-circuits the pipeline with
/// [`Error::NoNetwork`](crate::error::Error::NoNetwork) and is never retried.
#[derive(Clone, Debug)]
pub struct ReachabilityGate(Arc<AtomicBool>);
impl ReachabilityGate {
	/// Creates a gate with the provided initial state.
	pub fn new(initially_reachable: bool) -> Self {
		Self(Arc::new(AtomicBool::new(initially_reachable)))
	}

	/// Returns the current reachability state.
	pub fn is_reachable(&self) -> bool {
		self.0.load(Ordering::SeqCst)
	}

	/// Publishes a new reachability state.
	pub fn set_reachable(&self, reachable: bool) {
		self.0.store(reachable, Ordering::SeqCst);
	}
}
impl Default for ReachabilityGate {
	fn default() -> Self {
		Self::new(true)
	}
}
