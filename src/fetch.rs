//! Motif-driven fetch coordination. Resolves the select-while-fetching race
//! by selection identity: every selection mints a ticket, and only a response
//! carrying the latest ticket may replace the displayed graph. Late arrivals
//! for older selections are discarded, never rendered.

use log::{error, warn};

use crate::api::{ApiError, RawData};
use crate::graph::{self, GraphModel};

/// Identity of one motif selection. Compared at resolution time; no
/// cancellation of the underlying request is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Tracks the most recent motif selection and turns raw payloads into graph
/// models, in selection order rather than network-arrival order.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
	generation: u64,
}

impl FetchCoordinator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a new selection, invalidating all outstanding tickets.
	pub fn begin(&mut self) -> FetchTicket {
		self.generation += 1;
		FetchTicket(self.generation)
	}

	pub fn is_current(&self, ticket: FetchTicket) -> bool {
		ticket.0 == self.generation
	}

	/// Resolve a completed fetch. Returns the model to display, or `None`
	/// when the response is stale or failed; in both cases the caller keeps
	/// whatever graph is currently shown.
	pub fn resolve(
		&self,
		ticket: FetchTicket,
		result: Result<RawData, ApiError>,
	) -> Option<GraphModel> {
		if !self.is_current(ticket) {
			warn!("discarding stale graph response (ticket {:?})", ticket);
			return None;
		}
		match result {
			Ok(raw) => Some(graph::build(&raw)),
			Err(err) => {
				error!("fetching fraud cycles failed: {err}");
				None
			}
		}
	}

	/// Deselection: invalidate in-flight fetches and display nothing.
	pub fn clear(&mut self) -> GraphModel {
		self.generation += 1;
		GraphModel::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{RawNode, RawRelationship};

	fn payload(node_id: &str) -> RawData {
		RawData {
			nodes: vec![RawNode {
				id: node_id.to_string(),
				labels: vec!["Account".to_string()],
				properties: Default::default(),
			}],
			relationships: vec![],
		}
	}

	#[test]
	fn in_order_resolution_applies_latest() {
		let mut coord = FetchCoordinator::new();
		let a = coord.begin();
		let b = coord.begin();

		assert!(coord.resolve(a, Ok(payload("a"))).is_none());
		let model = coord.resolve(b, Ok(payload("b"))).unwrap();
		assert_eq!(model.nodes[0].id, "b");
	}

	#[test]
	fn out_of_order_arrival_keeps_latest_selection() {
		let mut coord = FetchCoordinator::new();
		let a = coord.begin();
		let b = coord.begin();

		// B's response lands first, then A's straggler.
		let model = coord.resolve(b, Ok(payload("b"))).unwrap();
		assert_eq!(model.nodes[0].id, "b");
		assert!(coord.resolve(a, Ok(payload("a"))).is_none());
	}

	#[test]
	fn failure_leaves_displayed_model_untouched() {
		let mut coord = FetchCoordinator::new();
		let t = coord.begin();
		let displayed = coord.resolve(t, Ok(payload("a"))).unwrap();

		let t2 = coord.begin();
		assert!(coord.resolve(t2, Err(ApiError::Status(502))).is_none());
		// Caller keeps `displayed` since resolve yielded nothing.
		assert_eq!(displayed.nodes[0].id, "a");
	}

	#[test]
	fn clear_invalidates_in_flight_fetch() {
		let mut coord = FetchCoordinator::new();
		let t = coord.begin();
		let empty = coord.clear();
		assert!(empty.is_empty());
		assert!(coord.resolve(t, Ok(payload("late"))).is_none());
	}

	#[test]
	fn ticket_stays_current_until_next_selection() {
		let mut coord = FetchCoordinator::new();
		let t = coord.begin();
		assert!(coord.is_current(t));
		coord.begin();
		assert!(!coord.is_current(t));
	}
}
