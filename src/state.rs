//! Explicit application state. The currently selected motif, the displayed
//! graph model, and the bearer token live here, provided once via context
//! rather than as ambient globals. The graph signal has a single writer (the
//! fetch glue on the fraud-cycles page); everything else only reads it.

use leptos::prelude::*;

use crate::api::Motif;
use crate::graph::GraphModel;

/// Session-lifetime application state. Cheap to copy; signals are arena
/// handles.
#[derive(Clone, Copy)]
pub struct AppState {
	/// Bearer token issued by the (external) auth system. `None` disables
	/// all backend fetches.
	pub token: RwSignal<Option<String>>,
	/// Motif driving the current display; `None` means no graph shown.
	pub selected_motif: RwSignal<Option<Motif>>,
	/// The graph currently handed to the rendering surface. Replaced
	/// wholesale per fetch, never mutated in place.
	pub graph: RwSignal<GraphModel>,
}

impl AppState {
	pub fn new(token: Option<String>) -> Self {
		Self {
			token: RwSignal::new(token),
			selected_motif: RwSignal::new(None),
			graph: RwSignal::new(GraphModel::default()),
		}
	}

	/// Token from the build environment, for development against a local
	/// backend. Real deployments inject it through the auth layer.
	pub fn dev_token() -> Option<String> {
		option_env!("GRAPH_API_TOKEN").map(str::to_string)
	}
}
