//! Client-side fraud-cycle graph explorer.
//!
//! A motif (named detection pattern) selects which subgraph the backend
//! returns; the raw payload is built into an immutable graph model, visually
//! encoded per entity type, and laid out with a force simulation.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
mod components;
mod fetch;
mod graph;
mod pages;
mod state;

use crate::pages::fraud_cycles::FraudCycles;
use crate::pages::not_found::NotFound;
use crate::state::AppState;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// App router: the explorer at the root, 404 fallback for everything else.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(AppState::new(AppState::dev_token()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Fraud Cycle Explorer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=FraudCycles />
			</Routes>
		</Router>
	}
}
