use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, warn};

use crate::api::{ApiClient, Motif};
use crate::components::force_graph::ForceGraphCanvas;
use crate::fetch::FetchCoordinator;
use crate::state::AppState;

/// What a selector change should do, given the auth state.
#[derive(Clone, Debug, PartialEq)]
enum SelectAction {
	/// Deselection: show no graph.
	Clear,
	/// Fetch the motif's subgraph.
	Fetch(Motif),
	/// No token to query with; report and leave the display as it is.
	Refused(Motif),
}

fn classify_selection(selection: Option<Motif>, has_token: bool) -> SelectAction {
	match selection {
		None => SelectAction::Clear,
		Some(motif) if has_token => SelectAction::Fetch(motif),
		Some(motif) => SelectAction::Refused(motif),
	}
}

/// Fraud-cycle explorer: motif selector overlay on top of the fullscreen
/// force-directed canvas. Selecting a motif fetches its subgraph; responses
/// for superseded selections are dropped by the coordinator, and a failed
/// fetch leaves the current graph on screen.
#[component]
pub fn FraudCycles() -> impl IntoView {
	let app = expect_context::<AppState>();
	let client = Rc::new(ApiClient::new(ApiClient::default_base()));
	let coordinator = Rc::new(RefCell::new(FetchCoordinator::new()));
	let motifs = RwSignal::new(Vec::<Motif>::new());

	// Motif catalog, fetched once a token is available.
	Effect::new({
		let client = client.clone();
		move |_| {
			let Some(token) = app.token.get() else {
				return;
			};
			let client = client.clone();
			spawn_local(async move {
				match client.motifs(&token).await {
					Ok(catalog) => motifs.set(catalog),
					Err(err) => error!("fetching motif catalog failed: {err}"),
				}
			});
		}
	});

	let on_select = move |ev: web_sys::Event| {
		let value = event_target_value(&ev);
		let selection = value
			.parse::<i64>()
			.ok()
			.and_then(|id| motifs.with(|all| all.iter().find(|m| m.id == id).cloned()));

		match classify_selection(selection, app.token.get_untracked().is_some()) {
			SelectAction::Clear => {
				app.selected_motif.set(None);
				app.graph.set(coordinator.borrow_mut().clear());
			}
			SelectAction::Refused(motif) => {
				warn!(
					"motif '{}' selected without an API token; keeping the current graph",
					motif.name
				);
			}
			SelectAction::Fetch(motif) => {
				app.selected_motif.set(Some(motif.clone()));
				let token = app.token.get_untracked().unwrap_or_default();
				let ticket = coordinator.borrow_mut().begin();
				let (client, coordinator) = (client.clone(), coordinator.clone());
				spawn_local(async move {
					let result = client.fraud_cycles(Some(motif.id), &token).await;
					if let Some(model) = coordinator.borrow().resolve(ticket, result) {
						app.graph.set(model);
					}
				});
			}
		}
	};

	view! {
		<div class="fullscreen-graph">
			<ForceGraphCanvas data=app.graph fullscreen=true />
			<div class="graph-overlay">
				<label class="motif-label">"Select Motif: "</label>
				<select class="motif-select" on:change=on_select>
					<option value="">"-- Choose Motif --"</option>
					<For
						each=move || motifs.get()
						key=|m| m.id
						children=move |m: Motif| {
							view! { <option value=m.id.to_string()>{m.name.clone()}</option> }
						}
					/>
				</select>
				<Show when=move || app.token.get().is_none()>
					<p class="notice">"No API token configured; graph queries are disabled."</p>
				</Show>
			</div>
		</div>
	}
}
