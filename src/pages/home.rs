use std::time::Duration;

use leptos::prelude::*;
use log::error;

use crate::components::control_panel::ControlPanel;
use crate::components::force_graph::ForceGraphCanvas;
use crate::components::info_popup::InfoPopup;
use crate::graph::{GraphEvent, GraphStore, StyleConfig, sample_graph};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let store = RwSignal::new(GraphStore::new(StyleConfig::default()));

	// One-shot deferred load, dropped if the page goes away first.
	match set_timeout_with_handle(
		move || {
			store.update(|s| {
				let _ = s.dispatch(GraphEvent::Loaded(sample_graph()));
			})
		},
		Duration::ZERO,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => error!("could not schedule the initial load: {err:?}"),
	}

	view! {
		<div class="fullscreen-graph" style="position: relative;">
			<ForceGraphCanvas store=store fullscreen=true />
			<InfoPopup store=store />
			<div class="graph-overlay">
				<h1>"RDF Graph"</h1>
				<p class="subtitle">
					"Click a node or link for details. Drag nodes to reposition. Scroll to zoom."
				</p>
			</div>
			<ControlPanel store=store />
		</div>
	}
}
