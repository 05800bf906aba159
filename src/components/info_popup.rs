use leptos::prelude::*;

use crate::graph::{GraphStore, LinkId, NodeProperty, Position, Selection};

#[derive(Clone, Debug, PartialEq)]
enum PopupContent {
	Node {
		id: String,
		properties: Vec<NodeProperty>,
	},
	Link(LinkId),
}

fn popup(store: &GraphStore) -> Option<(Position, PopupContent)> {
	match store.selection() {
		Selection::Idle => None,
		Selection::NodeFocused { id, position } => Some((
			*position,
			PopupContent::Node {
				id: id.clone(),
				properties: store.node_properties(id),
			},
		)),
		Selection::LinkFocused { id, position } => Some((*position, PopupContent::Link(id.clone()))),
	}
}

/// Details of the focused node or link, anchored next to it.
#[component]
pub fn InfoPopup(store: RwSignal<GraphStore>) -> impl IntoView {
	let content = move || store.with(popup);

	move || {
		content().map(|(position, content)| {
			let body = match content {
				PopupContent::Node { id, properties } => view! {
					<h3>"Node Id : " {id}</h3>
					{properties
						.into_iter()
						.map(|p| view! { <p><strong>{p.label}</strong>" : "{p.value}</p> })
						.collect_view()}
				}
				.into_any(),
				PopupContent::Link(id) => view! {
					<h3>"Link Details"</h3>
					<p>"Source: " {id.source}</p>
					<p>"Label: " {id.label}</p>
					<p>"Target: " {id.target}</p>
				}
				.into_any(),
			};
			view! {
				<div
					class="info-popup"
					style=format!(
						"position: absolute; left: {}px; top: {}px; transform: translateY(-50%);",
						position.x,
						position.y,
					)
					on:mousedown=|ev| ev.stop_propagation()
				>
					{body}
				</div>
			}
		})
	}
}
