use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader, HtmlInputElement};

use crate::graph::{GraphEvent, GraphStore, ViewKind};

/// Reads `file` as text and hands the content to `on_text` once loaded.
fn read_text(file: &File, on_text: impl FnOnce(String) + 'static) -> Result<(), JsValue> {
	let reader = FileReader::new()?;
	let loaded = reader.clone();
	let onload = Closure::once_into_js(move || {
		match loaded.result().ok().and_then(|r| r.as_string()) {
			Some(text) => on_text(text),
			None => warn!("uploaded file could not be read as text"),
		}
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	reader.read_as_text(file)
}

/// `(value, label)` pairs of the criterion select, in first-encounter order.
fn criterion_options(store: &GraphStore) -> Vec<(String, String)> {
	store
		.snapshot()
		.criteria
		.iter()
		.map(|c| (c.clone(), c.clone()))
		.collect()
}

/// `(value, label)` pairs of the override color select.
fn color_options(store: &GraphStore) -> Vec<(String, String)> {
	store
		.config()
		.criterion_colors
		.iter()
		.map(|c| (c.code.clone(), c.name.clone()))
		.collect()
}

fn dispatch(store: RwSignal<GraphStore>, event: GraphEvent) {
	// Failures are logged and kept as the store's last error.
	store.update(|s| {
		let _ = s.dispatch(event);
	});
}

/// File import, view selection and type-criterion coloring.
#[component]
pub fn ControlPanel(store: RwSignal<GraphStore>) -> impl IntoView {
	let on_file = move |ev: Event| {
		let Some(file) = ev
			.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
			.and_then(|input| input.files())
			.and_then(|files| files.get(0))
		else {
			return;
		};
		info!("importing {}", file.name());
		if let Err(err) = read_text(&file, move |text| dispatch(store, GraphEvent::Imported(text))) {
			warn!("could not read {}: {err:?}", file.name());
		}
	};

	let on_view = move |ev: Event| match ViewKind::from_name(&event_target_value(&ev)) {
		Some(kind) => dispatch(store, GraphEvent::ViewSelected(kind)),
		None => warn!("unknown view {}", event_target_value(&ev)),
	};
	let on_criterion =
		move |ev: Event| dispatch(store, GraphEvent::CriterionSelected(Some(event_target_value(&ev))));
	let on_color =
		move |ev: Event| dispatch(store, GraphEvent::ColorSelected(Some(event_target_value(&ev))));

	let criteria = move || store.with(criterion_options);
	let colors = store.with_untracked(color_options);
	let is_type_colored = move || store.with(|s| s.view().kind == ViewKind::TypeColored);
	let last_error = move || store.with(|s| s.last_error().map(String::from));

	view! {
		<div class="control-panel">
			<h3>"File Upload"</h3>
			<input type="file" accept=".json,application/json" on:change=on_file />

			<h3>"View"</h3>
			<select on:change=on_view>
				{ViewKind::ALL
					.into_iter()
					.map(|kind| view! { <option value=kind.name()>{kind.title()}</option> })
					.collect_view()}
			</select>

			<Show when=is_type_colored>
				<h3>"Criteria"</h3>
				<Show
					when=move || !criteria().is_empty()
					fallback=|| view! { <p>"No criteria available"</p> }
				>
					<select on:change=on_criterion>
						<option value="">"Choose an rdf:type"</option>
						{move || {
							criteria()
								.into_iter()
								.map(|(value, label)| view! { <option value=value>{label}</option> })
								.collect_view()
						}}
					</select>
				</Show>

				<h3>"Zone Colors"</h3>
				<select on:change=on_color>
					<option value="">"Choose a color"</option>
					{colors
						.clone()
						.into_iter()
						.map(|(value, label)| view! { <option value=value>{label}</option> })
						.collect_view()}
				</select>
			</Show>

			{move || last_error().map(|e| view! { <p class="error">{e}</p> })}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::graph::{StyleConfig, sample_graph};

	#[test]
	fn options_pair_values_with_labels() {
		let mut store = GraphStore::new(StyleConfig::default());
		assert!(criterion_options(&store).is_empty());

		store.dispatch(GraphEvent::Loaded(sample_graph())).unwrap();
		let criteria = criterion_options(&store);
		assert!(criteria.contains(&("foaf:Person".to_string(), "foaf:Person".to_string())));
		assert!(criteria.iter().all(|(value, label)| value == label));

		let colors = color_options(&store);
		assert_eq!(colors.len(), 10);
		assert_eq!(colors[0], ("#0000FF".to_string(), "Blue".to_string()));
	}
}
