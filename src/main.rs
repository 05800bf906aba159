//! Browser entry point: logging, then the app mounted on `<body>`.

use leptos::prelude::*;
use rdf_graph_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
