use leptos::prelude::*;
use route_viz::{App, ClientConfig, init_logging};

fn main() {
	let config = ClientConfig::from_document();
	init_logging(config.log_level);

	mount_to_body(move || {
		view! { <App config=config.clone() /> }
	})
}
