use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpRouteApi;
use crate::components::network_graph::{GraphHandle, NetworkGraphCanvas};
use crate::components::path_panel::{PathFinder, PathHandler};
use crate::components::simulation_panel::{SimulationHandler, SimulationPanel};
use crate::config::ClientConfig;
use crate::handlers::load_network;

/// Network view with the path finder and simulation controls.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<ClientConfig>().unwrap_or_default();
	let api = HttpRouteApi::new(config.api_base);
	let graph = GraphHandle::default();
	let network = RwSignal::new(None);

	let path_handler: Rc<PathHandler> = Rc::new(PathHandler::new(
		api.clone(),
		graph.clone(),
		config.episodes,
	));
	let simulation_handler: Rc<SimulationHandler> = Rc::new(SimulationHandler::new(api.clone()));

	spawn_local(async move {
		if let Some(data) = load_network(&api).await {
			network.set(Some(data));
		}
	});

	view! {
		<main class="route-viz">
			<h1>"Adaptive Routing"</h1>
			<NetworkGraphCanvas handle=graph data=network />
			<div class="controls">
				<PathFinder handler=path_handler />
				<SimulationPanel handler=simulation_handler />
			</div>
		</main>
	}
}
