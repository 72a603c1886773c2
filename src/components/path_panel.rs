use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::network_graph::GraphHandle;
use crate::api::{HttpRouteApi, Metrics};
use crate::format::fixed;
use crate::handlers::{BrowserAlert, PathRequestHandler};

pub type PathHandler = PathRequestHandler<HttpRouteApi, GraphHandle>;

/// Text lines of the metrics block.
pub fn metric_lines(metrics: &Metrics) -> [String; 3] {
	[
		format!("Convergence Speed: {}", fixed(metrics.convergence_speed, 2)),
		format!("Path Efficiency: {}", fixed(metrics.path_efficiency, 2)),
		format!("Adaptability: {}", fixed(metrics.adaptability, 2)),
	]
}

#[component]
pub fn PathFinder(handler: Rc<PathHandler>) -> impl IntoView {
	let start = RwSignal::new(String::new());
	let end = RwSignal::new(String::new());
	let metrics = RwSignal::new(None::<Metrics>);

	let on_find = move |_| {
		let handler = handler.clone();
		let (start, end) = (start.get_untracked(), end.get_untracked());
		spawn_local(async move {
			if let Some(shown) = handler.submit(&BrowserAlert, &start, &end).await {
				metrics.set(Some(shown));
			}
		});
	};

	view! {
		<section class="path-finder">
			<input id="start-node" type="text" placeholder="Start node" bind:value=start />
			<input id="end-node" type="text" placeholder="End node" bind:value=end />
			<button id="find-path" on:click=on_find>"Find Path"</button>
			<div id="metrics">
				{move || {
					metrics
						.get()
						.map(|m| {
							view! {
								<h3>"Performance Metrics"</h3>
								{metric_lines(&m).into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
							}
						})
				}}
			</div>
		</section>
	}
}
