use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpRouteApi, SimulationResult};
use crate::format::{fixed, percent};
use crate::handlers::{BrowserAlert, SimulationRequestHandler};

pub type SimulationHandler = SimulationRequestHandler<HttpRouteApi>;

/// Text lines of the simulation results block.
pub fn result_lines(results: &SimulationResult) -> [String; 3] {
	[
		format!("Average Path Length: {}", fixed(results.avg_path_length, 2)),
		format!(
			"Average Convergence Time: {}",
			fixed(results.avg_convergence_time, 2)
		),
		format!("Success Rate: {}", percent(results.success_rate)),
	]
}

#[component]
pub fn SimulationPanel(handler: Rc<SimulationHandler>) -> impl IntoView {
	let iterations = RwSignal::new(String::new());
	let results = RwSignal::new(None::<SimulationResult>);

	let on_run = move |_| {
		let handler = handler.clone();
		let raw = iterations.get_untracked();
		spawn_local(async move {
			if let Some(shown) = handler.submit(&BrowserAlert, &raw).await {
				results.set(Some(shown));
			}
		});
	};

	view! {
		<section class="simulation">
			<input
				id="simulation-iterations"
				type="text"
				inputmode="numeric"
				placeholder="Iterations"
				bind:value=iterations
			/>
			<button id="run-simulation" on:click=on_run>"Run Simulation"</button>
			<div id="simulation-results">
				{move || {
					results
						.get()
						.map(|r| {
							view! {
								<h3>"Simulation Results"</h3>
								{result_lines(&r).into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
							}
						})
				}}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn results_show_rate_as_percentage() {
		let lines = result_lines(&SimulationResult {
			avg_path_length: 3.0,
			avg_convergence_time: 4.125,
			success_rate: 0.8765,
		});
		assert_eq!(lines[0], "Average Path Length: 3.00");
		assert_eq!(lines[1], "Average Convergence Time: 4.13");
		assert_eq!(lines[2], "Success Rate: 87.65%");
	}
}
