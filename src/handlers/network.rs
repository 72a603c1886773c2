use log::{error, info};

use crate::api::{NetworkGraph, RouteApi};

/// Fetch the topology once. Failures are logged and yield nothing, which
/// leaves the canvas empty.
pub async fn load_network(api: &impl RouteApi) -> Option<NetworkGraph> {
	match api.network().await {
		Ok(graph) => {
			info!(
				"loaded network: {} nodes, {} edges",
				graph.nodes.len(),
				graph.edges.len()
			);
			Some(graph)
		}
		Err(err) => {
			error!("Error fetching network data: {err}");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::NodeDescriptor;
	use crate::handlers::testing::FakeApi;

	#[test]
	fn failed_fetch_yields_no_graph() {
		let api = FakeApi::default();
		assert!(pollster::block_on(load_network(&api)).is_none());
		assert_eq!(api.calls.get(), 1);
	}

	#[test]
	fn returns_fetched_graph() {
		let api = FakeApi {
			network: Some(NetworkGraph {
				nodes: vec![NodeDescriptor {
					id: "0".into(),
					label: Some("0".into()),
				}],
				edges: Vec::new(),
			}),
			..FakeApi::default()
		};
		let graph = pollster::block_on(load_network(&api)).unwrap();
		assert_eq!(graph.nodes.len(), 1);
	}
}
