use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque node identifier.
///
/// The server keys nodes by integer while users type them as text, so both
/// forms collapse to the same textual id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for NodeId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl<'de> Deserialize<'de> for NodeId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum RawId {
			Int(i64),
			Float(f64),
			Text(String),
		}

		Ok(match RawId::deserialize(deserializer)? {
			RawId::Int(i) => Self(i.to_string()),
			RawId::Float(f) => Self(f.to_string()),
			RawId::Text(s) => Self(s),
		})
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct NodeDescriptor {
	pub id: NodeId,
	#[serde(default)]
	pub label: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EdgeDescriptor {
	pub from: NodeId,
	pub to: NodeId,
	#[serde(default)]
	pub label: Option<String>,
}

/// Topology served by `GET /api/network`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NetworkGraph {
	#[serde(default)]
	pub nodes: Vec<NodeDescriptor>,
	#[serde(default)]
	pub edges: Vec<EdgeDescriptor>,
}

/// Body of `POST /api/path`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathQuery {
	pub start: NodeId,
	pub end: NodeId,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub episodes: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Metrics {
	pub convergence_speed: f64,
	pub path_efficiency: f64,
	pub adaptability: f64,
}

/// Response of `POST /api/path`: one route per algorithm variant.
#[derive(Clone, Debug, Deserialize)]
pub struct PathResult {
	#[serde(default)]
	pub astar_path: Vec<NodeId>,
	#[serde(default)]
	pub qlearning_path: Vec<NodeId>,
	#[serde(default)]
	pub combined_path: Vec<NodeId>,
	pub metrics: Metrics,
}

/// Body of `POST /api/simulate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationQuery {
	pub iterations: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct SimulationResult {
	pub avg_path_length: f64,
	pub avg_convergence_time: f64,
	/// Fraction in `[0, 1]`.
	pub success_rate: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_ids_accept_integers_and_strings() {
		let ids: Vec<NodeId> = serde_json::from_str(r#"[0, 7, "C"]"#).unwrap();
		assert_eq!(ids, vec![NodeId::from("0"), NodeId::from("7"), NodeId::from("C")]);
	}

	#[test]
	fn parses_server_network_shape() {
		let body = r#"{
			"nodes": [{"id": 0, "label": "0"}, {"id": 1, "label": "1"}, {"id": 2}],
			"edges": [{"from": 0, "to": 1, "label": "3.41"}, {"from": 1, "to": 2}]
		}"#;
		let graph: NetworkGraph = serde_json::from_str(body).unwrap();
		assert_eq!(graph.nodes.len(), 3);
		assert_eq!(graph.nodes[2].label, None);
		assert_eq!(graph.edges[0].from, NodeId::from("0"));
		assert_eq!(graph.edges[0].label.as_deref(), Some("3.41"));
		assert_eq!(graph.edges[1].label, None);
	}

	#[test]
	fn parses_path_response() {
		let body = r#"{
			"astar_path": [0, 3, 5],
			"qlearning_path": [0, 2, 5],
			"combined_path": [0, 5],
			"metrics": {"convergence_speed": 0.67, "path_efficiency": 1.2, "adaptability": 0.33}
		}"#;
		let result: PathResult = serde_json::from_str(body).unwrap();
		assert_eq!(result.astar_path.len(), 3);
		assert_eq!(result.combined_path[1], NodeId::from("5"));
		assert_eq!(result.metrics.path_efficiency, 1.2);
	}

	#[test]
	fn path_query_omits_unset_episodes() {
		let query = PathQuery {
			start: "A".into(),
			end: "B".into(),
			episodes: None,
		};
		assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"start":"A","end":"B"}"#);

		let query = PathQuery {
			episodes: Some(250),
			..query
		};
		assert_eq!(
			serde_json::to_string(&query).unwrap(),
			r#"{"start":"A","end":"B","episodes":250}"#
		);
	}

	#[test]
	fn rejects_simulation_result_missing_fields() {
		let body = r#"{"avg_path_length": 3.0}"#;
		assert!(serde_json::from_str::<SimulationResult>(body).is_err());
	}
}
