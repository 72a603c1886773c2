use std::collections::HashMap;
use std::f32::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{debug, warn};

use crate::api::{NetworkGraph, NodeId};

pub const NODE_RADIUS: f64 = 14.0;
pub const NODE_FILL: &str = "#97c2fc";
pub const NODE_BORDER: &str = "#2b7ce9";
pub const EDGE_COLOR: &str = "#848484";

/// Simulation steps run once at startup to spread nodes out. Nothing ticks
/// afterwards, so the layout is static.
const LAYOUT_STEPS: usize = 300;
const LAYOUT_DT: f32 = 0.016;
const SEED_RADIUS: f32 = 160.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct EdgeInfo {
	pub label: Option<String>,
	pub color: Option<String>,
}

/// Undirected edge key, endpoints in ascending order.
pub type EdgeKey = (DefaultNodeIdx, DefaultNodeIdx);

pub fn edge_key(a: DefaultNodeIdx, b: DefaultNodeIdx) -> EdgeKey {
	if a <= b { (a, b) } else { (b, a) }
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Drawn state of one fetched network.
pub struct GraphView {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub edges: HashMap<EdgeKey, EdgeInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	ids: HashMap<NodeId, DefaultNodeIdx>,
}

impl GraphView {
	pub fn new(data: &NetworkGraph, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut ids = HashMap::new();
		let mut edges = HashMap::new();

		let count = data.nodes.len().max(1) as f32;
		for (i, node) in data.nodes.iter().enumerate() {
			if ids.contains_key(&node.id) {
				warn!("duplicate node id {} ignored", node.id);
				continue;
			}
			let angle = i as f32 * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: SEED_RADIUS * angle.cos(),
				y: SEED_RADIUS * angle.sin(),
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone().unwrap_or_else(|| node.id.to_string()),
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		for edge in &data.edges {
			let (Some(&src), Some(&tgt)) = (ids.get(&edge.from), ids.get(&edge.to)) else {
				warn!("edge {} - {} references an unknown node", edge.from, edge.to);
				continue;
			};
			let key = edge_key(src, tgt);
			if edges.contains_key(&key) {
				continue;
			}
			graph.add_edge(src, tgt, EdgeData::default());
			edges.insert(
				key,
				EdgeInfo {
					label: edge.label.clone(),
					color: None,
				},
			);
		}

		for _ in 0..LAYOUT_STEPS {
			graph.update(LAYOUT_DT);
		}
		debug!("laid out {} nodes, {} edges", ids.len(), edges.len());

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			ids,
		}
	}

	pub fn node_count(&self) -> usize {
		self.ids.len()
	}

	/// Set the display color of the edge joining `from` and `to`, in either
	/// direction. Returns false when there is no such edge.
	pub fn recolor_edge(&mut self, from: &NodeId, to: &NodeId, color: &str) -> bool {
		let (Some(&a), Some(&b)) = (self.ids.get(from), self.ids.get(to)) else {
			return false;
		};
		match self.edges.get_mut(&edge_key(a, b)) {
			Some(edge) => {
				edge.color = Some(color.to_string());
				true
			}
			None => false,
		}
	}

	#[cfg(test)]
	pub fn edge_color(&self, from: &NodeId, to: &NodeId) -> Option<&str> {
		let (&a, &b) = (self.ids.get(from)?, self.ids.get(to)?);
		self.edges.get(&edge_key(a, b))?.color.as_deref()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < NODE_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, x: f64, y: f64) {
		self.drag.active = true;
		self.drag.node_idx = Some(idx);
		self.drag.start_x = x;
		self.drag.start_y = y;
		let drag = &mut self.drag;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				drag.node_start_x = node.x();
				drag.node_start_y = node.y();
			}
		});
	}

	pub fn begin_pan(&mut self, x: f64, y: f64) {
		self.pan.active = true;
		self.pan.start_x = x;
		self.pan.start_y = y;
		self.pan.transform_start_x = self.transform.x;
		self.pan.transform_start_y = self.transform.y;
	}

	/// Follow the pointer while dragging a node or panning.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return;
			};
			let (dx, dy) = (
				(x - self.drag.start_x) / self.transform.k,
				(y - self.drag.start_y) / self.transform.k,
			);
			let (nx, ny) = (
				self.drag.node_start_x + dx as f32,
				self.drag.node_start_y + dy as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
				}
			});
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	pub fn release_pointer(&mut self) {
		self.drag.active = false;
		self.drag.node_idx = None;
		self.pan.active = false;
	}

	/// Zoom around the screen point `(x, y)`.
	pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}
