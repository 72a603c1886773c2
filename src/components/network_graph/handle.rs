use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::state::GraphView;
use crate::api::NodeId;
use crate::highlight::EdgePainter;

/// Shared reference to the one drawn network.
///
/// Empty until the canvas has been initialized with fetched data; every
/// operation is a no-op until then.
#[derive(Clone, Default)]
pub struct GraphHandle {
	view: Rc<RefCell<Option<GraphView>>>,
}

impl GraphHandle {
	pub fn install(&self, view: GraphView) {
		*self.view.borrow_mut() = Some(view);
	}

	pub fn is_initialized(&self) -> bool {
		self.view.borrow().is_some()
	}

	pub fn with_view<R>(&self, f: impl FnOnce(&GraphView) -> R) -> Option<R> {
		self.view.borrow().as_ref().map(f)
	}

	pub fn with_view_mut<R>(&self, f: impl FnOnce(&mut GraphView) -> R) -> Option<R> {
		self.view.borrow_mut().as_mut().map(f)
	}
}

impl EdgePainter for GraphHandle {
	fn recolor_edge(&self, from: &NodeId, to: &NodeId, color: &str) {
		match self.with_view_mut(|view| view.recolor_edge(from, to, color)) {
			None => debug!("graph not drawn yet, skipping edge {from} - {to}"),
			Some(false) => debug!("no edge {from} - {to} to recolor"),
			Some(true) => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{EdgeDescriptor, NetworkGraph, NodeDescriptor, PathResult};
	use crate::handlers::testing::metrics;
	use crate::highlight::{ASTAR_COLOR, COMBINED_COLOR, QLEARNING_COLOR, apply_path_result};

	fn diamond() -> NetworkGraph {
		let node = |id: &str| NodeDescriptor {
			id: id.into(),
			label: None,
		};
		let edge = |from: &str, to: &str| EdgeDescriptor {
			from: from.into(),
			to: to.into(),
			label: None,
		};
		NetworkGraph {
			nodes: vec![node("A"), node("B"), node("C"), node("D")],
			edges: vec![
				edge("A", "B"),
				edge("B", "C"),
				edge("A", "D"),
				edge("D", "C"),
				edge("A", "C"),
			],
		}
	}

	#[test]
	fn recolor_before_initialization_is_a_no_op() {
		let handle = GraphHandle::default();
		handle.recolor_edge(&"A".into(), &"B".into(), ASTAR_COLOR);
		assert!(!handle.is_initialized());
	}

	#[test]
	fn paints_routes_onto_the_drawn_graph() {
		let handle = GraphHandle::default();
		handle.install(GraphView::new(&diamond(), 800.0, 600.0));

		let ids = |p: &[&str]| p.iter().map(|&id| NodeId::from(id)).collect::<Vec<_>>();
		apply_path_result(
			&handle,
			&PathResult {
				astar_path: ids(&["A", "B", "C"]),
				qlearning_path: ids(&["A", "D", "C"]),
				combined_path: ids(&["A", "C"]),
				metrics: metrics(1.0, 1.0, 0.0),
			},
		);

		let color = |a: &str, b: &str| {
			handle
				.with_view(|v| v.edge_color(&a.into(), &b.into()).map(str::to_string))
				.flatten()
		};
		assert_eq!(color("A", "B").as_deref(), Some(ASTAR_COLOR));
		assert_eq!(color("B", "C").as_deref(), Some(ASTAR_COLOR));
		assert_eq!(color("A", "D").as_deref(), Some(QLEARNING_COLOR));
		assert_eq!(color("C", "D").as_deref(), Some(QLEARNING_COLOR));
		assert_eq!(color("A", "C").as_deref(), Some(COMBINED_COLOR));
	}
}
