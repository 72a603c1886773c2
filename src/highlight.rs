//! Path overlays: one color per algorithm variant, painted edge by edge.

use crate::api::{NodeId, PathResult};

pub const ASTAR_COLOR: &str = "#ff0000";
pub const QLEARNING_COLOR: &str = "#00ff00";
pub const COMBINED_COLOR: &str = "#0000ff";

/// Something that can change the color of a drawn edge.
pub trait EdgePainter {
	/// Recolor the edge between `from` and `to`; unknown edges are ignored.
	fn recolor_edge(&self, from: &NodeId, to: &NodeId, color: &str);
}

/// Paint every consecutive pair of `path`.
pub fn highlight_path(painter: &impl EdgePainter, path: &[NodeId], color: &str) {
	for pair in path.windows(2) {
		painter.recolor_edge(&pair[0], &pair[1], color);
	}
}

/// Paint all three routes. Later passes win where routes share an edge.
pub fn apply_path_result(painter: &impl EdgePainter, result: &PathResult) {
	highlight_path(painter, &result.astar_path, ASTAR_COLOR);
	highlight_path(painter, &result.qlearning_path, QLEARNING_COLOR);
	highlight_path(painter, &result.combined_path, COMBINED_COLOR);
}


#[cfg(test)]
mod tests {
	use super::testing::RecordingPainter;
	use super::*;
	use crate::api::Metrics;

	fn ids(path: &[&str]) -> Vec<NodeId> {
		path.iter().map(|&id| id.into()).collect()
	}

	fn key(a: &str, b: &str) -> (String, String) {
		(a.to_string(), b.to_string())
	}

	#[test]
	fn paints_each_route_in_its_color() {
		let painter = RecordingPainter::default();
		let result = PathResult {
			astar_path: ids(&["A", "B", "C"]),
			qlearning_path: ids(&["A", "D", "C"]),
			combined_path: ids(&["A", "C"]),
			metrics: Metrics::default(),
		};
		apply_path_result(&painter, &result);

		let colors = painter.colors();
		assert_eq!(colors.len(), 5);
		assert_eq!(colors[&key("A", "B")], ASTAR_COLOR);
		assert_eq!(colors[&key("B", "C")], ASTAR_COLOR);
		assert_eq!(colors[&key("A", "D")], QLEARNING_COLOR);
		assert_eq!(colors[&key("C", "D")], QLEARNING_COLOR);
		assert_eq!(colors[&key("A", "C")], COMBINED_COLOR);
	}

	#[test]
	fn shared_edges_take_the_last_color() {
		let painter = RecordingPainter::default();
		let result = PathResult {
			astar_path: ids(&["A", "B"]),
			qlearning_path: ids(&["B", "A"]),
			combined_path: ids(&["X", "Y"]),
			metrics: Metrics::default(),
		};
		apply_path_result(&painter, &result);
		assert_eq!(painter.colors()[&key("A", "B")], QLEARNING_COLOR);
	}

	#[test]
	fn short_paths_paint_nothing() {
		let painter = RecordingPainter::default();
		highlight_path(&painter, &ids(&["A"]), ASTAR_COLOR);
		highlight_path(&painter, &[], ASTAR_COLOR);
		assert!(painter.calls.borrow().is_empty());
	}
}
