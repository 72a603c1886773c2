use log::{debug, error, info, warn};

use super::{Notifier, RequestSequence};
use crate::api::{Metrics, NodeId, PathQuery, RouteApi};
use crate::error::InputError;
use crate::highlight::{EdgePainter, apply_path_result};

/// Build the path request from the two text inputs.
pub fn path_query(start: &str, end: &str, episodes: Option<u32>) -> Result<PathQuery, InputError> {
	let (start, end) = (start.trim(), end.trim());
	if start.is_empty() || end.is_empty() {
		return Err(InputError::MissingEndpoints);
	}
	Ok(PathQuery {
		start: NodeId::new(start),
		end: NodeId::new(end),
		episodes,
	})
}

/// Posts start/end pairs and paints the three returned routes.
pub struct PathRequestHandler<A, P> {
	api: A,
	painter: P,
	episodes: Option<u32>,
	requests: RequestSequence,
}

impl<A: RouteApi, P: EdgePainter> PathRequestHandler<A, P> {
	pub fn new(api: A, painter: P, episodes: Option<u32>) -> Self {
		Self {
			api,
			painter,
			episodes,
			requests: RequestSequence::default(),
		}
	}

	/// Returns the metrics to display, or `None` when the input was rejected,
	/// the request failed, or a later submission's response already rendered.
	pub async fn submit(&self, notifier: &impl Notifier, start: &str, end: &str) -> Option<Metrics> {
		let query = match path_query(start, end, self.episodes) {
			Ok(query) => query,
			Err(err) => {
				warn!("path request rejected: {err}");
				notifier.alert(&err.to_string());
				return None;
			}
		};

		let ticket = self.requests.issue();
		let result = match self.api.find_path(&query).await {
			Ok(result) => result,
			Err(err) => {
				error!("Error finding path: {err}");
				return None;
			}
		};
		if !self.requests.try_apply(ticket) {
			debug!("dropping stale path response for {} -> {}", query.start, query.end);
			return None;
		}

		info!(
			"paths {} -> {}: astar {} hops, qlearning {} hops, combined {} hops",
			query.start,
			query.end,
			result.astar_path.len().saturating_sub(1),
			result.qlearning_path.len().saturating_sub(1),
			result.combined_path.len().saturating_sub(1),
		);
		apply_path_result(&self.painter, &result);
		Some(result.metrics)
	}
}
