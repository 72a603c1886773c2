use gloo_net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;

use super::types::{NetworkGraph, PathQuery, PathResult, SimulationQuery, SimulationResult};
use crate::error::ClientError;

/// The three calls the client makes against the routing server.
#[allow(async_fn_in_trait)]
pub trait RouteApi {
	async fn network(&self) -> Result<NetworkGraph, ClientError>;
	async fn find_path(&self, query: &PathQuery) -> Result<PathResult, ClientError>;
	async fn simulate(&self, query: &SimulationQuery) -> Result<SimulationResult, ClientError>;
}

/// `RouteApi` over `fetch`, rooted at `base` (empty for same-origin).
#[derive(Clone, Debug, Default)]
pub struct HttpRouteApi {
	base: String,
}

impl HttpRouteApi {
	pub fn new(base: impl Into<String>) -> Self {
		let base = base.into();
		Self {
			base: base.trim_end_matches('/').to_string(),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base, path)
	}
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
	if !response.ok() {
		return Err(ClientError::Status {
			status: response.status(),
			url: response.url(),
		});
	}
	Ok(response.json::<T>().await?)
}

impl RouteApi for HttpRouteApi {
	async fn network(&self) -> Result<NetworkGraph, ClientError> {
		let url = self.url("/api/network");
		debug!("GET {url}");
		decode(Request::get(&url).send().await?).await
	}

	async fn find_path(&self, query: &PathQuery) -> Result<PathResult, ClientError> {
		let url = self.url("/api/path");
		debug!("POST {url} {} -> {}", query.start, query.end);
		decode(Request::post(&url).json(query)?.send().await?).await
	}

	async fn simulate(&self, query: &SimulationQuery) -> Result<SimulationResult, ClientError> {
		let url = self.url("/api/simulate");
		debug!("POST {url} iterations={}", query.iterations);
		decode(Request::post(&url).json(query)?.send().await?).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_base_and_endpoint() {
		assert_eq!(HttpRouteApi::default().url("/api/path"), "/api/path");
		assert_eq!(
			HttpRouteApi::new("http://localhost:5000/").url("/api/network"),
			"http://localhost:5000/api/network"
		);
	}
}
