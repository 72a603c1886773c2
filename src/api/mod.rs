mod client;
mod types;

pub use client::{HttpRouteApi, RouteApi};
pub use types::{
	Metrics, NetworkGraph, NodeId, PathQuery, PathResult, SimulationQuery, SimulationResult,
};

#[cfg(test)]
pub use types::{EdgeDescriptor, NodeDescriptor};
