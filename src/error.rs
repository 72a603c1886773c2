use thiserror::Error;

/// Rejected user input. The display text is what the user is alerted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
	#[error("Please enter both start and end nodes")]
	MissingEndpoints,

	#[error("Please enter a valid number of iterations")]
	InvalidIterations,
}

/// Failure talking to the routing API.
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("request failed: {0}")]
	Transport(#[from] gloo_net::Error),

	#[error("{url} answered with status {status}")]
	Status { status: u16, url: String },
}
