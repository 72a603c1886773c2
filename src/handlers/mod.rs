//! User action → validation → API call → rendered result.

mod network;
mod path;
mod sequence;
mod simulation;

use log::error;

pub use network::load_network;
pub use path::PathRequestHandler;
pub use sequence::RequestSequence;
pub use simulation::SimulationRequestHandler;

/// Blocking user-facing message for rejected input.
pub trait Notifier {
	fn alert(&self, message: &str);
}

/// `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
	fn alert(&self, message: &str) {
		let Some(window) = web_sys::window() else {
			error!("no window to alert: {message}");
			return;
		};
		if let Err(err) = window.alert_with_message(message) {
			error!("alert failed: {err:?}");
		}
	}
}
