use log::{debug, error, info, warn};

use super::{Notifier, RequestSequence};
use crate::api::{RouteApi, SimulationQuery, SimulationResult};
use crate::error::InputError;

/// Parse the iteration count the way a numeric text field is read. The
/// whole input must be a number; the count is then its leading integer part
/// (`"12.7"` and `"1e3"` give 12 and 1, `"0x10"` gives 16) and must be
/// positive and fit in a `u64`.
pub fn simulation_query(raw: &str) -> Result<SimulationQuery, InputError> {
	let raw = raw.trim();
	if !is_numeric(raw) {
		return Err(InputError::InvalidIterations);
	}
	match leading_integer(raw) {
		Some(iterations) if iterations >= 1 => Ok(SimulationQuery { iterations }),
		_ => Err(InputError::InvalidIterations),
	}
}

fn hex_digits(s: &str) -> Option<&str> {
	s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

fn is_numeric(s: &str) -> bool {
	s.parse::<f64>().is_ok_and(f64::is_finite)
		|| hex_digits(s).is_some_and(|h| !h.is_empty() && h.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Optional sign then leading digits. `None` when there are no digits, the
/// value overflows, or it is negative and non-zero.
fn leading_integer(s: &str) -> Option<u64> {
	let (negative, rest) = match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	};
	let value = match hex_digits(rest) {
		Some(hex) => {
			let len = hex.bytes().take_while(u8::is_ascii_hexdigit).count();
			u64::from_str_radix(&hex[..len], 16).ok()?
		}
		None => {
			let len = rest.bytes().take_while(u8::is_ascii_digit).count();
			rest[..len].parse::<u64>().ok()?
		}
	};
	if negative && value != 0 { None } else { Some(value) }
}

/// Posts iteration counts and hands back the aggregate results.
pub struct SimulationRequestHandler<A> {
	api: A,
	requests: RequestSequence,
}

impl<A: RouteApi> SimulationRequestHandler<A> {
	pub fn new(api: A) -> Self {
		Self {
			api,
			requests: RequestSequence::default(),
		}
	}

	pub async fn submit(&self, notifier: &impl Notifier, raw: &str) -> Option<SimulationResult> {
		let query = match simulation_query(raw) {
			Ok(query) => query,
			Err(err) => {
				warn!("simulation request rejected: {raw:?}");
				notifier.alert(&err.to_string());
				return None;
			}
		};

		let ticket = self.requests.issue();
		let result = match self.api.simulate(&query).await {
			Ok(result) => result,
			Err(err) => {
				error!("Error running simulation: {err}");
				return None;
			}
		};
		if !self.requests.try_apply(ticket) {
			debug!("dropping stale simulation response ({} iterations)", query.iterations);
			return None;
		}

		info!(
			"simulation of {} iterations: success rate {}",
			query.iterations, result.success_rate
		);
		Some(result)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::handlers::testing::{FakeApi, RecordingNotifier};

	fn sample_result() -> SimulationResult {
		SimulationResult {
			avg_path_length: 3.25,
			avg_convergence_time: 4.25,
			success_rate: 0.8765,
		}
	}

	#[test]
	fn parses_iteration_counts() {
		assert_eq!(simulation_query("100"), Ok(SimulationQuery { iterations: 100 }));
		assert_eq!(simulation_query(" 12.7 "), Ok(SimulationQuery { iterations: 12 }));
		assert_eq!(simulation_query("+7"), Ok(SimulationQuery { iterations: 7 }));
		assert_eq!(simulation_query("0x10"), Ok(SimulationQuery { iterations: 16 }));
	}

	#[test]
	fn takes_only_the_leading_integer_of_exponent_forms() {
		assert_eq!(simulation_query("1e3"), Ok(SimulationQuery { iterations: 1 }));
		assert_eq!(simulation_query("1e30"), Ok(SimulationQuery { iterations: 1 }));
		assert_eq!(simulation_query("2.5e2"), Ok(SimulationQuery { iterations: 2 }));
	}

	#[test]
	fn rejects_counts_that_overflow() {
		assert_eq!(
			simulation_query("99999999999999999999999"),
			Err(InputError::InvalidIterations)
		);
		assert_eq!(
			simulation_query("0x1ffffffffffffffff"),
			Err(InputError::InvalidIterations)
		);
		assert_eq!(
			simulation_query("18446744073709551615"),
			Ok(SimulationQuery { iterations: u64::MAX })
		);
	}

	#[test]
	fn rejects_empty_and_non_numeric_counts() {
		for raw in ["", "   ", "ten", "12abc", "NaN", "inf", "0", "0.5", "-3", ".5", "0x", "-0x10"] {
			assert_eq!(
				simulation_query(raw),
				Err(InputError::InvalidIterations),
				"{raw:?} should be rejected"
			);
		}
	}

	#[test]
	fn invalid_count_alerts_without_a_request() {
		let handler = SimulationRequestHandler::new(FakeApi {
			simulation: Some(sample_result()),
			..FakeApi::default()
		});
		let notifier = RecordingNotifier::default();

		assert!(pollster::block_on(handler.submit(&notifier, "")).is_none());
		assert!(pollster::block_on(handler.submit(&notifier, "many")).is_none());

		assert_eq!(handler.api.calls.get(), 0);
		assert_eq!(notifier.alerts.borrow().len(), 2);
		assert_eq!(
			notifier.alerts.borrow()[0],
			"Please enter a valid number of iterations"
		);
	}

	#[test]
	fn posts_integer_count_and_returns_results() {
		let handler = SimulationRequestHandler::new(FakeApi {
			simulation: Some(sample_result()),
			..FakeApi::default()
		});
		let notifier = RecordingNotifier::default();

		let result = pollster::block_on(handler.submit(&notifier, "250")).unwrap();
		assert_eq!(result, sample_result());
		assert_eq!(
			handler.api.last_simulation.get(),
			Some(SimulationQuery { iterations: 250 })
		);
		assert!(notifier.alerts.borrow().is_empty());
	}

	#[test]
	fn failure_yields_nothing() {
		let handler = SimulationRequestHandler::new(FakeApi::default());
		let notifier = RecordingNotifier::default();
		assert!(pollster::block_on(handler.submit(&notifier, "10")).is_none());
		assert_eq!(handler.api.calls.get(), 1);
	}
}
