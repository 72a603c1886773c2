use std::cell::Cell;
use std::rc::Rc;

/// Identifies one submitted request of a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Orders the requests of one handler. A response renders unless a response
/// to a later-submitted request has already rendered; failed requests never
/// supersede anything.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
	issued: Rc<Cell<u64>>,
	applied: Rc<Cell<u64>>,
}

impl RequestSequence {
	pub fn issue(&self) -> Ticket {
		let next = self.issued.get() + 1;
		self.issued.set(next);
		Ticket(next)
	}

	/// Claim the display for `ticket`'s response. False when a newer
	/// response is already shown.
	pub fn try_apply(&self, ticket: Ticket) -> bool {
		if ticket.0 <= self.applied.get() {
			return false;
		}
		self.applied.set(ticket.0);
		true
	}
}
