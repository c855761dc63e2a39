#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

/// Identifiers forwarded from a successful customer booking into the
/// add-record form on the records view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingHandoff {
    pub case_id: u64,
    pub technician_id: String,
}

/// One-shot passthrough from the customer-booking view to the records view.
///
/// The pending handoff is consumed by [`HandoffState::take`]; keeping the
/// field private enforces the consume-once invariant.
#[derive(Clone, Debug, Default)]
pub struct HandoffState {
    pending: Option<BookingHandoff>,
}

impl HandoffState {
    /// Record a handoff to be consumed by the records view.
    pub fn set(&mut self, case_id: u64, technician_id: impl Into<String>) {
        self.pending = Some(BookingHandoff {
            case_id,
            technician_id: technician_id.into(),
        });
    }

    /// Consume the pending handoff, if any.
    pub fn take(&mut self) -> Option<BookingHandoff> {
        self.pending.take()
    }

    /// Whether a handoff is waiting to be consumed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
