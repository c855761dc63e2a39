#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use contract::MaintenanceRecord;

/// State for the customer progress lookup view.
#[derive(Clone, Debug, Default)]
pub struct ProgressState {
    pub record: Option<MaintenanceRecord>,
}

impl ProgressState {
    /// Apply a `getCustomerProgress` reply.
    ///
    /// An absent reply clears any previously displayed record, so a stale
    /// lookup never lingers behind a "case not found" notice. Returns
    /// whether a record was found.
    pub fn apply_lookup(&mut self, reply: Option<MaintenanceRecord>) -> bool {
        let found = reply.is_some();
        self.record = reply;
        found
    }
}
