#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

/// State for the crypto payment view.
#[derive(Clone, Debug, Default)]
pub struct PaymentState {
    pub receipt: Option<String>,
}

impl PaymentState {
    /// Apply a `payWithCrypto` reply.
    ///
    /// A refused payment leaves the prior receipt untouched. Returns
    /// whether a receipt was issued.
    pub fn apply_reply(&mut self, reply: Option<String>) -> bool {
        match reply {
            Some(receipt) => {
                self.receipt = Some(receipt);
                true
            }
            None => false,
        }
    }
}
