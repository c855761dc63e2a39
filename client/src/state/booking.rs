#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

/// State for the customer booking view.
///
/// Holds the NFT token issued by the most recent successful booking so it
/// stays visible across navigation.
#[derive(Clone, Debug, Default)]
pub struct BookingState {
    pub nft_token: Option<String>,
}

impl BookingState {
    /// Apply a `customerBook` reply.
    ///
    /// A refused booking (absent token) leaves the stored token untouched.
    /// Returns whether a token was issued.
    pub fn apply_reply(&mut self, reply: Option<String>) -> bool {
        match reply {
            Some(token) => {
                self.nft_token = Some(token);
                true
            }
            None => false,
        }
    }
}
