//! Typed call stubs for the ten remote service operations.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! service gateway. Native builds get inert stubs so the crate and its
//! test suite compile without a browser toolchain.
//!
//! ERROR HANDLING
//! ==============
//! Transport-level failure (request not sent, non-2xx status, undecodable
//! body) surfaces as [`CallError`]. Logical failure stays in the reply
//! value, as `Ok(false)` or `Ok(None)`, exactly as the contract encodes it.
//! This layer performs no retries and no caching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::{
    AddRecordArgs, AddTechnicianArgs, BookTechnicianArgs, CustomerBookArgs, CustomerBooking,
    MaintenanceRecord, Operation, PayWithCryptoArgs, Technician, UpdateProgressArgs,
};

/// Transport-level failure while calling the remote service.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The HTTP request could not be sent or its response not read.
    #[error("request failed: {0}")]
    Transport(String),
    /// The gateway answered with a non-success HTTP status.
    #[error("service returned status {0}")]
    Status(u16),
    /// The reply body did not decode into the contracted shape.
    #[error("failed to decode reply: {0}")]
    Decode(String),
    /// Remote calls only exist in the browser build.
    #[error("remote calls are not available outside the browser")]
    Unavailable,
}

/// Gateway path for an operation, derived from its wire name.
#[must_use]
pub fn endpoint(op: Operation) -> String {
    format!("/api/v1/{}", op.name())
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str) -> Result<T, CallError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| CallError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(CallError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| CallError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<A, T>(op: Operation, args: &A) -> Result<T, CallError>
where
    A: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(&endpoint(op))
        .json(args)
        .map_err(|e| CallError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| CallError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(CallError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| CallError::Decode(e.to_string()))
}

/// Fetch every maintenance record (`listRecords`).
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn list_records() -> Result<Vec<MaintenanceRecord>, CallError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoint(Operation::ListRecords)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CallError::Unavailable)
    }
}

/// Fetch the technician roster (`listTechnicians`).
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn list_technicians() -> Result<Vec<Technician>, CallError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoint(Operation::ListTechnicians)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CallError::Unavailable)
    }
}

/// Fetch the caller's bookings (`listCustomerBookings`).
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn list_customer_bookings() -> Result<Vec<CustomerBooking>, CallError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoint(Operation::ListCustomerBookings)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CallError::Unavailable)
    }
}

/// Book a technician into a slot (`bookTechnician`).
///
/// `Ok(false)` means the slot is unavailable or the technician unknown.
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn book_technician(args: &BookTechnicianArgs) -> Result<bool, CallError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(Operation::BookTechnician, args).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = args;
        Err(CallError::Unavailable)
    }
}

/// Add a technician to the roster (`addTechnician`). No reply value.
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn add_technician(args: &AddTechnicianArgs) -> Result<(), CallError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(Operation::AddTechnician, args).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = args;
        Err(CallError::Unavailable)
    }
}

/// Append a maintenance record (`addRecord`). No reply value.
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn add_record(args: &AddRecordArgs) -> Result<(), CallError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(Operation::AddRecord, args).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = args;
        Err(CallError::Unavailable)
    }
}

/// Book as a customer (`customerBook`).
///
/// `Ok(Some(token))` carries the issued NFT token; `Ok(None)` means the
/// slot or technician was invalid.
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn customer_book(args: &CustomerBookArgs) -> Result<Option<String>, CallError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(Operation::CustomerBook, args).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = args;
        Err(CallError::Unavailable)
    }
}

/// Look up progress for a case (`getCustomerProgress`).
///
/// `Ok(None)` means the case is unknown to the service.
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn get_customer_progress(case_id: u64) -> Result<Option<MaintenanceRecord>, CallError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}?caseId={case_id}",
            endpoint(Operation::GetCustomerProgress)
        );
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = case_id;
        Err(CallError::Unavailable)
    }
}

/// Mark a repair item completed (`updateProgress`).
///
/// `Ok(false)` means the case was not found.
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn update_progress(args: &UpdateProgressArgs) -> Result<bool, CallError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(Operation::UpdateProgress, args).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = args;
        Err(CallError::Unavailable)
    }
}

/// Pay for a case with crypto (`payWithCrypto`).
///
/// `Ok(Some(receipt))` carries the receipt token; `Ok(None)` means the
/// case is invalid or the caller is not authorized to pay for it.
///
/// # Errors
///
/// Returns [`CallError`] when the call does not complete.
pub async fn pay_with_crypto(args: &PayWithCryptoArgs) -> Result<Option<String>, CallError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(Operation::PayWithCrypto, args).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = args;
        Err(CallError::Unavailable)
    }
}
