//! Shared contract for the remote car-maintenance ledger service.
//!
//! This crate owns the compatibility boundary between the browser client
//! and the (out-of-repo) remote service: the ten operation names, their
//! argument shapes in contract order, and the entity types they return.
//! Wire field names are camelCase; optional results stay `Option` end to
//! end so "not found" never collapses into a default value.

use serde::{Deserialize, Serialize};

/// Error returned when wire data does not fit the contract.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The operation name is not one of the ten contracted operations.
    #[error("unknown operation name: {0}")]
    UnknownOperation(String),
}

/// The ten operations exposed by the remote maintenance service.
///
/// Serialized form is the exact wire name (`listRecords`, `customerBook`,
/// ...); renaming a variant here is a breaking change against the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    ListRecords,
    ListTechnicians,
    ListCustomerBookings,
    BookTechnician,
    AddTechnician,
    AddRecord,
    CustomerBook,
    GetCustomerProgress,
    UpdateProgress,
    PayWithCrypto,
}

impl Operation {
    /// Every contracted operation, in the order the interface lists them.
    pub const ALL: [Self; 10] = [
        Self::ListRecords,
        Self::ListTechnicians,
        Self::ListCustomerBookings,
        Self::BookTechnician,
        Self::AddTechnician,
        Self::AddRecord,
        Self::CustomerBook,
        Self::GetCustomerProgress,
        Self::UpdateProgress,
        Self::PayWithCrypto,
    ];

    /// Wire name of the operation, exactly as the service exposes it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ListRecords => "listRecords",
            Self::ListTechnicians => "listTechnicians",
            Self::ListCustomerBookings => "listCustomerBookings",
            Self::BookTechnician => "bookTechnician",
            Self::AddTechnician => "addTechnician",
            Self::AddRecord => "addRecord",
            Self::CustomerBook => "customerBook",
            Self::GetCustomerProgress => "getCustomerProgress",
            Self::UpdateProgress => "updateProgress",
            Self::PayWithCrypto => "payWithCrypto",
        }
    }

    /// Parse a wire name back into an operation.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnknownOperation`] for any name outside
    /// the contracted set.
    pub fn from_name(name: &str) -> Result<Self, ContractError> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ContractError::UnknownOperation(name.to_owned()))
    }

    /// Whether the operation only reads service state.
    #[must_use]
    pub fn is_query(self) -> bool {
        matches!(
            self,
            Self::ListRecords
                | Self::ListTechnicians
                | Self::ListCustomerBookings
                | Self::GetCustomerProgress
        )
    }
}

/// A single maintenance job tracked by the service.
///
/// The service owns the full lifecycle; the client only reads these and
/// appends new ones via [`Operation::AddRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub case_id: u64,
    /// Free-text entry date, e.g. `2025-03-25`.
    pub entry_time: String,
    pub car_model: String,
    /// Ordered list of repair items for the job.
    pub repair_items: Vec<String>,
    pub technician_id: String,
    /// Completion percentage, maintained by the service.
    pub progress: u32,
    /// Ordered list of items the technician has marked done.
    pub completed_items: Vec<String>,
}

/// A technician on the roster, with the slots still open for booking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub qualifications: Vec<String>,
    /// Rating on the 0-5 scale.
    pub rating: u8,
    /// Free slots, consumed by the service when a booking succeeds.
    pub available_slots: Vec<String>,
}

/// A booking made by a customer, immutable from the client's view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBooking {
    pub case_id: u64,
    pub technician_id: String,
    /// Text-encoded time window, e.g. `2025-03-25 10:00`.
    pub slot: String,
    pub license_plate: String,
    /// Opaque receipt identifier issued when the booking was made.
    pub nft_token: String,
    /// Opaque principal text identifying the booking customer.
    pub customer_id: String,
}

/// Arguments for [`Operation::BookTechnician`], in contract order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTechnicianArgs {
    pub technician_id: String,
    pub slot: String,
}

/// Arguments for [`Operation::AddTechnician`], in contract order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTechnicianArgs {
    pub id: String,
    pub name: String,
    pub qualifications: Vec<String>,
    pub rating: u8,
    pub available_slots: Vec<String>,
}

/// Arguments for [`Operation::AddRecord`], in contract order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRecordArgs {
    pub case_id: u64,
    pub entry_time: String,
    pub car_model: String,
    pub repair_items: Vec<String>,
    pub technician_id: String,
}

/// Arguments for [`Operation::CustomerBook`], in contract order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookArgs {
    pub case_id: u64,
    pub technician_id: String,
    pub slot: String,
    pub license_plate: String,
}

/// Arguments for [`Operation::GetCustomerProgress`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomerProgressArgs {
    pub case_id: u64,
}

/// Arguments for [`Operation::UpdateProgress`], in contract order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressArgs {
    pub case_id: u64,
    pub completed_item: String,
}

/// Arguments for [`Operation::PayWithCrypto`], in contract order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayWithCryptoArgs {
    pub case_id: u64,
    pub amount: u64,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
