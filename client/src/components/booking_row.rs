//! List row for one of the customer's bookings.

use leptos::prelude::*;

use contract::CustomerBooking;

/// A customer booking with a progress-lookup action.
#[component]
pub fn BookingRow(booking: CustomerBooking, on_check: Callback<u64>) -> impl IntoView {
    let case_id = booking.case_id;

    view! {
        <li class="booking-row">
            <span class="booking-row__case">{format!("Case #{case_id}")}</span>
            <span class="booking-row__detail">{format!("technician {}", booking.technician_id)}</span>
            <span class="booking-row__detail">{booking.slot}</span>
            <span class="booking-row__detail">{booking.license_plate}</span>
            <span class="booking-row__token">{booking.nft_token}</span>
            <button class="btn" on:click=move |_| on_check.run(case_id)>
                "Check progress"
            </button>
        </li>
    }
}
