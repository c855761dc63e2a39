//! List row for a single technician on the roster.

use leptos::prelude::*;

use contract::Technician;

/// One technician in the roster list, with qualifications and open slots.
#[component]
pub fn TechnicianRow(technician: Technician) -> impl IntoView {
    let qualifications = technician.qualifications.join(", ");
    let slots = if technician.available_slots.is_empty() {
        "fully booked".to_owned()
    } else {
        technician.available_slots.join(", ")
    };

    view! {
        <li class="technician-row">
            <span class="technician-row__id">{technician.id}</span>
            <span class="technician-row__name">{technician.name}</span>
            <span class="technician-row__detail">{qualifications}</span>
            <span class="technician-row__rating">{format!("{}/5", technician.rating)}</span>
            <span class="technician-row__detail">{format!("open: {slots}")}</span>
        </li>
    }
}
