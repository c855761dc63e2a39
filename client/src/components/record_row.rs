//! List row for a single maintenance record.

use leptos::prelude::*;

use contract::MaintenanceRecord;

/// One maintenance record in the records list.
#[component]
pub fn RecordRow(record: MaintenanceRecord) -> impl IntoView {
    let repair_items = record.repair_items.join(", ");
    let completed_items = if record.completed_items.is_empty() {
        "none".to_owned()
    } else {
        record.completed_items.join(", ")
    };

    view! {
        <li class="record-row">
            <span class="record-row__case">{format!("Case #{}", record.case_id)}</span>
            <span class="record-row__detail">{format!("entered {}", record.entry_time)}</span>
            <span class="record-row__detail">{record.car_model}</span>
            <span class="record-row__detail">{format!("repairs: {repair_items}")}</span>
            <span class="record-row__detail">{format!("technician {}", record.technician_id)}</span>
            <span class="record-row__progress">{format!("{}%", record.progress)}</span>
            <span class="record-row__detail">{format!("done: {completed_items}")}</span>
        </li>
    }
}
