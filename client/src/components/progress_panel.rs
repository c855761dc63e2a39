//! Detail panel for a looked-up maintenance record.

use leptos::prelude::*;

use crate::state::progress::ProgressState;

/// Shows the record from the last successful progress lookup, if any.
#[component]
pub fn ProgressPanel() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();

    view! {
        <Show when=move || progress.get().record.is_some()>
            {move || {
                progress.get().record.map(|record| {
                    let repair_items = record.repair_items.join(", ");
                    let completed_items = if record.completed_items.is_empty() {
                        "none".to_owned()
                    } else {
                        record.completed_items.join(", ")
                    };

                    view! {
                        <div class="progress-panel">
                            <h3>"Maintenance progress"</h3>
                            <p>{format!("Case #{}", record.case_id)}</p>
                            <p>{format!("Entered: {}", record.entry_time)}</p>
                            <p>{format!("Car model: {}", record.car_model)}</p>
                            <p>{format!("Repair items: {repair_items}")}</p>
                            <p>{format!("Technician: {}", record.technician_id)}</p>
                            <p class="progress-panel__percent">
                                {format!("Progress: {}%", record.progress)}
                            </p>
                            <p>{format!("Completed: {completed_items}")}</p>
                        </div>
                    }
                })
            }}
        </Show>
    }
}
