//! Maintenance records page: add-record form plus the full record list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. A successful customer booking forwards its case and
//! technician identifiers here through the handoff state, pre-filling
//! the add-record form.

use leptos::prelude::*;

use contract::AddRecordArgs;

use crate::components::field::Field;
use crate::components::record_row::RecordRow;
use crate::state::handoff::HandoffState;
use crate::state::notice::NoticeState;
use crate::util::form;

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

/// Validate the add-record form into contract arguments.
fn validate_record_form(
    case_id: &str,
    entry_time: &str,
    car_model: &str,
    repair_items: &str,
    technician_id: &str,
) -> Result<AddRecordArgs, &'static str> {
    let case_id = form::parse_case_id(case_id).ok_or("Enter a numeric case id.")?;
    let entry_time = form::required_text(entry_time).ok_or("Enter an entry time.")?;
    let car_model = form::required_text(car_model).ok_or("Enter a car model.")?;
    let repair_items = form::split_list(repair_items);
    if repair_items.is_empty() {
        return Err("Enter at least one repair item.");
    }
    let technician_id = form::required_text(technician_id).ok_or("Enter a technician id.")?;

    Ok(AddRecordArgs {
        case_id,
        entry_time,
        car_model,
        repair_items,
        technician_id,
    })
}

/// Records page: the add-record form and the current record list.
#[component]
pub fn RecordsPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let handoff = expect_context::<RwSignal<HandoffState>>();

    let case_id = RwSignal::new(String::new());
    let entry_time = RwSignal::new(String::new());
    let car_model = RwSignal::new(String::new());
    let repair_items = RwSignal::new(String::new());
    let technician_id = RwSignal::new(String::new());

    // Consume a pending booking handoff into the form fields, once.
    if handoff.get_untracked().is_pending() {
        handoff.update(|h| {
            if let Some(pending) = h.take() {
                case_id.set(pending.case_id.to_string());
                technician_id.set(pending.technician_id);
            }
        });
    }

    // Record list resource, fetched on mount.
    let records = LocalResource::new(|| async {
        crate::net::api::list_records().await.unwrap_or_else(|err| {
            leptos::logging::warn!("listRecords failed: {err}");
            Vec::new()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let args = match validate_record_form(
            &case_id.get(),
            &entry_time.get(),
            &car_model.get(),
            &repair_items.get(),
            &technician_id.get(),
        ) {
            Ok(args) => args,
            Err(message) => {
                notice.update(|n| n.failure(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let records = records.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::add_record(&args).await {
                    Ok(()) => {
                        notice.update(|n| n.success("Maintenance record added."));
                        case_id.set(String::new());
                        entry_time.set(String::new());
                        car_model.set(String::new());
                        repair_items.set(String::new());
                        technician_id.set(String::new());
                        records.refetch();
                    }
                    Err(err) => {
                        leptos::logging::warn!("addRecord failed: {err}");
                        notice.update(|n| n.failure("Failed to add the record."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = args;
        }
    };

    view! {
        <div class="records-page">
            <section class="form-card">
                <h2>"Add maintenance record"</h2>
                <form on:submit=on_submit>
                    <Field label="Case id" value=case_id input_type="number"/>
                    <Field label="Entry time" value=entry_time placeholder="2025-03-25"/>
                    <Field label="Car model" value=car_model/>
                    <Field
                        label="Repair items (comma separated)"
                        value=repair_items
                        placeholder="oil change, tire check"
                    />
                    <Field label="Technician id" value=technician_id/>
                    <button class="btn btn--primary" type="submit">
                        "Add record"
                    </button>
                </form>
            </section>

            <section class="list-card">
                <h2>"Maintenance records"</h2>
                <Suspense fallback=move || view! { <p>"Loading records..."</p> }>
                    <ul class="record-list">
                        {move || {
                            records.get().map(|list| {
                                list.into_iter()
                                    .map(|record| view! { <RecordRow record=record/> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </ul>
                </Suspense>
            </section>
        </div>
    }
}
