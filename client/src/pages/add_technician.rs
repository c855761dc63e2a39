//! Technician creation page.

use leptos::prelude::*;

use contract::AddTechnicianArgs;

use crate::components::field::Field;
use crate::state::notice::NoticeState;
use crate::util::form;

#[cfg(test)]
#[path = "add_technician_test.rs"]
mod add_technician_test;

/// Validate the new-technician form into contract arguments.
fn validate_technician_form(
    id: &str,
    name: &str,
    qualifications: &str,
    rating: &str,
    available_slots: &str,
) -> Result<AddTechnicianArgs, &'static str> {
    let id = form::required_text(id).ok_or("Enter a technician id.")?;
    let name = form::required_text(name).ok_or("Enter a name.")?;
    let qualifications = form::split_list(qualifications);
    if qualifications.is_empty() {
        return Err("Enter at least one qualification.");
    }
    let rating = form::parse_rating(rating).ok_or("Enter a rating from 0 to 5.")?;
    let available_slots = form::split_list(available_slots);
    if available_slots.is_empty() {
        return Err("Enter at least one available slot.");
    }

    Ok(AddTechnicianArgs {
        id,
        name,
        qualifications,
        rating,
        available_slots,
    })
}

/// Add-technician page: the roster creation form.
///
/// The contract gives `addTechnician` no reply value; a completed call
/// counts as success. The roster list on the booking page re-fetches on
/// its next mount.
#[component]
pub fn AddTechnicianPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    let id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let qualifications = RwSignal::new(String::new());
    let rating = RwSignal::new(String::new());
    let available_slots = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let args = match validate_technician_form(
            &id.get(),
            &name.get(),
            &qualifications.get(),
            &rating.get(),
            &available_slots.get(),
        ) {
            Ok(args) => args,
            Err(message) => {
                notice.update(|n| n.failure(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::add_technician(&args).await {
                    Ok(()) => {
                        notice.update(|n| n.success("Technician added."));
                        id.set(String::new());
                        name.set(String::new());
                        qualifications.set(String::new());
                        rating.set(String::new());
                        available_slots.set(String::new());
                    }
                    Err(err) => {
                        leptos::logging::warn!("addTechnician failed: {err}");
                        notice.update(|n| n.failure("Failed to add the technician."));
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
        <div class="add-technician-page">
            <section class="form-card">
                <h2>"Add a technician"</h2>
                <form on:submit=on_submit>
                    <Field label="Technician id" value=id/>
                    <Field label="Name" value=name/>
                    <Field
                        label="Qualifications (comma separated)"
                        value=qualifications
                        placeholder="engine repair, electrical"
                    />
                    <Field label="Rating (0-5)" value=rating input_type="number"/>
                    <Field
                        label="Available slots (comma separated)"
                        value=available_slots
                        placeholder="2025-03-25 10:00, 2025-03-25 11:00"
                    />
                    <button class="btn btn--primary" type="submit">
                        "Add technician"
                    </button>
                </form>
            </section>
        </div>
    }
}
