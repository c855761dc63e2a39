//! Technician progress update page.

use leptos::prelude::*;

use contract::UpdateProgressArgs;

use crate::components::field::Field;
use crate::state::notice::NoticeState;
use crate::util::form;

#[cfg(test)]
#[path = "technician_progress_test.rs"]
mod technician_progress_test;

/// Validate the progress update form into contract arguments.
fn validate_progress_form(
    case_id: &str,
    completed_item: &str,
) -> Result<UpdateProgressArgs, &'static str> {
    let case_id = form::parse_case_id(case_id).ok_or("Enter a numeric case id.")?;
    let completed_item = form::required_text(completed_item).ok_or("Enter the completed item.")?;

    Ok(UpdateProgressArgs {
        case_id,
        completed_item,
    })
}

/// Technician progress page: marks one repair item completed per submit.
#[component]
pub fn TechnicianProgressPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    let case_id = RwSignal::new(String::new());
    let completed_item = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let args = match validate_progress_form(&case_id.get(), &completed_item.get()) {
            Ok(args) => args,
            Err(message) => {
                notice.update(|n| n.failure(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_progress(&args).await {
                    Ok(true) => {
                        notice.update(|n| n.success("Progress updated."));
                        case_id.set(String::new());
                        completed_item.set(String::new());
                    }
                    Ok(false) => {
                        notice.update(|n| n.failure("Update failed: case not found."));
                    }
                    Err(err) => {
                        leptos::logging::warn!("updateProgress failed: {err}");
                        notice.update(|n| n.failure("Update failed."));
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
        <div class="technician-progress-page">
            <section class="form-card">
                <h2>"Update maintenance progress"</h2>
                <form on:submit=on_submit>
                    <Field label="Case id" value=case_id input_type="number"/>
                    <Field
                        label="Completed item"
                        value=completed_item
                        placeholder="oil change"
                    />
                    <button class="btn btn--primary" type="submit">
                        "Update progress"
                    </button>
                </form>
            </section>
        </div>
    }
}
