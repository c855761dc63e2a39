//! Technician booking page: booking form plus the roster list.

use leptos::prelude::*;

use contract::BookTechnicianArgs;

use crate::components::field::Field;
use crate::components::technician_row::TechnicianRow;
use crate::state::notice::NoticeState;
use crate::util::form;

#[cfg(test)]
#[path = "technicians_test.rs"]
mod technicians_test;

/// Validate the booking form into contract arguments.
fn validate_booking_form(
    technician_id: &str,
    slot: &str,
) -> Result<BookTechnicianArgs, &'static str> {
    let technician_id = form::required_text(technician_id).ok_or("Enter a technician id.")?;
    let slot = form::required_text(slot).ok_or("Enter a booking slot.")?;

    Ok(BookTechnicianArgs {
        technician_id,
        slot,
    })
}

/// Technicians page: the slot booking form and the current roster.
///
/// A `false` reply from the service means the slot is gone or the
/// technician is unknown; the form is left filled so the user can retry
/// with a different slot.
#[component]
pub fn TechniciansPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    let technician_id = RwSignal::new(String::new());
    let slot = RwSignal::new(String::new());

    // Roster resource, fetched on mount and again after a booking.
    let technicians = LocalResource::new(|| async {
        crate::net::api::list_technicians().await.unwrap_or_else(|err| {
            leptos::logging::warn!("listTechnicians failed: {err}");
            Vec::new()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let args = match validate_booking_form(&technician_id.get(), &slot.get()) {
            Ok(args) => args,
            Err(message) => {
                notice.update(|n| n.failure(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let technicians = technicians.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::book_technician(&args).await {
                    Ok(true) => {
                        notice.update(|n| n.success("Booking confirmed."));
                        technician_id.set(String::new());
                        slot.set(String::new());
                        technicians.refetch();
                    }
                    Ok(false) => {
                        notice.update(|n| {
                            n.failure("Booking failed: slot unavailable or technician unknown.");
                        });
                    }
                    Err(err) => {
                        leptos::logging::warn!("bookTechnician failed: {err}");
                        notice.update(|n| n.failure("Booking failed."));
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
        <div class="technicians-page">
            <section class="form-card">
                <h2>"Book a technician"</h2>
                <form on:submit=on_submit>
                    <Field label="Technician id" value=technician_id/>
                    <Field label="Slot" value=slot placeholder="2025-03-25 10:00"/>
                    <button class="btn btn--primary" type="submit">
                        "Book"
                    </button>
                </form>
            </section>

            <section class="list-card">
                <h2>"Technicians"</h2>
                <Suspense fallback=move || view! { <p>"Loading technicians..."</p> }>
                    <ul class="technician-list">
                        {move || {
                            technicians.get().map(|list| {
                                list.into_iter()
                                    .map(|technician| {
                                        view! { <TechnicianRow technician=technician/> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </ul>
                </Suspense>
            </section>
        </div>
    }
}
