//! Customer booking page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one view with a cross-view passthrough: a successful booking
//! stores the issued NFT token, records a handoff of the case and
//! technician identifiers, and navigates to the records view so the
//! add-record form arrives pre-filled.

use leptos::prelude::*;

use contract::CustomerBookArgs;

use crate::components::field::Field;
use crate::state::booking::BookingState;
use crate::state::handoff::HandoffState;
use crate::state::notice::NoticeState;
use crate::util::form;

#[cfg(test)]
#[path = "customer_booking_test.rs"]
mod customer_booking_test;

/// Validate the customer booking form into contract arguments.
fn validate_customer_booking_form(
    case_id: &str,
    technician_id: &str,
    slot: &str,
    license_plate: &str,
) -> Result<CustomerBookArgs, &'static str> {
    let case_id = form::parse_case_id(case_id).ok_or("Enter a numeric case id.")?;
    let technician_id = form::required_text(technician_id).ok_or("Enter a technician id.")?;
    let slot = form::required_text(slot).ok_or("Enter a booking slot.")?;
    let license_plate = form::required_text(license_plate).ok_or("Enter a license plate.")?;

    Ok(CustomerBookArgs {
        case_id,
        technician_id,
        slot,
        license_plate,
    })
}

/// Customer booking page: the booking form plus the issued NFT token.
#[component]
pub fn CustomerBookingPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let booking = expect_context::<RwSignal<BookingState>>();
    let handoff = expect_context::<RwSignal<HandoffState>>();

    let case_id = RwSignal::new(String::new());
    let technician_id = RwSignal::new(String::new());
    let slot = RwSignal::new(String::new());
    let license_plate = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let args = match validate_customer_booking_form(
            &case_id.get(),
            &technician_id.get(),
            &slot.get(),
            &license_plate.get(),
        ) {
            Ok(args) => args,
            Err(message) => {
                notice.update(|n| n.failure(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::customer_book(&args).await {
                    Ok(Some(token)) => {
                        booking.update(|b| {
                            b.apply_reply(Some(token.clone()));
                        });
                        notice.update(|n| {
                            n.success(format!("Booking confirmed. NFT token: {token}"));
                        });
                        handoff.update(|h| h.set(args.case_id, args.technician_id.clone()));
                        case_id.set(String::new());
                        technician_id.set(String::new());
                        slot.set(String::new());
                        license_plate.set(String::new());
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Ok(None) => {
                        notice.update(|n| {
                            n.failure("Booking failed: slot unavailable or technician unknown.");
                        });
                    }
                    Err(err) => {
                        leptos::logging::warn!("customerBook failed: {err}");
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
        <div class="customer-booking-page">
            <section class="form-card">
                <h2>"Book your maintenance"</h2>
                <form on:submit=on_submit>
                    <Field label="Case id" value=case_id input_type="number"/>
                    <Field label="Technician id" value=technician_id/>
                    <Field label="Slot" value=slot placeholder="2025-03-25 10:00"/>
                    <Field label="License plate" value=license_plate placeholder="ABC-123"/>
                    <button class="btn btn--primary" type="submit">
                        "Book"
                    </button>
                </form>
            </section>

            <Show when=move || booking.get().nft_token.is_some()>
                <div class="token-panel">
                    <h3>"Your NFT token"</h3>
                    <p class="token-panel__value">
                        {move || booking.get().nft_token.unwrap_or_default()}
                    </p>
                </div>
            </Show>
        </div>
    }
}
