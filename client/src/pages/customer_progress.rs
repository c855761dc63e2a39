//! Customer progress page: the caller's bookings with progress lookup.

use leptos::prelude::*;

use crate::components::booking_row::BookingRow;
use crate::components::progress_panel::ProgressPanel;
use crate::state::notice::NoticeState;
use crate::state::progress::ProgressState;

/// Customer progress page: the bookings list, each with a lookup action.
///
/// An absent lookup reply means the case is unknown; the panel is
/// cleared so no stale record lingers behind the notice.
#[component]
pub fn CustomerProgressPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let progress = expect_context::<RwSignal<ProgressState>>();

    // Bookings resource, fetched on mount.
    let bookings = LocalResource::new(|| async {
        crate::net::api::list_customer_bookings()
            .await
            .unwrap_or_else(|err| {
                leptos::logging::warn!("listCustomerBookings failed: {err}");
                Vec::new()
            })
    });

    let on_check = Callback::new(move |case_id: u64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::get_customer_progress(case_id).await {
                    Ok(reply) => {
                        let found = reply.is_some();
                        progress.update(|p| {
                            p.apply_lookup(reply);
                        });
                        if found {
                            notice.update(NoticeState::clear);
                        } else {
                            notice.update(|n| {
                                n.failure("No maintenance progress found for that case.");
                            });
                        }
                    }
                    Err(err) => {
                        leptos::logging::warn!("getCustomerProgress failed: {err}");
                        notice.update(|n| n.failure("Progress lookup failed."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = case_id;
        }
    });

    view! {
        <div class="customer-progress-page">
            <section class="list-card">
                <h2>"Your bookings"</h2>
                <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                    <ul class="booking-list">
                        {move || {
                            bookings.get().map(|list| {
                                list.into_iter()
                                    .map(|booking| {
                                        view! { <BookingRow booking=booking on_check=on_check/> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </ul>
                </Suspense>
            </section>

            <ProgressPanel/>
        </div>
    }
}
