//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::pages::add_technician::AddTechnicianPage;
use crate::pages::customer_booking::CustomerBookingPage;
use crate::pages::customer_progress::CustomerProgressPage;
use crate::pages::payment::PaymentPage;
use crate::pages::records::RecordsPage;
use crate::pages::technician_progress::TechnicianProgressPage;
use crate::pages::technicians::TechniciansPage;
use crate::state::booking::BookingState;
use crate::state::handoff::HandoffState;
use crate::state::notice::NoticeState;
use crate::state::payment::PaymentState;
use crate::state::progress::ProgressState;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing
/// across the seven workflow views.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let notice = RwSignal::new(NoticeState::default());
    let booking = RwSignal::new(BookingState::default());
    let progress = RwSignal::new(ProgressState::default());
    let payment = RwSignal::new(PaymentState::default());
    let handoff = RwSignal::new(HandoffState::default());

    provide_context(notice);
    provide_context(booking);
    provide_context(progress);
    provide_context(payment);
    provide_context(handoff);

    view! {
        <Stylesheet id="leptos" href="/styles.css"/>
        <Title text="Motorworks"/>

        <Router>
            <NavBar/>
            <NoticeBanner/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RecordsPage/>
                    <Route path=StaticSegment("technicians") view=TechniciansPage/>
                    <Route path=StaticSegment("add-technician") view=AddTechnicianPage/>
                    <Route path=StaticSegment("customer-booking") view=CustomerBookingPage/>
                    <Route path=StaticSegment("customer-progress") view=CustomerProgressPage/>
                    <Route path=StaticSegment("technician-progress") view=TechnicianProgressPage/>
                    <Route path=StaticSegment("payment") view=PaymentPage/>
                </Routes>
            </main>
        </Router>
    }
}
