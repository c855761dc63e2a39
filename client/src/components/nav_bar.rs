//! Top navigation bar linking the seven workflow views.

use leptos::prelude::*;

/// Persistent navigation bar shown above every page.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <span class="nav-bar__title">"Motorworks"</span>
            <nav class="nav-bar__links">
                <a href="/">"Records"</a>
                <a href="/technicians">"Book technician"</a>
                <a href="/add-technician">"Add technician"</a>
                <a href="/customer-booking">"Customer booking"</a>
                <a href="/customer-progress">"My progress"</a>
                <a href="/technician-progress">"Update progress"</a>
                <a href="/payment">"Payment"</a>
            </nav>
        </header>
    }
}
