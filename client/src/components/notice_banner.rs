//! Banner surfacing the one visible success/failure notice.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Dismissable banner rendering the current notice, if any.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    let banner_class = move || {
        match notice.get().current.map(|n| n.kind) {
            Some(NoticeKind::Success) => "notice-banner notice-banner--success",
            _ => "notice-banner notice-banner--failure",
        }
    };

    view! {
        <Show when=move || notice.get().current.is_some()>
            <div class=banner_class role="status">
                <span class="notice-banner__text">
                    {move || notice.get().current.map(|n| n.text).unwrap_or_default()}
                </span>
                <button
                    class="notice-banner__dismiss"
                    on:click=move |_| notice.update(NoticeState::clear)
                    title="Dismiss"
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
