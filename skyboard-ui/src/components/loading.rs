//! Loading Component

use leptos::*;

use skyboard::weather::LOADING_TEXT;

/// Placeholder while the forecast is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">{LOADING_TEXT}</p>
    }
}
