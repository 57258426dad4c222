//! Weather Component
//!
//! Fetches once when the location settles and shows the current
//! conditions, or the error text in place.

use leptos::*;

use skyboard::{WeatherSummary, WeatherView};

use crate::api;
use crate::components::Loading;
use crate::state::DashboardState;

#[component]
pub fn Weather() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let weather = state.weather;
    let coordinates = state.coordinates;

    create_effect(move |_| {
        let Some(coords) = coordinates.get() else {
            return;
        };
        let url = state.dashboard.borrow().forecast_url(coords);

        weather.set(WeatherView::Loading);
        spawn_local(async move {
            let result = api::fetch_forecast(&url).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Weather fetch failed: {:?}", e).into());
            }
            weather.set(WeatherView::from_result(result));
        });
    });

    view! {
        <div id="weather">
            {move || match weather.get() {
                WeatherView::Loading => view! { <Loading /> }.into_view(),
                WeatherView::Ready(summary) => view! { <CurrentConditions summary=summary /> }.into_view(),
                WeatherView::Failed(message) => view! { <p class="error">{message}</p> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn CurrentConditions(summary: WeatherSummary) -> impl IntoView {
    view! {
        <div class="weather-current">
            <div class="emoji">{summary.glyph}</div>
            <div class="temp">{summary.temperature}</div>
            <div class="desc">{summary.description}</div>
            <div class="meta">{summary.wind}</div>
        </div>
    }
}
