//! Clock Component
//!
//! Time display plus the zone dropdown. Renders once on mount, then on
//! every interval tick for the life of the page.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::components::TimezoneSelect;
use crate::state::DashboardState;

#[component]
pub fn Clock() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    state.tick();
    let tick_ms = state.dashboard.borrow().settings().clock_tick_ms;
    let interval = {
        let state = state.clone();
        Interval::new(tick_ms, move || state.tick())
    };
    on_cleanup(move || drop(interval));

    let clock_text = state.clock_text;
    let timezone = state.timezone;
    let dashboard = state.dashboard.clone();
    let data_timezone = move || {
        timezone.track();
        dashboard.borrow().timezone_attribute().to_string()
    };

    view! {
        <div id="time" data-timezone=data_timezone>
            {move || clock_text.get()}
        </div>
        <TimezoneSelect />
    }
}
