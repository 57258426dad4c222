//! Timezone Select Component

use leptos::*;

use crate::state::DashboardState;

/// Zone dropdown; a change is persisted immediately
///
/// Each option tracks its own `selected` state from the preference.
#[component]
pub fn TimezoneSelect() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let options = state.dashboard.borrow().zone_options();
    let timezone = state.timezone;

    view! {
        <select
            id="tz-select"
            title="Select timezone"
            on:change=move |ev| state.select_timezone(&event_target_value(&ev))
        >
            {options
                .iter()
                .map(|zone| {
                    let value = zone.value;
                    view! {
                        <option
                            value=value
                            prop:selected=move || timezone.with(|tz| tz.as_value() == value)
                        >
                            {zone.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
