//! App Root Component
//!
//! Boots the dashboard, resolves the location once and lays out the three
//! widgets in page flow.

use leptos::*;

use skyboard::WidgetKind;

use crate::components::{Clock, Radar, Weather, Widget};
use crate::location::request_location;
use crate::state::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state();

    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let resolver = state.dashboard.borrow().settings().location_resolver();
    let coordinates = state.coordinates;
    request_location(resolver, move |resolved| coordinates.set(Some(resolved)));

    view! {
        <main class="dashboard">
            <Widget kind=WidgetKind::Clock>
                <Clock />
            </Widget>
            <Widget kind=WidgetKind::Weather>
                <Weather />
            </Widget>
            <Widget kind=WidgetKind::Radar>
                <Radar />
            </Widget>
        </main>
    }
}
