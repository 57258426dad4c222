//! Radar Component
//!
//! Lazily loaded radar preview and a link to the full map. Nothing renders
//! until the location settles.

use leptos::*;

use skyboard::RadarView;

use crate::state::DashboardState;

#[component]
pub fn Radar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let coordinates = state.coordinates;

    view! {
        <div id="doppler">
            {move || {
                coordinates.get().map(|coords| {
                    let radar = state.dashboard.borrow().radar_view(coords);
                    let title = RadarView::FRAME_TITLE;
                    let link_text = RadarView::LINK_TEXT;
                    view! {
                        <div class="doppler-frame">
                            <iframe src=radar.embed_url title=title loading="lazy" />
                            <a href=radar.link_url target="_blank" rel="noopener noreferrer">
                                {link_text}
                            </a>
                        </div>
                    }
                })
            }}
        </div>
    }
}
