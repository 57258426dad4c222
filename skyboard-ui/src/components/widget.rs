//! Widget Frame Component
//!
//! Wraps a widget body with the drag surface and the resize handle. The
//! element's geometry is driven by the dashboard's gesture controller for
//! this widget:
//!
//! - pointer-down on the widget is classified by its target and may start
//!   a gesture (pointer captured on the widget or the handle)
//! - pointer move/up are window-level so a fast pointer never escapes
//! - pointer-up persists the finished gesture
//!
//! Until a size is stored or a resize happens the element keeps its
//! natural size; only the translation is applied inline.

use leptos::*;
use wasm_bindgen::JsCast;

use skyboard::gesture::RESIZE_HANDLE_CLASS;
use skyboard::{GestureKind, Point, PointerTarget, Position, Size, WidgetKind};

use crate::state::DashboardState;

/// Class attribute for a widget, with the active gesture's class
fn widget_class(kind: WidgetKind, gesture: Option<GestureKind>) -> String {
    match gesture {
        Some(gesture) => format!("{} {}", kind.class_name(), gesture.css_class()),
        None => kind.class_name().to_string(),
    }
}

/// Inline style: translation always, size only once it is explicit
fn widget_style(position: Position, size: Option<Size>) -> String {
    let mut style = format!("transform: {};", position.to_css_transform());
    if let Some(size) = size {
        style.push_str(&format!(" width: {}px; height: {}px;", size.w, size.h));
    }
    style
}

fn client_point(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[component]
pub fn Widget(kind: WidgetKind, children: Children) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let id = kind.widget_id();

    let widget_ref = create_node_ref::<html::Div>();
    let handle_ref = create_node_ref::<html::Div>();
    let position = create_rw_signal(Position::ORIGIN);
    let size = create_rw_signal(None::<Size>);
    let gesture = create_rw_signal(None::<GestureKind>);

    // Attach once laid out so the measured size is the natural one
    widget_ref.on_load({
        let state = state.clone();
        move |_| {
            request_animation_frame(move || {
                let Some(el) = widget_ref.get_untracked() else {
                    return;
                };
                let measured = Size::new(el.offset_width(), el.offset_height());

                let (record, stored_size) = {
                    let mut dashboard = state.dashboard.borrow_mut();
                    let record = dashboard.attach(kind.class_name(), measured);
                    let stored_size = dashboard.layout().load_size(&record.widget_id, measured);
                    (record, stored_size)
                };

                position.set(record.position);
                if stored_size.is_some() {
                    size.set(Some(record.size));
                }
            });
        }
    });

    let on_pointer_down = {
        let state = state.clone();
        let id = id.clone();
        move |ev: web_sys::PointerEvent| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let classified = PointerTarget::classify(&target.tag_name(), &target.class_name());

            let started = state
                .dashboard
                .borrow_mut()
                .pointer_down(&id, classified, client_point(&ev), ev.pointer_id());
            let Some(start) = started else {
                return;
            };

            let captured = match start.kind {
                GestureKind::Drag => widget_ref.get_untracked().map(|el| el.set_pointer_capture(start.pointer_id)),
                GestureKind::Resize => {
                    ev.stop_propagation();
                    handle_ref.get_untracked().map(|el| el.set_pointer_capture(start.pointer_id))
                }
            };
            if let Some(Err(e)) = captured {
                web_sys::console::warn_1(&e);
            }

            ev.prevent_default();
            gesture.set(Some(start.kind));
        }
    };

    let move_listener = window_event_listener(ev::pointermove, {
        let state = state.clone();
        let id = id.clone();
        move |ev| {
            let frame = state.dashboard.borrow_mut().pointer_move(&id, client_point(&ev));
            let Some(frame) = frame else {
                return;
            };

            position.set(frame.position);
            if gesture.get_untracked() == Some(GestureKind::Resize) {
                size.set(Some(frame.size));
            }
        }
    });

    let up_listener = window_event_listener(ev::pointerup, {
        let state = state.clone();
        move |_| {
            let ended = state.dashboard.borrow_mut().pointer_up(&id);
            let Some(end) = ended else {
                return;
            };

            // Capture may already be gone; releasing is best effort
            let _ = match end.kind {
                GestureKind::Drag => widget_ref.get_untracked().map(|el| el.release_pointer_capture(end.pointer_id)),
                GestureKind::Resize => handle_ref.get_untracked().map(|el| el.release_pointer_capture(end.pointer_id)),
            };

            gesture.set(None);
        }
    });

    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
    });

    view! {
        <div
            node_ref=widget_ref
            class=move || widget_class(kind, gesture.get())
            style=move || widget_style(position.get(), size.get())
            on:pointerdown=on_pointer_down
        >
            <h2>{kind.title()}</h2>
            {children()}
            <div node_ref=handle_ref class=RESIZE_HANDLE_CLASS />
        </div>
    }
}
