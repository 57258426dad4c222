//! Location Lookup
//!
//! One `getCurrentPosition` call per page load. Success, error and a
//! missing geolocation API all end in exactly one callback with settled
//! coordinates.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};

use skyboard::{Coordinates, LocationOutcome, LocationResolver};

type Settle = Rc<RefCell<Option<Box<dyn FnOnce(LocationOutcome)>>>>;

fn settle_once(pending: &Settle, outcome: LocationOutcome) {
    let callback = pending.borrow_mut().take();
    if let Some(callback) = callback {
        callback(outcome);
    }
}

/// Ask the browser for a position, falling back per `resolver`
pub fn request_location<F>(resolver: LocationResolver, on_settled: F)
where
    F: FnOnce(Coordinates) + 'static,
{
    let timeout_ms = resolver.timeout_ms();
    let settle: Box<dyn FnOnce(LocationOutcome)> =
        Box::new(move |outcome: LocationOutcome| on_settled(resolver.settle(outcome)));
    let pending: Settle = Rc::new(RefCell::new(Some(settle)));

    let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());
    let Some(geolocation) = geolocation else {
        web_sys::console::warn_1(&"Geolocation unavailable; using default location".into());
        settle_once(&pending, LocationOutcome::Unavailable);
        return;
    };

    let options = PositionOptions::new();
    options.set_timeout(timeout_ms);

    let on_success = {
        let pending = Rc::clone(&pending);
        Closure::once(move |position: GeolocationPosition| {
            let coords = position.coords();
            settle_once(
                &pending,
                LocationOutcome::Resolved(Coordinates::new(coords.latitude(), coords.longitude())),
            );
        })
    };

    let on_error = {
        let pending = Rc::clone(&pending);
        Closure::once(move |error: GeolocationPositionError| {
            web_sys::console::warn_1(&format!("Geolocation failed: {}", error.message()).into());
            settle_once(&pending, LocationOutcome::from_error_code(error.code()));
        })
    };

    if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
        &options,
    ) {
        web_sys::console::error_1(&e);
        settle_once(&pending, LocationOutcome::Unavailable);
    }

    // The browser holds these until it answers
    on_success.forget();
    on_error.forget();
}
