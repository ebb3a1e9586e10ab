//! Async wrapper over the browser geolocation API. The callback-based
//! `getCurrentPosition` is bridged through a JS promise so callers can
//! `await` a single position reading.

use js_sys::{Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Position, PositionError};

/// Why a position reading could not be obtained. None of these are fatal;
/// the caller falls back to manual district selection.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    Unsupported,
    PermissionDenied,
    Unavailable(String),
}

/// Requests a single device position. Triggers the browser permission
/// prompt on first use.
pub async fn current_coordinates() -> Result<(f64, f64), GeoError> {
    let window = window().ok_or(GeoError::Unsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| GeoError::Unsupported)?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let on_success = Closure::once_into_js(move |position: Position| {
            let _ = resolve.call1(&JsValue::UNDEFINED, position.as_ref());
        });
        let on_error = Closure::once_into_js(move |error: PositionError| {
            let _ = reject.call1(&JsValue::UNDEFINED, error.as_ref());
        });

        if let Err(e) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            log::error!("getCurrentPosition call failed: {:?}", e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: Position = value.unchecked_into();
            let coords = position.coords();
            let (lat, lon) = (coords.latitude(), coords.longitude());
            log::debug!("Device position: ({}, {})", lat, lon);
            Ok((lat, lon))
        }
        Err(err) => Err(position_error(err)),
    }
}

fn position_error(err: JsValue) -> GeoError {
    match err.dyn_into::<PositionError>() {
        // code 1 is PERMISSION_DENIED
        Ok(e) if e.code() == 1 => {
            log::warn!("Geolocation permission denied");
            GeoError::PermissionDenied
        }
        Ok(e) => {
            log::warn!("Geolocation failed: {}", e.message());
            GeoError::Unavailable(e.message())
        }
        Err(other) => {
            log::warn!("Geolocation failed: {:?}", other);
            GeoError::Unavailable(format!("{:?}", other))
        }
    }
}
