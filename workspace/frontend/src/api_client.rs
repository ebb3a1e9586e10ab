pub mod district;
pub mod geocode;

use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

// API base is retrieved from settings
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common GET request handler against the configured data service.
/// The endpoint returns its payload as a plain JSON body.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let payload: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(payload)
}

/// GET against an absolute URL outside the configured data service,
/// used for the third-party reverse geocoder.
pub async fn get_external<T>(url: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::debug!("GET request to external service: {}", url);

    let response = Request::get(url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(error_msg);
    }

    response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        error_msg
    })
}
