use serde::Deserialize;

use crate::api_client;
use crate::settings;

/// Subset of the reverse geocoder's response we consume. The service
/// returns more; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocode {
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub principal_subdivision: Option<String>,
}

impl ReverseGeocode {
    /// First non-empty of locality, city, principal subdivision.
    pub fn locality_hint(&self) -> Option<&str> {
        [&self.locality, &self.city, &self.principal_subdivision]
            .into_iter()
            .flatten()
            .map(|s| s.as_str())
            .find(|s| !s.trim().is_empty())
    }
}

/// Resolves coordinates to a place description via the configured
/// third-party geocoder.
pub async fn reverse_geocode(latitude: f64, longitude: f64) -> Result<ReverseGeocode, String> {
    let url = format!(
        "{}?latitude={}&longitude={}&localityLanguage=en",
        settings::get_settings().geocoder_url,
        latitude,
        longitude
    );

    let result = api_client::get_external::<ReverseGeocode>(&url).await;

    if let Err(ref e) = result {
        log::error!("Reverse geocoding failed: {}", e);
    } else {
        log::info!("Reverse geocoding succeeded for ({}, {})", latitude, longitude);
    }

    result
}
