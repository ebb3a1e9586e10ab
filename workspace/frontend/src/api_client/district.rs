use common::sample;
use common::DistrictData;

use crate::api_client;

/// Outcome of a district data fetch. Callers handle both branches
/// explicitly instead of catching errors: a failed fetch degrades to the
/// built-in sample payload so the view stays populated.
#[derive(Debug, Clone, PartialEq)]
pub enum DistrictPayload {
    Live(DistrictData),
    Sample(DistrictData),
}

impl DistrictPayload {
    pub fn data(&self) -> &DistrictData {
        match self {
            DistrictPayload::Live(data) | DistrictPayload::Sample(data) => data,
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, DistrictPayload::Sample(_))
    }
}

/// Raw fetch against `GET /data/{code}`.
pub async fn fetch_district(code: &str) -> Result<DistrictData, String> {
    log::trace!("Fetching data for district code: {}", code);

    let result = api_client::get::<DistrictData>(&format!("/data/{}", code)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch district {}: {}", code, e);
    } else {
        log::info!("Successfully fetched data for district {}", code);
    }

    result
}

/// Fetch with fallback: any failure (network, non-2xx, parse) substitutes
/// the fixed sample payload. No retry; every selection is a fresh request.
pub async fn fetch_district_or_sample(code: &str) -> DistrictPayload {
    match fetch_district(code).await {
        Ok(data) => DistrictPayload::Live(data),
        Err(e) => {
            log::warn!("District {} fetch failed ({}), using sample data", code, e);
            DistrictPayload::Sample(sample::district_fallback())
        }
    }
}
