//! Shared data records and pure functions for the dashboard.
//! These structs mirror the remote data endpoint's response payload so the
//! frontend can deserialize it without duplicating shapes, and the helper
//! modules hold the display logic that is worth testing natively.

pub mod compare;
pub mod districts;
pub mod format;
pub mod i18n;
pub mod sample;

pub use districts::{match_locality, District, DISTRICTS};
pub use i18n::{Language, UiText};

use serde::{Deserialize, Serialize};

/// One month of district-level activity. Months follow the scheme's
/// reporting year, April through March.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: String,
    pub households: u64,
    pub persondays: u64,
    /// Expenditure in lakh rupees.
    pub expenditure: f64,
}

/// The named indicators shown on the district dashboard for the latest
/// reporting period. Every field is optional on the wire; an absent value
/// renders as a placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DistrictKpis {
    #[serde(default)]
    pub job_cards_issued: Option<f64>,
    #[serde(default)]
    pub active_workers: Option<f64>,
    #[serde(default)]
    pub households_employed: Option<f64>,
    #[serde(default)]
    pub persondays_generated: Option<f64>,
    /// Share of persondays worked by women, in percent.
    #[serde(default)]
    pub women_persondays_pct: Option<f64>,
    #[serde(default)]
    pub avg_days_per_household: Option<f64>,
    #[serde(default)]
    pub works_completed: Option<f64>,
    /// Total expenditure in lakh rupees.
    #[serde(default)]
    pub total_expenditure: Option<f64>,
}

/// Full payload returned by `GET /api/data/{districtCode}`. Replaced
/// wholesale on every district selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistrictData {
    pub kpis: DistrictKpis,
    pub timeseries: Vec<MonthlyPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_data_deserializes_from_endpoint_shape() {
        let raw = r#"{
            "kpis": {
                "job_cards_issued": 512340,
                "persondays_generated": 18200000,
                "total_expenditure": 4210.5
            },
            "timeseries": [
                {"month": "Apr", "households": 42000, "persondays": 910000, "expenditure": 310.2}
            ]
        }"#;

        let data: DistrictData = serde_json::from_str(raw).expect("payload should deserialize");
        assert_eq!(data.kpis.job_cards_issued, Some(512340.0));
        assert_eq!(data.kpis.total_expenditure, Some(4210.5));
        // Keys missing from the response come through as absent, not zero.
        assert_eq!(data.kpis.active_workers, None);
        assert_eq!(data.kpis.women_persondays_pct, None);
        assert_eq!(data.timeseries.len(), 1);
        assert_eq!(data.timeseries[0].month, "Apr");
        assert_eq!(data.timeseries[0].persondays, 910000);
    }

    #[test]
    fn monthly_point_round_trips() {
        let point = MonthlyPoint {
            month: "Jan".to_string(),
            households: 38750,
            persondays: 842100,
            expenditure: 295.8,
        };

        let json = serde_json::to_string(&point).expect("should serialize");
        let back: MonthlyPoint = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, point);
    }
}
