//! Built-in sample figures. Used as the fallback payload when the data
//! service cannot be reached, as the shared base for the district
//! comparison, and as the static state-level series behind the trends view.

use std::collections::BTreeMap;

use crate::compare::FISCAL_MONTHS;
use crate::{DistrictData, DistrictKpis, MonthlyPoint};

/// Year keys offered on the trends view, oldest first.
pub const YEAR_KEYS: [&str; 4] = ["2021-22", "2022-23", "2023-24", "2024-25"];

/// The fixed payload substituted when a district fetch fails. Monsoon
/// months dip, winter months peak, matching the scheme's usual seasonality.
pub fn district_fallback() -> DistrictData {
    DistrictData {
        kpis: DistrictKpis {
            job_cards_issued: Some(612_450.0),
            active_workers: Some(298_310.0),
            households_employed: Some(187_240.0),
            persondays_generated: Some(14_830_000.0),
            women_persondays_pct: Some(53.7),
            avg_days_per_household: Some(42.3),
            works_completed: Some(8_914.0),
            total_expenditure: Some(38_420.0),
        },
        timeseries: fallback_series(),
    }
}

fn fallback_series() -> Vec<MonthlyPoint> {
    // Seasonal weights per fiscal month, Apr..Mar.
    const WEIGHTS: [f64; 12] = [1.0, 1.1, 0.9, 0.5, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4, 1.3, 1.1];

    FISCAL_MONTHS
        .iter()
        .zip(WEIGHTS)
        .map(|(&month, w)| MonthlyPoint {
            month: month.to_string(),
            households: (16_000.0 * w).round() as u64,
            persondays: (1_240_000.0 * w).round() as u64,
            expenditure: (3_200.0 * w).round(),
        })
        .collect()
}

/// Shared base series scaled per district on the comparison view.
pub fn comparison_base_series() -> Vec<MonthlyPoint> {
    fallback_series()
}

/// State-level monthly expenditure (₹ lakh) per reporting year. The most
/// recent year is a partial year: reporting stops after December.
pub fn state_expenditure_by_year() -> BTreeMap<String, Vec<MonthlyPoint>> {
    let mut by_year = BTreeMap::new();
    for (i, year) in YEAR_KEYS.iter().enumerate() {
        // Expenditure grows year over year; keep the shape of the season.
        let growth = 1.0 + i as f64 * 0.12;
        let months = if *year == "2024-25" { 9 } else { 12 };

        let series = fallback_series()
            .into_iter()
            .take(months)
            .map(|p| MonthlyPoint {
                expenditure: (p.expenditure * growth * 38.0).round(),
                households: (p.households as f64 * growth * 38.0).round() as u64,
                persondays: (p.persondays as f64 * growth * 38.0).round() as u64,
                month: p.month,
            })
            .collect();
        by_year.insert(year.to_string(), series);
    }
    by_year
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_covers_the_full_fiscal_year() {
        let data = district_fallback();
        assert_eq!(data.timeseries.len(), 12);
        for (point, month) in data.timeseries.iter().zip(FISCAL_MONTHS) {
            assert_eq!(point.month, month);
            assert!(point.households > 0);
            assert!(point.persondays > 0);
            assert!(point.expenditure > 0.0);
        }
    }

    #[test]
    fn fallback_kpis_are_fully_populated() {
        let kpis = district_fallback().kpis;
        assert!(kpis.job_cards_issued.is_some());
        assert!(kpis.active_workers.is_some());
        assert!(kpis.households_employed.is_some());
        assert!(kpis.persondays_generated.is_some());
        assert!(kpis.women_persondays_pct.is_some());
        assert!(kpis.avg_days_per_household.is_some());
        assert!(kpis.works_completed.is_some());
        assert!(kpis.total_expenditure.is_some());
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(district_fallback(), district_fallback());
        assert_eq!(comparison_base_series(), comparison_base_series());
    }

    #[test]
    fn every_year_key_has_a_series() {
        let by_year = state_expenditure_by_year();
        for year in YEAR_KEYS {
            let series = by_year.get(year).expect("year should be present");
            assert!(!series.is_empty());
            assert!(series.len() <= 12);
        }
        // The current year is partial.
        assert_eq!(by_year["2024-25"].len(), 9);
        assert_eq!(by_year["2023-24"].len(), 12);
    }

    #[test]
    fn year_series_grow_over_time() {
        let by_year = state_expenditure_by_year();
        let apr = |year: &str| by_year[year][0].expenditure;
        assert!(apr("2022-23") > apr("2021-22"));
        assert!(apr("2024-25") > apr("2023-24"));
    }
}
