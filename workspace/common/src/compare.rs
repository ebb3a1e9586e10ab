//! Aggregation helpers for the comparison views: one combined row per month
//! for multi-year charting, and the deterministic mock series used by the
//! district comparison until real per-district history is published.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::MonthlyPoint;

/// Month labels in scheme reporting order, April through March.
pub const FISCAL_MONTHS: [&str; 12] = [
    "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar",
];

/// One month across the selected years, keyed by year label
/// (e.g. `"2023-24"`). Missing months chart as zero.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearRow {
    pub month: &'static str,
    pub expenditure: BTreeMap<String, f64>,
}

/// Builds exactly one row per fiscal month, carrying each selected year's
/// expenditure for that month (zero when the year has no entry).
pub fn year_comparison_rows(
    selected: &[String],
    by_year: &BTreeMap<String, Vec<MonthlyPoint>>,
) -> Vec<YearRow> {
    tracing::debug!(years = ?selected, "building year comparison rows");

    FISCAL_MONTHS
        .iter()
        .map(|&month| {
            let expenditure = selected
                .iter()
                .map(|year| {
                    let value = by_year
                        .get(year)
                        .and_then(|points| points.iter().find(|p| p.month == month))
                        .map(|p| p.expenditure)
                        .unwrap_or(0.0);
                    (year.clone(), value)
                })
                .collect();
            YearRow { month, expenditure }
        })
        .collect()
}

/// Scalar derived from the last digit of a district code; keeps the two
/// compared series visibly distinct but deterministic.
pub fn district_factor(code: &str) -> u32 {
    let last_digit = code
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0);
    (last_digit % 5) + 8
}

/// Scales the shared base series by `factor / 10`, rounding every value.
/// Placeholder scheme pending real per-district data.
pub fn derive_district_series(code: &str, base: &[MonthlyPoint]) -> Vec<MonthlyPoint> {
    let scale = district_factor(code) as f64 / 10.0;
    base.iter()
        .map(|p| MonthlyPoint {
            month: p.month.clone(),
            households: (p.households as f64 * scale).round() as u64,
            persondays: (p.persondays as f64 * scale).round() as u64,
            expenditure: (p.expenditure * scale).round(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, persondays: u64, expenditure: f64) -> MonthlyPoint {
        MonthlyPoint {
            month: month.to_string(),
            households: persondays / 20,
            persondays,
            expenditure,
        }
    }

    #[test]
    fn one_row_per_month_with_field_per_selected_year() {
        let mut by_year = BTreeMap::new();
        by_year.insert(
            "2023-24".to_string(),
            vec![point("Apr", 900_000, 310.0), point("May", 880_000, 305.5)],
        );
        by_year.insert(
            "2024-25".to_string(),
            vec![point("Apr", 940_000, 322.0)],
        );

        let selected = vec!["2023-24".to_string(), "2024-25".to_string()];
        let rows = year_comparison_rows(&selected, &by_year);

        assert_eq!(rows.len(), 12);
        for (row, expected) in rows.iter().zip(FISCAL_MONTHS) {
            assert_eq!(row.month, expected);
            assert_eq!(row.expenditure.len(), 2);
        }

        assert_eq!(rows[0].expenditure["2023-24"], 310.0);
        assert_eq!(rows[0].expenditure["2024-25"], 322.0);
        // May is present for one year only; the other defaults to zero.
        assert_eq!(rows[1].expenditure["2023-24"], 305.5);
        assert_eq!(rows[1].expenditure["2024-25"], 0.0);
        // Months with no data at all chart as zero across the board.
        assert_eq!(rows[11].expenditure["2023-24"], 0.0);
        assert_eq!(rows[11].expenditure["2024-25"], 0.0);
    }

    #[test]
    fn unselected_years_are_ignored() {
        let mut by_year = BTreeMap::new();
        by_year.insert("2022-23".to_string(), vec![point("Apr", 800_000, 280.0)]);
        by_year.insert("2023-24".to_string(), vec![point("Apr", 900_000, 310.0)]);

        let rows = year_comparison_rows(&["2023-24".to_string()], &by_year);
        assert_eq!(rows[0].expenditure.len(), 1);
        assert!(!rows[0].expenditure.contains_key("2022-23"));
    }

    #[test]
    fn factor_follows_last_digit() {
        assert_eq!(district_factor("0501"), 9); // 1 % 5 + 8
        assert_eq!(district_factor("0510"), 8); // 0 % 5 + 8
        assert_eq!(district_factor("0514"), 12); // 4 % 5 + 8
        assert_eq!(district_factor("0517"), 10); // 7 % 5 + 8
        assert_eq!(district_factor("0529"), 12); // 9 % 5 + 8
    }

    #[test]
    fn derived_series_scales_and_rounds() {
        let base = vec![point("Apr", 900_001, 310.5)];

        // "0514" ends in 4 -> factor 12 -> scale 1.2
        let derived = derive_district_series("0514", &base);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].month, "Apr");
        assert_eq!(derived[0].persondays, 1_080_001); // 900_001 * 1.2 = 1_080_001.2
        assert_eq!(derived[0].expenditure, 373.0); // 310.5 * 1.2 = 372.6
        assert_eq!(derived[0].households, 54_000); // 45_000 * 1.2

        // "0510" ends in 0 -> factor 8 -> scale 0.8
        let derived = derive_district_series("0510", &base);
        assert_eq!(derived[0].persondays, 720_001); // 900_001 * 0.8 = 720_000.8
        assert_eq!(derived[0].expenditure, 248.0); // 310.5 * 0.8 = 248.4
    }
}
