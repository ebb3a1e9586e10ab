//! Bilingual label tables. Every user-facing string lives here so the
//! language toggle switches the whole surface at once; numeric data is
//! untouched by the toggle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn toggled(self) -> Language {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    pub fn text(self) -> &'static UiText {
        match self {
            Language::English => &EN,
            Language::Hindi => &HI,
        }
    }

    /// Short tag shown on the toggle control.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Hindi => "हि",
        }
    }
}

/// The complete label table for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct UiText {
    pub app_name: &'static str,
    pub tagline: &'static str,

    // Navigation
    pub nav_dashboard: &'static str,
    pub nav_compare: &'static str,
    pub nav_trends: &'static str,
    pub nav_about: &'static str,
    pub nav_settings: &'static str,
    pub not_found: &'static str,

    // Dashboard
    pub select_district: &'static str,
    pub use_my_location: &'static str,
    pub locating: &'static str,
    pub sample_data_notice: &'static str,
    pub monthly_employment: &'static str,
    pub monthly_expenditure: &'static str,
    pub loading_data: &'static str,

    // KPI titles
    pub kpi_job_cards: &'static str,
    pub kpi_active_workers: &'static str,
    pub kpi_households_employed: &'static str,
    pub kpi_persondays: &'static str,
    pub kpi_women_persondays: &'static str,
    pub kpi_avg_days: &'static str,
    pub kpi_works_completed: &'static str,
    pub kpi_expenditure: &'static str,

    // Comparison views
    pub compare_title: &'static str,
    pub first_district: &'static str,
    pub second_district: &'static str,
    pub mock_series_note: &'static str,
    pub trends_title: &'static str,
    pub select_years: &'static str,
    pub expenditure_lakh: &'static str,
    pub persondays_axis: &'static str,
    pub no_years_selected: &'static str,

    // Notices
    pub notice_fetch_failed: &'static str,
    pub notice_geo_unsupported: &'static str,
    pub notice_geo_denied: &'static str,
    pub notice_geocode_failed: &'static str,
    pub notice_no_match: &'static str,
    pub notice_located: &'static str,

    // About page
    pub about_title: &'static str,
    pub about_scheme: &'static str,
    pub about_data: &'static str,

    // Settings page
    pub connection_settings: &'static str,
    pub api_host_label: &'static str,
    pub api_port_label: &'static str,
    pub save_settings: &'static str,
    pub settings_saved: &'static str,
    pub language_label: &'static str,
}

pub const EN: UiText = UiText {
    app_name: "NREGA Darpan",
    tagline: "Rural employment at a glance",

    nav_dashboard: "Dashboard",
    nav_compare: "Compare Districts",
    nav_trends: "State Trends",
    nav_about: "About",
    nav_settings: "Settings",
    not_found: "Page not found",

    select_district: "Select district",
    use_my_location: "Use my location",
    locating: "Locating…",
    sample_data_notice: "Live data unavailable — showing sample figures",
    monthly_employment: "Monthly employment",
    monthly_expenditure: "Monthly expenditure",
    loading_data: "Loading district data…",

    kpi_job_cards: "Job cards issued",
    kpi_active_workers: "Active workers",
    kpi_households_employed: "Households employed",
    kpi_persondays: "Persondays generated",
    kpi_women_persondays: "Women persondays",
    kpi_avg_days: "Avg. days per household",
    kpi_works_completed: "Works completed",
    kpi_expenditure: "Total expenditure",

    compare_title: "District comparison",
    first_district: "First district",
    second_district: "Second district",
    mock_series_note: "Indicative series derived from state averages; per-district history pending",
    trends_title: "State expenditure trends",
    select_years: "Select years",
    expenditure_lakh: "Expenditure (₹ lakh)",
    persondays_axis: "Persondays",
    no_years_selected: "Select at least one year to draw the chart.",

    notice_fetch_failed: "Could not reach the data service. Showing built-in sample data.",
    notice_geo_unsupported: "This browser does not support location access.",
    notice_geo_denied: "Location permission was denied.",
    notice_geocode_failed: "Could not resolve your location. Please pick a district manually.",
    notice_no_match: "No district matched your location. Please pick one manually.",
    notice_located: "Showing your district",

    about_title: "About this dashboard",
    about_scheme: "The Mahatma Gandhi National Rural Employment Guarantee Act entitles every \
rural household to up to 100 days of wage employment in a financial year. This dashboard \
presents district-level performance indicators published under the scheme: job cards, \
persondays of work generated, and expenditure.",
    about_data: "Figures are fetched from the configured public data service when available. \
When the service cannot be reached, the dashboard falls back to built-in sample figures and \
says so. The location shortcut is best-effort; always verify the selected district.",

    connection_settings: "Connection settings",
    api_host_label: "Data service host",
    api_port_label: "Data service port",
    save_settings: "Save",
    settings_saved: "Settings saved. Reload to apply everywhere.",
    language_label: "Language",
};

pub const HI: UiText = UiText {
    app_name: "नरेगा दर्पण",
    tagline: "ग्रामीण रोज़गार एक नज़र में",

    nav_dashboard: "डैशबोर्ड",
    nav_compare: "ज़िला तुलना",
    nav_trends: "राज्य रुझान",
    nav_about: "परिचय",
    nav_settings: "सेटिंग्स",
    not_found: "पृष्ठ नहीं मिला",

    select_district: "ज़िला चुनें",
    use_my_location: "मेरा स्थान उपयोग करें",
    locating: "स्थान खोजा जा रहा है…",
    sample_data_notice: "लाइव डेटा उपलब्ध नहीं — नमूना आँकड़े दिखाए जा रहे हैं",
    monthly_employment: "मासिक रोज़गार",
    monthly_expenditure: "मासिक व्यय",
    loading_data: "ज़िला डेटा लोड हो रहा है…",

    kpi_job_cards: "जारी जॉब कार्ड",
    kpi_active_workers: "सक्रिय श्रमिक",
    kpi_households_employed: "नियोजित परिवार",
    kpi_persondays: "सृजित मानव-दिवस",
    kpi_women_persondays: "महिला मानव-दिवस",
    kpi_avg_days: "प्रति परिवार औसत दिवस",
    kpi_works_completed: "पूर्ण कार्य",
    kpi_expenditure: "कुल व्यय",

    compare_title: "ज़िला तुलना",
    first_district: "पहला ज़िला",
    second_district: "दूसरा ज़िला",
    mock_series_note: "राज्य औसत से व्युत्पन्न सांकेतिक श्रृंखला; ज़िला-वार इतिहास प्रतीक्षित",
    trends_title: "राज्य व्यय रुझान",
    select_years: "वर्ष चुनें",
    expenditure_lakh: "व्यय (₹ लाख)",
    persondays_axis: "मानव-दिवस",
    no_years_selected: "चार्ट के लिए कम से कम एक वर्ष चुनें।",

    notice_fetch_failed: "डेटा सेवा उपलब्ध नहीं है। अंतर्निहित नमूना आँकड़े दिखाए जा रहे हैं।",
    notice_geo_unsupported: "यह ब्राउज़र स्थान की अनुमति नहीं देता।",
    notice_geo_denied: "स्थान की अनुमति अस्वीकार कर दी गई।",
    notice_geocode_failed: "आपका स्थान पहचाना नहीं जा सका। कृपया ज़िला स्वयं चुनें।",
    notice_no_match: "आपके स्थान से कोई ज़िला नहीं मिला। कृपया स्वयं चुनें।",
    notice_located: "आपका ज़िला दिखाया जा रहा है",

    about_title: "इस डैशबोर्ड के बारे में",
    about_scheme: "महात्मा गांधी राष्ट्रीय ग्रामीण रोज़गार गारंटी अधिनियम प्रत्येक ग्रामीण परिवार को \
वित्तीय वर्ष में 100 दिनों तक के मज़दूरी रोज़गार का अधिकार देता है। यह डैशबोर्ड योजना के अंतर्गत \
प्रकाशित ज़िला-स्तरीय संकेतक प्रस्तुत करता है: जॉब कार्ड, सृजित मानव-दिवस और व्यय।",
    about_data: "आँकड़े उपलब्ध होने पर सार्वजनिक डेटा सेवा से लिए जाते हैं। सेवा उपलब्ध न होने पर \
डैशबोर्ड अंतर्निहित नमूना आँकड़ों पर लौट आता है और इसकी सूचना देता है। स्थान शॉर्टकट केवल \
अनुमानित है; चयनित ज़िले की पुष्टि अवश्य करें।",

    connection_settings: "कनेक्शन सेटिंग्स",
    api_host_label: "डेटा सेवा होस्ट",
    api_port_label: "डेटा सेवा पोर्ट",
    save_settings: "सहेजें",
    settings_saved: "सेटिंग्स सहेज ली गईं। सर्वत्र लागू करने हेतु पुनः लोड करें।",
    language_label: "भाषा",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_variants() {
        assert_eq!(Language::English.toggled(), Language::Hindi);
        assert_eq!(Language::Hindi.toggled(), Language::English);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }

    #[test]
    fn labels_switch_with_the_language() {
        let en = Language::English.text();
        let hi = Language::Hindi.text();

        assert_ne!(en.app_name, hi.app_name);
        assert_ne!(en.nav_dashboard, hi.nav_dashboard);
        assert_ne!(en.select_district, hi.select_district);
        assert_ne!(en.kpi_persondays, hi.kpi_persondays);
        assert_ne!(en.sample_data_notice, hi.sample_data_notice);
        assert_ne!(en.notice_fetch_failed, hi.notice_fetch_failed);
        assert_ne!(en.about_scheme, hi.about_scheme);
    }

    #[test]
    fn same_table_for_same_language() {
        assert_eq!(Language::English.text(), Language::English.text());
        assert_eq!(Language::default(), Language::English);
    }
}
