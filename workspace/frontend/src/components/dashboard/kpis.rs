use common::format::{format_decimal, format_lakh, format_magnitude, format_percent};
use common::DistrictKpis;
use yew::prelude::*;

use crate::context::use_app_context;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kpis: DistrictKpis,
}

#[function_component(KpiCards)]
pub fn kpi_cards(props: &Props) -> Html {
    let ctx = use_app_context();
    let text = ctx.text();
    let kpis = &props.kpis;

    let card = |title: &'static str, value: String, icon: &'static str| {
        html! {
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary"><i class={classes!("fas", icon, "text-2xl")}></i></div>
                    <div class="stat-title">{title}</div>
                    <div class="stat-value text-lg">{value}</div>
                </div>
            </div>
        }
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            {card(text.kpi_job_cards, format_magnitude(kpis.job_cards_issued), "fa-id-card")}
            {card(text.kpi_active_workers, format_magnitude(kpis.active_workers), "fa-person-digging")}
            {card(text.kpi_households_employed, format_magnitude(kpis.households_employed), "fa-house-user")}
            {card(text.kpi_persondays, format_magnitude(kpis.persondays_generated), "fa-calendar-days")}
            {card(text.kpi_women_persondays, format_percent(kpis.women_persondays_pct), "fa-person-dress")}
            {card(text.kpi_avg_days, format_decimal(kpis.avg_days_per_household), "fa-gauge")}
            {card(text.kpi_works_completed, format_magnitude(kpis.works_completed), "fa-check-double")}
            {card(text.kpi_expenditure, format_lakh(kpis.total_expenditure), "fa-indian-rupee-sign")}
        </div>
    }
}
