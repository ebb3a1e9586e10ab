use common::compare::year_comparison_rows;
use common::sample::{state_expenditure_by_year, YEAR_KEYS};
use yew::prelude::*;

use crate::context::use_app_context;

use super::chart::TrendsChart;

#[function_component(Trends)]
pub fn trends() -> Html {
    let ctx = use_app_context();
    let text = ctx.text();

    // Default to the two most recent reporting years.
    let selected = use_state(|| {
        YEAR_KEYS[YEAR_KEYS.len() - 2..]
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
    });

    let on_toggle = {
        let selected = selected.clone();
        Callback::from(move |year: String| {
            let mut next = (*selected).clone();
            if let Some(pos) = next.iter().position(|y| y == &year) {
                next.remove(pos);
            } else {
                next.push(year);
                next.sort();
            }
            log::debug!("Selected years: {:?}", next);
            selected.set(next);
        })
    };

    let rows = year_comparison_rows(&selected, &state_expenditure_by_year());

    html! {
        <>
            <div class="card bg-base-100 shadow">
                <div class="card-body py-4">
                    <span class="label-text font-semibold">{text.select_years}</span>
                    <div class="flex flex-wrap gap-4 mt-2">
                        {for YEAR_KEYS.iter().map(|&year| {
                            let checked = selected.iter().any(|y| y == year);
                            let onchange = {
                                let on_toggle = on_toggle.clone();
                                Callback::from(move |_| on_toggle.emit(year.to_string()))
                            };
                            html! {
                                <label class="label cursor-pointer gap-2">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-primary checkbox-sm"
                                        checked={checked}
                                        onchange={onchange}
                                    />
                                    <span class="label-text">{year}</span>
                                </label>
                            }
                        })}
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{text.trends_title}</h2>
                    {if selected.is_empty() {
                        html! {
                            <div class="alert alert-info">
                                <i class="fas fa-info-circle"></i>
                                <span>{text.no_years_selected}</span>
                            </div>
                        }
                    } else {
                        html! { <TrendsChart rows={rows} years={(*selected).clone()} /> }
                    }}
                </div>
            </div>
        </>
    }
}
