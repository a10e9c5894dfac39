//! Filter Bar Component
//!
//! Role and country selectors for the top-skills chart.

use data_nerd::query::{FilterOption, COUNTRY_OPTIONS, JOB_TITLE_OPTIONS};
use leptos::*;

use crate::state::use_global_state;

/// Job title and country selects
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_global_state();

    let job_title = Signal::derive(move || state.filter.with(|f| f.job_title.clone()));
    let country = Signal::derive(move || state.filter.with(|f| f.country.clone()));

    view! {
        <div class="filter-bar">
            <FilterSelect
                options=&JOB_TITLE_OPTIONS
                selected=job_title
                on_change=Callback::new(move |value: String| {
                    state.set_job_title(value);
                })
            />
            <FilterSelect
                options=&COUNTRY_OPTIONS
                selected=country
                on_change=Callback::new(move |value: String| {
                    state.set_country(value);
                })
            />
        </div>
    }
}

#[component]
fn FilterSelect(
    options: &'static [FilterOption],
    #[prop(into)]
    selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || selected.get()
            on:change=move |ev| on_change.call(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|option| view! {
                    <option value=option.value>{option.label}</option>
                })
                .collect_view()}
        </select>
    }
}
