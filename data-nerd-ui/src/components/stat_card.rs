//! Stat Card Component
//!
//! One headline number with its label.

use leptos::*;

use crate::state::use_global_state;

/// Stat card component
#[component]
pub fn StatCard(
    /// Caption under the value
    label: &'static str,
    /// Reactive display value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="col-3 card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// The three dashboard stat cards
#[component]
pub fn StatRow() -> impl IntoView {
    let state = use_global_state();
    let summary = create_memo(move |_| state.summary());

    view! {
        <div class="row">
            <StatCard
                label="Total Jobs Analyzed"
                value=Signal::derive(move || summary.with(|s| s.total_jobs_label()))
            />
            <StatCard
                label="Most Demanded Skill"
                value=Signal::derive(move || summary.with(|s| s.top_skill.clone()))
            />
            <StatCard
                label="Peak Salary (Year)"
                value=Signal::derive(move || summary.with(|s| s.peak_salary_label()))
            />
        </div>
    }
}
