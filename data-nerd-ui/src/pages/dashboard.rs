//! Dashboard Page
//!
//! Stat cards, the filtered top-skills chart and a compact trend chart.

use data_nerd::view::DASHBOARD_CHART_HEIGHT;
use leptos::*;

use crate::components::{BarChart, FilterBar, StatRow, TrendChart};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <StatRow />

        <div class="row">
            <div class="col-8 card">
                <div class="card-title">
                    <span>"Market Demand (Volume)"</span>
                    <FilterBar />
                </div>
                <BarChart height=DASHBOARD_CHART_HEIGHT />
            </div>

            <div class="col-4 card">
                <div class="card-title">"Trend History"</div>
                <TrendChart height=DASHBOARD_CHART_HEIGHT />
            </div>
        </div>
    }
}
