//! Top Skills Page

use data_nerd::view::SKILLS_CHART_HEIGHT;
use leptos::*;

use crate::components::{BarChart, FilterBar};

/// Taller version of the dashboard bar chart
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="card card-tall">
            <div class="card-title">
                <h2>"Detailed Skill Analysis"</h2>
                <FilterBar />
            </div>
            <BarChart height=SKILLS_CHART_HEIGHT />
        </div>
    }
}
