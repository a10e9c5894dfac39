//! Market Trends Page
//!
//! Detailed trend chart plus the month-over-month momentum panel.

use data_nerd::analytics::{format_change_percent, format_count, split_momentum, MomentumEntry};
use leptos::*;

use crate::components::TrendChart;
use crate::state::use_global_state;

const TRENDS_CHART_HEIGHT: f64 = 520.0;

/// Market trends page component
#[component]
pub fn Trends() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title"><h2>"Historical Market Trends"</h2></div>
            <TrendChart height=TRENDS_CHART_HEIGHT detailed=true />
        </div>

        <MomentumPanel />
    }
}

/// Gainers and losers between the two most recent months
#[component]
fn MomentumPanel() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="row">
            {move || {
                state.momentum.with(|entries| {
                    if entries.is_empty() {
                        return view! {
                            <div class="card momentum-empty">"No momentum data yet"</div>
                        }
                        .into_view();
                    }

                    let (gainers, losers) = split_momentum(entries);
                    view! {
                        <MomentumList title="Gaining Demand" entries=gainers.into_iter().cloned().collect() />
                        <MomentumList title="Losing Demand" entries=losers.into_iter().cloned().collect() />
                    }
                    .into_view()
                })
            }}
        </div>
    }
}

#[component]
fn MomentumList(title: &'static str, entries: Vec<MomentumEntry>) -> impl IntoView {
    view! {
        <div class="col-6 card">
            <div class="card-title">{title}</div>
            {if entries.is_empty() {
                view! { <p class="momentum-none">"None this month"</p> }.into_view()
            } else {
                entries
                    .into_iter()
                    .map(|entry| {
                        let class = if entry.change_percent > 0.0 {
                            "momentum-change up"
                        } else {
                            "momentum-change down"
                        };
                        view! {
                            <div class="momentum-row">
                                <span class="momentum-skill">{entry.skill_name}</span>
                                <span class="momentum-counts">
                                    {format!(
                                        "{} → {}",
                                        format_count(entry.previous_count),
                                        format_count(entry.current_count)
                                    )}
                                </span>
                                <span class=class>{format_change_percent(entry.change_percent)}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
