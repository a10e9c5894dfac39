//! Loading Component
//!
//! Full-page spinner and the empty state shown before data arrives.

use leptos::*;

/// Shown while the hosted API spins up
pub const WAKE_UP_MESSAGE: &str = "Waking up the server... (this may take 10s)";

/// Shown in place of a chart with nothing to draw
pub const EMPTY_MESSAGE: &str = "No data yet";

/// Full-page loading spinner
#[component]
pub fn Loading(
    #[prop(default = WAKE_UP_MESSAGE)]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner" />
            <p>{message}</p>
        </div>
    }
}

/// Placeholder for a chart without data
#[component]
pub fn EmptyState(
    /// Height to reserve so the layout does not jump
    height: f64,
) -> impl IntoView {
    view! {
        <div class="empty-state" style=format!("height: {}px", height)>
            <span>{EMPTY_MESSAGE}</span>
        </div>
    }
}
