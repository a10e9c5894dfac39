//! Analytics API access for the browser

pub mod client;

pub use client::{
    fetch_momentum, fetch_skill_trends, fetch_top_skills, get_api_base, get_dashboard_options,
    set_api_base, set_fetch_strategy,
};
