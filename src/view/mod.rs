//! View Model
//!
//! Tab selection, mobile menu, loading flag and viewport-dependent layout.
//! Shared by the WASM dashboard and the native controller.

mod layout;
mod options;
mod state;

pub use layout::{
    bar_color, is_mobile_width, BarChartLayout, Margins, TrendChartLayout, AXIS_COLOR,
    BAR_COLORS, DASHBOARD_CHART_HEIGHT, MOBILE_BREAKPOINT_PX, SKILLS_CHART_HEIGHT,
};
pub use options::{DashboardOptions, FetchStrategy};
pub use state::{Tab, ViewState};
