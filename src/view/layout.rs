//! Chart layout derived from the viewport
//!
//! Only presentation parameters live here. Recomputing a layout never
//! touches the data being drawn.

use serde::Serialize;

/// Viewports narrower than this are laid out for phones
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Bar chart height on the dashboard tab
pub const DASHBOARD_CHART_HEIGHT: f64 = 400.0;
/// Bar chart height on the top-skills tab
pub const SKILLS_CHART_HEIGHT: f64 = 600.0;

/// Alternating bar fills
pub const BAR_COLORS: [&str; 2] = ["#0090e7", "#00d25b"];

/// Muted text colour used for axes and ticks
pub const AXIS_COLOR: &str = "#6c7293";

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

/// Fill colour of the bar at `index`
pub fn bar_color(index: usize) -> &'static str {
    BAR_COLORS[index % BAR_COLORS.len()]
}

/// Space reserved around a plot area, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Horizontal bar chart of skills
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarChartLayout {
    pub height: f64,
    pub margins: Margins,
    /// Width of the skill-name axis
    pub axis_width: f64,
    pub tick_font_px: f64,
    pub bar_thickness: f64,
    /// Radius of the bar's rounded end
    pub corner_radius: f64,
}

impl BarChartLayout {
    pub fn new(is_mobile: bool, height: f64) -> Self {
        let margins = if is_mobile {
            Margins::default()
        } else {
            Margins {
                left: 40.0,
                right: 20.0,
                ..Default::default()
            }
        };

        Self {
            height,
            margins,
            axis_width: if is_mobile { 70.0 } else { 100.0 },
            tick_font_px: if is_mobile { 11.0 } else { 13.0 },
            bar_thickness: 18.0,
            corner_radius: 4.0,
        }
    }

    /// Pixel length of a bar for `value` when the largest value is `max`
    pub fn bar_length(&self, value: f64, max: f64, plot_width: f64) -> f64 {
        if max <= 0.0 || value <= 0.0 || plot_width <= 0.0 {
            return 0.0;
        }
        (value / max).min(1.0) * plot_width
    }

    /// Width left for bars once margins and the name axis are taken
    pub fn plot_width(&self, total_width: f64) -> f64 {
        (total_width - self.margins.horizontal() - self.axis_width).max(0.0)
    }
}

/// Line chart of skill trends
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendChartLayout {
    pub height: f64,
    pub margins: Margins,
    pub stroke_width: f64,
    /// Point markers; `None` draws bare lines
    pub dot_radius: Option<f64>,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
}

impl TrendChartLayout {
    /// Small chart beside the bar chart on the dashboard tab
    pub fn compact(height: f64) -> Self {
        Self {
            height,
            margins: Margins {
                top: 5.0,
                right: 5.0,
                bottom: 5.0,
                left: 5.0,
            },
            stroke_width: 2.0,
            dot_radius: None,
            show_x_axis: false,
            show_y_axis: false,
        }
    }

    /// Full chart on the trends tab
    pub fn detailed(height: f64) -> Self {
        Self {
            height,
            margins: Margins {
                top: 20.0,
                right: 30.0,
                bottom: 5.0,
                left: 20.0,
            },
            stroke_width: 3.0,
            dot_radius: Some(4.0),
            show_x_axis: true,
            show_y_axis: true,
        }
    }

    /// X position of point `index` out of `count`, spread across `plot_width`
    pub fn x_at(&self, index: usize, count: usize, plot_width: f64) -> f64 {
        if count <= 1 {
            return plot_width / 2.0;
        }
        index as f64 / (count - 1) as f64 * plot_width
    }

    /// Y offset from the plot top for `value` on a `0..=max` scale
    pub fn y_at(&self, value: f64, max: f64, plot_height: f64) -> f64 {
        if max <= 0.0 {
            return plot_height;
        }
        plot_height - (value / max).clamp(0.0, 1.0) * plot_height
    }
}
