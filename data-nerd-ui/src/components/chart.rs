//! Chart Components
//!
//! Horizontal bar chart of top skills and line chart of skill trends, both
//! drawn on HTML5 Canvas. Geometry comes from the shared layout types so
//! the mobile/desktop switch lives in one place.

use data_nerd::analytics::{SkillResult, TrendPoint, TrendSkill};
use data_nerd::view::{bar_color, BarChartLayout, TrendChartLayout, AXIS_COLOR};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::loading::EmptyState;
use crate::state::use_global_state;

const BACKGROUND: &str = "#191c24";
const GRID_COLOR: &str = "#2c2e33";
/// Space reserved for value labels on the trend y axis
const Y_AXIS_WIDTH: f64 = 44.0;
/// Space reserved for month labels under the trend chart
const X_AXIS_HEIGHT: f64 = 24.0;
const Y_TICKS: usize = 4;

/// Top skills as horizontal bars
#[component]
pub fn BarChart(height: f64) -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let is_empty = create_memo(move |_| state.skills.with(Vec::is_empty));

    // Redraw when data, width or layout mode changes
    create_effect(move |_| {
        let _ = state.viewport_width.get();
        let is_mobile = state.view.with(|view| view.is_mobile);
        let layout = BarChartLayout::new(is_mobile, height);

        state.skills.with(|skills| {
            if let Some(canvas) = canvas_ref.get() {
                draw_bar_chart(&canvas, skills, &layout);
            }
        });
    });

    view! {
        <div class="chart" style=format!("height: {}px", height)>
            <Show when=move || !is_empty.get() fallback=move || view! { <EmptyState height=height /> }>
                <canvas node_ref=canvas_ref class="chart-canvas" />
            </Show>
        </div>
    }
}

/// Demand over time for python, sql and aws
#[component]
pub fn TrendChart(
    height: f64,
    /// Axes, thicker lines and point markers
    #[prop(default = false)]
    detailed: bool,
) -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let is_empty = create_memo(move |_| state.trends.with(Vec::is_empty));

    let layout = if detailed {
        TrendChartLayout::detailed(height)
    } else {
        TrendChartLayout::compact(height)
    };

    create_effect(move |_| {
        // Re-measure the canvas whenever the window width changes
        let _ = state.viewport_width.get();

        state.trends.with(|points| {
            if let Some(canvas) = canvas_ref.get() {
                draw_trend_chart(&canvas, points, &layout);
            }
        });
    });

    view! {
        <div class="chart" style=format!("height: {}px", height)>
            <Show when=move || !is_empty.get() fallback=move || view! { <EmptyState height=height /> }>
                <canvas node_ref=canvas_ref class="chart-canvas" />
            </Show>
            <TrendLegend />
        </div>
    }
}

/// Legend showing series colors
#[component]
fn TrendLegend() -> impl IntoView {
    view! {
        <div class="chart-legend">
            {TrendSkill::ALL
                .into_iter()
                .map(|skill| view! {
                    <div class="legend-item">
                        <span class="legend-swatch" style=format!("background-color: {}", skill.color()) />
                        <span>{skill.key()}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Size the canvas to its element and return a cleared 2D context
fn prepare(canvas: &HtmlCanvasElement, height: f64) -> Option<(CanvasRenderingContext2d, f64)> {
    let width = canvas.client_width().max(1) as f64;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    Some((ctx, width))
}

/// Draw the bar chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, skills: &[SkillResult], layout: &BarChartLayout) {
    let Some((ctx, width)) = prepare(canvas, layout.height) else {
        return;
    };
    if skills.is_empty() {
        return;
    }

    let plot_width = layout.plot_width(width);
    let max = skills.iter().map(|s| s.value).fold(0.0, f64::max);
    let row_height = (layout.height - layout.margins.vertical()) / skills.len() as f64;
    let bar_start = layout.margins.left + layout.axis_width;

    ctx.set_font(&format!("{}px sans-serif", layout.tick_font_px));
    ctx.set_text_baseline("middle");

    for (idx, skill) in skills.iter().enumerate() {
        let center = layout.margins.top + row_height * (idx as f64 + 0.5);

        // Category label, right-aligned against the bars
        ctx.set_fill_style(&AXIS_COLOR.into());
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&skill.skill_name, bar_start - 6.0, center);

        let length = layout.bar_length(skill.value, max, plot_width);
        if length <= 0.0 {
            continue;
        }

        let thickness = layout.bar_thickness.min(row_height);
        let top = center - thickness / 2.0;
        let radius = layout.corner_radius.min(length / 2.0).min(thickness / 2.0);

        // Rounded on the value end only
        ctx.set_fill_style(&bar_color(idx).into());
        ctx.begin_path();
        ctx.move_to(bar_start, top);
        ctx.line_to(bar_start + length - radius, top);
        let _ = ctx.arc_to(bar_start + length, top, bar_start + length, top + radius, radius);
        ctx.line_to(bar_start + length, top + thickness - radius);
        let _ = ctx.arc_to(
            bar_start + length,
            top + thickness,
            bar_start + length - radius,
            top + thickness,
            radius,
        );
        ctx.line_to(bar_start, top + thickness);
        ctx.close_path();
        ctx.fill();
    }
}

/// Draw the trend chart on canvas
fn draw_trend_chart(canvas: &HtmlCanvasElement, points: &[TrendPoint], layout: &TrendChartLayout) {
    let Some((ctx, width)) = prepare(canvas, layout.height) else {
        return;
    };
    if points.is_empty() {
        return;
    }

    let y_axis = if layout.show_y_axis { Y_AXIS_WIDTH } else { 0.0 };
    let x_axis = if layout.show_x_axis { X_AXIS_HEIGHT } else { 0.0 };

    let origin_x = layout.margins.left + y_axis;
    let origin_y = layout.margins.top;
    let plot_width = (width - layout.margins.horizontal() - y_axis).max(0.0);
    let plot_height = (layout.height - layout.margins.vertical() - x_axis).max(0.0);
    let max = points.iter().map(TrendPoint::max_value).fold(0.0, f64::max);

    ctx.set_font("12px sans-serif");

    if layout.show_y_axis {
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.set_line_width(1.0);
        ctx.set_fill_style(&AXIS_COLOR.into());
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");

        for i in 0..=Y_TICKS {
            let value = max * i as f64 / Y_TICKS as f64;
            let y = origin_y + layout.y_at(value, max, plot_height);

            ctx.begin_path();
            ctx.move_to(origin_x, y);
            ctx.line_to(origin_x + plot_width, y);
            ctx.stroke();

            let _ = ctx.fill_text(&format!("{:.0}", value), origin_x - 6.0, y);
        }
    }

    if layout.show_x_axis {
        ctx.set_fill_style(&AXIS_COLOR.into());
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");

        // Thin the labels out so they never overlap
        let step = (points.len() / 6).max(1);
        for (idx, point) in points.iter().enumerate().step_by(step) {
            let x = origin_x + layout.x_at(idx, points.len(), plot_width);
            let _ = ctx.fill_text(&point.month_label(), x, origin_y + plot_height + 6.0);
        }
    }

    for skill in TrendSkill::ALL {
        let color = skill.color();
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(layout.stroke_width);
        ctx.begin_path();

        for (idx, point) in points.iter().enumerate() {
            let x = origin_x + layout.x_at(idx, points.len(), plot_width);
            let y = origin_y + layout.y_at(point.value(skill), max, plot_height);

            if idx == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();

        if let Some(radius) = layout.dot_radius {
            ctx.set_fill_style(&color.into());
            for (idx, point) in points.iter().enumerate() {
                let x = origin_x + layout.x_at(idx, points.len(), plot_width);
                let y = origin_y + layout.y_at(point.value(skill), max, plot_height);

                ctx.begin_path();
                let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }
}
