//! Terminal rendering of dashboard data
//!
//! Plain-text versions of the stat cards, bar chart, trend chart and
//! momentum panel. Every function returns a `String` so the CLI decides
//! where it goes.

use std::fmt::Write;

use crate::analytics::{
    format_change_percent, format_count, format_salary_k, split_momentum, DashboardSummary,
    MomentumEntry, SkillResult, TrendPoint, TrendSkill,
};
use crate::query::SortBy;

/// Shown in place of an empty chart or table
pub const EMPTY_STATE: &str = "No data yet";

const NAME_WIDTH: usize = 18;

/// The three stat cards
pub fn render_summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<22} {}", "Total Jobs Analyzed", summary.total_jobs_label());
    let _ = writeln!(out, "{:<22} {}", "Most Demanded Skill", summary.top_skill);
    let _ = writeln!(out, "{:<22} {}", "Peak Salary (Year)", summary.peak_salary_label());
    out
}

/// Value label of one bar: demand share or average salary
pub fn value_label(skill: &SkillResult, sort_by: SortBy) -> String {
    match sort_by {
        SortBy::Count => format!("{:.1}%", skill.value),
        SortBy::Salary => format_salary_k(skill.value),
    }
}

/// Horizontal bar chart, bars scaled to the largest value
pub fn render_skill_bars(skills: &[SkillResult], sort_by: SortBy, width: usize) -> String {
    if skills.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let max = skills.iter().map(|s| s.value).fold(0.0_f64, f64::max);
    let mut out = String::new();

    for skill in skills {
        let len = if max > 0.0 {
            ((skill.value.max(0.0) / max) * width as f64).round() as usize
        } else {
            0
        };

        let _ = writeln!(
            out,
            "{:<w$} {:<bar$} {}",
            truncate(&skill.skill_name, NAME_WIDTH),
            "█".repeat(len),
            value_label(skill, sort_by),
            w = NAME_WIDTH,
            bar = width,
        );
    }

    out
}

/// Month-by-month demand table for the charted skills
pub fn render_trend_table(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let mut out = String::new();
    let _ = write!(out, "{:<10}", "Month");
    for skill in TrendSkill::ALL {
        let _ = write!(out, " | {:>8}", skill.key());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "-".repeat(10 + TrendSkill::ALL.len() * 11));

    for point in points {
        let _ = write!(out, "{:<10}", point.month_label());
        for skill in TrendSkill::ALL {
            let _ = write!(out, " | {:>8}", format_count(point.value(skill).max(0.0).round() as u64));
        }
        let _ = writeln!(out);
    }

    out
}

/// Gainers and losers between the two most recent months
pub fn render_momentum(entries: &[MomentumEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let (gainers, losers) = split_momentum(entries);
    let mut out = String::new();

    for (title, rows) in [("Gainers", gainers), ("Losers", losers)] {
        let _ = writeln!(out, "{}", title);
        if rows.is_empty() {
            let _ = writeln!(out, "  -");
        }
        for entry in rows {
            let _ = writeln!(
                out,
                "  {:<w$} {:>8} -> {:<8} {:>8}",
                truncate(&entry.skill_name, NAME_WIDTH),
                format_count(entry.previous_count),
                format_count(entry.current_count),
                format_change_percent(entry.change_percent),
                w = NAME_WIDTH,
            );
        }
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
