//! Derived dashboard metrics
//!
//! Pure projections of the fetched data. They are cheap enough to recompute
//! on every render, so nothing here is cached.

use serde::Serialize;

use super::types::{MomentumEntry, SkillResult};

/// Shown in place of the top skill when no rows have loaded
pub const NO_TOP_SKILL: &str = "N/A";

/// Name of the most demanded skill (the first row, in server order)
pub fn top_skill(results: &[SkillResult]) -> Option<&str> {
    results.first().map(|row| row.skill_name.as_str())
}

/// Top skill name, or [`NO_TOP_SKILL`] for an empty result set
pub fn top_skill_label(results: &[SkillResult]) -> &str {
    top_skill(results).unwrap_or(NO_TOP_SKILL)
}

/// Highest average salary across rows; missing salaries count as 0
pub fn peak_salary(results: &[SkillResult]) -> f64 {
    results
        .iter()
        .map(|row| row.avg_salary.unwrap_or(0.0))
        .fold(0.0, f64::max)
}

/// Salary in thousands, rounded half away from zero: `$120k`
pub fn format_salary_k(salary: f64) -> String {
    format!("${:.0}k", (salary / 1000.0).round())
}

/// Integer with thousands separators: `12,345`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Percentage change with an explicit sign: `+12.5%`
pub fn format_change_percent(change: f64) -> String {
    format!("{:+.1}%", change)
}

/// Split momentum rows into gainers and losers, keeping server order
pub fn split_momentum(entries: &[MomentumEntry]) -> (Vec<&MomentumEntry>, Vec<&MomentumEntry>) {
    let gainers = entries.iter().filter(|e| e.change_percent > 0.0).collect();
    let losers = entries.iter().filter(|e| e.change_percent < 0.0).collect();
    (gainers, losers)
}

/// Values of the three headline stat cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_jobs: u64,
    pub top_skill: String,
    pub peak_salary: f64,
}

impl DashboardSummary {
    /// Compute the summary from the current result set
    pub fn from_results(results: &[SkillResult], total_jobs: u64) -> Self {
        Self {
            total_jobs,
            top_skill: top_skill_label(results).to_string(),
            peak_salary: peak_salary(results),
        }
    }

    /// "Total Jobs Analyzed" card value
    pub fn total_jobs_label(&self) -> String {
        format_count(self.total_jobs)
    }

    /// "Peak Salary (Year)" card value
    pub fn peak_salary_label(&self) -> String {
        format_salary_k(self.peak_salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(salaries: &[Option<f64>]) -> Vec<SkillResult> {
        salaries
            .iter()
            .enumerate()
            .map(|(i, salary)| {
                let row = SkillResult::new(format!("skill-{}", i), 10.0);
                match salary {
                    Some(s) => row.salary(*s),
                    None => row,
                }
            })
            .collect()
    }

    #[test]
    fn test_top_skill_is_first_row() {
        let results = vec![
            SkillResult::new("sql", 51.2),
            SkillResult::new("python", 60.0),
        ];
        assert_eq!(top_skill(&results), Some("sql"));
        assert_eq!(top_skill_label(&results), "sql");
    }

    #[test]
    fn test_top_skill_sentinel_when_empty() {
        assert_eq!(top_skill(&[]), None);
        assert_eq!(top_skill_label(&[]), NO_TOP_SKILL);
    }

    #[test]
    fn test_peak_salary() {
        let results = rows(&[Some(50000.0), Some(120000.0), Some(90000.0)]);
        assert_eq!(peak_salary(&results), 120000.0);
        assert_eq!(format_salary_k(peak_salary(&results)), "$120k");
    }

    #[test]
    fn test_peak_salary_missing_values() {
        assert_eq!(peak_salary(&[]), 0.0);
        assert_eq!(peak_salary(&rows(&[None, None])), 0.0);
        assert_eq!(peak_salary(&rows(&[None, Some(75000.0)])), 75000.0);
        assert_eq!(format_salary_k(0.0), "$0k");
    }

    #[test]
    fn test_format_salary_rounding() {
        assert_eq!(format_salary_k(97499.0), "$97k");
        assert_eq!(format_salary_k(97500.0), "$98k");
        assert_eq!(format_salary_k(102_300.5), "$102k");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_change_percent() {
        assert_eq!(format_change_percent(12.5), "+12.5%");
        assert_eq!(format_change_percent(-3.0), "-3.0%");
    }

    #[test]
    fn test_split_momentum() {
        let entry = |name: &str, change: f64| MomentumEntry {
            skill_name: name.to_string(),
            current_count: 100,
            previous_count: 90,
            change_percent: change,
        };
        let entries = vec![entry("python", 20.0), entry("excel", -15.0), entry("sql", 0.0)];

        let (gainers, losers) = split_momentum(&entries);
        assert_eq!(gainers.len(), 1);
        assert_eq!(gainers[0].skill_name, "python");
        assert_eq!(losers.len(), 1);
        assert_eq!(losers[0].skill_name, "excel");
    }

    #[test]
    fn test_summary() {
        let mut results = rows(&[Some(50000.0), Some(120000.0), Some(90000.0)]);
        results[0].skill_name = "sql".to_string();

        let summary = DashboardSummary::from_results(&results, 25_000);
        assert_eq!(summary.top_skill, "sql");
        assert_eq!(summary.total_jobs_label(), "25,000");
        assert_eq!(summary.peak_salary_label(), "$120k");

        let empty = DashboardSummary::from_results(&[], 0);
        assert_eq!(empty.top_skill, NO_TOP_SKILL);
        assert_eq!(empty.peak_salary_label(), "$0k");
    }
}
