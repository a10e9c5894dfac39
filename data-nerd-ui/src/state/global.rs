//! Global Application State
//!
//! Reactive state management using Leptos signals. Components read the
//! signals directly but change them only through the methods below.

use data_nerd::analytics::{DashboardSummary, MomentumEntry, SkillResult, TrendPoint};
use data_nerd::query::Filter;
use data_nerd::view::{DashboardOptions, Tab, ViewState};
use leptos::*;

use super::fetch::FetchGate;

/// How long an error banner stays up before dismissing itself
const ERROR_DISMISS_MS: u32 = 8000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Active role / country filter
    pub filter: RwSignal<Filter>,
    /// Top skills for the active filter, in server order
    pub skills: RwSignal<Vec<SkillResult>>,
    /// Postings behind the current skill set
    pub total_jobs: RwSignal<u64>,
    /// Monthly demand, oldest first
    pub trends: RwSignal<Vec<TrendPoint>>,
    pub momentum: RwSignal<Vec<MomentumEntry>>,
    /// Tab, mobile menu, viewport and loading flag
    pub view: RwSignal<ViewState>,
    /// Current window width; charts redraw on every change
    pub viewport_width: RwSignal<f64>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    pub options: DashboardOptions,
    /// In-flight request bookkeeping
    pub gate: StoredValue<FetchGate>,
}

/// Provide global state to the component tree
pub fn provide_global_state(options: DashboardOptions, viewport_width: f64) -> GlobalState {
    let state = GlobalState::new(options, viewport_width);
    provide_context(state);
    state
}

/// Fetch the state provided by [`provide_global_state`]
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    pub fn new(options: DashboardOptions, viewport_width: f64) -> Self {
        Self {
            filter: create_rw_signal(Filter::default()),
            skills: create_rw_signal(Vec::new()),
            total_jobs: create_rw_signal(0),
            trends: create_rw_signal(Vec::new()),
            momentum: create_rw_signal(Vec::new()),
            view: create_rw_signal(ViewState::for_viewport(viewport_width)),
            viewport_width: create_rw_signal(viewport_width),
            error: create_rw_signal(None),
            options,
            gate: store_value(FetchGate::new()),
        }
    }

    /// Change the job title; returns false when nothing changed
    pub fn set_job_title(&self, job_title: String) -> bool {
        let next = self.filter.get_untracked().with_job_title(job_title);
        self.set_filter(next)
    }

    /// Change the country; returns false when nothing changed
    pub fn set_country(&self, country: String) -> bool {
        let next = self.filter.get_untracked().with_country(country);
        self.set_filter(next)
    }

    fn set_filter(&self, next: Filter) -> bool {
        let changed = self.filter.with_untracked(|current| current.differs_from(&next));
        if changed {
            self.filter.set(next);
        }
        changed
    }

    pub fn select_tab(&self, tab: Tab) {
        self.view.update(|view| view.select_tab(tab));
    }

    pub fn toggle_menu(&self) {
        self.view.update(|view| view.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.view.update(|view| view.close_menu());
    }

    /// Viewport resized; the view state only changes when the mode flips
    pub fn resize(&self, width: f64) {
        if self.viewport_width.get_untracked() != width {
            self.viewport_width.set(width);
        }

        let mut next = self.view.get_untracked();
        if next.resize(width) {
            self.view.set(next);
        }
    }

    /// Values of the stat cards
    pub fn summary(&self) -> DashboardSummary {
        let total_jobs = self.total_jobs.get();
        self.skills
            .with(|skills| DashboardSummary::from_results(skills, total_jobs))
    }

    /// Whether the full-page spinner replaces the content
    pub fn spinner_visible(&self) -> bool {
        self.view.with(|view| self.options.spinner_visible(view))
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        let shown = message.to_string();
        gloo_timers::callback::Timeout::new(ERROR_DISMISS_MS, move || {
            // A newer message gets its own full timeout
            if error_signal.try_get_untracked().flatten().as_deref() == Some(shown.as_str()) {
                error_signal.try_set(None);
            }
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        if self.error.with_untracked(Option::is_some) {
            self.error.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_within_desktop_updates_width_only() {
        let runtime = create_runtime();
        let state = GlobalState::new(DashboardOptions::default(), 1280.0);
        state.skills.set(vec![SkillResult::new("sql", 51.2)]);
        let view_before = state.view.get_untracked();

        state.resize(1024.0);
        assert_eq!(state.viewport_width.get_untracked(), 1024.0);
        assert_eq!(state.view.get_untracked(), view_before);

        state.resize(500.0);
        assert_eq!(state.viewport_width.get_untracked(), 500.0);
        assert!(state.view.with_untracked(|view| view.is_mobile));
        assert_eq!(state.skills.with_untracked(Vec::len), 1);

        runtime.dispose();
    }
}
