//! Request lifecycle
//!
//! Every request takes a ticket for its slot and an `AbortController`.
//! Starting a new request in a slot aborts the old one, and a response is
//! applied only while its ticket is still current.

use std::collections::HashMap;

use data_nerd::client::{FetchError, FetchSlot, RequestTracker, Ticket};
use data_nerd::query::{Filter, SkillsQuery};
use data_nerd::view::FetchStrategy;
use leptos::*;
use web_sys::{AbortController, AbortSignal};

use super::global::GlobalState;
use crate::api;

/// Tickets plus abort handles for the in-flight requests
#[derive(Default)]
pub struct FetchGate {
    tracker: RequestTracker,
    controllers: HashMap<FetchSlot, AbortController>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede whatever is in flight for `slot` and start a new request
    pub fn begin(&mut self, slot: FetchSlot) -> (Ticket, Option<AbortSignal>) {
        if let Some(previous) = self.controllers.remove(&slot) {
            previous.abort();
        }

        let ticket = self.tracker.issue(slot);
        let signal = match AbortController::new() {
            Ok(controller) => {
                let signal = controller.signal();
                self.controllers.insert(slot, controller);
                Some(signal)
            }
            // Not fatal: the ticket alone still keeps stale data out
            Err(_) => None,
        };

        (ticket, signal)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.tracker.is_current(ticket)
    }

    /// Drop the abort handle of a request that has settled
    pub fn finish(&mut self, ticket: Ticket) {
        if self.tracker.is_current(ticket) {
            self.controllers.remove(&ticket.slot);
        }
    }

    /// Abort everything, used on unmount
    pub fn abort_all(&mut self) {
        self.tracker.cancel_all();
        for (_, controller) in self.controllers.drain() {
            controller.abort();
        }
    }
}

/// Mount-time load: skills and trends per the strategy, plus momentum
pub fn load_initial(state: GlobalState) {
    let filter = state.filter.get_untracked();

    match state.options.fetch_strategy {
        FetchStrategy::Combined => load_combined(state, filter),
        FetchStrategy::Independent => {
            load_skills(state, filter);
            load_trends(state);
        }
    }

    load_momentum(state);
}

/// A filter changed: exactly one new top-skills request
pub fn on_filter_change(state: GlobalState, filter: Filter) {
    match state.options.fetch_strategy {
        FetchStrategy::Combined => load_combined(state, filter),
        FetchStrategy::Independent => load_skills(state, filter),
    }
}

/// Skills and trends together; neither applies unless both succeed
pub fn load_combined(state: GlobalState, filter: Filter) {
    let Some(((skills_ticket, skills_signal), (trends_ticket, trends_signal))) = state
        .gate
        .try_update_value(|gate| (gate.begin(FetchSlot::Skills), gate.begin(FetchSlot::Trends)))
    else {
        return;
    };

    state.view.update(|view| view.set_loading(true));

    spawn_local(async move {
        let query = SkillsQuery::new(filter);
        let result = futures_util::future::try_join(
            api::fetch_top_skills(&query, skills_signal.as_ref()),
            api::fetch_skill_trends(trends_signal.as_ref()),
        )
        .await;

        if !is_current(state, skills_ticket) || !is_current(state, trends_ticket) {
            return;
        }
        finish(state, skills_ticket);
        finish(state, trends_ticket);

        match result {
            Ok((skills, trends)) => {
                state.skills.set(skills.results);
                state.total_jobs.set(skills.total_jobs);
                state.trends.set(trends);
                state.clear_error();
            }
            Err(e) => report_failure(state, e),
        }

        state.view.update(|view| view.set_loading(false));
    });
}

/// Top skills on their own
pub fn load_skills(state: GlobalState, filter: Filter) {
    let Some((ticket, signal)) = state.gate.try_update_value(|gate| gate.begin(FetchSlot::Skills))
    else {
        return;
    };

    spawn_local(async move {
        let query = SkillsQuery::new(filter);
        let result = api::fetch_top_skills(&query, signal.as_ref()).await;

        if !is_current(state, ticket) {
            return;
        }
        finish(state, ticket);

        match result {
            Ok(response) => {
                state.skills.set(response.results);
                state.total_jobs.set(response.total_jobs);
                state.clear_error();
            }
            Err(e) => report_failure(state, e),
        }
    });
}

/// Trends on their own
pub fn load_trends(state: GlobalState) {
    let Some((ticket, signal)) = state.gate.try_update_value(|gate| gate.begin(FetchSlot::Trends))
    else {
        return;
    };

    spawn_local(async move {
        let result = api::fetch_skill_trends(signal.as_ref()).await;

        if !is_current(state, ticket) {
            return;
        }
        finish(state, ticket);

        match result {
            Ok(trends) => {
                state.trends.set(trends);
                state.clear_error();
            }
            Err(e) => report_failure(state, e),
        }
    });
}

/// Momentum, always its own request
pub fn load_momentum(state: GlobalState) {
    let Some((ticket, signal)) = state
        .gate
        .try_update_value(|gate| gate.begin(FetchSlot::Momentum))
    else {
        return;
    };

    spawn_local(async move {
        let result = api::fetch_momentum(signal.as_ref()).await;

        if !is_current(state, ticket) {
            return;
        }
        finish(state, ticket);

        match result {
            Ok(momentum) => state.momentum.set(momentum),
            Err(e) => report_failure(state, e),
        }
    });
}

/// Abort every in-flight request
pub fn abort_all(state: GlobalState) {
    state.gate.try_update_value(|gate| gate.abort_all());
}

fn is_current(state: GlobalState, ticket: Ticket) -> bool {
    state
        .gate
        .try_with_value(|gate| gate.is_current(ticket))
        .unwrap_or(false)
}

fn finish(state: GlobalState, ticket: Ticket) {
    state.gate.try_update_value(|gate| gate.finish(ticket));
}

/// Log the failure and keep whatever is on screen
fn report_failure(state: GlobalState, error: FetchError) {
    if error.is_cancelled() {
        return;
    }
    web_sys::console::error_1(&format!("Fetch failed: {}", error).into());
    state.show_error(&error.user_message());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_new_request_aborts_previous() {
        let mut gate = FetchGate::new();

        let (first, first_signal) = gate.begin(FetchSlot::Skills);
        let (second, second_signal) = gate.begin(FetchSlot::Skills);

        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
        assert!(first_signal.unwrap().aborted());
        assert!(!second_signal.unwrap().aborted());
    }

    #[wasm_bindgen_test]
    fn test_slots_are_independent() {
        let mut gate = FetchGate::new();

        let (skills, _) = gate.begin(FetchSlot::Skills);
        let (trends, trends_signal) = gate.begin(FetchSlot::Trends);
        gate.begin(FetchSlot::Skills);

        assert!(!gate.is_current(skills));
        assert!(gate.is_current(trends));
        assert!(!trends_signal.unwrap().aborted());
    }

    #[wasm_bindgen_test]
    fn test_abort_all() {
        let mut gate = FetchGate::new();

        let (ticket, signal) = gate.begin(FetchSlot::Momentum);
        gate.abort_all();

        assert!(!gate.is_current(ticket));
        assert!(signal.unwrap().aborted());
    }

    #[wasm_bindgen_test]
    fn test_finish_keeps_ticket_current() {
        let mut gate = FetchGate::new();

        let (ticket, _) = gate.begin(FetchSlot::Trends);
        gate.finish(ticket);

        assert!(gate.is_current(ticket));
    }
}
