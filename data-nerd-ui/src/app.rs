//! App Root Component
//!
//! Provides global state, wires the fetch lifecycle to the filter and the
//! viewport, and switches between tabs.

use data_nerd::query::Filter;
use data_nerd::view::Tab;
use leptos::*;

use crate::api;
use crate::components::{ErrorBanner, Loading, Navbar, Sidebar, SidebarOverlay};
use crate::pages::{About, Dashboard, Skills, Trends};
use crate::state::{fetch, provide_global_state, GlobalState};

/// Width assumed when the window cannot be measured
const FALLBACK_WIDTH: f64 = 1024.0;

/// Class on `<body>` that locks scrolling behind the open mobile menu
const MENU_OPEN_CLASS: &str = "menu-open";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state(api::get_dashboard_options(), viewport_width());

    watch_filter(state);
    watch_viewport(state);
    lock_body_scroll(state);

    on_cleanup(move || fetch::abort_all(state));

    view! {
        <div class="app-container">
            <SidebarOverlay />
            <Sidebar />

            <div class="main-panel">
                <Navbar />
                <ErrorBanner />

                <div class="content-wrapper">
                    {move || {
                        if state.spinner_visible() {
                            view! { <Loading /> }.into_view()
                        } else {
                            active_page(state.view.with(|view| view.active_tab))
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

fn active_page(tab: Tab) -> View {
    match tab {
        Tab::Dashboard => view! { <Dashboard /> }.into_view(),
        Tab::Skills => view! { <Skills /> }.into_view(),
        Tab::Trends => view! { <Trends /> }.into_view(),
        Tab::About => view! { <About /> }.into_view(),
    }
}

/// First run loads everything; later runs refetch for the new filter
fn watch_filter(state: GlobalState) {
    create_effect(move |previous: Option<Filter>| {
        let filter = state.filter.get();

        match &previous {
            None => fetch::load_initial(state),
            Some(previous) if previous.differs_from(&filter) => {
                fetch::on_filter_change(state, filter.clone())
            }
            Some(_) => {}
        }

        filter
    });
}

/// Track the mobile breakpoint; data is never touched
fn watch_viewport(state: GlobalState) {
    let handle = window_event_listener(ev::resize, move |_| {
        state.resize(viewport_width());
    });

    on_cleanup(move || handle.remove());
}

/// Mirror the menu state onto `<body>` while the app is mounted
fn lock_body_scroll(state: GlobalState) {
    create_effect(move |_| {
        let locked = state.view.with(|view| view.body_scroll_locked());
        set_body_class(MENU_OPEN_CLASS, locked);
    });

    on_cleanup(|| set_body_class(MENU_OPEN_CLASS, false));
}

fn set_body_class(class: &str, present: bool) {
    if let Some(body) = document().body() {
        let classes = body.class_list();
        let _ = if present {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}
