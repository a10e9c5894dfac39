//! Navigation Components
//!
//! Sidebar with the four tabs, the overlay behind it on mobile, and the
//! top bar holding the menu toggle.

use data_nerd::view::Tab;
use leptos::*;

use crate::state::use_global_state;

/// Sidebar navigation; slides in over the content on mobile
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_global_state();

    view! {
        <nav class=move || {
            if state.view.with(|view| view.mobile_menu_open) {
                "sidebar open"
            } else {
                "sidebar"
            }
        }>
            <div class="brand-logo">
                "Data Nerd"
                <span class="brand-tag">"JOB MARKET"</span>
            </div>

            {Tab::ALL
                .into_iter()
                .map(|tab| view! { <NavItem tab=tab /> })
                .collect_view()}
        </nav>
    }
}

/// Individual navigation entry
#[component]
fn NavItem(tab: Tab) -> impl IntoView {
    let state = use_global_state();
    let is_active = create_memo(move |_| state.view.with(|view| view.is_active(tab)));

    view! {
        <div
            class=move || if is_active.get() { "nav-item active" } else { "nav-item" }
            on:click=move |_| state.select_tab(tab)
        >
            <div class="nav-icon">{tab.icon()}</div>
            <span>{tab.label()}</span>
        </div>
    }
}

/// Dimmed backdrop behind the open mobile menu; clicking it closes the menu
#[component]
pub fn SidebarOverlay() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div
            class=move || {
                if state.view.with(|view| view.mobile_menu_open) {
                    "sidebar-overlay active"
                } else {
                    "sidebar-overlay"
                }
            }
            on:click=move |_| state.close_menu()
        />
    }
}

/// Top bar with the menu toggle
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_global_state();

    view! {
        <header class="navbar">
            <button class="menu-toggle" on:click=move |_| state.toggle_menu()>"☰"</button>
            <div class="navbar-status">"Data updated: Live"</div>
        </header>
    }
}
