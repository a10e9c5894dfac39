//! Error Banner Component
//!
//! Shows the last fetch failure above the content. The data already on
//! screen stays where it is.

use leptos::*;

use crate::state::use_global_state;

/// Dismissable error banner
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_global_state();

    view! {
        {move || {
            state.error.get().map(|message| view! {
                <div class="error-banner" role="alert">
                    <span class="error-icon">"✕"</span>
                    <span class="error-message">{message}</span>
                    <button class="error-dismiss" on:click=move |_| state.clear_error()>
                        "Dismiss"
                    </button>
                </div>
            })
        }}
    }
}
