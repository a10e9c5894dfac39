//! About Page
//!
//! What the dashboard is, how the data is produced, and where it comes from.

use data_nerd::view::FetchStrategy;
use leptos::*;

use crate::api;
use crate::state::{fetch, use_global_state};

const TECH_STACK: [(&str, &str); 5] = [
    ("Rust", "#0090e7"),
    ("Leptos (WASM)", "#00d25b"),
    ("FastAPI", "#fc424a"),
    ("PostgreSQL", "#8f5fe8"),
    ("Render Cloud", "#ffffff"),
];

/// About page component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about">
            <div class="row">
                <div class="col-8 card card-text">
                    <h2>"About Data Nerd"</h2>
                    <p>
                        <strong>"Data Nerd"</strong>
                        " is a market intelligence dashboard for data professionals. It shows \
                         which skills job postings actually ask for, and what they pay."
                    </p>

                    <h3 class="accent-blue">"How it Works"</h3>
                    <ul>
                        <li><strong>"Data Aggregation: "</strong>"Job postings are collected from major platforms."</li>
                        <li><strong>"Skill Extraction: "</strong>"Descriptions are parsed for technical keywords such as Python or AWS."</li>
                        <li><strong>"Live Visualization: "</strong>"An analytics API serves the aggregates to this dashboard."</li>
                    </ul>

                    <h3 class="accent-green">"Purpose"</h3>
                    <p>
                        "Helps students and professionals prioritise what to learn next based on \
                         posting volume and salary data rather than hype."
                    </p>
                </div>

                <div class="col-4 card">
                    <DataSource />
                    <LoadingMode />
                </div>
            </div>

            <div class="card">
                <h4 class="stack-title">"Technology Stack"</h4>
                <div class="stack">
                    {TECH_STACK
                        .into_iter()
                        .map(|(name, color)| view! {
                            <span class="stack-chip" style=format!("border-color: {0}; color: {0}", color)>
                                {name}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Analytics API URL, stored in local storage
#[component]
fn DataSource() -> impl IntoView {
    let state = use_global_state();
    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (invalid, set_invalid) = create_signal(false);

    let save_url = move |_| match api::set_api_base(&api_url.get_untracked()) {
        Ok(()) => {
            set_invalid.set(false);
            set_api_url.set(api::get_api_base());
            // Everything on screen came from the old source
            fetch::load_initial(state);
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Rejected API URL: {}", e).into());
            set_invalid.set(true);
        }
    };

    view! {
        <h4 class="source-title">"Data Source"</h4>
        <p class="source-help">"Analytics API the dashboard reads from."</p>
        <input
            type="text"
            class=move || if invalid.get() { "source-input invalid" } else { "source-input" }
            prop:value=move || api_url.get()
            on:input=move |ev| set_api_url.set(event_target_value(&ev))
        />
        <button class="source-save" on:click=save_url>"Save & Reload"</button>
        {move || invalid.get().then(|| view! {
            <p class="source-error">"Enter an http(s) URL, e.g. https://data-nerd-api.onrender.com"</p>
        })}
    }
}

/// Combined (spinner) or independent loading, stored for the next visit
#[component]
fn LoadingMode() -> impl IntoView {
    let state = use_global_state();
    let (saved, set_saved) = create_signal(false);
    let current = state.options.fetch_strategy;

    let on_change = move |ev| {
        match event_target_value(&ev).parse::<FetchStrategy>() {
            Ok(strategy) => {
                api::set_fetch_strategy(strategy);
                set_saved.set(strategy != current);
            }
            Err(e) => web_sys::console::warn_1(&e.into()),
        }
    };

    view! {
        <h4 class="source-title">"Loading Mode"</h4>
        <select class="source-input" on:change=on_change>
            <option value="combined" selected=current == FetchStrategy::Combined>
                "Combined (wait for all data)"
            </option>
            <option value="independent" selected=current == FetchStrategy::Independent>
                "Independent (show data as it arrives)"
            </option>
        </select>
        {move || saved.get().then(|| view! {
            <p class="source-help">"Applies the next time the dashboard loads."</p>
        })}
    }
}
