//! Score panel: colored probability bar, percentage and reasoning.

use leptos::*;

use super::visibility_class;
use crate::state::ResultView;

#[component]
pub fn ResultPanel(result: Memo<Option<ResultView>>) -> impl IntoView {
    let visible = move || result.with(Option::is_some);
    let field = move |read: fn(&ResultView) -> Option<String>| {
        move || result.with(|r| r.as_ref().and_then(read))
    };

    let analyzed_file = field(|r| r.analyzed_file.clone());
    let label = field(|r| Some(r.label.clone()));
    let reasoning = field(|r| r.reasoning.clone());

    let bar_class = move || {
        let level = result.with(|r| r.as_ref().map(|r| r.level.css_class()));
        format!("progress-bar {}", level.unwrap_or_default())
    };
    let bar_style = move || {
        let width = result.with(|r| r.as_ref().map_or(0.0, |r| r.width));
        format!("width: {}%;", width)
    };

    view! {
        <div id="result" class=move || visibility_class("card mt-4", visible())>
            <div class="card-body">
                <Show
                    when=move || analyzed_file().is_some()
                    fallback=|| view! { }
                >
                    <h5 class="card-title">"Analysis of " {analyzed_file}</h5>
                </Show>
                <p class="mb-1">"AI-generated probability"</p>
                <div class="progress mb-2">
                    <div id="probabilityBar" class=bar_class style=bar_style role="progressbar"></div>
                </div>
                <p id="probabilityValue" class="fw-bold">{label}</p>
                <div class=move || visibility_class("mt-3", reasoning().is_some())>
                    <h6>"Reasoning"</h6>
                    <p id="reasoningText" style="white-space: pre-line;">{reasoning}</p>
                </div>
            </div>
        </div>
    }
}
