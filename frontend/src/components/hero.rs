//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="text-center my-5">
            <h1>{APP_NAME}</h1>
            <p class="lead text-muted">
                "Upload a source file to estimate how likely it is to be AI-generated."
            </p>
        </div>
    }
}
