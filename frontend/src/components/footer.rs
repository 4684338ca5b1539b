//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center text-muted small my-5">
            "Scores are estimates from stylistic features and are never proof of authorship. Powered by "
            <span class="badge bg-secondary">"🦀 Rust + Leptos"</span>
        </footer>
    }
}
