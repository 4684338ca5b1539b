//! Code Detector - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a source file and showing how
//! likely it is to be AI-generated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadWidget                                                │
//! │  ├── drop zone + file input + submit                        │
//! │  ├── AlertStack (error banners)                             │
//! │  └── ResultPanel (probability bar, reasoning)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Response payload, score levels, errors
//! - [`state`] - Upload state machine and render function
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // API
    UploadResult,
    // Score
    ProbabilityLevel,
    // Errors
    AppError, AppResult,
};

pub use state::{StagedFile, SubmitError, UploadState, WidgetView, ResultView};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application.
pub fn start() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    if let Err(e) = mount_app() {
        log::error!("❌ Cannot start: {}", e);
    }
}

/// Mount [`App`] into the host element `#app`.
pub fn mount_app() -> AppResult<()> {
    let host = host_element(MOUNT_ELEMENT_ID)?;
    mount_to(host, || view! { <App/> });
    Ok(())
}

fn host_element(id: &str) -> AppResult<web_sys::HtmlElement> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::WrongElement {
            id: id.to_string(),
            expected: "HTMLElement",
        })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main class="container" style="max-width: 720px;">
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Hero/>
        <UploadWidget/>
        <Footer/>
    }
}
