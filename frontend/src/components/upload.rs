//! File upload widget with drag & drop support.
//!
//! Handles file selection, the single-flight upload to the backend, and
//! rendering of the score or the error.

use leptos::html::Input;
use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, SubmitEvent};

use super::{raise_alert, visibility_class, AlertStack, Alerts, ResultPanel};
use crate::config::UPLOAD_ENDPOINT;
use crate::services::upload_file;
use crate::state::{SubmitError, UploadState, WidgetView};
use crate::types::format_percent;

#[component]
pub fn UploadWidget() -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::Idle);
    let alerts = create_rw_signal(Alerts::default());
    let (highlighted, set_highlighted) = create_signal(false);
    let file_input = create_node_ref::<Input>();

    let view_state = create_memo(move |_| state.with(WidgetView::from_state));
    let result = create_memo(move |_| view_state.with(|v| v.result.clone()));

    // a file dropped outside the zone must not navigate the page away
    let page_listeners = [
        window_event_listener(ev::dragenter, suppress_default),
        window_event_listener(ev::dragover, suppress_default),
        window_event_listener(ev::dragleave, suppress_default),
        window_event_listener(ev::drop, suppress_default),
    ];
    on_cleanup(move || page_listeners.into_iter().for_each(|handle| handle.remove()));

    let stage = move |files: Option<FileList>| {
        let Some(files) = files else {
            return;
        };
        let offered = files.length();
        let staged = state
            .try_update(|s| s.select(files_in(&files)))
            .unwrap_or(false);

        if staged {
            if let Some(file) = files.get(0) {
                log::info!("📄 Staged {} ({} offered)", file.name(), offered);
            }
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        suppress_default(ev);
        set_highlighted.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        suppress_default(ev);
        set_highlighted.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_highlighted.set(false);
        stage(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        stage(input.files());
    };

    let on_browse = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(started) = state.try_update(|s| s.begin_submit()) else {
            return;
        };

        match started {
            Ok(file) => {
                log::info!("📤 Uploading {}...", file.name());
                spawn_local(async move {
                    let outcome = upload_file(&file, UPLOAD_ENDPOINT).await;
                    match &outcome {
                        Ok(result) => log::info!(
                            "✅ {} scored {}",
                            file.name(),
                            format_percent(result.probability())
                        ),
                        Err(e) => {
                            log::error!("❌ Upload failed: {}", e);
                            raise_alert(alerts, e.user_message());
                        }
                    }
                    state.update(|s| {
                        s.finish(outcome);
                    });
                });
            }
            Err(SubmitError::InFlight) => log::debug!("Upload already in flight, submit ignored"),
            Err(e) => raise_alert(alerts, e.to_string()),
        }
    };

    view! {
        <div class="card shadow-sm">
            <div class="card-body">
                <form id="uploadForm" on:submit=on_submit>
                    <div
                        id="dropZone"
                        class=move || drop_zone_class(highlighted.get())
                        on:dragenter=on_drag_over
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <p class="mb-2">"Drag and drop a source file here"</p>
                        <p class="text-muted mb-2">"or"</p>
                        <button
                            type="button"
                            id="browseButton"
                            class="btn btn-outline-primary"
                            on:click=on_browse
                        >
                            "Browse files"
                        </button>
                        <input
                            type="file"
                            id="fileInput"
                            class="d-none"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                    </div>

                    <div
                        id="fileInfo"
                        class=move || visibility_class("mt-3", view_state.with(|v| v.file_name.is_some()))
                    >
                        "Selected file: "
                        <span id="fileName" class="fw-bold">
                            {move || view_state.with(|v| v.file_name.clone())}
                        </span>
                    </div>

                    <button
                        type="submit"
                        id="submitButton"
                        class=move || visibility_class("btn btn-primary mt-3", view_state.with(|v| v.show_submit))
                        prop:disabled=move || view_state.with(|v| v.submit_disabled)
                    >
                        "Analyze"
                    </button>
                </form>

                <AlertStack alerts=alerts/>

                <div
                    id="loadingSpinner"
                    class=move || visibility_class("text-center mt-3", view_state.with(|v| v.show_spinner))
                >
                    <div class="spinner-border text-primary" role="status">
                        <span class="visually-hidden">"Analyzing..."</span>
                    </div>
                </div>

                <ResultPanel result=result/>
            </div>
        </div>
    }
}

fn suppress_default(ev: DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn files_in(list: &FileList) -> impl Iterator<Item = File> + '_ {
    (0..list.length()).filter_map(move |index| list.get(index))
}

fn drop_zone_class(highlighted: bool) -> String {
    let base = "drop-zone border border-2 rounded p-5 text-center";
    if highlighted {
        format!("{} dragover border-primary", base)
    } else {
        base.to_string()
    }
}
