//! Upload widget state machine and its render function.
//!
//! ```text
//! Idle ──select──▶ Ready ──begin_submit──▶ Loading ──finish──▶ Success
//!                    ▲                                   └───▶ Error
//!                    └──────────── select / begin_submit ◀──────┘
//! ```
//!
//! The state is generic over the staged file so the transitions can be
//! exercised without a browser. [`WidgetView::from_state`] is the single
//! place deciding what is visible.

use thiserror::Error;

use crate::config::NO_FILE_MESSAGE;
use crate::services::UploadError;
use crate::types::{format_percent, ProbabilityLevel, UploadResult};

/// A file handle the widget can stage for upload.
pub trait StagedFile: Clone {
    /// Name shown in the file-info label.
    fn display_name(&self) -> String;
}

impl StagedFile for web_sys::File {
    fn display_name(&self) -> String {
        self.name()
    }
}

/// Why a submission could not start.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{}", NO_FILE_MESSAGE)]
    NoFile,

    #[error("An upload is already in progress")]
    InFlight,
}

/// Where the widget is in its submission cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadState<F> {
    /// Nothing staged yet.
    Idle,
    /// A file is staged and can be submitted.
    Ready(F),
    /// The staged file is being uploaded.
    Loading(F),
    /// The last upload produced a score.
    Success { file: F, result: UploadResult },
    /// The last upload failed.
    Error { file: Option<F>, message: String },
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        UploadState::Idle
    }
}

impl<F: StagedFile> UploadState<F> {
    /// The file that the next submission would send.
    pub fn staged(&self) -> Option<&F> {
        match self {
            UploadState::Idle => None,
            UploadState::Ready(file) | UploadState::Loading(file) => Some(file),
            UploadState::Success { file, .. } => Some(file),
            UploadState::Error { file, .. } => file.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UploadState::Loading(_))
    }

    /// Stage the first of `files`. The rest are discarded.
    ///
    /// Returns `false` when nothing changed: the list was empty or an upload
    /// is in flight.
    pub fn select<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = F>,
    {
        if self.is_loading() {
            return false;
        }
        match files.into_iter().next() {
            Some(file) => {
                *self = UploadState::Ready(file);
                true
            }
            None => false,
        }
    }

    /// Enter `Loading` and hand back the file to send.
    pub fn begin_submit(&mut self) -> Result<F, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::InFlight);
        }
        let file = self.staged().cloned().ok_or(SubmitError::NoFile)?;
        *self = UploadState::Loading(file.clone());
        Ok(file)
    }

    /// Leave `Loading` with the outcome of the request.
    ///
    /// Returns `false` if no upload was in flight, so an outcome is applied
    /// at most once.
    pub fn finish(&mut self, outcome: Result<UploadResult, UploadError>) -> bool {
        let file = match std::mem::take(self) {
            UploadState::Loading(file) => file,
            other => {
                *self = other;
                return false;
            }
        };
        *self = match outcome {
            Ok(result) => UploadState::Success { file, result },
            Err(err) => UploadState::Error {
                file: Some(file),
                message: err.user_message(),
            },
        };
        true
    }
}

/// What the score panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    /// Bar fill width, in percent
    pub width: f64,
    pub level: ProbabilityLevel,
    /// Text next to the bar, e.g. `85%`
    pub label: String,
    /// Verbatim reasoning; `None` hides the block
    pub reasoning: Option<String>,
    /// File name echoed by the backend
    pub analyzed_file: Option<String>,
}

impl ResultView {
    pub fn from_result(result: &UploadResult) -> Self {
        let percent = result.probability();
        Self {
            width: percent,
            level: ProbabilityLevel::from_percent(percent),
            label: format_percent(percent),
            reasoning: result.reasoning().map(str::to_string),
            analyzed_file: result.filename.clone(),
        }
    }
}

/// Everything the widget needs to draw itself for one state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WidgetView {
    /// Staged file name; `None` hides the file-info panel
    pub file_name: Option<String>,
    pub show_submit: bool,
    pub submit_disabled: bool,
    pub show_spinner: bool,
    /// `None` hides the result panel
    pub result: Option<ResultView>,
}

impl WidgetView {
    pub fn from_state<F: StagedFile>(state: &UploadState<F>) -> Self {
        let file_name = state.staged().map(StagedFile::display_name);
        let show_submit = file_name.is_some();
        match state {
            UploadState::Idle => Self::default(),
            UploadState::Ready(_) | UploadState::Error { .. } => Self {
                file_name,
                show_submit,
                ..Self::default()
            },
            UploadState::Loading(_) => Self {
                file_name,
                show_submit,
                submit_disabled: true,
                show_spinner: true,
                result: None,
            },
            UploadState::Success { result, .. } => Self {
                file_name,
                show_submit,
                result: Some(ResultView::from_result(result)),
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl StagedFile for FakeFile {
        fn display_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn result(json: &str) -> UploadResult {
        serde_json::from_str(json).unwrap()
    }

    fn ready(name: &'static str) -> UploadState<FakeFile> {
        UploadState::Ready(FakeFile(name))
    }

    #[test]
    fn test_idle_shows_nothing() {
        let view = WidgetView::from_state(&UploadState::<FakeFile>::Idle);
        assert_eq!(view, WidgetView::default());
    }

    #[test]
    fn test_select_stages_first_of_many() {
        let mut state = UploadState::Idle;
        assert!(state.select(vec![FakeFile("a.py"), FakeFile("b.py"), FakeFile("c.py")]));
        assert_eq!(state, ready("a.py"));

        let view = WidgetView::from_state(&state);
        assert_eq!(view.file_name.as_deref(), Some("a.py"));
        assert!(view.show_submit);
        assert!(!view.submit_disabled);
    }

    #[test]
    fn test_select_empty_list_is_ignored() {
        let mut state = ready("a.py");
        assert!(!state.select(Vec::new()));
        assert_eq!(state, ready("a.py"));
    }

    #[test]
    fn test_select_replaces_previous_file() {
        let mut state = UploadState::Success {
            file: FakeFile("old.py"),
            result: result(r#"{"ai_generated_probability": 50}"#),
        };
        assert!(state.select(vec![FakeFile("new.py")]));
        assert_eq!(state, ready("new.py"));
    }

    #[test]
    fn test_submit_without_file_fails_fast() {
        let mut state = UploadState::<FakeFile>::Idle;
        assert_eq!(state.begin_submit(), Err(SubmitError::NoFile));
        assert_eq!(state, UploadState::Idle);
        assert_eq!(SubmitError::NoFile.to_string(), "Please select a file first.");
    }

    #[test]
    fn test_submit_disables_until_finished() {
        let mut state = ready("a.py");
        assert_eq!(state.begin_submit(), Ok(FakeFile("a.py")));

        let view = WidgetView::from_state(&state);
        assert!(view.submit_disabled);
        assert!(view.show_spinner);
        assert!(view.result.is_none());

        // second submit while in flight
        assert_eq!(state.begin_submit(), Err(SubmitError::InFlight));
        // new selection while in flight
        assert!(!state.select(vec![FakeFile("b.py")]));
        assert!(state.is_loading());
    }

    #[test]
    fn test_finish_applies_once() {
        let mut state = ready("a.py");
        state.begin_submit().unwrap();

        assert!(state.finish(Ok(result(r#"{"ai_generated_probability": 40}"#))));
        assert!(!state.finish(Err(UploadError::Network("late".to_string()))));
        assert!(matches!(state, UploadState::Success { .. }));

        let view = WidgetView::from_state(&state);
        assert!(!view.submit_disabled);
        assert!(!view.show_spinner);
    }

    #[test]
    fn test_finish_without_upload_is_ignored() {
        let mut state = ready("a.py");
        assert!(!state.finish(Ok(result(r#"{"ai_generated_probability": 40}"#))));
        assert_eq!(state, ready("a.py"));
    }

    #[test]
    fn test_every_outcome_reenables_submit() {
        let outcomes = vec![
            Ok(result(r#"{"ai_generated_probability": 10}"#)),
            Err(UploadError::Server("file too large".to_string())),
            Err(UploadError::Network("connection reset".to_string())),
        ];
        for outcome in outcomes {
            let mut state = ready("a.py");
            state.begin_submit().unwrap();
            assert!(state.finish(outcome));

            let view = WidgetView::from_state(&state);
            assert!(view.show_submit);
            assert!(!view.submit_disabled);
            assert!(!view.show_spinner);
            assert_eq!(state.staged(), Some(&FakeFile("a.py")));
        }
    }

    #[test]
    fn test_error_state_keeps_file_for_retry() {
        let mut state = ready("a.py");
        state.begin_submit().unwrap();
        state.finish(Err(UploadError::Server("file too large".to_string())));

        assert_eq!(
            state,
            UploadState::Error {
                file: Some(FakeFile("a.py")),
                message: "file too large".to_string(),
            }
        );
        assert_eq!(state.begin_submit(), Ok(FakeFile("a.py")));
    }

    #[test]
    fn test_high_score_renders_bar_and_reasoning() {
        let state = UploadState::Success {
            file: FakeFile("a.py"),
            result: result(
                r#"{"ai_generated_probability": 85, "reasoning": "uses repetitive phrasing"}"#,
            ),
        };

        let view = WidgetView::from_state(&state).result.unwrap();
        assert_eq!(view.width, 85.0);
        assert_eq!(view.level, ProbabilityLevel::High);
        assert_eq!(view.level.css_class(), "bg-danger");
        assert_eq!(view.label, "85%");
        assert_eq!(view.reasoning.as_deref(), Some("uses repetitive phrasing"));
    }

    #[test]
    fn test_low_score_hides_reasoning() {
        let state = UploadState::Success {
            file: FakeFile("a.py"),
            result: result(r#"{"ai_generated_probability": 12}"#),
        };

        let view = WidgetView::from_state(&state).result.unwrap();
        assert_eq!(view.width, 12.0);
        assert_eq!(view.level.css_class(), "bg-success");
        assert_eq!(view.label, "12%");
        assert_eq!(view.reasoning, None);
    }

    #[test]
    fn test_out_of_range_score_is_clamped_in_view() {
        let view = ResultView::from_result(&result(r#"{"ai_generated_probability": 250}"#));
        assert_eq!(view.width, 100.0);
        assert_eq!(view.label, "100%");
        assert_eq!(view.level, ProbabilityLevel::High);
    }
}
