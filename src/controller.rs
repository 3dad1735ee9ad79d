// Upload lifecycle: file-pick -> submit -> display-result, one attempt at
// a time. The controller owns the state and talks to the page through the
// `UploadView` trait, so the whole flow tests without a DOM.

use crate::error::UploadError;
use crate::protocol::{download_name, ProcessResponse};
use crate::types::{SelectedFile, SubmissionOptions, UploadConfig};

pub const STATUS_UPLOADING: &str = "Uploading video...";
pub const STATUS_COMPLETE: &str = "Processing complete!";
pub const STATUS_FAILED: &str = "An error occurred.";
pub const SUBMIT_BUSY_LABEL: &str = "Processing...";
pub const NO_FILE_NOTICE: &str = "Please select a video file first!";

/// The UI surface the controller drives. One implementation binds real
/// page elements; tests record the calls instead.
pub trait UploadView {
    /// Text next to the file picker: the selected name or a placeholder.
    fn set_file_label(&self, text: &str);
    fn set_submit_enabled(&self, enabled: bool);
    fn set_submit_label(&self, text: &str);
    fn set_status(&self, text: &str);
    fn set_results_visible(&self, visible: bool);
    fn set_loader_visible(&self, visible: bool);
    fn set_video_visible(&self, visible: bool);
    fn set_error_visible(&self, visible: bool);
    fn set_error_text(&self, text: &str);
    /// Point the player and the download link at the result.
    fn present_video(&self, url: &str, download_name: &str);
    /// Transient notice, auto-hidden by the view after a few seconds.
    fn flash_notice(&self, text: &str);
}

/// Where the current attempt stands. The disabled submit control during
/// `Uploading` is the only guard against overlapping submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Uploading,
}

/// Everything the transport needs for one POST: the picked file and the
/// multipart fields read from the language controls at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<F> {
    pub file: SelectedFile<F>,
    pub fields: Vec<(&'static str, String)>,
}

/// View-model for the upload page. `F` is the platform file handle.
pub struct UploadController<V, F> {
    view: V,
    config: UploadConfig,
    selected: Option<SelectedFile<F>>,
    phase: Phase,
}

impl<V: UploadView, F: Clone> UploadController<V, F> {
    pub fn new(view: V, config: UploadConfig) -> Self {
        UploadController {
            view,
            config,
            selected: None,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_file(&self) -> bool {
        self.selected.is_some()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// The picker changed. `None` means the user cancelled the dialog;
    /// the display falls back to the placeholder. Last selection wins.
    pub fn file_changed(&mut self, file: Option<SelectedFile<F>>) {
        match &file {
            Some(selected) => self.view.set_file_label(&selected.name),
            None => self.view.set_file_label(&self.config.file_placeholder),
        }
        self.selected = file;
    }

    /// Start one submission attempt. With no file held this flashes a
    /// notice and builds no request; otherwise it puts the page into its
    /// busy shape and hands back the request for the transport to send.
    pub fn begin_submission(
        &mut self,
        options: SubmissionOptions,
    ) -> Result<Submission<F>, UploadError> {
        let Some(file) = self.selected.clone() else {
            self.view.flash_notice(NO_FILE_NOTICE);
            return Err(UploadError::NoFileSelected);
        };

        self.view.set_submit_enabled(false);
        self.view.set_submit_label(SUBMIT_BUSY_LABEL);
        self.view.set_results_visible(true);
        self.view.set_video_visible(false);
        self.view.set_error_visible(false);
        self.view.set_loader_visible(true);
        self.view.set_status(STATUS_UPLOADING);

        self.phase = Phase::Uploading;
        Ok(Submission {
            file,
            fields: options.form_fields(),
        })
    }

    /// Finish the attempt started by `begin_submission`. Success and
    /// failure differ only in which result region stays visible; the
    /// submit control is restored unconditionally.
    pub fn complete_submission(&mut self, outcome: Result<ProcessResponse, UploadError>) {
        self.view.set_loader_visible(false);

        match outcome {
            Ok(response) => {
                self.view.set_status(STATUS_COMPLETE);
                self.view.set_video_visible(true);
                self.view
                    .present_video(&response.video_url, download_name(&response.video_url));
            }
            Err(err) => {
                self.view.set_error_text(&format!("Error: {err}"));
                self.view.set_error_visible(true);
                self.view.set_status(STATUS_FAILED);
            }
        }

        self.view.set_submit_enabled(true);
        self.view.set_submit_label(&self.config.submit_label);
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageCode;
    use std::cell::RefCell;

    #[derive(Default)]
    struct ViewState {
        file_label: String,
        submit_enabled: bool,
        submit_label: String,
        status: String,
        results_visible: bool,
        loader_visible: bool,
        video_visible: bool,
        error_visible: bool,
        error_text: String,
        video_url: String,
        download_name: String,
        notices: Vec<String>,
    }

    #[derive(Default)]
    struct RecordingView {
        state: RefCell<ViewState>,
    }

    impl UploadView for RecordingView {
        fn set_file_label(&self, text: &str) {
            self.state.borrow_mut().file_label = text.to_string();
        }
        fn set_submit_enabled(&self, enabled: bool) {
            self.state.borrow_mut().submit_enabled = enabled;
        }
        fn set_submit_label(&self, text: &str) {
            self.state.borrow_mut().submit_label = text.to_string();
        }
        fn set_status(&self, text: &str) {
            self.state.borrow_mut().status = text.to_string();
        }
        fn set_results_visible(&self, visible: bool) {
            self.state.borrow_mut().results_visible = visible;
        }
        fn set_loader_visible(&self, visible: bool) {
            self.state.borrow_mut().loader_visible = visible;
        }
        fn set_video_visible(&self, visible: bool) {
            self.state.borrow_mut().video_visible = visible;
        }
        fn set_error_visible(&self, visible: bool) {
            self.state.borrow_mut().error_visible = visible;
        }
        fn set_error_text(&self, text: &str) {
            self.state.borrow_mut().error_text = text.to_string();
        }
        fn present_video(&self, url: &str, download_name: &str) {
            let mut state = self.state.borrow_mut();
            state.video_url = url.to_string();
            state.download_name = download_name.to_string();
        }
        fn flash_notice(&self, text: &str) {
            self.state.borrow_mut().notices.push(text.to_string());
        }
    }

    fn controller() -> UploadController<RecordingView, ()> {
        UploadController::new(RecordingView::default(), UploadConfig::default())
    }

    fn single_options() -> SubmissionOptions {
        SubmissionOptions::Single {
            language: LanguageCode::new("hi"),
        }
    }

    fn success(url: &str) -> ProcessResponse {
        ProcessResponse {
            message: None,
            video_url: url.to_string(),
        }
    }

    #[test]
    fn submit_without_file_flashes_notice_and_builds_no_request() {
        let mut ctrl = controller();
        let result = ctrl.begin_submission(single_options());

        assert!(matches!(result, Err(UploadError::NoFileSelected)));
        assert_eq!(ctrl.phase(), Phase::Idle);
        let state = ctrl.view().state.borrow();
        assert_eq!(state.notices, vec![NO_FILE_NOTICE.to_string()]);
        assert!(!state.loader_visible);
    }

    #[test]
    fn begin_includes_file_and_language_fields() {
        let mut ctrl = controller();
        ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));

        let submission = ctrl.begin_submission(single_options()).unwrap();
        assert_eq!(submission.file.name, "talk.mp4");
        assert_eq!(submission.fields, vec![("language", "hi".to_string())]);
        assert_eq!(ctrl.phase(), Phase::Uploading);
    }

    #[test]
    fn begin_includes_source_and_target_fields() {
        let mut ctrl = controller();
        ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));

        let submission = ctrl
            .begin_submission(SubmissionOptions::SourceTarget {
                source: LanguageCode::new("en"),
                target: LanguageCode::new("es"),
            })
            .unwrap();
        assert_eq!(
            submission.fields,
            vec![
                ("source_language", "en".to_string()),
                ("target_language", "es".to_string()),
            ]
        );
    }

    #[test]
    fn begin_puts_page_into_busy_shape() {
        let mut ctrl = controller();
        ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));
        ctrl.begin_submission(single_options()).unwrap();

        let state = ctrl.view().state.borrow();
        assert!(!state.submit_enabled);
        assert_eq!(state.submit_label, SUBMIT_BUSY_LABEL);
        assert!(state.results_visible);
        assert!(state.loader_visible);
        assert!(!state.video_visible);
        assert!(!state.error_visible);
        assert_eq!(state.status, STATUS_UPLOADING);
    }

    #[test]
    fn success_presents_video_and_download_name() {
        let mut ctrl = controller();
        ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));
        ctrl.begin_submission(single_options()).unwrap();

        ctrl.complete_submission(Ok(success("/static/out/abc.mp4")));

        assert_eq!(ctrl.phase(), Phase::Idle);
        let state = ctrl.view().state.borrow();
        assert!(!state.loader_visible);
        assert!(state.video_visible);
        assert_eq!(state.video_url, "/static/out/abc.mp4");
        assert_eq!(state.download_name, "abc.mp4");
        assert_eq!(state.status, STATUS_COMPLETE);
    }

    #[test]
    fn server_failure_shows_error_text() {
        let mut ctrl = controller();
        ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));
        ctrl.begin_submission(single_options()).unwrap();

        ctrl.complete_submission(Err(UploadError::Server {
            message: "bad format".to_string(),
        }));

        let state = ctrl.view().state.borrow();
        assert!(state.error_visible);
        assert_eq!(state.error_text, "Error: bad format");
        assert_eq!(state.status, STATUS_FAILED);
        assert!(!state.video_visible);
    }

    #[test]
    fn network_failure_shows_thrown_message() {
        let mut ctrl = controller();
        ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));
        ctrl.begin_submission(single_options()).unwrap();

        ctrl.complete_submission(Err(UploadError::Network("Failed to fetch".to_string())));

        let state = ctrl.view().state.borrow();
        assert_eq!(state.error_text, "Error: Failed to fetch");
    }

    #[test]
    fn submit_control_restored_after_any_outcome() {
        for outcome in [
            Ok(success("/output/a.mp4")),
            Err(UploadError::Server {
                message: "boom".to_string(),
            }),
            Err(UploadError::Network("offline".to_string())),
        ] {
            let mut ctrl = controller();
            ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));
            ctrl.begin_submission(single_options()).unwrap();
            ctrl.complete_submission(outcome);

            assert_eq!(ctrl.phase(), Phase::Idle);
            let state = ctrl.view().state.borrow();
            assert!(state.submit_enabled);
            assert_eq!(state.submit_label, "Generate Subtitled Video");
        }
    }

    #[test]
    fn clearing_picker_resets_label_and_blocks_submit() {
        let mut ctrl = controller();
        ctrl.file_changed(Some(SelectedFile::new("talk.mp4", ())));
        assert_eq!(ctrl.view().state.borrow().file_label, "talk.mp4");

        ctrl.file_changed(None);
        assert!(!ctrl.has_file());
        assert_eq!(
            ctrl.view().state.borrow().file_label,
            "Click to select a file..."
        );
        assert!(ctrl.begin_submission(single_options()).is_err());

        // A fresh pick unblocks the flow again.
        ctrl.file_changed(Some(SelectedFile::new("other.mp4", ())));
        assert!(ctrl.begin_submission(single_options()).is_ok());
    }
}
