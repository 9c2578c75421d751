//! Upload lifecycle state machine.
//!
//! All mutable state of one upload operation lives in a single
//! [`UploadWorkflow`] value so every transition is atomic: the UI can
//! never observe a summary without `Success`, or an error message
//! without `Failed`.
//!
//! The machine does no I/O. [`UploadWorkflow::begin_submit`] hands the
//! caller an attempt token together with the file to upload; the caller
//! performs the request and reports back through
//! [`UploadWorkflow::apply_success`] or [`UploadWorkflow::apply_failure`]
//! with that token. A token issued before a newer `select_file` or
//! `begin_submit` no longer matches and its completion is dropped, so a
//! stale response can never overwrite newer state.
//!
//! Generic over the file handle type: `web_sys::File` in the browser,
//! anything `Clone` in tests.

use crate::types::{AppError, UploadResult, WorkflowStatus};

/// State of one client-side upload operation.
#[derive(Clone, Debug)]
pub struct UploadWorkflow<F> {
    status: WorkflowStatus,
    result: Option<UploadResult>,
    file: Option<F>,
    attempt: u64,
}

impl<F> Default for UploadWorkflow<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> UploadWorkflow<F> {
    pub fn new() -> Self {
        Self {
            status: WorkflowStatus::Idle,
            result: None,
            file: None,
            attempt: 0,
        }
    }

    /// Store the picked file, or clear it when the dialog was cancelled.
    ///
    /// Always returns to `Idle` and discards any previous result or
    /// error. Bumping the attempt counter invalidates a response that
    /// may still be in flight for the previous file.
    pub fn select_file(&mut self, file: Option<F>) {
        self.file = file;
        self.status = WorkflowStatus::Idle;
        self.result = None;
        self.attempt += 1;
    }

    /// Start an upload attempt.
    ///
    /// Returns the attempt token and the file to send, or `None` when
    /// nothing should be uploaded: either a request is already in
    /// flight (the call is a no-op), or no file is held (the workflow
    /// moves straight to `Failed` without any network call).
    pub fn begin_submit(&mut self) -> Option<(u64, F)>
    where
        F: Clone,
    {
        if self.status == WorkflowStatus::Uploading {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.status = WorkflowStatus::Failed(AppError::NoFileSelected.user_message().to_string());
            self.result = None;
            return None;
        };
        self.attempt += 1;
        self.status = WorkflowStatus::Uploading;
        self.result = None;
        Some((self.attempt, file))
    }

    /// Record a successful backend response for the given attempt.
    ///
    /// Ignored when the token was superseded by a newer selection or
    /// submission.
    pub fn apply_success(&mut self, attempt: u64, result: UploadResult) {
        if attempt != self.attempt {
            return;
        }
        self.status = WorkflowStatus::Success;
        self.result = Some(result);
    }

    /// Record a failed attempt.
    ///
    /// Only the error's fixed user-facing message is kept; the
    /// diagnostic detail is the caller's to log. Ignored when the token
    /// was superseded.
    pub fn apply_failure(&mut self, attempt: u64, error: &AppError) {
        if attempt != self.attempt {
            return;
        }
        self.status = WorkflowStatus::Failed(error.user_message().to_string());
        self.result = None;
    }

    pub fn status(&self) -> &WorkflowStatus {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.status == WorkflowStatus::Uploading
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    /// Summary text, populated only in `Success`.
    pub fn summary(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.summary_text.as_str())
    }

    /// Resolved plot URL, when the backend produced one.
    pub fn image_url(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.image_url.as_deref())
    }

    /// User-facing message, populated only in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            WorkflowStatus::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC_FAILURE: &str = "Upload failed. Please check the backend and try again.";

    fn success_result() -> UploadResult {
        UploadResult {
            summary_text: "rows=5".to_string(),
            image_url: Some("http://localhost:5000/plots/1.png".to_string()),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let workflow = UploadWorkflow::<&str>::new();
        assert_eq!(*workflow.status(), WorkflowStatus::Idle);
        assert!(workflow.result().is_none());
        assert!(workflow.error_message().is_none());
    }

    #[test]
    fn submit_without_file_fails_locally() {
        let mut workflow = UploadWorkflow::<&str>::new();
        let ticket = workflow.begin_submit();

        // No ticket means no network call was ever requested.
        assert!(ticket.is_none());
        assert_eq!(
            *workflow.status(),
            WorkflowStatus::Failed("Please select a CSV file first!".to_string())
        );
        assert!(workflow.result().is_none());
    }

    #[test]
    fn successful_attempt_populates_result() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("data.csv"));

        let (attempt, file) = workflow.begin_submit().expect("file is held");
        assert_eq!(file, "data.csv");
        assert!(workflow.is_uploading());
        assert!(workflow.result().is_none());

        workflow.apply_success(attempt, success_result());
        assert_eq!(*workflow.status(), WorkflowStatus::Success);
        assert_eq!(workflow.summary(), Some("rows=5"));
        assert!(workflow.image_url().unwrap().ends_with("/plots/1.png"));
    }

    #[test]
    fn failure_collapses_to_generic_message() {
        for detail in ["connection refused", "Server error (500): boom", "EOF while parsing"] {
            let mut workflow = UploadWorkflow::new();
            workflow.select_file(Some("data.csv"));
            let (attempt, _) = workflow.begin_submit().unwrap();

            workflow.apply_failure(attempt, &AppError::Upload(detail.to_string()));
            assert_eq!(*workflow.status(), WorkflowStatus::Failed(GENERIC_FAILURE.to_string()));
            assert!(workflow.result().is_none());
        }
    }

    #[test]
    fn selecting_a_file_resets_success_state() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("a.csv"));
        let (attempt, _) = workflow.begin_submit().unwrap();
        workflow.apply_success(attempt, success_result());

        workflow.select_file(Some("b.csv"));
        assert_eq!(*workflow.status(), WorkflowStatus::Idle);
        assert!(workflow.result().is_none());
    }

    #[test]
    fn selecting_a_file_resets_failed_state() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("a.csv"));
        let (attempt, _) = workflow.begin_submit().unwrap();
        workflow.apply_failure(attempt, &AppError::Upload("timeout".to_string()));

        workflow.select_file(Some("a.csv"));
        assert_eq!(*workflow.status(), WorkflowStatus::Idle);
        assert!(workflow.error_message().is_none());
    }

    #[test]
    fn reselecting_same_file_stays_idle() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("data.csv"));
        workflow.select_file(Some("data.csv"));

        assert_eq!(*workflow.status(), WorkflowStatus::Idle);
        assert!(workflow.result().is_none());
    }

    #[test]
    fn cancelled_picker_clears_held_file() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("data.csv"));
        workflow.select_file(None);

        assert!(workflow.begin_submit().is_none());
        assert_eq!(
            *workflow.status(),
            WorkflowStatus::Failed("Please select a CSV file first!".to_string())
        );
    }

    #[test]
    fn submit_while_uploading_is_a_noop() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("data.csv"));
        let first = workflow.begin_submit();
        assert!(first.is_some());

        assert!(workflow.begin_submit().is_none());
        assert!(workflow.is_uploading());
    }

    #[test]
    fn stale_success_is_dropped() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("a.csv"));
        let (stale, _) = workflow.begin_submit().unwrap();

        // User picks a new file while the response is still in flight.
        workflow.select_file(Some("b.csv"));
        workflow.apply_success(stale, success_result());

        assert_eq!(*workflow.status(), WorkflowStatus::Idle);
        assert!(workflow.result().is_none());
    }

    #[test]
    fn stale_failure_is_dropped() {
        let mut workflow = UploadWorkflow::new();
        workflow.select_file(Some("a.csv"));
        let (stale, _) = workflow.begin_submit().unwrap();

        workflow.select_file(Some("b.csv"));
        let (current, _) = workflow.begin_submit().unwrap();
        workflow.apply_failure(stale, &AppError::Upload("late timeout".to_string()));
        assert!(workflow.is_uploading());

        workflow.apply_success(current, success_result());
        assert_eq!(*workflow.status(), WorkflowStatus::Success);
    }
}
