//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Workflow Types** - Upload lifecycle state
//! - **Error Types** - Frontend error handling

use std::fmt;

// =============================================================================
// Workflow Types
// =============================================================================

/// Where the upload operation currently stands.
///
/// Exactly one status holds at a time; the UI renders entirely from it
/// (button label, busy hint, error text).
#[derive(Clone, Debug, PartialEq)]
pub enum WorkflowStatus {
    /// No upload attempted since the last file selection.
    Idle,
    /// One request is in flight; resubmission is blocked.
    Uploading,
    /// The backend answered and the result is displayable.
    Success,
    /// The attempt failed; carries the user-facing message.
    Failed(String),
}

/// The summary text and optional plot returned by the analysis backend.
///
/// Held as render state until superseded by a new file selection or a
/// newer attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadResult {
    /// Textual summary, rendered preformatted.
    pub summary_text: String,
    /// Plot URL, already resolved against the backend origin.
    /// `None` when the backend produced no plot.
    pub image_url: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. The `Display` form
/// carries the diagnostic detail and goes to the console log; end users
/// only ever see [`AppError::user_message`].
#[derive(Clone, Debug)]
pub enum AppError {
    /// Submit was triggered with no file selected. Local failure,
    /// no network call is made.
    NoFileSelected,
    /// The upload itself failed: transport error, non-2xx status, or a
    /// response body that did not decode.
    Upload(String),
}

impl AppError {
    /// Fixed message shown to the end user.
    ///
    /// Transport errors, server rejections, and malformed responses all
    /// collapse to the same text; the detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::NoFileSelected => "Please select a CSV file first!",
            AppError::Upload(_) => "Upload failed. Please check the backend and try again.",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoFileSelected => write!(f, "no file selected"),
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
