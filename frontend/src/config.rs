//! Application configuration.
//!
//! Centralized configuration for the CSV Data Analyzer frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base origin.
///
/// The analysis backend serving `/upload`. Server-relative paths in
/// responses (the plot image) are resolved against this origin.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// File extension accepted by the file picker.
///
/// Enforced through the input's `accept` filter; the backend decides
/// what it actually parses.
pub const ACCEPTED_EXTENSION: &str = ".csv";

/// Application name shown in the hero section.
pub const APP_NAME: &str = "CSV Data Analyzer";
