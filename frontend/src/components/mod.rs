//! UI Components for the CSV Data Analyzer.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV upload, submission, and result display

mod footer;
mod hero;
mod upload;

pub use footer::*;
pub use hero::*;
pub use upload::*;
