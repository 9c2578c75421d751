//! Backend communication services.
//!
//! # Services
//!
//! - [`upload`] - CSV upload to the analysis backend and image path
//!   resolution

pub mod upload;

pub use upload::*;
