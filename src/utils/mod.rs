//! Utility functions shared by the library and the CLI
//!
//! ## Modules
//!
//! - [`app_data`] - Application data directory and config (JSON)
//! - [`words`] - Word list file loading
//! - [`progress`] - Progress bar that compiles away without the `progress` feature

pub mod app_data;
pub mod progress;
pub mod words;

pub use app_data::*;
pub use words::*;
