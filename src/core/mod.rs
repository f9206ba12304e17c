//! Core module for the controller retrofit engine
//!
//! # Architecture
//!
//! - `models`: core data structures (SourceFile, outcomes, run summary)
//! - `error`: error types using thiserror
//! - `manifest`: the fixed target set, base path and marker constants
//! - `scanner`: delimiter-balance block commenter (the stateful line scan)
//! - `injector`: anchor-based single-shot pattern injections
//! - `report`: console reporting seam
//! - `engine`: per-file driver pipeline

pub mod engine;
pub mod error;
pub mod injector;
pub mod manifest;
pub mod models;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use engine::RetrofitEngine;
pub use error::{Result, RetrofitError};
pub use injector::{AnchorInjector, InjectionOutcome};
pub use models::{BlockOutcome, FileReport, RunSummary, SourceFile};
pub use report::{ConsoleReporter, Reporter, SilentReporter};
pub use scanner::{BlockCommenter, ScanResult};
