//! controller-retrofit - batch gesture-to-controller instrumentation
//!
//! This library rewrites a fixed set of SwiftUI view sources so that
//! hand-gesture input is retired in favor of gamepad controller input:
//! gesture attachment blocks are commented out behind a marker, and the
//! `ControllerHelper` plumbing (stored property, timer reset, per-frame
//! update call) is injected at known anchor points.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): re-exports of the core modules, no CLI concerns
//! - **bin/retrofit.rs**: thin wrapper that runs the engine over the fixed
//!   target manifest
//!
//! All tunables (target files, base path, marker text, anchor patterns) are
//! fixed constants in [`core::manifest`] and [`core::injector`]; the tool
//! takes no flags and reads no configuration. Safety across repeated runs
//! comes from the embedded marker, not from any external state.

pub mod core;

// Re-export commonly used types
pub use crate::core::engine::RetrofitEngine;
pub use crate::core::error::{Result, RetrofitError};
pub use crate::core::injector::AnchorInjector;
pub use crate::core::models::{BlockOutcome, FileReport, RunSummary, SourceFile};
pub use crate::core::report::{ConsoleReporter, Reporter, SilentReporter};
pub use crate::core::scanner::BlockCommenter;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
