//! Console reporting seam
//!
//! Progress printed to stdout is the tool's sole observability surface, so
//! the engine reports through a trait and the binary plugs in the console
//! implementation. Tests use the silent one.

use crate::core::models::{BlockOutcome, RunSummary};

/// Sink for per-file progress and outcomes.
pub trait Reporter {
    /// A file is about to be processed.
    fn file_started(&mut self, name: &str);

    /// The block-commenting stage finished for the current file.
    fn block_outcome(&mut self, outcome: BlockOutcome);

    /// An injection step applied to the current file.
    fn step_applied(&mut self, message: &str);

    /// The current file was saved, or left alone.
    fn file_finished(&mut self, name: &str, written: bool);

    /// The whole batch finished.
    fn run_finished(&mut self, summary: &RunSummary);
}

/// Prints progress to stdout in the tool's fixed format.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn file_started(&mut self, name: &str) {
        println!("Processing: {}", name);
    }

    fn block_outcome(&mut self, outcome: BlockOutcome) {
        println!("  {}", outcome.message());
    }

    fn step_applied(&mut self, message: &str) {
        println!("  {}", message);
    }

    fn file_finished(&mut self, name: &str, written: bool) {
        if written {
            println!("  Saved: {}", name);
        } else {
            println!("  No changes needed: {}", name);
        }
    }

    fn run_finished(&mut self, _summary: &RunSummary) {
        println!("\n=== Done ===");
    }
}

/// Discards everything; used by tests that only care about return values.
#[derive(Debug, Clone, Default)]
pub struct SilentReporter;

impl SilentReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentReporter {
    fn file_started(&mut self, _name: &str) {}
    fn block_outcome(&mut self, _outcome: BlockOutcome) {}
    fn step_applied(&mut self, _message: &str) {}
    fn file_finished(&mut self, _name: &str, _written: bool) {}
    fn run_finished(&mut self, _summary: &RunSummary) {}
}
