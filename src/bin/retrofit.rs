//! retrofit CLI - batch gesture-to-controller instrumentation
//!
//! Takes no arguments: the target files, base path, marker and anchor
//! patterns are fixed constants in the library. Rerunning is always safe;
//! the embedded marker keeps every pass idempotent.

use retrofit::core::manifest;
use retrofit::{ConsoleReporter, RetrofitEngine};

fn main() {
    let engine = RetrofitEngine::new(manifest::BASE_DIR);
    let mut reporter = ConsoleReporter::new();

    if let Err(e) = engine.run(&mut reporter) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
