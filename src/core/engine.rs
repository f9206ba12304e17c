//! Retrofit engine - per-file driver pipeline
//!
//! Streams each file of the fixed target set through the block commenter
//! and the anchor injections, strictly one file at a time, and writes back
//! only when something changed. An unreadable file aborts the whole batch;
//! there is no rollback for files already written.

use std::path::PathBuf;

use crate::core::error::Result;
use crate::core::injector::AnchorInjector;
use crate::core::manifest;
use crate::core::models::{BlockOutcome, FileReport, RunSummary, SourceFile};
use crate::core::report::Reporter;
use crate::core::scanner::BlockCommenter;

/// Drives the fixed file list through all transformation passes.
#[derive(Debug, Clone)]
pub struct RetrofitEngine {
    base_dir: PathBuf,
    files: &'static [&'static str],
    commenter: BlockCommenter,
    injector: AnchorInjector,
}

impl RetrofitEngine {
    /// Create an engine rooted at `base_dir`, targeting the fixed manifest.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            files: manifest::SOURCE_FILES,
            commenter: BlockCommenter::new(),
            injector: AnchorInjector::new(),
        }
    }

    /// Override the target list (tests).
    pub fn with_files(mut self, files: &'static [&'static str]) -> Self {
        self.files = files;
        self
    }

    /// Process every target file in order. Stops at the first unreadable
    /// or unwritable file.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for name in self.files {
            let report = self.process_file(name, reporter)?;
            summary.processed += 1;
            if report.written {
                summary.written += 1;
            }
        }

        reporter.run_finished(&summary);
        Ok(summary)
    }

    /// Run all passes over one file and write it back if anything changed.
    pub fn process_file(&self, name: &str, reporter: &mut dyn Reporter) -> Result<FileReport> {
        reporter.file_started(name);

        let mut file = SourceFile::load(self.base_dir.join(name))?;

        // Stage 1: block commenting, gated by the rerun pre-check. Files
        // whose blocks are all marked skip the scan entirely.
        let blocks = if self.commenter.has_any_block(file.content()) {
            if self.commenter.has_unmarked_block(file.content()) {
                let scan = self.commenter.comment_blocks(file.content());
                if scan.changed {
                    file.replace(scan.text);
                }
                BlockOutcome::Commented
            } else {
                BlockOutcome::AlreadyCommented
            }
        } else {
            BlockOutcome::NoBlocks
        };
        reporter.block_outcome(blocks);

        // Stage 2: anchor injections. Each step guards itself, so these run
        // even when the file never had gesture blocks.
        let injected = self.injector.apply_all(file.content());
        for step in &injected.steps {
            reporter.step_applied(step);
        }
        if injected.changed() {
            file.replace(injected.text);
        }

        let written = file.save_if_dirty()?;
        reporter.file_finished(name, written);

        Ok(FileReport {
            name: name.to_string(),
            blocks,
            steps: injected.steps,
            written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::SilentReporter;
    use std::fs;
    use tempfile::TempDir;

    const VIEW: &str = "\
struct LotusView: View {
  @State private var updateTrigger = false

  var body: some View {
    RealityView { content in
      content.add(rootEntity)
    }
    .gesture(
      DragGesture()
        .onChanged { value in update(value) }
    )
  }

  func startTimer() {
    self.mesh = try! createMesh()
    timer = Timer.scheduledTimer(withTimeInterval: 1 / fps, repeats: true) { _ in
      DispatchQueue.main.async {
        self.updateTrigger.toggle()
      }
    }
  }
}
";

    fn write_target(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_process_file_comments_and_injects() {
        let dir = TempDir::new().unwrap();
        write_target(&dir, "Lotus.swift", VIEW);

        let engine = RetrofitEngine::new(dir.path());
        let report = engine
            .process_file("Lotus.swift", &mut SilentReporter::new())
            .unwrap();

        assert_eq!(report.blocks, BlockOutcome::Commented);
        assert!(report.written);

        let saved = fs::read_to_string(dir.path().join("Lotus.swift")).unwrap();
        assert!(saved.contains("// Controller: .gesture("));
        assert!(saved.contains("let controllerHelper = ControllerHelper()"));
        assert!(saved.contains("controllerHelper.reset()"));
        assert!(saved.contains("self.controllerHelper.updateEntityTransform(self.rootEntity)"));
    }

    #[test]
    fn test_second_pass_reports_no_changes() {
        let dir = TempDir::new().unwrap();
        write_target(&dir, "Lotus.swift", VIEW);

        let engine = RetrofitEngine::new(dir.path());
        engine
            .process_file("Lotus.swift", &mut SilentReporter::new())
            .unwrap();
        let first = fs::read_to_string(dir.path().join("Lotus.swift")).unwrap();

        let report = engine
            .process_file("Lotus.swift", &mut SilentReporter::new())
            .unwrap();
        assert_eq!(report.blocks, BlockOutcome::AlreadyCommented);
        assert!(report.steps.is_empty());
        assert!(!report.written);

        let second = fs::read_to_string(dir.path().join("Lotus.swift")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_gesture_free_file_still_gets_injections() {
        let dir = TempDir::new().unwrap();
        write_target(
            &dir,
            "FractalTree.swift",
            "struct FractalTreeView: View {\n  @State private var updateTrigger = false\n}\n",
        );

        let engine = RetrofitEngine::new(dir.path());
        let report = engine
            .process_file("FractalTree.swift", &mut SilentReporter::new())
            .unwrap();

        assert_eq!(report.blocks, BlockOutcome::NoBlocks);
        assert_eq!(report.steps, vec!["Added controllerHelper property"]);
        assert!(report.written);
    }

    #[test]
    fn test_missing_file_aborts_run() {
        let dir = TempDir::new().unwrap();
        let engine = RetrofitEngine::new(dir.path()).with_files(&["Missing.swift"]);
        let err = engine.run(&mut SilentReporter::new()).unwrap_err();
        assert!(err.to_string().contains("Missing.swift"));
    }

    #[test]
    fn test_run_counts_written_files() {
        let dir = TempDir::new().unwrap();
        write_target(&dir, "Lotus.swift", VIEW);
        write_target(&dir, "Nest.swift", "struct NestView: View {}\n");

        let engine = RetrofitEngine::new(dir.path()).with_files(&["Lotus.swift", "Nest.swift"]);
        let summary = engine.run(&mut SilentReporter::new()).unwrap();
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.written, 1);
    }
}
