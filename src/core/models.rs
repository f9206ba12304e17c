//! Core data models for the retrofit engine
//!
//! This module contains the fundamental data structures passed between the
//! scanner, the injector and the driver.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, RetrofitError};

/// One target file held fully in memory while passes run over it.
///
/// Loaded once, mutated in memory by zero or more passes, and persisted
/// back only when at least one pass changed it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path the file was loaded from
    path: PathBuf,
    /// Full text content
    content: String,
    /// Whether any pass changed the content since loading
    dirty: bool,
}

impl SourceFile {
    /// Read a target file into memory. A missing or unreadable file is
    /// fatal for the whole batch.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content =
            fs::read_to_string(&path).map_err(|e| RetrofitError::read(path.clone(), e))?;
        Ok(Self {
            path,
            content,
            dirty: false,
        })
    }

    /// Build a SourceFile from text already in memory (tests).
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            dirty: false,
        }
    }

    /// Path the file was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current (possibly rewritten) text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether a pass has changed the content.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the content after a pass reported a change.
    pub fn replace(&mut self, content: String) {
        self.content = content;
        self.dirty = true;
    }

    /// Write the content back in place if any pass changed it. Returns
    /// whether a write happened.
    pub fn save_if_dirty(&self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        fs::write(&self.path, &self.content)
            .map_err(|e| RetrofitError::write(self.path.clone(), e))?;
        Ok(true)
    }
}

/// Outcome of the block-commenting stage for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// Unmarked gesture blocks were found and commented out
    Commented,
    /// Gesture tokens are present but every block already carries the marker
    AlreadyCommented,
    /// The file contains no gesture tokens at all
    NoBlocks,
}

impl BlockOutcome {
    /// The per-file console line for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            BlockOutcome::Commented => "Commented gesture blocks",
            BlockOutcome::AlreadyCommented => "Already commented",
            BlockOutcome::NoBlocks => "No gesture blocks found",
        }
    }
}

/// What happened to one file across all passes.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// File name relative to the base directory
    pub name: String,
    /// Outcome of the block-commenting stage
    pub blocks: BlockOutcome,
    /// Messages of the injection steps that applied
    pub steps: Vec<&'static str>,
    /// Whether the file was written back
    pub written: bool,
}

impl FileReport {
    /// Whether any pass changed the file.
    pub fn modified(&self) -> bool {
        self.blocks == BlockOutcome::Commented || !self.steps.is_empty()
    }
}

/// Totals across one run of the whole batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    /// Files processed
    pub processed: usize,
    /// Files written back
    pub written: usize,
}
