//! Gesture block commenter - delimiter-balance line scanner
//!
//! Finds multi-line gesture attachment blocks without a real parser: a line
//! whose trimmed form starts with one of the recognized opening tokens
//! opens a block, and a running parenthesis balance (opens minus closes,
//! accumulated across every line of the block) decides where it ends. Every
//! line of the block is rewritten as `indent + marker + trimmed content`,
//! where the indentation is the opening line's, so a commented block reads
//! as one flush column of tagged lines.
//!
//! Parentheses are counted wherever they occur, including inside string
//! literals and comments. A construct whose balance never returns to zero
//! consumes the remainder of the file; that is accepted behavior, not an
//! error (the marker keeps reruns safe either way).

use crate::core::manifest::{MARKER, MARKER_PROBE, OPENING_TOKENS};

/// Result of a commenting pass over one file's text.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The rewritten text
    pub text: String,
    /// Whether any block was commented out
    pub changed: bool,
}

/// Comments out every line of a recognized gesture construct.
#[derive(Debug, Clone)]
pub struct BlockCommenter {
    tokens: &'static [&'static str],
    marker: &'static str,
    marker_probe: &'static str,
}

impl Default for BlockCommenter {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCommenter {
    /// Create a commenter for the fixed gesture tokens and marker.
    pub fn new() -> Self {
        Self {
            tokens: OPENING_TOKENS,
            marker: MARKER,
            marker_probe: MARKER_PROBE,
        }
    }

    /// Override the opening tokens (the scan itself is token-agnostic).
    pub fn with_tokens(mut self, tokens: &'static [&'static str]) -> Self {
        self.tokens = tokens;
        self
    }

    /// Whether any opening token occurs anywhere in the text.
    pub fn has_any_block(&self, text: &str) -> bool {
        self.tokens.iter().any(|t| text.contains(t))
    }

    /// Whether some line still opens a block and does not carry the marker.
    /// This is the driver's cheap rerun pre-check.
    pub fn has_unmarked_block(&self, text: &str) -> bool {
        text.split('\n').any(|line| {
            let stripped = line.trim();
            self.tokens.iter().any(|t| stripped.starts_with(t))
                && !line.contains(self.marker_probe)
        })
    }

    /// Comment out every gesture block in `text`.
    ///
    /// Blocks already marked, and opening lines that are already comments,
    /// are copied through unchanged. Blank lines inside a block pass
    /// through verbatim to preserve spacing.
    pub fn comment_blocks(&self, text: &str) -> ScanResult {
        let mut result: Vec<String> = Vec::new();
        let mut changed = false;

        let mut in_block = false;
        let mut block_indent = 0usize;
        let mut balance: i32 = 0;

        for line in text.split('\n') {
            let stripped = line.trim();

            if !in_block {
                if self.tokens.iter().any(|t| stripped.starts_with(t)) {
                    // Skip blocks already processed or commented by hand
                    if line.contains(self.marker_probe) || stripped.starts_with("//") {
                        result.push(line.to_string());
                        continue;
                    }

                    in_block = true;
                    block_indent = indent_width(line);
                    balance = paren_balance(line);
                    changed = true;

                    result.push(tag_line(block_indent, self.marker, stripped));

                    // A fully balanced opener closes its own block
                    if balance <= 0 {
                        in_block = false;
                    }
                    continue;
                }

                result.push(line.to_string());
                continue;
            }

            // Inside a block: keep accumulating until the balance closes
            balance += paren_balance(line);

            if stripped.is_empty() {
                result.push(line.to_string());
            } else {
                result.push(tag_line(block_indent, self.marker, stripped));
            }

            if balance <= 0 {
                in_block = false;
            }
        }

        ScanResult {
            text: result.join("\n"),
            changed,
        }
    }
}

/// Opening minus closing parentheses on one line.
fn paren_balance(line: &str) -> i32 {
    line.matches('(').count() as i32 - line.matches(')').count() as i32
}

/// Leading whitespace width of a line, in characters.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Rewrite one block line at the block's indentation.
fn tag_line(indent: usize, marker: &str, stripped: &str) -> String {
    let mut out = String::with_capacity(indent + marker.len() + stripped.len());
    for _ in 0..indent {
        out.push(' ');
    }
    out.push_str(marker);
    out.push_str(stripped);
    out
}
