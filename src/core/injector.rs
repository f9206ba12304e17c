//! Anchor-based pattern injection
//!
//! Small, fixed, single-shot edits at named anchor points: the
//! `ControllerHelper` property after the update-trigger declaration, a
//! `reset()` call at the top of `startTimer()`, the per-frame
//! `updateEntityTransform` call before the trigger toggle, and marker
//! commenting of two fixed-shape regions (the `CollisionComponent`
//! registration and the fully known gesture attachment shapes).
//!
//! Every step is guarded by a marker or target-string presence check and is
//! applied to the first match only, so each anchor fires at most once per
//! file and rerunning any step is a no-op.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::manifest::MARKER;

/// Guard: the property step is done once this declaration exists.
const HELPER_DECL: &str = "let controllerHelper = ControllerHelper()";

/// Inserted after the update-trigger declaration.
const PROPERTY_SNIPPET: &str =
    "\n\n  // MARK: - Controller for gamepad input\n  let controllerHelper = ControllerHelper()";

/// Guard: the reset step is done once this call exists.
const RESET_CALL: &str = "controllerHelper.reset()";

/// Inserted as the statement following the mesh rebuild in `startTimer()`.
const RESET_SNIPPET: &str = "\n    controllerHelper.reset()  // Reset controller timing";

/// Guard: the update step is done once this call exists. Deliberately a
/// prefix of the inserted text so the guard matches its own insertion.
const UPDATE_CALL: &str = "controllerHelper.updateEntityTransform";

/// Inserted immediately before the trigger toggle, at the timer-body
/// indentation.
const UPDATE_SNIPPET: &str =
    "// Update controller input\n        self.controllerHelper.updateEntityTransform(self.rootEntity)\n        ";

/// Guard probe for the collision-block step.
const COLLISION_PROBE: &str = "// Controller: let bounds";

/// Step messages, reported per file as each anchor fires.
pub const STEP_PROPERTY: &str = "Added controllerHelper property";
pub const STEP_COLLISION: &str = "Commented CollisionComponent";
pub const STEP_GESTURE: &str = "Commented gesture block";
pub const STEP_RESET: &str = "Added controllerHelper.reset()";
pub const STEP_UPDATE: &str = "Added controllerHelper.updateEntityTransform()";

lazy_static! {
    /// Sibling declaration the helper property is inserted after.
    static ref TRIGGER_DECL: Regex =
        Regex::new(r"@State private var updateTrigger = false").unwrap();

    /// The complete CollisionComponent registration, from the bounds query
    /// through the closing `))`. Box multipliers vary per view.
    static ref COLLISION_BLOCK: Regex = Regex::new(
        r"let bounds = getBounds\(\)\n\s+rootEntity\.components\.set\(\n\s+CollisionComponent\(\n\s+shapes: \[\n\s+\.generateBox\(\n\s+width: bounds\.extents\.x \* \d+,\n\s+height: bounds\.extents\.y \* \d+,\n\s+depth: bounds\.extents\.z \* \d+\)\n\s+\]\n\s+\)\)"
    ).unwrap();

    /// Fixed-shape gesture attachments, opening token through the literal
    /// two-line closing sequence, anchored on `.onEnded { _ in`.
    static ref DRAG_GESTURE: Regex = Regex::new(
        r"\.gesture\(\n\s+DragGesture\(\)[\s\S]*?\.onEnded \{ _ in[\s\S]*?\}\n\s+\)\n\s+\)"
    ).unwrap();
    static ref ROTATE_GESTURE: Regex = Regex::new(
        r"\.gesture\(\n\s+RotateGesture3D\(\)[\s\S]*?\.onEnded \{ _ in[\s\S]*?\}\n\s+\)\n\s+\)"
    ).unwrap();
    static ref MAGNIFY_GESTURE: Regex = Regex::new(
        r"\.simultaneousGesture\(\n\s+MagnifyGesture\(\)[\s\S]*?\.onEnded \{ _ in[\s\S]*?\}\n\s+\)\n\s+\)"
    ).unwrap();

    /// Opening lines of `startTimer()`, anchored on the mesh rebuild.
    static ref TIMER_START: Regex =
        Regex::new(r"func startTimer\(\) \{\n\s+self\.mesh = try! createMesh\(\)").unwrap();

    /// Per-frame trigger statement the update call is inserted before.
    static ref TRIGGER_TOGGLE: Regex =
        Regex::new(r"self\.updateTrigger\.toggle\(\)").unwrap();
}

/// What the injection stage did to one file's text.
#[derive(Debug, Clone)]
pub struct InjectionOutcome {
    /// The (possibly rewritten) text
    pub text: String,
    /// Messages of the steps that applied, in application order
    pub steps: Vec<&'static str>,
}

impl InjectionOutcome {
    /// Whether any step changed the text.
    pub fn changed(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Runs the fixed sequence of anchor-based edits over one file's text.
#[derive(Debug, Clone, Default)]
pub struct AnchorInjector;

impl AnchorInjector {
    pub fn new() -> Self {
        Self
    }

    /// Apply every injection step in the fixed order. Steps that find no
    /// anchor, or whose guard trips, leave the text alone.
    pub fn apply_all(&self, text: &str) -> InjectionOutcome {
        let mut current = text.to_string();
        let mut steps = Vec::new();

        if let Some(next) = self.inject_helper_property(&current) {
            current = next;
            steps.push(STEP_PROPERTY);
        }
        if let Some(next) = self.comment_collision_block(&current) {
            current = next;
            steps.push(STEP_COLLISION);
        }

        let shapes: [(&Regex, &str); 3] = [
            (&*DRAG_GESTURE, "DragGesture"),
            (&*ROTATE_GESTURE, "RotateGesture3D"),
            (&*MAGNIFY_GESTURE, "MagnifyGesture"),
        ];
        for (pattern, kind) in shapes {
            if let Some(next) = comment_shape(&current, pattern, kind) {
                current = next;
                steps.push(STEP_GESTURE);
            }
        }

        if let Some(next) = self.inject_reset_call(&current) {
            current = next;
            steps.push(STEP_RESET);
        }
        if let Some(next) = self.inject_update_call(&current) {
            current = next;
            steps.push(STEP_UPDATE);
        }

        InjectionOutcome {
            text: current,
            steps,
        }
    }

    /// Insert the helper property after the update-trigger declaration.
    pub fn inject_helper_property(&self, text: &str) -> Option<String> {
        if text.contains(HELPER_DECL) {
            return None;
        }
        let m = TRIGGER_DECL.find(text)?;
        Some(splice(text, m.end(), PROPERTY_SNIPPET))
    }

    /// Comment out the CollisionComponent registration block.
    pub fn comment_collision_block(&self, text: &str) -> Option<String> {
        if text.contains(COLLISION_PROBE) {
            return None;
        }
        let m = COLLISION_BLOCK.find(text)?;
        Some(comment_span(text, m.start(), m.end()))
    }

    /// Insert `controllerHelper.reset()` as the statement following the
    /// mesh rebuild at the top of `startTimer()`.
    pub fn inject_reset_call(&self, text: &str) -> Option<String> {
        if text.contains(RESET_CALL) {
            return None;
        }
        let m = TIMER_START.find(text)?;
        // The anchor statement may carry a trailing comment; insert after
        // the end of its line.
        let line_end = text[m.end()..]
            .find('\n')
            .map(|i| m.end() + i)
            .unwrap_or(text.len());
        Some(splice(text, line_end, RESET_SNIPPET))
    }

    /// Insert the per-frame update call immediately before the trigger
    /// toggle.
    pub fn inject_update_call(&self, text: &str) -> Option<String> {
        if text.contains(UPDATE_CALL) {
            return None;
        }
        let m = TRIGGER_TOGGLE.find(text)?;
        Some(splice(text, m.start(), UPDATE_SNIPPET))
    }
}

/// Comment one fixed-shape gesture block, guarded by its own marker probe.
fn comment_shape(text: &str, pattern: &Regex, kind: &str) -> Option<String> {
    let probe = format!("{}{}", MARKER, kind);
    if text.contains(&probe) {
        return None;
    }
    let m = pattern.find(text)?;
    Some(comment_span(text, m.start(), m.end()))
}

/// Insert `snippet` into `text` at byte offset `at`.
fn splice(text: &str, at: usize, snippet: &str) -> String {
    let mut out = String::with_capacity(text.len() + snippet.len());
    out.push_str(&text[..at]);
    out.push_str(snippet);
    out.push_str(&text[at..]);
    out
}

/// Rewrite every line of `text[start..end]` as `indent + marker + trimmed`,
/// where indent is the first matched line's indentation. Blank lines pass
/// through verbatim.
fn comment_span(text: &str, start: usize, end: usize) -> String {
    let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &text[line_start..start];

    // The opening line is expected to hold only indentation before the
    // match; anything else stays in place untouched.
    let (from, indent) = if prefix.chars().all(|c| c.is_whitespace()) {
        (line_start, prefix.chars().count())
    } else {
        (start, 0)
    };

    let pad: String = " ".repeat(indent);
    let commented: Vec<String> = text[from..end]
        .split('\n')
        .map(|line| {
            let stripped = line.trim();
            if stripped.is_empty() {
                line.to_string()
            } else {
                format!("{}{}{}", pad, MARKER, stripped)
            }
        })
        .collect();

    let mut out = String::with_capacity(text.len() + commented.len() * MARKER.len());
    out.push_str(&text[..from]);
    out.push_str(&commented.join("\n"));
    out.push_str(&text[end..]);
    out
}
