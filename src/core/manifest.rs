//! Fixed retrofit targets and marker constants.
//!
//! Every tunable of the tool lives here as a constant: the marker text, the
//! recognized gesture opening tokens, the base directory of the target tree
//! and the file list itself. There are no flags, environment variables or
//! configuration files; re-pointing the tool means editing this module.

/// Marker prepended to every rewritten line. Doubles as the idempotence
/// guard: a line carrying it is never transformed again.
pub const MARKER: &str = "// Controller: ";

/// Containment probe for the marker (no trailing space, so lines tagged by
/// hand without the space still count as processed).
pub const MARKER_PROBE: &str = "// Controller:";

/// Trimmed-line prefixes that open a gesture attachment block.
pub const OPENING_TOKENS: &[&str] = &[".gesture(", ".simultaneousGesture("];

/// Base directory of the target source tree.
pub const BASE_DIR: &str = "/Users/chenyong/repo/immersive/immersive-attractors/triangle";

/// The view sources to retrofit. Fixed by hand; the tool never walks the
/// directory. The three fractal views carry no gesture blocks but still
/// receive the controller plumbing.
pub const SOURCE_FILES: &[&str] = &[
    "AttractorLine.swift",
    "Bifurcation.swift",
    "Chords.swift",
    "CornerBouncing.swift",
    "CubesMoving.swift",
    "CubesNested.swift",
    "Fireworks.swift",
    "FireworksBlow.swift",
    "FractalBranches.swift",
    "FractalTree.swift",
    "FractalUmbrella.swift",
    "HopfFibration.swift",
    "HopfFibrationLayer.swift",
    "HyperbolicHelicoid.swift",
    "Lotus.swift",
    "MobiusBubbles.swift",
    "MobiusGrid.swift",
    "MobiusTrail.swift",
    "MovingLorenz.swift",
    "Nebula.swift",
    "Nest.swift",
    "PolygonWall.swift",
    "RadicalLine.swift",
    "Snowflake.swift",
    "SphereBouncing.swift",
    "SphereLine.swift",
];
