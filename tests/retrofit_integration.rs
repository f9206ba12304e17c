//! Integration tests for the retrofit engine
//!
//! Exercises the full pipeline over a temporary copy of the target tree:
//! first run transforms, second run is byte-stable.

use std::fs;
use tempfile::TempDir;

use retrofit::core::manifest::SOURCE_FILES;
use retrofit::{RetrofitEngine, SilentReporter};

/// A view with every anchor the tool knows about: gesture blocks, the
/// update-trigger declaration, the collision registration and the timer.
const FULL_VIEW: &str = "\
import RealityKit
import SwiftUI

struct SampleView: View {
  let rootEntity: Entity = Entity()
  @State var mesh: LowLevelMesh?
  @State private var updateTrigger = false

  var body: some View {
    RealityView { content in
      rootEntity.components.set(GestureComponent())
      rootEntity.components.set(InputTargetComponent())
      let bounds = getBounds()
      rootEntity.components.set(
        CollisionComponent(
          shapes: [
            .generateBox(
              width: bounds.extents.x * 4,
              height: bounds.extents.y * 4,
              depth: bounds.extents.z * 4)
          ]
        ))
      content.add(rootEntity)
    }
    .onAppear {
      startTimer()
    }
    .gesture(
      DragGesture()
        .targetedToEntity(rootEntity)
        .onChanged { value in
          var component = rootEntity.components[GestureComponent.self] ?? GestureComponent()
          component.onDragChange(value: value)
          rootEntity.components[GestureComponent.self] = component
        }
        .onEnded { _ in
          var component = rootEntity.components[GestureComponent.self] ?? GestureComponent()
          component.onGestureEnded()
          rootEntity.components[GestureComponent.self] = component
        }
    )
    .simultaneousGesture(
      MagnifyGesture()
        .targetedToEntity(rootEntity)
        .onChanged { value in
          var component = rootEntity.components[GestureComponent.self] ?? GestureComponent()
          component.onScaleChange(value: value)
          rootEntity.components[GestureComponent.self] = component
        }
        .onEnded { _ in
          var component = rootEntity.components[GestureComponent.self] ?? GestureComponent()
          component.onGestureEnded()
          rootEntity.components[GestureComponent.self] = component
        }
    )
  }

  func startTimer() {
    self.mesh = try! createMesh()  // recreate mesh when start timer
    timer = Timer.scheduledTimer(withTimeInterval: 1 / fps, repeats: true) { _ in
      DispatchQueue.main.async {
        self.updateMesh()
        self.updateTrigger.toggle()
      }
    }
  }
}
";

/// A view with no gesture blocks and only the property anchor.
const PLAIN_VIEW: &str = "\
import SwiftUI

struct PlainView: View {
  @State private var updateTrigger = false

  var body: some View {
    RealityView { content in
      content.add(rootEntity)
    }
  }
}
";

/// Populate a temp tree with every manifest file so a full run succeeds.
fn create_target_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in SOURCE_FILES {
        let content = match *name {
            "Lotus.swift" | "Nest.swift" | "SphereLine.swift" => FULL_VIEW,
            _ => PLAIN_VIEW,
        };
        fs::write(temp.path().join(name), content).unwrap();
    }
    temp
}

fn read_all(temp: &TempDir) -> Vec<String> {
    SOURCE_FILES
        .iter()
        .map(|name| fs::read_to_string(temp.path().join(name)).unwrap())
        .collect()
}

#[test]
fn test_first_run_rewrites_every_target() {
    let temp = create_target_tree();
    let engine = RetrofitEngine::new(temp.path());

    let summary = engine.run(&mut SilentReporter::new()).unwrap();
    assert_eq!(summary.processed, SOURCE_FILES.len());
    // Every file has at least the property anchor, so every file is written.
    assert_eq!(summary.written, SOURCE_FILES.len());

    let lotus = fs::read_to_string(temp.path().join("Lotus.swift")).unwrap();
    assert!(lotus.contains("// Controller: .gesture("));
    assert!(lotus.contains("// Controller: .simultaneousGesture("));
    assert!(lotus.contains("// Controller: let bounds = getBounds()"));
    assert!(lotus.contains("  let controllerHelper = ControllerHelper()"));
    assert!(lotus.contains("controllerHelper.reset()  // Reset controller timing"));
    assert!(lotus.contains("self.controllerHelper.updateEntityTransform(self.rootEntity)"));
}

#[test]
fn test_second_run_is_byte_stable() {
    let temp = create_target_tree();
    let engine = RetrofitEngine::new(temp.path());

    engine.run(&mut SilentReporter::new()).unwrap();
    let after_first = read_all(&temp);

    let summary = engine.run(&mut SilentReporter::new()).unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(read_all(&temp), after_first);
}

#[test]
fn test_untouched_lines_survive_verbatim() {
    let temp = create_target_tree();
    let engine = RetrofitEngine::new(temp.path());
    engine.run(&mut SilentReporter::new()).unwrap();

    let lotus = fs::read_to_string(temp.path().join("Lotus.swift")).unwrap();
    // Lines outside any block or anchor are byte-identical.
    assert!(lotus.starts_with("import RealityKit\nimport SwiftUI\n"));
    assert!(lotus.contains("      content.add(rootEntity)\n"));
    assert!(lotus.contains("    .onAppear {\n      startTimer()\n    }\n"));
}

#[test]
fn test_gesture_blocks_tagged_at_opening_indent() {
    let temp = create_target_tree();
    let engine = RetrofitEngine::new(temp.path());
    engine.run(&mut SilentReporter::new()).unwrap();

    let lotus = fs::read_to_string(temp.path().join("Lotus.swift")).unwrap();
    for line in lotus.lines() {
        if line.contains("// Controller: .targetedToEntity")
            || line.contains("// Controller: DragGesture()")
            || line.contains("// Controller: MagnifyGesture()")
        {
            // The gesture openers sit at column 4.
            assert!(line.starts_with("    // Controller: "), "line: {:?}", line);
        }
    }
}

#[test]
fn test_missing_target_aborts_batch() {
    let temp = create_target_tree();
    fs::remove_file(temp.path().join("Nebula.swift")).unwrap();

    let engine = RetrofitEngine::new(temp.path());
    let err = engine.run(&mut SilentReporter::new()).unwrap_err();
    assert!(err.to_string().contains("Nebula.swift"));
}
