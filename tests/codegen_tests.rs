//! Code Generation Integration Tests
//!
//! Tests for:
//! - Lights: default pair vs. scene lights
//! - Meshes: fixed construction parameters, live transforms, naming by index
//! - Model fidelity: comment stubs vs. deferred loader
//! - Output stability: byte-identical regeneration
//! - Page wrapping: script includes, loading indicator

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use stagecraft::codegen::{Block, CodeEmitter, EmitterConfig, HtmlDocument};
use stagecraft::core::Color;
use stagecraft::scene::{LightType, PrimitiveType, SceneObject, SceneState};

fn preview(scene: &SceneState) -> String {
    CodeEmitter::new(EmitterConfig::preview()).generate(scene)
}

fn bundle(scene: &SceneState) -> String {
    CodeEmitter::new(EmitterConfig::export_bundle()).generate(scene)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn empty_scene_has_ground_default_lights_and_controls() {
    let code = preview(&SceneState::new());

    assert!(code.starts_with("const scene = new THREE.Scene();"));
    assert!(code.contains("scene.background = new THREE.Color(0x1a1a1a);"));
    assert!(code.contains("const groundGeometry = new THREE.PlaneGeometry(100, 100);"));
    assert!(code.contains("ground.position.y = -2;"));
    assert!(code.contains("const ambientLight = new THREE.AmbientLight(0x404040, 0.5);"));
    assert!(code.contains("const directionalLight = new THREE.DirectionalLight(0xffffff, 0.8);"));
    assert!(!code.contains("const mesh"));
    assert!(code.contains("function animate()"));
    assert!(code.ends_with("});\n"));
}

#[test]
fn red_box_scenario() {
    let mut scene = SceneState::new();
    scene
        .add(
            SceneObject::primitive(PrimitiveType::Box, Color::from_hex(0xff0000))
                .at(Vec3::new(1.0, 2.0, 3.0))
                .scaled(Vec3::splat(2.0)),
        )
        .unwrap();

    let code = preview(&scene);
    assert!(code.contains("// Box\nconst geometry1 = new THREE.BoxGeometry(2, 2, 2);"));
    assert!(code.contains("color: 0xff0000,"));
    assert!(code.contains("roughness: 0.7,"));
    assert!(code.contains("metalness: 0.2"));
    assert!(code.contains("mesh1.position.set(1, 2, 3);"));
    assert!(code.contains("mesh1.rotation.set(0, 0, 0);"));
    assert!(code.contains("mesh1.scale.set(2, 2, 2);"));
    assert!(code.contains("scene.add(mesh1);"));
}

// ============================================================================
// Lights
// ============================================================================

#[test]
fn scene_lights_suppress_defaults() {
    let mut scene = SceneState::new();
    scene
        .add(SceneObject::directional_light(Color::WHITE, 1.2, Vec3::new(-5.0, 10.0, 0.0)))
        .unwrap();

    let code = preview(&scene);
    assert!(!code.contains("ambientLight"));
    assert!(!code.contains("directionalLight"));
    assert!(code.contains("const light1 = new THREE.DirectionalLight(0xffffff, 1.2);"));
    assert!(code.contains("light1.position.set(-5, 10, 0);"));
    assert!(code.contains("light1.castShadow = true;"));
}

#[test]
fn one_light_block_per_scene_light() {
    let mut scene = SceneState::new();
    scene.add(SceneObject::ambient_light(Color::from_hex(0x222222), 0.4)).unwrap();
    scene
        .add(SceneObject::primitive(PrimitiveType::Sphere, Color::WHITE))
        .unwrap();
    scene
        .add(SceneObject::point_light(Color::from_hex(0x00ff00), 2.0, 15.0, Vec3::ZERO))
        .unwrap();

    let program = CodeEmitter::default().emit(&scene);
    let kinds: Vec<_> = program.lights().map(|l| l.light_type).collect();
    assert_eq!(kinds, vec![LightType::Ambient, LightType::Point { distance: 15.0 }]);

    let code = preview(&scene);
    assert!(code.contains("const light1 = new THREE.AmbientLight(0x222222, 0.4);"));
    assert!(code.contains("const light3 = new THREE.PointLight(0x00ff00, 2, 15);"));
    assert!(code.contains("const mesh2 = "));
}

// ============================================================================
// Meshes
// ============================================================================

#[test]
fn params_ignore_scale() {
    let mut scene = SceneState::new();
    for (i, primitive) in PrimitiveType::ALL.into_iter().enumerate() {
        scene
            .add(SceneObject::primitive(primitive, Color::WHITE).scaled(Vec3::splat(i as f32 + 3.0)))
            .unwrap();
    }

    let code = preview(&scene);
    assert!(code.contains("new THREE.BoxGeometry(2, 2, 2)"));
    assert!(code.contains("new THREE.SphereGeometry(1, 32, 32)"));
    assert!(code.contains("new THREE.ConeGeometry(1, 2, 32)"));
    assert!(code.contains("new THREE.CylinderGeometry(1, 1, 2, 32)"));
    assert!(code.contains("new THREE.PlaneGeometry(5, 5)"));
    assert!(code.contains("mesh5.scale.set(7, 7, 7);"));
}

#[test]
fn unknown_geometry_is_emitted_as_box() {
    let mut scene = SceneState::new();
    scene
        .add(SceneObject::mesh("TorusKnotGeometry", Some(Color::from_hex(0x336699))))
        .unwrap();

    let code = preview(&scene);
    assert!(code.contains("const geometry1 = new THREE.BoxGeometry(2, 2, 2);"));
    assert!(code.contains("color: 0x336699,"));
}

#[test]
fn removed_objects_shift_indices() {
    let mut scene = SceneState::new();
    let first = scene
        .add(SceneObject::primitive(PrimitiveType::Box, Color::WHITE))
        .unwrap();
    scene
        .add(SceneObject::primitive(PrimitiveType::Cone, Color::WHITE))
        .unwrap();
    scene.remove(first);

    let code = preview(&scene);
    assert!(code.contains("const geometry1 = new THREE.ConeGeometry(1, 2, 32);"));
    assert!(!code.contains("mesh2"));
}

// ============================================================================
// Models
// ============================================================================

#[test]
fn preview_models_are_comments() {
    let mut scene = SceneState::new();
    scene
        .add(SceneObject::model("chair.glb", vec![1u8, 2, 3]).at(Vec3::new(0.5, 0.0, -1.0)))
        .unwrap();

    let code = preview(&scene);
    assert!(code.contains("// Imported model: chair.glb\n// Position: (0.5, 0, -1)"));
    assert!(!code.contains("GLTFLoader"));
    assert!(!code.contains("model1"));
}

#[test]
fn bundle_models_load_from_archive_path() {
    let mut scene = SceneState::new();
    scene.add(SceneObject::model("chair.glb", vec![1u8, 2, 3])).unwrap();

    let code = bundle(&scene);
    assert!(code.contains("const model1 = new THREE.Group();"));
    assert!(code.contains(r#"model1.name = "chair.glb";"#));
    assert!(code.contains(r#"{ path: "models/chair.glb", target: model1 },"#));
    assert!(code.contains("new THREE.GLTFLoader()"));
    assert!(code.contains("console.error('Failed to load ' + asset.path, error);"));
}

#[test]
fn bundle_without_models_still_hides_indicator() {
    let code = bundle(&SceneState::new());
    assert!(code.contains("const modelAssets = [\n];"));
    assert!(code.contains("if (modelAssets.length === 0) {\n    hideLoadingIndicator();"));
}

#[test]
fn model_names_are_escaped_in_strings() {
    let mut scene = SceneState::new();
    scene.add(SceneObject::model("it's \"new\".glb", vec![0u8])).unwrap();

    let code = bundle(&scene);
    assert!(code.contains(r#"model1.name = "it's \"new\".glb";"#));
}

// ============================================================================
// Stability & tuning
// ============================================================================

#[test]
fn regeneration_is_byte_identical() {
    let mut scene = SceneState::new();
    scene
        .add(
            SceneObject::primitive(PrimitiveType::Cylinder, Color::from_hex(0xabcdef))
                .at(Vec3::new(0.1, 0.2, 0.3))
                .rotated(Vec3::new(0.0, FRAC_PI_2, 0.0)),
        )
        .unwrap();
    scene.add(SceneObject::model("tree.gltf", vec![9u8; 16])).unwrap();

    assert_eq!(preview(&scene), preview(&scene));
    assert_eq!(bundle(&scene), bundle(&scene));
}

#[test]
fn presets_differ_in_controller_tuning() {
    let scene = SceneState::new();
    assert!(preview(&scene).contains("const mouseSensitivity = 0.01;"));
    assert!(preview(&scene).contains("const rotationSmoothness = 1;"));
    assert!(bundle(&scene).contains("const mouseSensitivity = 0.002;"));
    assert!(bundle(&scene).contains("const rotationSmoothness = 0.15;"));
}

#[test]
fn program_ends_with_controls() {
    let program = CodeEmitter::default().emit(&SceneState::new());
    assert!(matches!(program.iter().next(), Some(Block::Preamble(_))));
    assert!(matches!(program.iter().last(), Some(Block::Controls(_))));
}

// ============================================================================
// Page wrapping
// ============================================================================

#[test]
fn bundle_page_includes_loader_script() {
    let page = HtmlDocument::bundle().wrap(&bundle(&SceneState::new()));
    assert!(page.contains(r#"<script src="https://unpkg.com/three@0.128.0/build/three.min.js"></script>"#));
    assert!(page.contains("examples/js/loaders/GLTFLoader.js"));
    assert!(page.contains(r#"<div id="loading">Loading...</div>"#));
}

#[test]
fn standalone_page_has_no_loader() {
    let page = HtmlDocument::standalone().wrap(&preview(&SceneState::new()));
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(!page.contains("GLTFLoader"));
    assert!(!page.contains("id=\"loading\""));
    assert!(page.contains("const scene = new THREE.Scene();"));
}
