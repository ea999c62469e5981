//! Export Integration Tests
//!
//! Tests for:
//! - Archive layout: page entry plus `models/<fileName>` per imported model
//! - Trigger: Preview/CodeView transitions, archive and single-file exports
//! - Concurrency: overlapping exports, async completion, scene edits after start
//! - Failures: sink errors surface on the task, bad settings files

use std::io::{Cursor, Read};
use std::sync::Arc;

use glam::Vec3;
use stagecraft::core::Color;
use stagecraft::export::{DirectorySink, ExportError, ExportSettings, ExportTrigger, MemorySink, TextSurface, ViewMode};
use stagecraft::scene::{PrimitiveType, SceneObject, SceneState};
use zip::ZipArchive;

fn trigger_with(settings: ExportSettings) -> (ExportTrigger<TextSurface>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (ExportTrigger::new(settings, sink.clone(), TextSurface::new()), sink)
}

fn trigger() -> (ExportTrigger<TextSurface>, Arc<MemorySink>) {
    trigger_with(ExportSettings::default())
}

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
    let mut file = archive.by_name(name).unwrap();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).unwrap();
    bytes
}

fn open_zip(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn scene_with_chair() -> SceneState {
    let mut scene = SceneState::new();
    scene
        .add(SceneObject::primitive(PrimitiveType::Sphere, Color::from_hex(0x00ff00)).at(Vec3::Y))
        .unwrap();
    scene
        .add(SceneObject::model("chair.glb", b"chair-bytes".to_vec()).at(Vec3::new(2.0, 0.0, 0.0)))
        .unwrap();
    scene
}

// ============================================================================
// Archive contents
// ============================================================================

#[test]
fn archive_holds_page_and_models() {
    let (trigger, sink) = trigger();
    let scene = scene_with_chair();

    let receipt = trigger.export_game(&scene).wait().unwrap();
    assert_eq!(receipt.file_name, "game.zip");
    assert_eq!(receipt.entries, vec!["game.html".to_string(), "models/chair.glb".to_string()]);

    let saved = sink.find("game.zip").unwrap();
    assert_eq!(saved.bytes.len(), receipt.size);

    let mut archive = open_zip(saved.bytes);
    assert_eq!(archive.len(), 2);
    assert_eq!(read_entry(&mut archive, "models/chair.glb"), b"chair-bytes");

    let page = String::from_utf8(read_entry(&mut archive, "game.html")).unwrap();
    assert!(page.contains(r#"{ path: "models/chair.glb", target: model2 },"#));
    assert!(page.contains("GLTFLoader.js"));
    assert!(page.contains("const mesh1 = "));
}

#[test]
fn archive_page_matches_bundle_html() {
    let (trigger, sink) = trigger();
    let scene = scene_with_chair();

    trigger.export_game(&scene).wait().unwrap();
    let mut archive = open_zip(sink.find("game.zip").unwrap().bytes);
    let page = String::from_utf8(read_entry(&mut archive, "game.html")).unwrap();
    assert_eq!(page, trigger.bundle_html(&scene));
}

#[test]
fn archive_without_models_has_only_page() {
    let (trigger, sink) = trigger();

    let receipt = trigger.export_game(&SceneState::new()).wait().unwrap();
    assert_eq!(receipt.entries, vec!["game.html".to_string()]);

    let archive = open_zip(sink.find("game.zip").unwrap().bytes);
    assert_eq!(archive.len(), 1);
}

#[test]
fn duplicate_model_names_keep_last_payload() {
    let (trigger, sink) = trigger();
    let mut scene = SceneState::new();
    scene.add(SceneObject::model("rock.glb", b"first".to_vec())).unwrap();
    scene.add(SceneObject::model("rock.glb", b"second".to_vec())).unwrap();

    let receipt = trigger.export_game(&scene).wait().unwrap();
    assert_eq!(receipt.entries.len(), 2);

    let mut archive = open_zip(sink.find("game.zip").unwrap().bytes);
    assert_eq!(read_entry(&mut archive, "models/rock.glb"), b"second");
}

#[test]
fn custom_names_from_settings() {
    let settings = ExportSettings::from_json_str(
        r#"{ "archive_name": "level1.zip", "html_name": "index.html", "bundle": { "fidelity": "deferred_loader", "models_dir": "assets/" } }"#,
    )
    .unwrap();
    let (trigger, sink) = trigger_with(settings);

    let receipt = trigger.export_game(&scene_with_chair()).wait().unwrap();
    assert_eq!(receipt.file_name, "level1.zip");
    assert_eq!(receipt.entries, vec!["index.html".to_string(), "assets/chair.glb".to_string()]);

    let mut archive = open_zip(sink.find("level1.zip").unwrap().bytes);
    let page = String::from_utf8(read_entry(&mut archive, "index.html")).unwrap();
    assert!(page.contains(r#"path: "assets/chair.glb""#));
}

// ============================================================================
// Single-file export
// ============================================================================

#[test]
fn html_export_stubs_models() {
    let (trigger, sink) = trigger();
    let receipt = trigger.export_html(&scene_with_chair()).unwrap();
    assert_eq!(receipt.file_name, "game.html");

    let page = String::from_utf8(sink.find("game.html").unwrap().bytes).unwrap();
    assert!(page.contains("// Imported model: chair.glb"));
    assert!(!page.contains("GLTFLoader"));
    assert!(page.contains("const mouseSensitivity = 0.002;"));
    assert!(page.contains("<title>Exported 3D Game</title>"));
}

// ============================================================================
// View state
// ============================================================================

#[test]
fn code_view_state_machine() {
    let (mut trigger, sink) = trigger();
    let mut scene = SceneState::new();
    assert_eq!(trigger.mode(), ViewMode::Preview);

    assert_eq!(trigger.toggle_code_view(&scene), ViewMode::CodeView);
    assert_eq!(trigger.surface().visible(), Some(ViewMode::CodeView));
    let first = trigger.surface().code().to_string();

    // Edits while in code view are not picked up until the view is re-entered.
    scene
        .add(SceneObject::primitive(PrimitiveType::Box, Color::from_hex(0xff0000)))
        .unwrap();
    assert_eq!(trigger.surface().code(), first);

    trigger.export_game(&scene).wait().unwrap();
    assert_eq!(trigger.mode(), ViewMode::CodeView);
    assert_eq!(sink.len(), 1);

    assert_eq!(trigger.toggle_code_view(&scene), ViewMode::Preview);
    assert_eq!(trigger.surface().visible(), Some(ViewMode::Preview));

    assert_eq!(trigger.toggle_code_view(&scene), ViewMode::CodeView);
    assert!(trigger.surface().code().contains("const mesh1 = "));
    assert_eq!(trigger.surface().code_updates(), 2);
}

#[test]
fn code_view_uses_preview_preset() {
    let (mut trigger, _) = trigger();
    trigger.show_code(&scene_with_chair());

    let code = trigger.surface().code();
    assert!(code.contains("const mouseSensitivity = 0.01;"));
    assert!(code.contains("// Imported model: chair.glb"));
    assert!(!code.contains("<html"));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn overlapping_exports_both_download() {
    let (trigger, sink) = trigger();
    let scene = scene_with_chair();

    let first = trigger.export_game(&scene);
    let second = trigger.export_game(&scene);
    first.wait().unwrap();
    second.wait().unwrap();

    let files = sink.files();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.name == "game.zip"));
}

#[test]
fn scene_edits_after_start_do_not_leak_into_archive() {
    let (trigger, sink) = trigger();
    let mut scene = scene_with_chair();

    let task = trigger.export_game(&scene);
    scene.add(SceneObject::model("table.glb", b"table".to_vec())).unwrap();
    let receipt = task.wait().unwrap();

    assert!(!receipt.entries.iter().any(|e| e.contains("table")));
    let archive = open_zip(sink.find("game.zip").unwrap().bytes);
    assert_eq!(archive.len(), 2);
}

#[test]
fn task_can_be_polled() {
    let (trigger, _) = trigger();
    let mut task = trigger.export_game(&SceneState::new());

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
    while !task.is_complete() {
        assert!(std::time::Instant::now() < deadline, "export did not finish");
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert!(matches!(task.result(), Some(Ok(_))));
}

#[tokio::test]
async fn exports_complete_asynchronously() {
    let (trigger, sink) = trigger();
    let scene = scene_with_chair();

    let (a, b) = futures::future::join(
        trigger.export_game(&scene).wait_async(),
        trigger.export_game(&SceneState::new()).wait_async(),
    )
    .await;

    assert_eq!(a.unwrap().entries.len(), 2);
    assert_eq!(b.unwrap().entries.len(), 1);
    assert_eq!(sink.len(), 2);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn sink_failure_is_reported_on_task() {
    let root = std::env::temp_dir().join(format!("stagecraft-export-fail-{}", std::process::id()));
    let settings = ExportSettings::from_json_str(r#"{ "archive_name": "../escape.zip" }"#).unwrap();
    let trigger = ExportTrigger::new(settings, Arc::new(DirectorySink::new(&root)), TextSurface::new());

    let result = trigger.export_game(&SceneState::new()).wait();
    assert!(matches!(result, Err(ExportError::InvalidFileName(_))));
    assert!(!root.join("escape.zip").exists());
    assert!(!root.parent().unwrap().join("escape.zip").exists());
}

#[test]
fn directory_sink_writes_both_exports() -> anyhow::Result<()> {
    let root = std::env::temp_dir().join(format!("stagecraft-export-dir-{}", std::process::id()));
    let trigger = ExportTrigger::new(ExportSettings::default(), Arc::new(DirectorySink::new(&root)), TextSurface::new());
    let scene = scene_with_chair();

    trigger.export_game(&scene).wait()?;
    trigger.export_html(&scene)?;

    let archive = ZipArchive::new(std::fs::File::open(root.join("game.zip"))?)?;
    assert_eq!(archive.len(), 2);
    assert!(std::fs::read_to_string(root.join("game.html"))?.starts_with("<!DOCTYPE html>"));

    std::fs::remove_dir_all(&root)?;
    Ok(())
}

#[test]
fn settings_file_errors() {
    let missing = ExportSettings::from_json_file("/nonexistent/stagecraft.json");
    assert!(matches!(missing, Err(ExportError::Io(_))));

    let path = std::env::temp_dir().join(format!("stagecraft-settings-{}.json", std::process::id()));
    std::fs::write(&path, "{ \"page_title\": 7 }").unwrap();
    assert!(matches!(ExportSettings::from_json_file(&path), Err(ExportError::Config(_))));
    std::fs::remove_file(&path).unwrap();
}
