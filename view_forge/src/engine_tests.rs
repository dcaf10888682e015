//! Unit tests for the Engine singleton manager
//!
//! ENGINE_STATE and LOGGER are process-wide, so every test is #[serial].

use crate::forge::{Engine, Error};
use crate::forge::log::{Logger, LogEntry, LogSeverity};
use crate::camera::SceneCamera;
use crate::native::{NativeCameraRenderer, RecordingBackend, ViewBackend};
use crate::tokens::TokenRegistry;
use crate::view::ViewSetup;
use crate::world::WorldRegistry;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger capturing entries for inspection.
///
/// Non-serial tests elsewhere in the crate log concurrently, so only
/// entries from `source` are kept.
#[derive(Clone)]
struct TestLogger {
    source: &'static str,
    entries: Arc<Mutex<Vec<(LogSeverity, String)>>>,
}

impl TestLogger {
    fn new(source: &'static str) -> Self {
        Self {
            source,
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn errors(&self) -> usize {
        self.entries.lock().unwrap().iter().filter(|(s, _)| *s == LogSeverity::Error).count()
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source != self.source {
            return;
        }
        self.entries.lock().unwrap().push((entry.severity, entry.message.clone()));
    }
}

fn setup() {
    Engine::reset_for_testing();
    let _ = Engine::initialize();
}

// ============================================================================
// INITIALIZATION
// ============================================================================

#[test]
#[serial]
fn test_initialize_is_idempotent() {
    setup();
    assert!(Engine::initialize().is_ok());
    assert!(Engine::initialize().is_ok());
}

#[test]
#[serial]
fn test_shutdown_clears_singletons() {
    setup();
    Engine::create_backend(RecordingBackend::new()).unwrap();
    Engine::create_token_registry().unwrap();

    Engine::shutdown();

    assert!(Engine::backend().is_err());
    assert!(Engine::token_registry().is_err());
}

// ============================================================================
// BACKEND
// ============================================================================

#[test]
#[serial]
fn test_backend_lifecycle() {
    setup();
    assert!(matches!(Engine::backend(), Err(Error::InitializationFailed(_))));

    Engine::create_backend(RecordingBackend::new()).unwrap();
    assert!(Engine::backend().is_ok());

    Engine::destroy_backend().unwrap();
    assert!(Engine::backend().is_err());
}

#[test]
#[serial]
fn test_duplicate_backend_is_rejected_and_logged() {
    setup();
    let logger = TestLogger::new("view_forge::Engine");
    Engine::set_logger(logger.clone());

    Engine::create_backend(RecordingBackend::new()).unwrap();
    let result = Engine::create_backend(RecordingBackend::new());

    Engine::reset_logger();
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
    assert_eq!(logger.errors(), 1);
}

#[test]
#[serial]
fn test_backend_creates_handles() {
    setup();
    let recording = RecordingBackend::new();
    let state = recording.state();
    Engine::create_backend(recording).unwrap();

    let backend = Engine::backend().unwrap();
    let mut handle = backend.lock().unwrap().create_camera_renderer("main", 1).unwrap();
    handle.destroy();

    assert_eq!(state.lock().unwrap().created, 1);
    assert_eq!(state.lock().unwrap().live_handles(), 0);
}

// ============================================================================
// TOKEN REGISTRY
// ============================================================================

#[test]
#[serial]
fn test_token_registry_is_shared() {
    setup();
    Engine::create_token_registry().unwrap();

    let first = Engine::token_registry().unwrap().lock().unwrap().find_or_create("world");
    let again = Engine::token_registry().unwrap().lock().unwrap().find_or_create("world");
    assert_eq!(first, again);

    assert!(Engine::create_token_registry().is_err());

    Engine::destroy_token_registry().unwrap();
    assert!(Engine::token_registry().is_err());
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
#[serial]
fn test_render_camera_through_singletons() {
    setup();
    let recording = RecordingBackend::new();
    let state = recording.state();
    Engine::create_backend(recording).unwrap();
    Engine::create_token_registry().unwrap();

    let mut worlds = WorldRegistry::new();
    let main = worlds.create("main");
    let mut camera = SceneCamera::new("main").with_world(main);
    camera.render_tags = ["world"].into_iter().collect();

    let resolved = Engine::render_camera("main", 3, &camera, &ViewSetup::default(), &mut worlds, false).unwrap();

    let token = Engine::token_registry().unwrap().lock().unwrap().find("world");
    assert_eq!(resolved.render_tags, vec![token.unwrap()]);
    assert_eq!(resolved.worlds, vec![main]);
    assert_eq!(worlds.get(main).unwrap().refresh_count(), 1);

    let s = state.lock().unwrap();
    assert_eq!(s.renders.len(), 1);
    assert_eq!(s.live_handles(), 0);
}

#[test]
#[serial]
fn test_render_camera_without_backend_fails() {
    setup();
    Engine::create_token_registry().unwrap();
    let mut worlds = WorldRegistry::new();
    let camera = SceneCamera::new("main");

    let result = Engine::render_camera("main", 0, &camera, &ViewSetup::default(), &mut worlds, false);
    assert!(result.is_err());
}

// ============================================================================
// LOGGING
// ============================================================================

#[test]
#[serial]
fn test_custom_logger_receives_macros() {
    let logger = TestLogger::new("view_forge::test");
    Engine::set_logger(logger.clone());

    crate::engine_info!("view_forge::test", "info {}", 1);
    crate::engine_error!("view_forge::test", "error {}", 2);

    Engine::reset_logger();
    let entries = logger.entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], (LogSeverity::Info, "info 1".to_string()));
    assert_eq!(entries[1], (LogSeverity::Error, "error 2".to_string()));
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    struct LocationLogger(Arc<Mutex<Option<(Option<&'static str>, Option<u32>)>>>);
    impl Logger for LocationLogger {
        fn log(&self, entry: &LogEntry) {
            if entry.source == "view_forge::test_location" {
                *self.0.lock().unwrap() = Some((entry.file, entry.line));
            }
        }
    }

    let seen = Arc::new(Mutex::new(None));
    Engine::set_logger(LocationLogger(Arc::clone(&seen)));
    Engine::log_detailed(LogSeverity::Error, "view_forge::test_location", "boom".to_string(), "x.rs", 12);
    Engine::reset_logger();

    assert_eq!(*seen.lock().unwrap(), Some((Some("x.rs"), Some(12))));
}
