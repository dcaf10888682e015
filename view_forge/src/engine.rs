/// view_forge Engine - Singleton manager for the view backend and shared services
///
/// Holds the process-wide view backend, the shared tag token registry and
/// the global logger. Storage is thread-safe: each singleton sits behind a
/// RwLock inside a OnceLock-initialized state.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::camera::SceneCamera;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use crate::native::ViewBackend;
use crate::tokens::StringTokenRegistry;
use crate::view::{self, ResolvedView, ViewContext, ViewSetup};
use crate::world::WorldRegistry;

const SOURCE: &str = "view_forge::Engine";

// ===== INTERNAL STATE =====

static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

struct EngineState {
    backend: RwLock<Option<Arc<Mutex<dyn ViewBackend>>>>,
    token_registry: RwLock<Option<Arc<Mutex<StringTokenRegistry>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            backend: RwLock::new(None),
            token_registry: RwLock::new(None),
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

// ===== PUBLIC API =====

/// Global singleton manager
///
/// # Example
///
/// ```no_run
/// use view_forge::forge::Engine;
/// use view_forge::native::RecordingBackend;
///
/// Engine::initialize()?;
/// Engine::create_backend(RecordingBackend::new())?;
/// Engine::create_token_registry()?;
///
/// let tokens = Engine::token_registry()?;
/// // ...
///
/// Engine::shutdown();
/// # Ok::<(), view_forge::forge::Error>(())
/// ```
pub struct Engine;

impl Engine {
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!(SOURCE, "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::engine_error!(SOURCE, "Backend error: {}", msg);
            }
            _ => {
                crate::engine_error!(SOURCE, "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
        ))
    }

    /// Initialize the engine. Idempotent.
    ///
    /// # Errors
    ///
    /// Currently always succeeds.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Drop every singleton. Outstanding `Arc`s stay valid until released.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut tokens) = state.token_registry.write() {
                *tokens = None;
            }
            if let Ok(mut backend) = state.backend.write() {
                *backend = None;
            }
        }
    }

    // ===== BACKEND API =====

    /// Create and register the view backend singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A backend already exists
    /// - The backend lock is poisoned
    pub fn create_backend<B: ViewBackend + 'static>(backend: B) -> Result<()> {
        let arc_backend: Arc<Mutex<dyn ViewBackend>> = Arc::new(Mutex::new(backend));
        Self::register_backend(arc_backend)?;
        crate::engine_info!(SOURCE, "Backend singleton created successfully");
        Ok(())
    }

    pub(crate) fn register_backend(backend: Arc<Mutex<dyn ViewBackend>>) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.backend.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Backend lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Backend already exists. Call Engine::destroy_backend() first.".to_string())
            ));
        }

        *lock = Some(backend);
        Ok(())
    }

    /// Get the view backend singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or no backend was created.
    pub fn backend() -> Result<Arc<Mutex<dyn ViewBackend>>> {
        let state = Self::state()?;

        let lock = state.backend.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Backend lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Backend not created. Call Engine::create_backend() first.".to_string())
            ))
    }

    /// Destroy the view backend singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized.
    pub fn destroy_backend() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.backend.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Backend lock poisoned".to_string())
            ))?;

        *lock = None;
        crate::engine_info!(SOURCE, "Backend singleton destroyed");
        Ok(())
    }

    // ===== TOKEN REGISTRY API =====

    /// Create the shared tag token registry
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or a registry already exists.
    pub fn create_token_registry() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.token_registry.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TokenRegistry lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("TokenRegistry already exists. Call Engine::destroy_token_registry() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(StringTokenRegistry::new())));
        crate::engine_info!(SOURCE, "TokenRegistry singleton created successfully");
        Ok(())
    }

    pub fn token_registry() -> Result<Arc<Mutex<StringTokenRegistry>>> {
        let state = Self::state()?;

        let lock = state.token_registry.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TokenRegistry lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("TokenRegistry not created. Call Engine::create_token_registry() first.".to_string())
            ))
    }

    pub fn destroy_token_registry() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.token_registry.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TokenRegistry lock poisoned".to_string())
            ))?;

        *lock = None;
        crate::engine_info!(SOURCE, "TokenRegistry singleton destroyed");
        Ok(())
    }

    // ===== RENDERING =====

    /// Render one view through the backend and token registry singletons.
    ///
    /// Same as `view::render_camera`, with the shared collaborators looked
    /// up here. The native handle is released before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if a singleton is missing, a lock is poisoned, or
    /// the backend fails to create or render the view.
    pub fn render_camera(
        name: &str,
        camera_id: u32,
        camera: &SceneCamera,
        setup: &ViewSetup,
        worlds: &mut WorldRegistry,
        graphics_active: bool,
    ) -> Result<ResolvedView> {
        let backend = Self::backend()?;
        let tokens = Self::token_registry()?;

        let mut backend = backend.lock()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Backend mutex poisoned".to_string())
            ))?;
        let mut tokens = tokens.lock()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TokenRegistry mutex poisoned".to_string())
            ))?;

        let mut ctx = ViewContext::new(worlds, &mut *tokens).with_graphics_active(graphics_active);
        view::render_camera(&mut *backend, name, camera_id, camera, setup, &mut ctx)
    }

    /// Clear all singletons (test builds only)
    #[cfg(test)]
    pub fn reset_for_testing() {
        Self::shutdown();
    }

    // ===== LOGGING API =====

    /// Replace the global logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use view_forge::forge::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Restore the `DefaultLogger`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log without file:line (used by `engine_trace!` .. `engine_warn!`)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line (used by `engine_error!`)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
