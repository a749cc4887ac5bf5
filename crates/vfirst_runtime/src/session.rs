//! Resources owned across one run, and the lifecycle that governs them
//!
//! The window is acquired before the instance and released after it. Both
//! the failure path and normal teardown release them in that order.

use vfirst_core::{Lifecycle, LifecycleError, Stage};
use vfirst_render::{GraphicsRuntime, InstanceHandle};

pub struct Session<W, R: GraphicsRuntime> {
    lifecycle: Lifecycle,
    // Fields drop in declaration order: the instance must go before the window
    instance: Option<InstanceHandle<R>>,
    window: Option<W>,
}

impl<W, R: GraphicsRuntime> Session<W, R> {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            instance: None,
            window: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.lifecycle.stage()
    }

    pub fn window_created(&mut self, window: W) -> Result<(), LifecycleError> {
        self.lifecycle.advance(Stage::WindowCreated)?;
        self.window = Some(window);
        Ok(())
    }

    pub fn request_instance(&mut self) -> Result<(), LifecycleError> {
        self.lifecycle.advance(Stage::InstanceRequested)
    }

    pub fn instance_ready(&mut self, instance: InstanceHandle<R>) -> Result<(), LifecycleError> {
        self.lifecycle.advance(Stage::InstanceReady)?;
        self.instance = Some(instance);
        Ok(())
    }

    pub fn enter_event_loop(&mut self) -> Result<(), LifecycleError> {
        self.lifecycle.advance(Stage::EventLoop)
    }

    /// Initialization failed: release whatever was acquired and stop.
    pub fn fail(&mut self) {
        if let Err(err) = self.lifecycle.advance(Stage::InitFailed) {
            tracing::warn!("{err}");
        }
        self.release();
    }

    /// Normal shutdown after the event loop. A no-op if the loop never started.
    pub fn teardown(&mut self) {
        if self.lifecycle.advance(Stage::Teardown).is_err() {
            return;
        }

        self.release();

        if let Err(err) = self.lifecycle.advance(Stage::Terminated) {
            tracing::warn!("{err}");
        }
        tracing::info!("shut down cleanly");
    }

    // Reverse creation order
    fn release(&mut self) {
        self.instance = None;
        self.window = None;
    }
}

impl<W, R: GraphicsRuntime> Default for Session<W, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use vfirst_core::settings::InstanceSettings;
    use vfirst_render::{create_instance, InstanceConfig, InstanceDescriptor, RuntimeError};

    use super::*;

    type Releases = Arc<Mutex<Vec<&'static str>>>;

    /// Runtime fake that records when its instance is destroyed
    struct RecordingRuntime {
        releases: Releases,
    }

    impl GraphicsRuntime for RecordingRuntime {
        type Instance = ();

        fn enumerate_layers(&self) -> Result<Vec<String>, RuntimeError> {
            Ok(Vec::new())
        }

        fn enumerate_extensions(&self) -> Result<Vec<String>, RuntimeError> {
            Ok(Vec::new())
        }

        fn create_instance(&self, _descriptor: &InstanceDescriptor) -> Result<(), RuntimeError> {
            Ok(())
        }

        fn destroy_instance(&self, _instance: &()) {
            self.releases.lock().unwrap().push("instance");
        }
    }

    /// Window stand-in that records when it is dropped
    struct RecordingWindow {
        releases: Releases,
    }

    impl Drop for RecordingWindow {
        fn drop(&mut self) {
            self.releases.lock().unwrap().push("window");
        }
    }

    type TestSession = Session<RecordingWindow, RecordingRuntime>;

    fn instance(releases: &Releases) -> InstanceHandle<RecordingRuntime> {
        let runtime = Arc::new(RecordingRuntime {
            releases: Arc::clone(releases),
        });
        let settings = InstanceSettings {
            enable_validation: false,
            ..Default::default()
        };
        create_instance(&runtime, &InstanceConfig::from_settings(&settings, Vec::new())).unwrap()
    }

    fn window(releases: &Releases) -> RecordingWindow {
        RecordingWindow {
            releases: Arc::clone(releases),
        }
    }

    fn running_session(releases: &Releases) -> TestSession {
        let mut session = TestSession::new();
        session.window_created(window(releases)).unwrap();
        session.request_instance().unwrap();
        session.instance_ready(instance(releases)).unwrap();
        session.enter_event_loop().unwrap();
        session
    }

    fn released(releases: &Releases) -> Vec<&'static str> {
        releases.lock().unwrap().clone()
    }

    #[test]
    fn teardown_releases_instance_before_window() {
        let releases = Releases::default();
        let mut session = running_session(&releases);
        assert!(released(&releases).is_empty());

        session.teardown();

        assert_eq!(released(&releases), vec!["instance", "window"]);
        assert_eq!(session.stage(), Stage::Terminated);
    }

    #[test]
    fn dropping_a_running_session_keeps_reverse_order() {
        let releases = Releases::default();
        drop(running_session(&releases));

        assert_eq!(released(&releases), vec!["instance", "window"]);
    }

    #[test]
    fn failed_init_still_releases_window() {
        let releases = Releases::default();
        let mut session = TestSession::new();
        session.window_created(window(&releases)).unwrap();
        session.request_instance().unwrap();

        session.fail();

        assert_eq!(released(&releases), vec!["window"]);
        assert_eq!(session.stage(), Stage::InitFailed);
    }

    #[test]
    fn teardown_after_failure_releases_nothing_more() {
        let releases = Releases::default();
        let mut session = TestSession::new();
        session.window_created(window(&releases)).unwrap();
        session.request_instance().unwrap();
        session.fail();

        session.teardown();
        drop(session);

        assert_eq!(released(&releases), vec!["window"]);
    }

    #[test]
    fn teardown_before_event_loop_is_ignored() {
        let releases = Releases::default();
        let mut session = TestSession::new();
        session.window_created(window(&releases)).unwrap();

        session.teardown();

        assert_eq!(session.stage(), Stage::WindowCreated);
        assert!(released(&releases).is_empty());
    }
}
