//! Application handler driving init, the event loop and teardown

use std::sync::Arc;

use anyhow::{Context, Result};
use vfirst_core::{Settings, Stage};
use vfirst_render::window::window_attributes;
use vfirst_render::VulkanRuntime;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowId},
};

use crate::session::Session;

pub struct App {
    settings: Settings,
    session: Session<Window, VulkanRuntime>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            session: Session::new(),
            error: None,
        }
    }

    /// Outcome of the run, once the event loop has returned
    pub fn finish(mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(window_attributes(&self.settings.window))
            .context("failed to create window")?;
        self.session.window_created(window)?;

        self.session.request_instance()?;
        let runtime = Arc::new(VulkanRuntime::load()?);
        let instance = vfirst_render::initialize(&runtime, &self.settings.instance, event_loop)?;
        self.session.instance_ready(instance)?;

        self.session.enter_event_loop()?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Init runs once; later resumes (mobile, wayland) are no-ops
        if self.session.stage() != Stage::Uninitialized {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if let Err(err) = self.init(event_loop) {
            // Reported once, by main
            self.session.fail();
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CloseRequested = event {
            tracing::info!("close requested, shutting down...");
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.session.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_app_finishes_cleanly() {
        let app = App::new(Settings::default());
        assert_eq!(app.session.stage(), Stage::Uninitialized);
        assert!(app.finish().is_ok());
    }

    #[test]
    fn stored_error_is_returned() {
        let mut app = App::new(Settings::default());
        app.error = Some(anyhow::anyhow!("validation layers requested, but not available"));

        let err = app.finish().unwrap_err();
        assert!(err.to_string().contains("validation layers"));
    }
}
