//! Window management
//!
//! Cross-platform window creation via winit, plus the instance extensions
//! the window system needs to present to its surfaces.

use std::ffi::CStr;

use vfirst_core::settings::WindowSettings;
use winit::{
    dpi::LogicalSize,
    error::EventLoopError,
    event_loop::{ActiveEventLoop, EventLoop},
    raw_window_handle::HasDisplayHandle,
    window::{Window, WindowAttributes},
};

use crate::error::RuntimeError;

/// Source of the instance extensions a window system requires.
pub trait RequiredExtensions {
    fn required_extensions(&self) -> Result<Vec<String>, RuntimeError>;
}

impl RequiredExtensions for ActiveEventLoop {
    fn required_extensions(&self) -> Result<Vec<String>, RuntimeError> {
        let display = self.display_handle()?;
        let names = ash_window::enumerate_required_extensions(display.as_raw())?;

        // Static strings owned by ash-window
        Ok(names
            .iter()
            .map(|&name| unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
            .collect())
    }
}

/// Create window attributes from settings
pub fn window_attributes(settings: &WindowSettings) -> WindowAttributes {
    Window::default_attributes()
        .with_title(settings.title.clone())
        .with_inner_size(LogicalSize::new(settings.width, settings.height))
        .with_resizable(settings.resizable)
}

pub fn create_event_loop() -> Result<EventLoop<()>, EventLoopError> {
    EventLoop::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn attributes_follow_settings() {
        let settings = WindowSettings::default();
        let attributes = window_attributes(&settings);

        assert_eq!(attributes.title, "Vulkan");
        assert!(!attributes.resizable);
        assert_eq!(
            attributes.inner_size,
            Some(Size::from(LogicalSize::new(800u32, 600u32)))
        );
    }
}
