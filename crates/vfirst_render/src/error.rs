use ash::vk;
use thiserror::Error;
use winit::raw_window_handle::HandleError;

/// Failures reported by a graphics runtime or windowing collaborator.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load the Vulkan loader: {0}")]
    Loader(#[from] ash::LoadingError),

    #[error("Vulkan call failed: {0}")]
    Vulkan(#[from] vk::Result),

    #[error("name {0:?} contains an interior NUL byte")]
    InvalidName(String),

    #[error("no display handle available: {0}")]
    Display(#[from] HandleError),
}

/// Fatal errors raised while bringing up the graphics instance.
///
/// None of these are retried. They propagate to the binary, which reports
/// them and exits with a failure status.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("validation layers requested, but not available: {}", missing.join(", "))]
    Configuration { missing: Vec<String> },

    #[error("failed to query available validation layers")]
    LayerQuery(#[source] RuntimeError),

    #[error("failed to query extensions required by the window system")]
    RequiredExtensions(#[source] RuntimeError),

    #[error("failed to create instance")]
    InstanceCreation(#[source] RuntimeError),
}
