//! VFirst Render System
//!
//! Window setup and capability-gated Vulkan instance creation

pub mod capability;
pub mod error;
pub mod instance;
pub mod runtime;
pub mod vulkan;
pub mod window;

pub use ash;
pub use winit;

pub use capability::{check_feature_support, missing_features};
pub use error::{InitError, RuntimeError};
pub use instance::{
    create_instance, initialize, InstanceConfig, InstanceDescriptor, InstanceHandle,
};
pub use runtime::GraphicsRuntime;
pub use vulkan::VulkanRuntime;
pub use window::RequiredExtensions;
