//! Graphics runtime abstraction
//!
//! The initializer only talks to the runtime through this trait. The Vulkan
//! binding lives in [`crate::vulkan`], tests plug in call-counting fakes.

use crate::error::RuntimeError;
use crate::instance::InstanceDescriptor;

pub trait GraphicsRuntime {
    /// Raw instance object produced by the runtime
    type Instance;

    /// Names of the validation/debug layers installed on this host.
    /// Queried fresh on every call.
    fn enumerate_layers(&self) -> Result<Vec<String>, RuntimeError>;

    /// Names of the instance extensions available on this host.
    /// Queried fresh on every call.
    fn enumerate_extensions(&self) -> Result<Vec<String>, RuntimeError>;

    fn create_instance(
        &self,
        descriptor: &InstanceDescriptor,
    ) -> Result<Self::Instance, RuntimeError>;

    /// Release an instance created by [`GraphicsRuntime::create_instance`].
    ///
    /// Called exactly once per instance, by [`crate::InstanceHandle`]'s drop.
    fn destroy_instance(&self, instance: &Self::Instance);
}
