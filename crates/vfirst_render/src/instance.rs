//! Capability-gated instance creation
//!
//! Layers are only requested after confirming the host actually has them.
//! Extensions come from the window system and are passed through as-is;
//! the extension catalog is only logged.

use std::sync::Arc;

use vfirst_core::settings::{InstanceSettings, Version};

use crate::capability::{check_feature_support, missing_features};
use crate::error::InitError;
use crate::runtime::GraphicsRuntime;
use crate::window::RequiredExtensions;

/// Everything needed to create an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceConfig {
    pub application_name: String,
    pub application_version: Version,
    pub engine_name: String,
    pub engine_version: Version,
    pub api_version: Version,
    pub enable_validation: bool,
    /// Only consulted when `enable_validation` is set
    pub validation_layers: Vec<String>,
    pub required_extensions: Vec<String>,
}

impl InstanceConfig {
    pub fn from_settings(settings: &InstanceSettings, required_extensions: Vec<String>) -> Self {
        Self {
            application_name: settings.application_name.clone(),
            application_version: settings.application_version,
            engine_name: settings.engine_name.clone(),
            engine_version: settings.engine_version,
            api_version: settings.api_version,
            enable_validation: settings.enable_validation,
            validation_layers: settings.validation_layers.clone(),
            required_extensions,
        }
    }
}

/// Runtime-agnostic creation descriptor handed to [`GraphicsRuntime::create_instance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    pub application_name: String,
    pub application_version: Version,
    pub engine_name: String,
    pub engine_version: Version,
    pub api_version: Version,
    pub enabled_layers: Vec<String>,
    pub enabled_extensions: Vec<String>,
}

/// An instance that is released when dropped.
///
/// Only [`create_instance`] builds one, and only after the runtime reported
/// success, so holding a handle means the instance is fully initialized.
pub struct InstanceHandle<R: GraphicsRuntime> {
    runtime: Arc<R>,
    raw: R::Instance,
    descriptor: InstanceDescriptor,
}

impl<R: GraphicsRuntime> InstanceHandle<R> {
    pub fn raw(&self) -> &R::Instance {
        &self.raw
    }

    /// Descriptor the instance was created from
    pub fn descriptor(&self) -> &InstanceDescriptor {
        &self.descriptor
    }
}

impl<R: GraphicsRuntime> Drop for InstanceHandle<R> {
    fn drop(&mut self) {
        tracing::debug!("destroying instance");
        self.runtime.destroy_instance(&self.raw);
    }
}

impl<R: GraphicsRuntime> std::fmt::Debug for InstanceHandle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceHandle")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Create the instance described by `config`.
///
/// With validation enabled the layer catalog is queried first and every
/// requested layer must be present, otherwise this fails with
/// [`InitError::Configuration`] before the runtime is asked to create
/// anything. With validation disabled layers are neither queried nor
/// requested.
pub fn create_instance<R: GraphicsRuntime>(
    runtime: &Arc<R>,
    config: &InstanceConfig,
) -> Result<InstanceHandle<R>, InitError> {
    let enabled_layers = if config.enable_validation {
        let available = runtime.enumerate_layers().map_err(InitError::LayerQuery)?;

        if !check_feature_support(&config.validation_layers, &available) {
            return Err(InitError::Configuration {
                missing: missing_features(&config.validation_layers, &available),
            });
        }

        tracing::info!(layers = ?config.validation_layers, "validation layers enabled");
        config.validation_layers.clone()
    } else {
        Vec::new()
    };

    log_extensions(&**runtime, &config.required_extensions);

    let descriptor = InstanceDescriptor {
        application_name: config.application_name.clone(),
        application_version: config.application_version,
        engine_name: config.engine_name.clone(),
        engine_version: config.engine_version,
        api_version: config.api_version,
        enabled_layers,
        enabled_extensions: config.required_extensions.clone(),
    };

    let raw = runtime
        .create_instance(&descriptor)
        .map_err(InitError::InstanceCreation)?;

    tracing::info!(
        application = %descriptor.application_name,
        api_version = %descriptor.api_version,
        "instance created"
    );

    Ok(InstanceHandle {
        runtime: Arc::clone(runtime),
        raw,
        descriptor,
    })
}

/// Ask the window system for its required extensions, then create the instance.
pub fn initialize<R, W>(
    runtime: &Arc<R>,
    settings: &InstanceSettings,
    window_system: &W,
) -> Result<InstanceHandle<R>, InitError>
where
    R: GraphicsRuntime,
    W: RequiredExtensions + ?Sized,
{
    let required_extensions = window_system
        .required_extensions()
        .map_err(InitError::RequiredExtensions)?;

    let config = InstanceConfig::from_settings(settings, required_extensions);
    create_instance(runtime, &config)
}

// Diagnostic only, a failed catalog query does not stop creation
fn log_extensions<R: GraphicsRuntime>(runtime: &R, required: &[String]) {
    tracing::info!("window system requested extensions:");
    for extension in required {
        tracing::info!("\t{extension}");
    }

    match runtime.enumerate_extensions() {
        Ok(available) => {
            tracing::info!("available extensions:");
            for extension in &available {
                tracing::info!("\t{extension}");
            }
        }
        Err(err) => tracing::warn!(error = %err, "could not enumerate instance extensions"),
    }
}
