//! Vulkan binding for [`GraphicsRuntime`], built on `ash`

use std::ffi::{c_char, CStr, CString};

use ash::{vk, Entry};
use vfirst_core::settings::Version;

use crate::error::RuntimeError;
use crate::instance::InstanceDescriptor;
use crate::runtime::GraphicsRuntime;

/// Dynamically loaded Vulkan loader
pub struct VulkanRuntime {
    entry: Entry,
}

impl VulkanRuntime {
    /// Load the system Vulkan loader (`libvulkan.so.1`, `vulkan-1.dll`, ...)
    pub fn load() -> Result<Self, RuntimeError> {
        let entry = unsafe { Entry::load()? };
        Ok(Self { entry })
    }
}

impl GraphicsRuntime for VulkanRuntime {
    type Instance = ash::Instance;

    fn enumerate_layers(&self) -> Result<Vec<String>, RuntimeError> {
        let layers = unsafe { self.entry.enumerate_instance_layer_properties()? };

        Ok(layers
            .iter()
            .filter_map(|layer| layer.layer_name_as_c_str().ok())
            .map(lossy)
            .collect())
    }

    fn enumerate_extensions(&self) -> Result<Vec<String>, RuntimeError> {
        let extensions = unsafe { self.entry.enumerate_instance_extension_properties(None)? };

        Ok(extensions
            .iter()
            .filter_map(|extension| extension.extension_name_as_c_str().ok())
            .map(lossy)
            .collect())
    }

    fn create_instance(
        &self,
        descriptor: &InstanceDescriptor,
    ) -> Result<ash::Instance, RuntimeError> {
        let application_name = c_string(&descriptor.application_name)?;
        let engine_name = c_string(&descriptor.engine_name)?;

        let application_info = vk::ApplicationInfo::default()
            .application_name(&application_name)
            .application_version(api_version(descriptor.application_version))
            .engine_name(&engine_name)
            .engine_version(api_version(descriptor.engine_version))
            .api_version(api_version(descriptor.api_version));

        // The CStrings must outlive the pointer arrays handed to the loader
        let layers = c_strings(&descriptor.enabled_layers)?;
        let extensions = c_strings(&descriptor.enabled_extensions)?;
        let layer_names = raw_names(&layers);
        let extension_names = raw_names(&extensions);

        let create_info = vk::InstanceCreateInfo::default()
            .application_info(&application_info)
            .enabled_layer_names(&layer_names)
            .enabled_extension_names(&extension_names);

        let instance = unsafe { self.entry.create_instance(&create_info, None)? };
        Ok(instance)
    }

    fn destroy_instance(&self, instance: &ash::Instance) {
        unsafe { instance.destroy_instance(None) };
    }
}

fn api_version(version: Version) -> u32 {
    vk::make_api_version(0, version.major, version.minor, version.patch)
}

fn lossy(name: &CStr) -> String {
    name.to_string_lossy().into_owned()
}

fn c_string(name: &str) -> Result<CString, RuntimeError> {
    CString::new(name).map_err(|_| RuntimeError::InvalidName(name.to_owned()))
}

fn c_strings(names: &[String]) -> Result<Vec<CString>, RuntimeError> {
    names.iter().map(|name| c_string(name)).collect()
}

fn raw_names(names: &[CString]) -> Vec<*const c_char> {
    names.iter().map(|name| name.as_ptr()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_pack_like_vk_make_api_version() {
        assert_eq!(api_version(Version::new(1, 0, 0)), vk::API_VERSION_1_0);
        assert_eq!(api_version(Version::new(1, 3, 0)), vk::API_VERSION_1_3);
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = c_string("VK_LAYER\0oops").unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidName(name) if name == "VK_LAYER\0oops"));
    }

    #[test]
    fn raw_names_point_at_owned_strings() {
        let names = c_strings(&["VK_KHR_surface".to_string()]).unwrap();
        let raw = raw_names(&names);

        assert_eq!(raw.len(), 1);
        let round = unsafe { CStr::from_ptr(raw[0]) };
        assert_eq!(round.to_str().unwrap(), "VK_KHR_surface");
    }
}
