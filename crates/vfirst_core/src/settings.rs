//! Settings management
//!
//! Everything the bootstrap needs is carried in one explicit value. Nothing
//! reads a process-wide toggle, so tests can flip validation without a rebuild.

/// Name of the Khronos validation layer
pub const KHRONOS_VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// Bootstrap settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub window: WindowSettings,
    pub instance: InstanceSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSettings {
    pub application_name: String,
    pub application_version: Version,
    pub engine_name: String,
    pub engine_version: Version,
    pub api_version: Version,
    /// Gate instance creation on the availability of `validation_layers`
    pub enable_validation: bool,
    pub validation_layers: Vec<String>,
}

/// Semantic version triple, lowered to the runtime's packed format by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Vulkan".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

impl Default for InstanceSettings {
    fn default() -> Self {
        Self {
            application_name: "Hello Triangle".to_string(),
            application_version: Version::new(1, 0, 0),
            engine_name: "No Engine".to_string(),
            engine_version: Version::new(1, 0, 0),
            api_version: Version::new(1, 0, 0),
            // Debug builds validate, release builds don't
            enable_validation: cfg!(debug_assertions),
            validation_layers: vec![KHRONOS_VALIDATION_LAYER.to_string()],
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            instance: InstanceSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tutorial_constants() {
        let settings = Settings::default();

        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.window.title, "Vulkan");
        assert!(!settings.window.resizable);

        assert_eq!(settings.instance.application_name, "Hello Triangle");
        assert_eq!(settings.instance.engine_name, "No Engine");
        assert_eq!(settings.instance.api_version, Version::new(1, 0, 0));
        assert_eq!(
            settings.instance.validation_layers,
            vec!["VK_LAYER_KHRONOS_validation".to_string()]
        );
    }

    #[test]
    fn validation_follows_build_mode() {
        assert_eq!(
            Settings::default().instance.enable_validation,
            cfg!(debug_assertions)
        );
    }

    #[test]
    fn version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }
}
