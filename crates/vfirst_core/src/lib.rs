//! VFirst Core
//!
//! Shared building blocks for the bootstrap binary:
//! - Settings (window and instance configuration)
//! - Whole-program lifecycle state machine

pub mod lifecycle;
pub mod settings;

pub use lifecycle::{Lifecycle, LifecycleError, Stage};
pub use settings::Settings;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
