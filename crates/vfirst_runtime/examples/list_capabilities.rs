//! Print the validation layers and instance extensions this host offers,
//! and whether the default validation request would be satisfied.
//!
//! Run with: cargo run --example list_capabilities

use anyhow::Result;
use vfirst_core::Settings;
use vfirst_render::{check_feature_support, missing_features, GraphicsRuntime, VulkanRuntime};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let runtime = VulkanRuntime::load()?;
    let layers = runtime.enumerate_layers()?;
    let extensions = runtime.enumerate_extensions()?;

    println!("{} instance layers:", layers.len());
    for layer in &layers {
        println!("\t{layer}");
    }

    println!("{} instance extensions:", extensions.len());
    for extension in &extensions {
        println!("\t{extension}");
    }

    let requested = Settings::default().instance.validation_layers;
    if check_feature_support(&requested, &layers) {
        println!("validation available: {}", requested.join(", "));
    } else {
        println!(
            "validation unavailable, missing: {}",
            missing_features(&requested, &layers).join(", ")
        );
    }

    Ok(())
}
