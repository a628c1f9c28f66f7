use std::env;
use std::fs;
use std::path::Path;

/// Pull a version string out of a dependency line such as
/// `egui = "0.32"` or `quick-xml = { version = "0.38", features = [...] }`.
fn version_from_line(line: &str) -> Option<&str> {
    match line.split("version = ").nth(1) {
        Some(version_part) => version_part.split('"').nth(1),
        None => line.split('"').nth(1),
    }
}

fn main() {
    // Versions live in the workspace manifest; member crates only say `workspace = true`
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let workspace_cargo_toml_path = Path::new(&manifest_dir).join("../../Cargo.toml");
    let workspace_cargo_toml = fs::read_to_string(&workspace_cargo_toml_path).unwrap_or_default();

    let mut egui_version = "unknown";
    let mut quick_xml_version = "unknown";

    for line in workspace_cargo_toml.lines() {
        if line.starts_with("egui = ") {
            egui_version = version_from_line(line).unwrap_or("unknown");
        } else if line.starts_with("quick-xml = ") {
            quick_xml_version = version_from_line(line).unwrap_or("unknown");
        }
    }

    println!("cargo:rerun-if-changed={}", workspace_cargo_toml_path.display());

    // These will be available as env!() variables at compile time
    println!("cargo:rustc-env=EGUI_VERSION={}", egui_version);
    println!("cargo:rustc-env=QUICK_XML_VERSION={}", quick_xml_version);
}
