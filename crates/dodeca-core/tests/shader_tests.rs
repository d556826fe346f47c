// Host-side tests for shader source loading.

use std::path::Path;

use dodeca_core::*;

fn shader_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../shaders"))
}

#[test]
fn reads_bundled_shaders() {
    let vs = read_shader_source(shader_dir().join("vertex.wgsl")).unwrap();
    let fs = read_shader_source(shader_dir().join("fragment.wgsl")).unwrap();
    assert!(vs.contains("@vertex"));
    assert!(fs.contains("@fragment"));
}

#[test]
fn missing_file_is_an_error_naming_the_path() {
    let err = read_shader_source("does/not/exist.wgsl").unwrap_err();
    assert!(matches!(err, ShaderError::Read { .. }));
    assert!(err.to_string().contains("does/not/exist.wgsl"));
}

#[test]
fn failed_stage_falls_back_to_empty_source() {
    let sources = ShaderSources::load_or_empty(
        shader_dir().join("vertex.wgsl"),
        shader_dir().join("missing.wgsl"),
    );
    assert!(!sources.vertex.is_empty());
    assert!(sources.fragment.is_empty());

    let none = ShaderSources::load_or_empty("nope.wgsl", "nope.wgsl");
    assert_eq!(none, ShaderSources::default());
}

#[test]
fn default_paths_are_relative_to_working_directory() {
    assert_eq!(
        ShaderStage::Vertex.default_path(),
        Path::new("shaders/vertex.wgsl")
    );
    assert_eq!(
        ShaderStage::Fragment.default_path(),
        Path::new("shaders/fragment.wgsl")
    );
    assert!(ShaderStage::Vertex.default_path().is_relative());
}
