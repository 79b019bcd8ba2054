//! Shader Binding Validator
//!
//! Validates the scene pipeline's bind group layout against the bindings
//! the WGSL shader declares, at startup. Catches mismatches between the
//! Rust-side layout and the shader before they surface as GPU validation
//! errors at render time.
//!
//! The expected bindings listed here are the canonical source of truth,
//! matching `shaders/scene.wgsl`. A nonzero mismatch count is fatal: the
//! demo cannot draw anything without its `mvp` uniform.

use std::fmt;

/// Describes a single expected binding in the scene bind group.
#[derive(Debug, Clone)]
struct ExpectedBinding {
    binding: u32,
    binding_type: ExpectedBindingType,
    label: &'static str,
}

/// The type of a binding, matching the wgpu::BindingType variants we use.
#[derive(Debug, Clone, PartialEq)]
enum ExpectedBindingType {
    UniformBuffer { dynamic_offset: bool },
}

impl fmt::Display for ExpectedBindingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UniformBuffer { dynamic_offset } => {
                if *dynamic_offset {
                    write!(f, "uniform buffer (dynamic offset)")
                } else {
                    write!(f, "uniform buffer")
                }
            }
        }
    }
}

/// The scene shader's group 0: one dynamic-offset uniform holding the MVP.
fn expected_scene_bindings() -> Vec<ExpectedBinding> {
    vec![ExpectedBinding {
        binding: 0,
        binding_type: ExpectedBindingType::UniformBuffer {
            dynamic_offset: true,
        },
        label: "mvp",
    }]
}

/// Classifies a wgpu::BindGroupLayoutEntry into our ExpectedBindingType.
fn classify_entry(entry: &wgpu::BindGroupLayoutEntry) -> Option<ExpectedBindingType> {
    match &entry.ty {
        wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset,
            ..
        } => Some(ExpectedBindingType::UniformBuffer {
            dynamic_offset: *has_dynamic_offset,
        }),
        _ => None,
    }
}

/// Validate the scene bind group layout entries against the shader's
/// expected bindings. Returns the number of mismatches found; each one is
/// reported on stderr.
pub fn validate_scene_bindings(actual_entries: &[wgpu::BindGroupLayoutEntry]) -> u32 {
    let expected = expected_scene_bindings();
    let mut mismatches = 0u32;

    for exp in &expected {
        match actual_entries.iter().find(|e| e.binding == exp.binding) {
            None => {
                eprintln!(
                    "[Gridwalk] BINDING MISMATCH group 0 binding {}: expected {} ({}), actual: MISSING",
                    exp.binding, exp.binding_type, exp.label
                );
                mismatches += 1;
            }
            Some(actual) => {
                if classify_entry(actual).as_ref() != Some(&exp.binding_type) {
                    eprintln!(
                        "[Gridwalk] BINDING MISMATCH group 0 binding {}: expected {} ({})",
                        exp.binding, exp.binding_type, exp.label
                    );
                    mismatches += 1;
                }
            }
        }
    }

    for actual in actual_entries {
        if !expected.iter().any(|e| e.binding == actual.binding) {
            eprintln!(
                "[Gridwalk] EXTRA binding group 0 binding {}: not declared by the scene shader",
                actual.binding
            );
            mismatches += 1;
        }
    }

    mismatches
}
