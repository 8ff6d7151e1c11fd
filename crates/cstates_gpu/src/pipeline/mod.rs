//! Render pipeline creation from common states.

pub mod builder;

pub use builder::PipelineBuilder;

/// Shader with `vs_main` (fullscreen triangle, no vertex buffers) and
/// `fs_main` (one color output) entry points.
pub const PROBE_SHADER: &str = include_str!("../shaders/probe.wgsl");
