//! State objects produced by [`WgpuStateDevice`](crate::WgpuStateDevice).
//!
//! wgpu bakes blend, depth-stencil and rasterizer configuration into render
//! pipelines, so those handles hold validated wgpu state values that a
//! [`PipelineBuilder`](crate::pipeline::PipelineBuilder) consumes. Samplers are
//! real device objects.

/// Blend configuration for a color target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendState {
    /// `None` when blending is disabled.
    pub blend: Option<wgpu::BlendState>,
    pub write_mask: wgpu::ColorWrites,
}

impl BlendState {
    /// Color target state for a render target of `format`.
    pub fn color_target(&self, format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
        wgpu::ColorTargetState {
            format,
            blend: self.blend,
            write_mask: self.write_mask,
        }
    }
}

/// Depth-stencil configuration bound to a depth format.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthStencilState(pub wgpu::DepthStencilState);

impl DepthStencilState {
    pub fn state(&self) -> &wgpu::DepthStencilState {
        &self.0
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.0.format
    }
}

/// Primitive assembly and multisample configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterizerState {
    pub primitive: wgpu::PrimitiveState,
    pub multisample: wgpu::MultisampleState,
}

/// A created sampler.
#[derive(Debug, Clone)]
pub struct SamplerState {
    pub sampler: wgpu::Sampler,
    pub anisotropy_clamp: u16,
}

impl std::ops::Deref for SamplerState {
    type Target = wgpu::Sampler;

    fn deref(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}
