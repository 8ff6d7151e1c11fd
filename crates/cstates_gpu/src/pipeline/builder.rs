//! Pipeline builder combining common states into a render pipeline.
//!
//! Provides a fluent API for creating wgpu render pipelines from the state
//! objects a [`WgpuStateDevice`](crate::WgpuStateDevice) creates.

use crate::error::{GpuError, Result};
use crate::states::{BlendState, DepthStencilState, RasterizerState};

/// Builder for creating wgpu render pipelines from common states.
///
/// Without explicit states the pipeline is opaque, culls nothing and has no
/// depth attachment.
///
/// # Example
/// ```ignore
/// let states = CommonStates::new(&state_device);
/// let pipeline = PipelineBuilder::new(&device, format)
///     .with_shader(&shader, "vs_main", "fs_main")
///     .with_blend_state(&states.alpha_blend()?)
///     .with_rasterizer_state(&states.cull_none()?)
///     .with_depth_stencil_state(&states.depth_read()?)
///     .build()?;
/// ```
pub struct PipelineBuilder<'a> {
    device: &'a wgpu::Device,
    format: wgpu::TextureFormat,
    label: Option<&'a str>,
    shader: Option<&'a wgpu::ShaderModule>,
    vs_entry: &'a str,
    fs_entry: &'a str,
    vertex_buffers: Vec<wgpu::VertexBufferLayout<'a>>,
    bind_group_layouts: Vec<&'a wgpu::BindGroupLayout>,
    blend_state: BlendState,
    primitive: wgpu::PrimitiveState,
    multisample: wgpu::MultisampleState,
    depth_stencil: Option<wgpu::DepthStencilState>,
}

impl<'a> PipelineBuilder<'a> {
    /// Create a new pipeline builder targeting a color attachment of `format`.
    pub fn new(device: &'a wgpu::Device, format: wgpu::TextureFormat) -> Self {
        Self {
            device,
            format,
            label: None,
            shader: None,
            vs_entry: "vs_main",
            fs_entry: "fs_main",
            vertex_buffers: Vec::new(),
            bind_group_layouts: Vec::new(),
            blend_state: BlendState {
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            },
            primitive: wgpu::PrimitiveState::default(),
            multisample: wgpu::MultisampleState::default(),
            depth_stencil: None,
        }
    }

    /// Set the pipeline label for debugging.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the shader module and entry points.
    pub fn with_shader(
        mut self,
        shader: &'a wgpu::ShaderModule,
        vs_entry: &'a str,
        fs_entry: &'a str,
    ) -> Self {
        self.shader = Some(shader);
        self.vs_entry = vs_entry;
        self.fs_entry = fs_entry;
        self
    }

    /// Add a vertex buffer layout.
    pub fn with_vertex_buffer(mut self, layout: wgpu::VertexBufferLayout<'a>) -> Self {
        self.vertex_buffers.push(layout);
        self
    }

    /// Set all bind group layouts.
    pub fn with_bind_group_layouts(mut self, layouts: &[&'a wgpu::BindGroupLayout]) -> Self {
        self.bind_group_layouts = layouts.to_vec();
        self
    }

    /// Set the blend state of the color target.
    pub fn with_blend_state(mut self, blend: &BlendState) -> Self {
        self.blend_state = *blend;
        self
    }

    /// Set primitive and multisample state.
    pub fn with_rasterizer_state(mut self, rasterizer: &RasterizerState) -> Self {
        self.primitive = rasterizer.primitive;
        self.multisample = rasterizer.multisample;
        self
    }

    /// Attach a depth-stencil state.
    pub fn with_depth_stencil_state(mut self, depth_stencil: &DepthStencilState) -> Self {
        self.depth_stencil = Some(depth_stencil.state().clone());
        self
    }

    /// Set the primitive topology (default: TriangleList).
    pub fn with_topology(mut self, topology: wgpu::PrimitiveTopology) -> Self {
        self.primitive.topology = topology;
        self
    }

    /// Build the render pipeline.
    ///
    /// Validation errors raised by wgpu while creating the pipeline are
    /// returned as [`GpuError::Validation`].
    pub fn build(self) -> Result<wgpu::RenderPipeline> {
        let shader = self.shader.ok_or(GpuError::MissingShader)?;

        self.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let layout_label = self.label.map(|l| format!("{} Layout", l));
        let pipeline_layout = self.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: layout_label.as_deref(),
            bind_group_layouts: &self.bind_group_layouts,
            push_constant_ranges: &[],
        });

        let pipeline = self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: self.label,
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(self.vs_entry),
                buffers: &self.vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(self.fs_entry),
                targets: &[Some(self.blend_state.color_target(self.format))],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: self.primitive,
            depth_stencil: self.depth_stencil,
            multisample: self.multisample,
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(GpuError::Validation(err.to_string()));
        }

        Ok(pipeline)
    }
}
