//! wgpu backend for common pipeline states.
//!
//! [`WgpuStateDevice`] implements [`cstates_core::StateDevice`] on top of a
//! `wgpu::Device`, and [`PipelineBuilder`] turns the resulting states into
//! render pipelines.

pub mod config;
pub mod context;
pub mod convert;
pub mod device;
pub mod error;
pub mod pipeline;
pub mod states;

pub use config::{GpuConfig, StateConfig};
pub use context::GpuContext;
pub use device::WgpuStateDevice;
pub use error::{GpuError, Result};
pub use pipeline::PipelineBuilder;
pub use states::{BlendState, DepthStencilState, RasterizerState, SamplerState};
