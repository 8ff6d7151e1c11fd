//! Common GPU pipeline-state presets.
//!
//! Descriptor types for blend, depth-stencil, rasterizer and sampler state,
//! the fixed preset tables built from them, and [`CommonStates`], which hands
//! each descriptor to a [`StateDevice`] for creation.

pub mod blend;
pub mod depth;
pub mod device;
pub mod factory;
pub mod rasterizer;
pub mod sampler;

pub use blend::{BlendComponent, BlendDesc, BlendFactor, BlendOp, BlendPreset, ColorWriteMask};
pub use depth::{
    ComparisonFunc, DepthPreset, DepthStencilDesc, DepthWriteMask, StencilFaceDesc, StencilOp,
    DEFAULT_STENCIL_READ_MASK, DEFAULT_STENCIL_WRITE_MASK,
};
pub use device::{StateDevice, StateKind};
pub use factory::CommonStates;
pub use rasterizer::{CullMode, FillMode, RasterizerDesc, RasterizerPreset};
pub use sampler::{Filter, FilterMode, SamplerDesc, SamplerPreset, TextureAddressMode};
