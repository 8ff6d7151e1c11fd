//! The graphics device seam.

use std::fmt;

use crate::blend::BlendDesc;
use crate::depth::DepthStencilDesc;
use crate::rasterizer::RasterizerDesc;
use crate::sampler::SamplerDesc;

/// A graphics device able to turn state descriptors into state objects.
///
/// The device is the sole judge of descriptor validity. Implementations
/// report rejection through [`StateDevice::Error`]; callers receive it as is.
pub trait StateDevice {
    type BlendState;
    type DepthStencilState;
    type RasterizerState;
    type SamplerState;
    type Error: std::error::Error + 'static;

    fn create_blend_state(&self, desc: &BlendDesc) -> Result<Self::BlendState, Self::Error>;

    fn create_depth_stencil_state(
        &self,
        desc: &DepthStencilDesc,
    ) -> Result<Self::DepthStencilState, Self::Error>;

    fn create_rasterizer_state(
        &self,
        desc: &RasterizerDesc,
    ) -> Result<Self::RasterizerState, Self::Error>;

    fn create_sampler_state(&self, desc: &SamplerDesc) -> Result<Self::SamplerState, Self::Error>;
}

/// The four state families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    Blend,
    DepthStencil,
    Rasterizer,
    Sampler,
}

impl StateKind {
    pub fn name(&self) -> &'static str {
        match self {
            StateKind::Blend => "blend",
            StateKind::DepthStencil => "depth-stencil",
            StateKind::Rasterizer => "rasterizer",
            StateKind::Sampler => "sampler",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
