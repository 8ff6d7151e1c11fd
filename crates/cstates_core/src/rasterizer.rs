//! Rasterizer state descriptors and presets.

use serde::{Deserialize, Serialize};

/// Which triangle facing is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CullMode {
    None,
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    Wireframe,
    Solid,
}

/// Rasterizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterizerDesc {
    pub cull_mode: CullMode,
    pub fill_mode: FillMode,
    /// `false` means clockwise triangles are front-facing.
    pub front_counter_clockwise: bool,
    pub depth_clip_enable: bool,
    pub multisample_enable: bool,
    pub antialiased_line_enable: bool,
}

impl RasterizerDesc {
    pub fn new(cull_mode: CullMode, fill_mode: FillMode) -> Self {
        Self {
            cull_mode,
            fill_mode,
            front_counter_clockwise: false,
            depth_clip_enable: true,
            multisample_enable: true,
            antialiased_line_enable: false,
        }
    }
}

/// Named rasterizer presets.
///
/// Front faces wind clockwise, so `CullClockwise` culls front faces and
/// `CullCounterClockwise` culls back faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterizerPreset {
    CullNone,
    CullClockwise,
    CullCounterClockwise,
    Wireframe,
}

impl RasterizerPreset {
    pub const ALL: [RasterizerPreset; 4] = [
        RasterizerPreset::CullNone,
        RasterizerPreset::CullClockwise,
        RasterizerPreset::CullCounterClockwise,
        RasterizerPreset::Wireframe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RasterizerPreset::CullNone => "cull_none",
            RasterizerPreset::CullClockwise => "cull_clockwise",
            RasterizerPreset::CullCounterClockwise => "cull_counter_clockwise",
            RasterizerPreset::Wireframe => "wireframe",
        }
    }

    pub fn modes(&self) -> (CullMode, FillMode) {
        match self {
            RasterizerPreset::CullNone => (CullMode::None, FillMode::Solid),
            RasterizerPreset::CullClockwise => (CullMode::Front, FillMode::Solid),
            RasterizerPreset::CullCounterClockwise => (CullMode::Back, FillMode::Solid),
            RasterizerPreset::Wireframe => (CullMode::Back, FillMode::Wireframe),
        }
    }

    pub fn desc(&self) -> RasterizerDesc {
        let (cull, fill) = self.modes();
        RasterizerDesc::new(cull, fill)
    }
}
