//! Blend state descriptors and presets.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Source or destination blend factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    InvSrcColor,
    SrcAlpha,
    InvSrcAlpha,
    DestAlpha,
    InvDestAlpha,
    DestColor,
    InvDestColor,
    SrcAlphaSat,
    /// The constant blend color set on the render pass.
    BlendFactor,
    InvBlendFactor,
    Src1Color,
    InvSrc1Color,
    Src1Alpha,
    InvSrc1Alpha,
}

impl BlendFactor {
    /// Whether this factor reads the second fragment output (dual-source blending).
    pub fn is_dual_source(&self) -> bool {
        matches!(
            self,
            BlendFactor::Src1Color
                | BlendFactor::InvSrc1Color
                | BlendFactor::Src1Alpha
                | BlendFactor::InvSrc1Alpha
        )
    }
}

/// Operation combining the weighted source and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendOp {
    #[default]
    Add,
    Subtract,
    RevSubtract,
    Min,
    Max,
}

bitflags! {
    /// Color channels written to the render target.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ColorWriteMask: u8 {
        const RED = 1;
        const GREEN = 1 << 1;
        const BLUE = 1 << 2;
        const ALPHA = 1 << 3;
        const ALL = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits() | Self::ALPHA.bits();
    }
}

/// Blend equation for one channel group (color or alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendComponent {
    pub src: BlendFactor,
    pub dst: BlendFactor,
    pub op: BlendOp,
}

/// Blend configuration for the first render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendDesc {
    /// Derived: `false` only for the `(One, Zero)` pass-through equation.
    pub enabled: bool,
    pub color: BlendComponent,
    pub alpha: BlendComponent,
    pub write_mask: ColorWriteMask,
}

impl BlendDesc {
    /// Build a blend descriptor using the same factors for color and alpha,
    /// additive blending and all channels written.
    pub fn new(src: BlendFactor, dst: BlendFactor) -> Self {
        let component = BlendComponent {
            src,
            dst,
            op: BlendOp::Add,
        };

        Self {
            enabled: src != BlendFactor::One || dst != BlendFactor::Zero,
            color: component,
            alpha: component,
            write_mask: ColorWriteMask::ALL,
        }
    }
}

/// Named blend presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendPreset {
    /// Source overwrites destination.
    Opaque,
    /// Premultiplied alpha blending.
    AlphaBlend,
    Additive,
    /// Straight (non-premultiplied) alpha blending.
    NonPremultiplied,
}

impl BlendPreset {
    pub const ALL: [BlendPreset; 4] = [
        BlendPreset::Opaque,
        BlendPreset::AlphaBlend,
        BlendPreset::Additive,
        BlendPreset::NonPremultiplied,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlendPreset::Opaque => "opaque",
            BlendPreset::AlphaBlend => "alpha_blend",
            BlendPreset::Additive => "additive",
            BlendPreset::NonPremultiplied => "non_premultiplied",
        }
    }

    /// Source and destination factors fixed by this preset.
    pub fn factors(&self) -> (BlendFactor, BlendFactor) {
        match self {
            BlendPreset::Opaque => (BlendFactor::One, BlendFactor::Zero),
            BlendPreset::AlphaBlend => (BlendFactor::One, BlendFactor::InvSrcAlpha),
            BlendPreset::Additive => (BlendFactor::SrcAlpha, BlendFactor::One),
            BlendPreset::NonPremultiplied => (BlendFactor::SrcAlpha, BlendFactor::InvSrcAlpha),
        }
    }

    pub fn desc(&self) -> BlendDesc {
        let (src, dst) = self.factors();
        BlendDesc::new(src, dst)
    }
}
