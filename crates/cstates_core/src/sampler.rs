//! Sampler state descriptors and presets.

use serde::{Deserialize, Serialize};

use crate::depth::ComparisonFunc;

/// Filtering applied along a single axis (minification, magnification or mip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Point,
    Linear,
}

/// Texture filtering, named as minification / magnification / mip filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    MinMagMipPoint,
    MinMagPointMipLinear,
    MinPointMagLinearMipPoint,
    MinPointMagMipLinear,
    MinLinearMagMipPoint,
    MinLinearMagPointMipLinear,
    MinMagLinearMipPoint,
    MinMagMipLinear,
    Anisotropic,
}

impl Filter {
    /// Per-axis filters as `(min, mag, mip)`. Anisotropic filtering is linear on every axis.
    pub fn modes(&self) -> (FilterMode, FilterMode, FilterMode) {
        use FilterMode::{Linear, Point};

        match self {
            Filter::MinMagMipPoint => (Point, Point, Point),
            Filter::MinMagPointMipLinear => (Point, Point, Linear),
            Filter::MinPointMagLinearMipPoint => (Point, Linear, Point),
            Filter::MinPointMagMipLinear => (Point, Linear, Linear),
            Filter::MinLinearMagMipPoint => (Linear, Point, Point),
            Filter::MinLinearMagPointMipLinear => (Linear, Point, Linear),
            Filter::MinMagLinearMipPoint => (Linear, Linear, Point),
            Filter::MinMagMipLinear | Filter::Anisotropic => (Linear, Linear, Linear),
        }
    }

    pub fn is_anisotropic(&self) -> bool {
        matches!(self, Filter::Anisotropic)
    }
}

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureAddressMode {
    Wrap,
    Mirror,
    Clamp,
    Border,
    MirrorOnce,
}

/// Sampler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerDesc {
    pub filter: Filter,
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub mip_lod_bias: f32,
    /// Only consulted for [`Filter::Anisotropic`].
    pub max_anisotropy: u32,
    pub comparison_func: ComparisonFunc,
    pub border_color: [f32; 4],
    pub min_lod: f32,
    pub max_lod: f32,
}

impl SamplerDesc {
    pub const MAX_ANISOTROPY: u32 = 16;

    /// Build a sampler descriptor addressing all three axes the same way.
    pub fn new(filter: Filter, address_mode: TextureAddressMode) -> Self {
        Self {
            filter,
            address_u: address_mode,
            address_v: address_mode,
            address_w: address_mode,
            mip_lod_bias: 0.0,
            max_anisotropy: Self::MAX_ANISOTROPY,
            comparison_func: ComparisonFunc::Never,
            border_color: [0.0; 4],
            min_lod: 0.0,
            max_lod: f32::MAX,
        }
    }

    pub fn uses_border(&self) -> bool {
        [self.address_u, self.address_v, self.address_w].contains(&TextureAddressMode::Border)
    }
}

/// Named sampler presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerPreset {
    PointWrap,
    PointClamp,
    LinearWrap,
    LinearClamp,
    AnisotropicWrap,
    AnisotropicClamp,
}

impl SamplerPreset {
    pub const ALL: [SamplerPreset; 6] = [
        SamplerPreset::PointWrap,
        SamplerPreset::PointClamp,
        SamplerPreset::LinearWrap,
        SamplerPreset::LinearClamp,
        SamplerPreset::AnisotropicWrap,
        SamplerPreset::AnisotropicClamp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SamplerPreset::PointWrap => "point_wrap",
            SamplerPreset::PointClamp => "point_clamp",
            SamplerPreset::LinearWrap => "linear_wrap",
            SamplerPreset::LinearClamp => "linear_clamp",
            SamplerPreset::AnisotropicWrap => "anisotropic_wrap",
            SamplerPreset::AnisotropicClamp => "anisotropic_clamp",
        }
    }

    pub fn params(&self) -> (Filter, TextureAddressMode) {
        match self {
            SamplerPreset::PointWrap => (Filter::MinMagMipPoint, TextureAddressMode::Wrap),
            SamplerPreset::PointClamp => (Filter::MinMagMipPoint, TextureAddressMode::Clamp),
            SamplerPreset::LinearWrap => (Filter::MinMagMipLinear, TextureAddressMode::Wrap),
            SamplerPreset::LinearClamp => (Filter::MinMagMipLinear, TextureAddressMode::Clamp),
            SamplerPreset::AnisotropicWrap => (Filter::Anisotropic, TextureAddressMode::Wrap),
            SamplerPreset::AnisotropicClamp => (Filter::Anisotropic, TextureAddressMode::Clamp),
        }
    }

    pub fn desc(&self) -> SamplerDesc {
        let (filter, address_mode) = self.params();
        SamplerDesc::new(filter, address_mode)
    }
}
