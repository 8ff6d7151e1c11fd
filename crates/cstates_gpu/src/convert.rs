//! Translation from state descriptors to wgpu types.
//!
//! Only the field-by-field mapping lives here. Checks that depend on device
//! features are made by [`WgpuStateDevice`](crate::WgpuStateDevice).

use cstates_core::{
    BlendComponent, BlendDesc, BlendFactor, BlendOp, ColorWriteMask, ComparisonFunc, CullMode,
    DepthStencilDesc, FillMode, FilterMode, RasterizerDesc, SamplerDesc, StateKind,
    StencilFaceDesc, StencilOp, TextureAddressMode,
};

use crate::error::{GpuError, Result};

pub fn blend_factor(factor: BlendFactor) -> wgpu::BlendFactor {
    match factor {
        BlendFactor::Zero => wgpu::BlendFactor::Zero,
        BlendFactor::One => wgpu::BlendFactor::One,
        BlendFactor::SrcColor => wgpu::BlendFactor::Src,
        BlendFactor::InvSrcColor => wgpu::BlendFactor::OneMinusSrc,
        BlendFactor::SrcAlpha => wgpu::BlendFactor::SrcAlpha,
        BlendFactor::InvSrcAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
        BlendFactor::DestAlpha => wgpu::BlendFactor::DstAlpha,
        BlendFactor::InvDestAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
        BlendFactor::DestColor => wgpu::BlendFactor::Dst,
        BlendFactor::InvDestColor => wgpu::BlendFactor::OneMinusDst,
        BlendFactor::SrcAlphaSat => wgpu::BlendFactor::SrcAlphaSaturated,
        BlendFactor::BlendFactor => wgpu::BlendFactor::Constant,
        BlendFactor::InvBlendFactor => wgpu::BlendFactor::OneMinusConstant,
        BlendFactor::Src1Color => wgpu::BlendFactor::Src1,
        BlendFactor::InvSrc1Color => wgpu::BlendFactor::OneMinusSrc1,
        BlendFactor::Src1Alpha => wgpu::BlendFactor::Src1Alpha,
        BlendFactor::InvSrc1Alpha => wgpu::BlendFactor::OneMinusSrc1Alpha,
    }
}

pub fn blend_op(op: BlendOp) -> wgpu::BlendOperation {
    match op {
        BlendOp::Add => wgpu::BlendOperation::Add,
        BlendOp::Subtract => wgpu::BlendOperation::Subtract,
        BlendOp::RevSubtract => wgpu::BlendOperation::ReverseSubtract,
        BlendOp::Min => wgpu::BlendOperation::Min,
        BlendOp::Max => wgpu::BlendOperation::Max,
    }
}

pub fn blend_component(component: &BlendComponent) -> wgpu::BlendComponent {
    wgpu::BlendComponent {
        src_factor: blend_factor(component.src),
        dst_factor: blend_factor(component.dst),
        operation: blend_op(component.op),
    }
}

/// Blend state for a color target. Disabled blending is `None`.
pub fn blend_state(desc: &BlendDesc) -> Option<wgpu::BlendState> {
    desc.enabled.then(|| wgpu::BlendState {
        color: blend_component(&desc.color),
        alpha: blend_component(&desc.alpha),
    })
}

pub fn color_writes(mask: ColorWriteMask) -> wgpu::ColorWrites {
    let mut writes = wgpu::ColorWrites::empty();
    if mask.contains(ColorWriteMask::RED) {
        writes |= wgpu::ColorWrites::RED;
    }
    if mask.contains(ColorWriteMask::GREEN) {
        writes |= wgpu::ColorWrites::GREEN;
    }
    if mask.contains(ColorWriteMask::BLUE) {
        writes |= wgpu::ColorWrites::BLUE;
    }
    if mask.contains(ColorWriteMask::ALPHA) {
        writes |= wgpu::ColorWrites::ALPHA;
    }
    writes
}

pub fn compare_function(func: ComparisonFunc) -> wgpu::CompareFunction {
    match func {
        ComparisonFunc::Never => wgpu::CompareFunction::Never,
        ComparisonFunc::Less => wgpu::CompareFunction::Less,
        ComparisonFunc::Equal => wgpu::CompareFunction::Equal,
        ComparisonFunc::LessEqual => wgpu::CompareFunction::LessEqual,
        ComparisonFunc::Greater => wgpu::CompareFunction::Greater,
        ComparisonFunc::NotEqual => wgpu::CompareFunction::NotEqual,
        ComparisonFunc::GreaterEqual => wgpu::CompareFunction::GreaterEqual,
        ComparisonFunc::Always => wgpu::CompareFunction::Always,
    }
}

pub fn stencil_op(op: StencilOp) -> wgpu::StencilOperation {
    match op {
        StencilOp::Keep => wgpu::StencilOperation::Keep,
        StencilOp::Zero => wgpu::StencilOperation::Zero,
        StencilOp::Replace => wgpu::StencilOperation::Replace,
        StencilOp::IncrSat => wgpu::StencilOperation::IncrementClamp,
        StencilOp::DecrSat => wgpu::StencilOperation::DecrementClamp,
        StencilOp::Invert => wgpu::StencilOperation::Invert,
        StencilOp::Incr => wgpu::StencilOperation::IncrementWrap,
        StencilOp::Decr => wgpu::StencilOperation::DecrementWrap,
    }
}

pub fn stencil_face(face: &StencilFaceDesc) -> wgpu::StencilFaceState {
    wgpu::StencilFaceState {
        compare: compare_function(face.func),
        fail_op: stencil_op(face.fail_op),
        depth_fail_op: stencil_op(face.depth_fail_op),
        pass_op: stencil_op(face.pass_op),
    }
}

/// Depth-stencil state for an attachment of `format`.
///
/// A disabled depth test compares with `Always`; a disabled stencil test
/// uses [`wgpu::StencilState::default`], which wgpu treats as disabled.
pub fn depth_stencil_state(
    desc: &DepthStencilDesc,
    format: wgpu::TextureFormat,
) -> wgpu::DepthStencilState {
    let depth_compare = if desc.depth_enable {
        compare_function(desc.depth_func)
    } else {
        wgpu::CompareFunction::Always
    };

    let stencil = if desc.stencil_enable {
        wgpu::StencilState {
            front: stencil_face(&desc.front_face),
            back: stencil_face(&desc.back_face),
            read_mask: u32::from(desc.stencil_read_mask),
            write_mask: u32::from(desc.stencil_write_mask),
        }
    } else {
        wgpu::StencilState::default()
    };

    wgpu::DepthStencilState {
        format,
        depth_write_enabled: desc.depth_enable && desc.depth_write_enabled(),
        depth_compare,
        stencil,
        bias: wgpu::DepthBiasState::default(),
    }
}

pub fn cull_mode(mode: CullMode) -> Option<wgpu::Face> {
    match mode {
        CullMode::None => None,
        CullMode::Front => Some(wgpu::Face::Front),
        CullMode::Back => Some(wgpu::Face::Back),
    }
}

pub fn polygon_mode(mode: FillMode) -> wgpu::PolygonMode {
    match mode {
        FillMode::Solid => wgpu::PolygonMode::Fill,
        FillMode::Wireframe => wgpu::PolygonMode::Line,
    }
}

pub fn primitive_state(desc: &RasterizerDesc) -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: if desc.front_counter_clockwise {
            wgpu::FrontFace::Ccw
        } else {
            wgpu::FrontFace::Cw
        },
        cull_mode: cull_mode(desc.cull_mode),
        polygon_mode: polygon_mode(desc.fill_mode),
        unclipped_depth: !desc.depth_clip_enable,
        conservative: false,
    }
}

pub fn multisample_state(desc: &RasterizerDesc, sample_count: u32) -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: if desc.multisample_enable { sample_count } else { 1 },
        mask: !0,
        alpha_to_coverage_enabled: false,
    }
}

pub fn filter_mode(mode: FilterMode) -> wgpu::FilterMode {
    match mode {
        FilterMode::Point => wgpu::FilterMode::Nearest,
        FilterMode::Linear => wgpu::FilterMode::Linear,
    }
}

pub fn address_mode(mode: TextureAddressMode) -> Result<wgpu::AddressMode> {
    match mode {
        TextureAddressMode::Wrap => Ok(wgpu::AddressMode::Repeat),
        TextureAddressMode::Mirror => Ok(wgpu::AddressMode::MirrorRepeat),
        TextureAddressMode::Clamp => Ok(wgpu::AddressMode::ClampToEdge),
        TextureAddressMode::Border => Ok(wgpu::AddressMode::ClampToBorder),
        TextureAddressMode::MirrorOnce => Err(GpuError::UnsupportedDescriptor {
            state: StateKind::Sampler,
            reason: "mirror-once addressing has no wgpu equivalent",
        }),
    }
}

/// wgpu only offers a fixed set of border colors.
pub fn border_color(color: [f32; 4]) -> Result<wgpu::SamplerBorderColor> {
    if color == [0.0, 0.0, 0.0, 0.0] {
        Ok(wgpu::SamplerBorderColor::TransparentBlack)
    } else if color == [0.0, 0.0, 0.0, 1.0] {
        Ok(wgpu::SamplerBorderColor::OpaqueBlack)
    } else if color == [1.0, 1.0, 1.0, 1.0] {
        Ok(wgpu::SamplerBorderColor::OpaqueWhite)
    } else {
        Err(GpuError::UnsupportedDescriptor {
            state: StateKind::Sampler,
            reason: "border color must be transparent black, opaque black or opaque white",
        })
    }
}

/// Sampler descriptor for `desc`.
///
/// Anisotropy is only applied to the anisotropic filter, and a `Never`
/// comparison produces a regular (non-comparison) sampler.
pub fn sampler_descriptor<'a>(
    desc: &SamplerDesc,
    label: Option<&'a str>,
) -> Result<wgpu::SamplerDescriptor<'a>> {
    if desc.mip_lod_bias != 0.0 {
        return Err(GpuError::UnsupportedDescriptor {
            state: StateKind::Sampler,
            reason: "mip LOD bias is not supported",
        });
    }

    let (min, mag, mip) = desc.filter.modes();

    let anisotropy_clamp = if desc.filter.is_anisotropic() {
        u16::try_from(desc.max_anisotropy).unwrap_or(u16::MAX)
    } else {
        1
    };

    let compare = match desc.comparison_func {
        ComparisonFunc::Never => None,
        func => Some(compare_function(func)),
    };

    let border_color = if desc.uses_border() {
        Some(border_color(desc.border_color)?)
    } else {
        None
    };

    Ok(wgpu::SamplerDescriptor {
        label,
        address_mode_u: address_mode(desc.address_u)?,
        address_mode_v: address_mode(desc.address_v)?,
        address_mode_w: address_mode(desc.address_w)?,
        mag_filter: filter_mode(mag),
        min_filter: filter_mode(min),
        mipmap_filter: filter_mode(mip),
        lod_min_clamp: desc.min_lod,
        lod_max_clamp: desc.max_lod,
        compare,
        anisotropy_clamp,
        border_color,
    })
}

#[cfg(test)]
mod tests {
    use cstates_core::{BlendPreset, DepthPreset, Filter, RasterizerPreset, SamplerPreset};

    use super::*;

    #[test]
    fn test_opaque_disables_blending() {
        assert_eq!(blend_state(&BlendPreset::Opaque.desc()), None);
    }

    #[test]
    fn test_alpha_blend_maps_to_premultiplied() {
        let state = blend_state(&BlendPreset::AlphaBlend.desc()).unwrap();
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(state.color.operation, wgpu::BlendOperation::Add);
        assert_eq!(state, wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING);
    }

    #[test]
    fn test_non_premultiplied_alpha_channel() {
        let state = blend_state(&BlendPreset::NonPremultiplied.desc()).unwrap();
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(state.alpha.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(state.alpha.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn test_color_writes_all() {
        assert_eq!(color_writes(ColorWriteMask::ALL), wgpu::ColorWrites::ALL);
        assert_eq!(
            color_writes(ColorWriteMask::RED | ColorWriteMask::ALPHA),
            wgpu::ColorWrites::RED | wgpu::ColorWrites::ALPHA
        );
    }

    #[test]
    fn test_depth_states() {
        let format = wgpu::TextureFormat::Depth32Float;

        let none = depth_stencil_state(&DepthPreset::DepthNone.desc(), format);
        assert!(!none.depth_write_enabled);
        assert_eq!(none.depth_compare, wgpu::CompareFunction::Always);

        let default = depth_stencil_state(&DepthPreset::DepthDefault.desc(), format);
        assert!(default.depth_write_enabled);
        assert_eq!(default.depth_compare, wgpu::CompareFunction::LessEqual);
        assert!(!default.stencil.is_enabled());

        let read = depth_stencil_state(&DepthPreset::DepthRead.desc(), format);
        assert!(!read.depth_write_enabled);
        assert_eq!(read.depth_compare, wgpu::CompareFunction::LessEqual);
        assert_eq!(read.format, format);
    }

    #[test]
    fn test_rasterizer_states() {
        let cull_none = primitive_state(&RasterizerPreset::CullNone.desc());
        assert_eq!(cull_none.cull_mode, None);
        assert_eq!(cull_none.front_face, wgpu::FrontFace::Cw);
        assert!(!cull_none.unclipped_depth);

        let clockwise = primitive_state(&RasterizerPreset::CullClockwise.desc());
        assert_eq!(clockwise.cull_mode, Some(wgpu::Face::Front));

        let wireframe = primitive_state(&RasterizerPreset::Wireframe.desc());
        assert_eq!(wireframe.cull_mode, Some(wgpu::Face::Back));
        assert_eq!(wireframe.polygon_mode, wgpu::PolygonMode::Line);
    }

    #[test]
    fn test_multisample_count() {
        let mut desc = RasterizerPreset::CullNone.desc();
        assert_eq!(multisample_state(&desc, 4).count, 4);
        desc.multisample_enable = false;
        assert_eq!(multisample_state(&desc, 4).count, 1);
    }

    #[test]
    fn test_point_sampler_ignores_anisotropy() {
        let sampler = sampler_descriptor(&SamplerPreset::PointWrap.desc(), None).unwrap();
        assert_eq!(sampler.anisotropy_clamp, 1);
        assert_eq!(sampler.min_filter, wgpu::FilterMode::Nearest);
        assert_eq!(sampler.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(sampler.mipmap_filter, wgpu::FilterMode::Nearest);
        assert_eq!(sampler.address_mode_u, wgpu::AddressMode::Repeat);
        assert_eq!(sampler.address_mode_w, wgpu::AddressMode::Repeat);
        assert_eq!(sampler.compare, None);
        assert_eq!(sampler.border_color, None);
    }

    #[test]
    fn test_anisotropic_sampler() {
        let sampler =
            sampler_descriptor(&SamplerPreset::AnisotropicClamp.desc(), Some("Aniso")).unwrap();
        assert_eq!(sampler.anisotropy_clamp, 16);
        assert_eq!(sampler.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(sampler.mipmap_filter, wgpu::FilterMode::Linear);
        assert_eq!(sampler.address_mode_v, wgpu::AddressMode::ClampToEdge);
        assert_eq!(sampler.lod_max_clamp, f32::MAX);
        assert_eq!(sampler.label, Some("Aniso"));
    }

    #[test]
    fn test_unsupported_sampler_fields() {
        let mirror_once = SamplerDesc::new(Filter::MinMagMipLinear, TextureAddressMode::MirrorOnce);
        assert!(matches!(
            sampler_descriptor(&mirror_once, None),
            Err(GpuError::UnsupportedDescriptor { .. })
        ));

        let mut biased = SamplerPreset::LinearWrap.desc();
        biased.mip_lod_bias = 0.5;
        assert!(sampler_descriptor(&biased, None).is_err());

        let mut border = SamplerDesc::new(Filter::MinMagMipPoint, TextureAddressMode::Border);
        let sampler = sampler_descriptor(&border, None).unwrap();
        assert_eq!(sampler.border_color, Some(wgpu::SamplerBorderColor::TransparentBlack));

        border.border_color = [0.5, 0.0, 0.0, 1.0];
        assert!(sampler_descriptor(&border, None).is_err());
    }
}
