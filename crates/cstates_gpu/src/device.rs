use cstates_core::{
    BlendDesc, DepthStencilDesc, FillMode, RasterizerDesc, SamplerDesc, StateDevice, StateKind,
};

use crate::config::StateConfig;
use crate::convert;
use crate::error::GpuError;
use crate::states::{BlendState, DepthStencilState, RasterizerState, SamplerState};

/// [`StateDevice`] backed by a wgpu device.
///
/// Descriptors the device cannot honor (missing features, fields wgpu has no
/// equivalent for) are rejected with a [`GpuError`]. Sampler creation runs in
/// a validation error scope so wgpu's own validation is reported the same way.
pub struct WgpuStateDevice<'a> {
    device: &'a wgpu::Device,
    config: StateConfig,
}

impl<'a> WgpuStateDevice<'a> {
    pub fn new(device: &'a wgpu::Device, config: StateConfig) -> Self {
        Self { device, config }
    }

    pub fn device(&self) -> &'a wgpu::Device {
        self.device
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    fn require(&self, state: StateKind, feature: wgpu::Features) -> Result<(), GpuError> {
        if self.device.features().contains(feature) {
            Ok(())
        } else {
            Err(GpuError::MissingFeature { state, feature })
        }
    }
}

impl StateDevice for WgpuStateDevice<'_> {
    type BlendState = BlendState;
    type DepthStencilState = DepthStencilState;
    type RasterizerState = RasterizerState;
    type SamplerState = SamplerState;
    type Error = GpuError;

    fn create_blend_state(&self, desc: &BlendDesc) -> Result<BlendState, GpuError> {
        let dual_source = [desc.color, desc.alpha]
            .iter()
            .any(|c| c.src.is_dual_source() || c.dst.is_dual_source());
        if desc.enabled && dual_source {
            self.require(StateKind::Blend, wgpu::Features::DUAL_SOURCE_BLENDING)?;
        }

        Ok(BlendState {
            blend: convert::blend_state(desc),
            write_mask: convert::color_writes(desc.write_mask),
        })
    }

    fn create_depth_stencil_state(
        &self,
        desc: &DepthStencilDesc,
    ) -> Result<DepthStencilState, GpuError> {
        let format = self.config.depth_format;
        if !format.has_depth_aspect() {
            return Err(GpuError::InvalidDepthFormat(format));
        }
        if desc.stencil_enable && !format.has_stencil_aspect() {
            return Err(GpuError::UnsupportedDescriptor {
                state: StateKind::DepthStencil,
                reason: "stencil test enabled but the depth format has no stencil aspect",
            });
        }

        Ok(DepthStencilState(convert::depth_stencil_state(desc, format)))
    }

    fn create_rasterizer_state(&self, desc: &RasterizerDesc) -> Result<RasterizerState, GpuError> {
        if desc.fill_mode == FillMode::Wireframe {
            self.require(StateKind::Rasterizer, wgpu::Features::POLYGON_MODE_LINE)?;
        }
        if !desc.depth_clip_enable {
            self.require(StateKind::Rasterizer, wgpu::Features::DEPTH_CLIP_CONTROL)?;
        }
        if desc.antialiased_line_enable {
            return Err(GpuError::UnsupportedDescriptor {
                state: StateKind::Rasterizer,
                reason: "antialiased lines are not supported",
            });
        }

        Ok(RasterizerState {
            primitive: convert::primitive_state(desc),
            multisample: convert::multisample_state(desc, self.config.sample_count),
        })
    }

    fn create_sampler_state(&self, desc: &SamplerDesc) -> Result<SamplerState, GpuError> {
        let label = self.config.label_for("Sampler");
        let sampler_desc = convert::sampler_descriptor(desc, label.as_deref())?;

        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let sampler = self.device.create_sampler(&sampler_desc);
        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(GpuError::Validation(err.to_string()));
        }

        log::debug!(
            "Created sampler {:?} (anisotropy {})",
            desc.filter,
            sampler_desc.anisotropy_clamp
        );

        Ok(SamplerState {
            sampler,
            anisotropy_clamp: sampler_desc.anisotropy_clamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use cstates_core::{CommonStates, SamplerPreset};

    use super::*;
    use crate::config::GpuConfig;
    use crate::context::GpuContext;

    /// Headless context, or `None` when the machine has no usable adapter.
    fn try_context(config: GpuConfig) -> Option<GpuContext> {
        let _ = env_logger::builder().is_test(true).try_init();
        match pollster::block_on(GpuContext::with_config(config)) {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                eprintln!("Skipping GPU test: {}", e);
                None
            }
        }
    }

    #[test]
    fn test_all_samplers_are_created() {
        let Some(ctx) = try_context(GpuConfig::minimal()) else {
            return;
        };
        let device = ctx.state_device();
        let states = CommonStates::new(&device);

        for preset in SamplerPreset::ALL {
            let sampler = states.sampler(preset).unwrap();
            let expected = if preset.desc().filter.is_anisotropic() { 16 } else { 1 };
            assert_eq!(sampler.anisotropy_clamp, expected, "{}", preset.name());
        }
    }

    #[test]
    fn test_wireframe_requires_feature() {
        let Some(ctx) = try_context(GpuConfig::minimal()) else {
            return;
        };
        let device = ctx.state_device();
        let states = CommonStates::new(&device);

        assert!(states.cull_counter_clockwise().is_ok());
        if !ctx.device.features().contains(wgpu::Features::POLYGON_MODE_LINE) {
            assert!(matches!(
                states.wireframe(),
                Err(GpuError::MissingFeature {
                    state: StateKind::Rasterizer,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_depth_format_must_have_depth() {
        let Some(ctx) = try_context(GpuConfig::minimal()) else {
            return;
        };
        let device = ctx.state_device_with_config(
            StateConfig::default().with_depth_format(wgpu::TextureFormat::Rgba8Unorm),
        );
        let states = CommonStates::new(&device);

        assert!(matches!(
            states.depth_default(),
            Err(GpuError::InvalidDepthFormat(wgpu::TextureFormat::Rgba8Unorm))
        ));
    }

    #[test]
    fn test_blend_and_depth_states() {
        let Some(ctx) = try_context(GpuConfig::minimal()) else {
            return;
        };
        let device = ctx.state_device();
        let states = CommonStates::new(&device);

        let opaque = states.opaque().unwrap();
        assert_eq!(opaque.blend, None);
        assert_eq!(opaque.write_mask, wgpu::ColorWrites::ALL);

        let depth = states.depth_read().unwrap();
        assert!(!depth.state().depth_write_enabled);
        assert_eq!(depth.format(), wgpu::TextureFormat::Depth32Float);
    }
}
