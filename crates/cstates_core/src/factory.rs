//! Factory creating preset pipeline states on a device.
//!
//! Every call builds a fresh descriptor and performs exactly one creation
//! call on the device. Nothing is cached: asking for the same preset twice
//! yields two independent state objects.

use crate::blend::{BlendDesc, BlendFactor, BlendPreset};
use crate::depth::{DepthPreset, DepthStencilDesc};
use crate::device::{StateDevice, StateKind};
use crate::rasterizer::{CullMode, FillMode, RasterizerDesc, RasterizerPreset};
use crate::sampler::{Filter, SamplerDesc, SamplerPreset, TextureAddressMode};

/// Creates common pipeline states on a borrowed device.
///
/// # Example
/// ```ignore
/// let states = CommonStates::new(&device);
/// let blend = states.alpha_blend()?;
/// let sampler = states.linear_clamp()?;
/// ```
pub struct CommonStates<'a, D: StateDevice> {
    device: &'a D,
}

impl<'a, D: StateDevice> CommonStates<'a, D> {
    pub fn new(device: &'a D) -> Self {
        Self { device }
    }

    /// The device states are created on.
    pub fn device(&self) -> &'a D {
        self.device
    }

    /// Create a blend state from a source and destination factor.
    pub fn create_blend_state(
        &self,
        src: BlendFactor,
        dst: BlendFactor,
    ) -> Result<D::BlendState, D::Error> {
        let desc = BlendDesc::new(src, dst);
        log::trace!("Creating blend state: {:?}", desc);
        self.device
            .create_blend_state(&desc)
            .inspect_err(|e| log_failure(StateKind::Blend, e))
    }

    /// Create a depth-stencil state with the given depth test and write flags.
    pub fn create_depth_stencil_state(
        &self,
        enable: bool,
        write_enable: bool,
    ) -> Result<D::DepthStencilState, D::Error> {
        let desc = DepthStencilDesc::new(enable, write_enable);
        log::trace!("Creating depth-stencil state: {:?}", desc);
        self.device
            .create_depth_stencil_state(&desc)
            .inspect_err(|e| log_failure(StateKind::DepthStencil, e))
    }

    /// Create a rasterizer state with the given cull and fill modes.
    pub fn create_rasterizer_state(
        &self,
        cull_mode: CullMode,
        fill_mode: FillMode,
    ) -> Result<D::RasterizerState, D::Error> {
        let desc = RasterizerDesc::new(cull_mode, fill_mode);
        log::trace!("Creating rasterizer state: {:?}", desc);
        self.device
            .create_rasterizer_state(&desc)
            .inspect_err(|e| log_failure(StateKind::Rasterizer, e))
    }

    /// Create a sampler state with the given filter and address mode.
    pub fn create_sampler_state(
        &self,
        filter: Filter,
        address_mode: TextureAddressMode,
    ) -> Result<D::SamplerState, D::Error> {
        let desc = SamplerDesc::new(filter, address_mode);
        log::trace!("Creating sampler state: {:?}", desc);
        self.device
            .create_sampler_state(&desc)
            .inspect_err(|e| log_failure(StateKind::Sampler, e))
    }

    pub fn blend(&self, preset: BlendPreset) -> Result<D::BlendState, D::Error> {
        let (src, dst) = preset.factors();
        self.create_blend_state(src, dst)
    }

    pub fn depth_stencil(&self, preset: DepthPreset) -> Result<D::DepthStencilState, D::Error> {
        let (enable, write_enable) = preset.flags();
        self.create_depth_stencil_state(enable, write_enable)
    }

    pub fn rasterizer(&self, preset: RasterizerPreset) -> Result<D::RasterizerState, D::Error> {
        let (cull_mode, fill_mode) = preset.modes();
        self.create_rasterizer_state(cull_mode, fill_mode)
    }

    pub fn sampler(&self, preset: SamplerPreset) -> Result<D::SamplerState, D::Error> {
        let (filter, address_mode) = preset.params();
        self.create_sampler_state(filter, address_mode)
    }

    // Blend states

    pub fn opaque(&self) -> Result<D::BlendState, D::Error> {
        self.blend(BlendPreset::Opaque)
    }

    pub fn alpha_blend(&self) -> Result<D::BlendState, D::Error> {
        self.blend(BlendPreset::AlphaBlend)
    }

    pub fn additive(&self) -> Result<D::BlendState, D::Error> {
        self.blend(BlendPreset::Additive)
    }

    pub fn non_premultiplied(&self) -> Result<D::BlendState, D::Error> {
        self.blend(BlendPreset::NonPremultiplied)
    }

    // Depth-stencil states

    pub fn depth_none(&self) -> Result<D::DepthStencilState, D::Error> {
        self.depth_stencil(DepthPreset::DepthNone)
    }

    pub fn depth_default(&self) -> Result<D::DepthStencilState, D::Error> {
        self.depth_stencil(DepthPreset::DepthDefault)
    }

    pub fn depth_read(&self) -> Result<D::DepthStencilState, D::Error> {
        self.depth_stencil(DepthPreset::DepthRead)
    }

    // Rasterizer states

    pub fn cull_none(&self) -> Result<D::RasterizerState, D::Error> {
        self.rasterizer(RasterizerPreset::CullNone)
    }

    pub fn cull_clockwise(&self) -> Result<D::RasterizerState, D::Error> {
        self.rasterizer(RasterizerPreset::CullClockwise)
    }

    pub fn cull_counter_clockwise(&self) -> Result<D::RasterizerState, D::Error> {
        self.rasterizer(RasterizerPreset::CullCounterClockwise)
    }

    pub fn wireframe(&self) -> Result<D::RasterizerState, D::Error> {
        self.rasterizer(RasterizerPreset::Wireframe)
    }

    // Sampler states

    pub fn point_wrap(&self) -> Result<D::SamplerState, D::Error> {
        self.sampler(SamplerPreset::PointWrap)
    }

    pub fn point_clamp(&self) -> Result<D::SamplerState, D::Error> {
        self.sampler(SamplerPreset::PointClamp)
    }

    pub fn linear_wrap(&self) -> Result<D::SamplerState, D::Error> {
        self.sampler(SamplerPreset::LinearWrap)
    }

    pub fn linear_clamp(&self) -> Result<D::SamplerState, D::Error> {
        self.sampler(SamplerPreset::LinearClamp)
    }

    pub fn anisotropic_wrap(&self) -> Result<D::SamplerState, D::Error> {
        self.sampler(SamplerPreset::AnisotropicWrap)
    }

    pub fn anisotropic_clamp(&self) -> Result<D::SamplerState, D::Error> {
        self.sampler(SamplerPreset::AnisotropicClamp)
    }
}

fn log_failure(kind: StateKind, err: &dyn std::error::Error) {
    log::warn!("Failed to create {} state: {}", kind, err);
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::depth::{ComparisonFunc, DepthWriteMask};

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    #[error("device rejected descriptor (code {0:#x})")]
    struct DeviceError(u32);

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Blend(BlendDesc),
        DepthStencil(DepthStencilDesc),
        Rasterizer(RasterizerDesc),
        Sampler(SamplerDesc),
    }

    /// Records every creation call and hands out numbered handles.
    #[derive(Default)]
    struct RecordingDevice {
        calls: RefCell<Vec<Call>>,
        next_handle: Cell<u32>,
        fail_with: Option<DeviceError>,
    }

    #[derive(Debug, PartialEq)]
    struct Handle(u32);

    impl RecordingDevice {
        fn failing(code: u32) -> Self {
            Self {
                fail_with: Some(DeviceError(code)),
                ..Default::default()
            }
        }

        fn record(&self, call: Call) -> Result<Handle, DeviceError> {
            self.calls.borrow_mut().push(call);
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            let id = self.next_handle.get();
            self.next_handle.set(id + 1);
            Ok(Handle(id))
        }

        fn last_call(&self) -> Call {
            self.calls.borrow().last().cloned().expect("no calls recorded")
        }

        fn handles_created(&self) -> u32 {
            self.next_handle.get()
        }
    }

    impl StateDevice for RecordingDevice {
        type BlendState = Handle;
        type DepthStencilState = Handle;
        type RasterizerState = Handle;
        type SamplerState = Handle;
        type Error = DeviceError;

        fn create_blend_state(&self, desc: &BlendDesc) -> Result<Handle, DeviceError> {
            self.record(Call::Blend(*desc))
        }

        fn create_depth_stencil_state(
            &self,
            desc: &DepthStencilDesc,
        ) -> Result<Handle, DeviceError> {
            self.record(Call::DepthStencil(*desc))
        }

        fn create_rasterizer_state(&self, desc: &RasterizerDesc) -> Result<Handle, DeviceError> {
            self.record(Call::Rasterizer(*desc))
        }

        fn create_sampler_state(&self, desc: &SamplerDesc) -> Result<Handle, DeviceError> {
            self.record(Call::Sampler(*desc))
        }
    }

    #[test]
    fn test_opaque_passes_descriptor_to_device() {
        let device = RecordingDevice::default();
        let states = CommonStates::new(&device);

        assert_eq!(states.opaque(), Ok(Handle(0)));
        match device.last_call() {
            Call::Blend(desc) => {
                assert!(!desc.enabled);
                assert_eq!(desc.color.src, BlendFactor::One);
                assert_eq!(desc.color.dst, BlendFactor::Zero);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn test_named_presets_match_tables() {
        let device = RecordingDevice::default();
        let states = CommonStates::new(&device);

        states.non_premultiplied().unwrap();
        assert_eq!(device.last_call(), Call::Blend(BlendPreset::NonPremultiplied.desc()));

        states.depth_read().unwrap();
        assert_eq!(device.last_call(), Call::DepthStencil(DepthPreset::DepthRead.desc()));

        states.wireframe().unwrap();
        assert_eq!(device.last_call(), Call::Rasterizer(RasterizerPreset::Wireframe.desc()));

        states.anisotropic_clamp().unwrap();
        assert_eq!(device.last_call(), Call::Sampler(SamplerPreset::AnisotropicClamp.desc()));
    }

    #[test]
    fn test_every_preset_calls_device_once() {
        let device = RecordingDevice::default();
        let states = CommonStates::new(&device);

        let created = [
            states.opaque(),
            states.alpha_blend(),
            states.additive(),
            states.non_premultiplied(),
            states.depth_none(),
            states.depth_default(),
            states.depth_read(),
            states.cull_none(),
            states.cull_clockwise(),
            states.cull_counter_clockwise(),
            states.wireframe(),
            states.point_wrap(),
            states.point_clamp(),
            states.linear_wrap(),
            states.linear_clamp(),
            states.anisotropic_wrap(),
            states.anisotropic_clamp(),
        ];

        assert!(created.iter().all(Result::is_ok));
        assert_eq!(device.calls.borrow().len(), 17);
        assert_eq!(device.handles_created(), 17);
    }

    #[test]
    fn test_depth_default_descriptor() {
        let device = RecordingDevice::default();
        let states = CommonStates::new(&device);

        states.depth_default().unwrap();
        match device.last_call() {
            Call::DepthStencil(desc) => {
                assert!(desc.depth_enable);
                assert_eq!(desc.depth_write_mask, DepthWriteMask::All);
                assert_eq!(desc.depth_func, ComparisonFunc::LessEqual);
                assert!(!desc.stencil_enable);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn test_failure_is_returned_verbatim() {
        let device = RecordingDevice::failing(0x8007_0057);
        let states = CommonStates::new(&device);

        assert_eq!(states.linear_clamp(), Err(DeviceError(0x8007_0057)));
        assert_eq!(states.wireframe(), Err(DeviceError(0x8007_0057)));
        assert_eq!(device.calls.borrow().len(), 2);
        assert_eq!(device.handles_created(), 0);
    }

    #[test]
    fn test_no_caching() {
        let device = RecordingDevice::default();
        let states = CommonStates::new(&device);

        let first = states.point_wrap().unwrap();
        let second = states.point_wrap().unwrap();

        assert_ne!(first, second);
        assert_eq!(device.calls.borrow().len(), 2);
        assert_eq!(device.calls.borrow()[0], device.calls.borrow()[1]);
    }

    #[test]
    fn test_invalid_combination_reaches_device() {
        let device = RecordingDevice::default();
        let states = CommonStates::new(&device);

        states
            .create_sampler_state(Filter::MinMagMipPoint, TextureAddressMode::MirrorOnce)
            .unwrap();
        match device.last_call() {
            Call::Sampler(desc) => assert_eq!(desc.address_w, TextureAddressMode::MirrorOnce),
            other => panic!("unexpected call: {:?}", other),
        }
    }
}
