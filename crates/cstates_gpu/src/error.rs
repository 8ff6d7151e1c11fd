use cstates_core::StateKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("Failed to request adapter: {0}")]
    AdapterRequest(#[from] wgpu::RequestAdapterError),

    #[error("Failed to request device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    #[error("Creating {state} state requires device feature {feature:?}")]
    MissingFeature {
        state: StateKind,
        feature: wgpu::Features,
    },

    #[error("Unsupported {state} descriptor: {reason}")]
    UnsupportedDescriptor {
        state: StateKind,
        reason: &'static str,
    },

    #[error("Depth-stencil state needs a depth format, got {0:?}")]
    InvalidDepthFormat(wgpu::TextureFormat),

    #[error("Pipeline builder requires a shader module")]
    MissingShader,

    #[error("Device validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, GpuError>;
