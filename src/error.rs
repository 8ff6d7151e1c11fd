use cstates_gpu::GpuError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GPU initialization failed: {0}")]
    Gpu(#[from] GpuError),
}
