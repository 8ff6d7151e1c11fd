//! cstates - common GPU pipeline-state presets
//!
//! Probe support for checking which presets a device accepts. The presets
//! themselves live in `cstates_core`, the wgpu device in `cstates_gpu`.

pub mod config;
pub mod error;
pub mod probe;

pub use config::{LogLevel, ProbeConfig};
pub use error::ProbeError;
pub use probe::{ProbeEntry, ProbeReport};
